//! Application layer for Radball validation.
//!
//! This layer contains:
//! - **Services**: the [`Validator`] running checks with an injected catalog
//!   and clock
//! - **Ports**: the [`Clock`] trait and its stock implementations
//!
//! The application layer coordinates the domain layer but contains no rule
//! logic itself. All rules live in `crate::domain`.

pub mod ports;
pub mod services;

pub use services::{RuleOptions, Validator, ValidatorBuilder};

pub use ports::{Clock, FixedClock, SystemClock};
