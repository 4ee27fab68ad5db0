//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the validator, supplied by the caller
//!   - `Clock`: the wall-clock reading behind "not in the past/future" rules
//!   - `MessageCatalog` (defined in `domain::messages`): rule texts; the
//!     `radball-adapters` crate loads custom ones from TOML files

use chrono::{DateTime, Utc};

/// Port for reading the current time.
///
/// The validator reads it exactly once per call and hands the value to every
/// temporal rule, so all rules of one call agree on "now".
///
/// Implemented by:
/// - [`SystemClock`] (production)
/// - [`FixedClock`] (tests, reproducible CLI runs)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
