//! Application services.

mod validator;

pub use validator::{RuleOptions, Validator, ValidatorBuilder};
