//! Radball Core - input validation for the Radball league API.
//!
//! This crate provides the domain and application layers for checking
//! create/update payloads (addresses, leagues, clubs, gyms, seasons, people,
//! associations, league groups, teams) before they are persisted.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           radball-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (Validator: check / validate)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Ports (Clock, MessageCatalog)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   radball-adapters (Infrastructure)     │
//! │  (TOML catalogs, JSON payload reader)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (inputs, rule table, checkers, result) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use radball_core::prelude::*;
//!
//! let address = AddressInput::new("", "Springfield", "USA", "12345");
//!
//! // Checking form: every violation, grouped by field.
//! let result = radball_core::validation::check_address(&address);
//! assert_eq!(result.field_errors("street"), vec!["Street is required"]);
//!
//! // Validating form: one error joining all messages.
//! let german = Validator::builder().locale(Locale::German).build();
//! let err = german.validate_address(&address).unwrap_err();
//! assert_eq!(err.to_string(), "Straße ist erforderlich");
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod validation;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Clock, FixedClock, SystemClock, Validator, ValidatorBuilder};
    pub use crate::domain::{
        AddressInput, AssociationInput, ClubInput, Entity, EntityInput, GymInput,
        LeagueGroupInput, LeagueInput, Locale, MessageCatalog, ModifyTeamInput, PersonInput,
        RegisterTeamInput, Rule, RuleKind, SaveTeamInput, SeasonInput, TeamInput,
        ValidationError, ValidationResult,
    };
    pub use crate::error::{RadballError, RadballResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
