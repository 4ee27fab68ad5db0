//! Core domain layer for Radball input validation.
//!
//! Pure rule logic over plain input records. All clock and catalog-file
//! concerns are supplied from outside: the clock through the application
//! layer's [`Clock`](crate::application::Clock) port, custom message texts
//! through a [`MessageCatalog`].
//!
//! ## Layout
//!
//! - **inputs**: the records callers submit, one per entity
//! - **rules**: the static rule table (code, field, kind per rule)
//! - **messages**: rule → text, per locale
//! - **checks**: one checker per entity, producing a [`ValidationResult`]
//! - **result**: the violation aggregator
//! - **export**: the league-group export document
//!
//! - **No I/O**: nothing here touches files, clocks or the environment
//! - **No logging**: observability belongs to the application layer
pub mod checks;
pub mod error;
pub mod export;
pub mod inputs;
pub mod messages;
pub mod result;
pub mod rules;
pub mod value_objects;

pub use checks::{CheckContext, MIN_TEAM_PLAYERS, check_entity, parse_date};
pub use error::{DomainError, ErrorCategory, ValidationError};
pub use export::{LeagueGroupExport, LeagueGroupStatistics};
pub use inputs::{
    AddressInput, AssociationInput, ClubInput, EntityInput, GymInput, LeagueGroupInput,
    LeagueInput, ModifyTeamInput, PersonInput, RegisterTeamInput, SaveTeamInput, SeasonInput,
    TeamInput,
};
pub use messages::{BuiltinCatalog, LayeredCatalog, MessageCatalog};
pub use result::{MESSAGE_SEPARATOR, ValidationResult, Violation};
pub use rules::{RULE_REGISTRY, Rule, RuleDef};
pub use value_objects::{Entity, Locale, RuleKind, Severity};
