//! Domain value objects: Entity, RuleKind, Severity, Locale.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. Each
//! has a stable string form (`as_str`) and a lenient `FromStr` parser used by
//! the CLI and by catalog files.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Entity ────────────────────────────────────────────────────────────────────

/// One named input record type of the league API schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Entity {
    Address,
    League,
    Club,
    Gym,
    Season,
    Person,
    Association,
    LeagueGroup,
    Team,
}

impl Entity {
    /// Every entity, in schema order.
    pub const ALL: [Entity; 9] = [
        Self::Address,
        Self::League,
        Self::Club,
        Self::Gym,
        Self::Season,
        Self::Person,
        Self::Association,
        Self::LeagueGroup,
        Self::Team,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::League => "league",
            Self::Club => "club",
            Self::Gym => "gym",
            Self::Season => "season",
            Self::Person => "person",
            Self::Association => "association",
            Self::LeagueGroup => "league-group",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Entity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "address" => Ok(Self::Address),
            "league" => Ok(Self::League),
            "club" => Ok(Self::Club),
            "gym" => Ok(Self::Gym),
            "season" => Ok(Self::Season),
            "person" | "player" => Ok(Self::Person),
            "association" => Ok(Self::Association),
            "league-group" | "league_group" | "leaguegroup" | "group" => Ok(Self::LeagueGroup),
            "team" => Ok(Self::Team),
            other => Err(DomainError::UnknownEntity(other.to_owned())),
        }
    }
}

// ── RuleKind ──────────────────────────────────────────────────────────────────

/// The class of constraint a rule enforces.
///
/// This is the programmatic counterpart to a message: consumers that must not
/// depend on message wording match on `(field, kind)` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A required value is absent or blank after trimming.
    RequiredFieldMissing,
    /// A string is longer than its limit.
    LengthExceeded,
    /// A value does not match its expected shape (pattern, URL, date).
    FormatInvalid,
    /// A numeric or date ordering constraint is violated.
    RangeInvalid,
    /// A date lies on the wrong side of "now".
    TemporalConstraintViolated,
}

impl RuleKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequiredFieldMissing => "required_field_missing",
            Self::LengthExceeded => "length_exceeded",
            Self::FormatInvalid => "format_invalid",
            Self::RangeInvalid => "range_invalid",
            Self::TemporalConstraintViolated => "temporal_constraint_violated",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Severity ──────────────────────────────────────────────────────────────────

/// Whether a violation blocks the payload or is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

// ── Locale ────────────────────────────────────────────────────────────────────

/// Language of the built-in message catalogs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            "de" | "de-de" | "german" | "deutsch" => Ok(Self::German),
            other => Err(DomainError::UnknownLocale(other.to_owned())),
        }
    }
}
