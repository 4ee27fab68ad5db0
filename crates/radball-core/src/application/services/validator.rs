//! Validator - the input validation use case.
//!
//! Exposes the two calling conventions over the domain checkers:
//! - `check_*` returns the full [`ValidationResult`] and never fails
//! - `validate_*` runs the check and turns any error into one
//!   [`ValidationError`] whose text joins every message with `"; "`
//!
//! Each call reads the injected clock once and reuses that instant for every
//! temporal rule.

use std::fmt;

use tracing::{debug, instrument};

use crate::application::ports::{Clock, SystemClock};
use crate::domain::checks::{self, CheckContext};
use crate::domain::{
    AddressInput, AssociationInput, BuiltinCatalog, ClubInput, Entity, EntityInput, GymInput,
    LeagueGroupInput, LeagueInput, Locale, MessageCatalog, PersonInput, SeasonInput, TeamInput,
    ValidationError, ValidationResult,
};

/// Switches for rules that differ between deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    /// Enforce the minimum roster on team creation and registration.
    pub require_team_players: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            require_team_players: true,
        }
    }
}

/// Runs entity checks with a message catalog and a clock.
pub struct Validator {
    catalog: Box<dyn MessageCatalog>,
    clock: Box<dyn Clock>,
    options: RuleOptions,
}

impl Validator {
    /// Create a validator with the given adapters.
    pub fn new(
        catalog: Box<dyn MessageCatalog>,
        clock: Box<dyn Clock>,
        options: RuleOptions,
    ) -> Self {
        Self {
            catalog,
            clock,
            options,
        }
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }

    #[instrument(skip_all, fields(entity = %entity, locale = %self.catalog.locale()))]
    fn run<T>(
        &self,
        entity: Entity,
        input: &T,
        checker: fn(&CheckContext<'_>, &T) -> ValidationResult,
    ) -> ValidationResult {
        let ctx = CheckContext::new(self.catalog.as_ref(), self.clock.now())
            .require_team_players(self.options.require_team_players);

        let result = checker(&ctx, input);
        debug!(
            errors = result.error_count(),
            warnings = result.warning_count(),
            "Checked input"
        );
        result
    }

    // ── Checking form ─────────────────────────────────────────────────────────

    pub fn check_address(&self, input: &AddressInput) -> ValidationResult {
        self.run(Entity::Address, input, checks::check_address)
    }

    pub fn check_league(&self, input: &LeagueInput) -> ValidationResult {
        self.run(Entity::League, input, checks::check_league)
    }

    pub fn check_club(&self, input: &ClubInput) -> ValidationResult {
        self.run(Entity::Club, input, checks::check_club)
    }

    pub fn check_gym(&self, input: &GymInput) -> ValidationResult {
        self.run(Entity::Gym, input, checks::check_gym)
    }

    pub fn check_season(&self, input: &SeasonInput) -> ValidationResult {
        self.run(Entity::Season, input, checks::check_season)
    }

    pub fn check_person(&self, input: &PersonInput) -> ValidationResult {
        self.run(Entity::Person, input, checks::check_person)
    }

    pub fn check_association(&self, input: &AssociationInput) -> ValidationResult {
        self.run(Entity::Association, input, checks::check_association)
    }

    pub fn check_league_group(&self, input: &LeagueGroupInput) -> ValidationResult {
        self.run(Entity::LeagueGroup, input, checks::check_league_group)
    }

    pub fn check_team(&self, input: &TeamInput) -> ValidationResult {
        self.run(Entity::Team, input, checks::check_team)
    }

    /// Check any input, dispatching on its entity.
    pub fn check(&self, input: &EntityInput) -> ValidationResult {
        self.run(input.entity(), input, checks::check_entity)
    }

    // ── Validating form ───────────────────────────────────────────────────────

    pub fn validate_address(&self, input: &AddressInput) -> Result<(), ValidationError> {
        self.check_address(input).raise_if_invalid()
    }

    pub fn validate_league(&self, input: &LeagueInput) -> Result<(), ValidationError> {
        self.check_league(input).raise_if_invalid()
    }

    pub fn validate_club(&self, input: &ClubInput) -> Result<(), ValidationError> {
        self.check_club(input).raise_if_invalid()
    }

    pub fn validate_gym(&self, input: &GymInput) -> Result<(), ValidationError> {
        self.check_gym(input).raise_if_invalid()
    }

    pub fn validate_season(&self, input: &SeasonInput) -> Result<(), ValidationError> {
        self.check_season(input).raise_if_invalid()
    }

    pub fn validate_person(&self, input: &PersonInput) -> Result<(), ValidationError> {
        self.check_person(input).raise_if_invalid()
    }

    pub fn validate_association(&self, input: &AssociationInput) -> Result<(), ValidationError> {
        self.check_association(input).raise_if_invalid()
    }

    pub fn validate_league_group(&self, input: &LeagueGroupInput) -> Result<(), ValidationError> {
        self.check_league_group(input).raise_if_invalid()
    }

    pub fn validate_team(&self, input: &TeamInput) -> Result<(), ValidationError> {
        self.check_team(input).raise_if_invalid()
    }

    pub fn validate(&self, input: &EntityInput) -> Result<(), ValidationError> {
        self.check(input).raise_if_invalid()
    }
}

impl Default for Validator {
    /// English messages, system clock, every rule enabled.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("locale", &self.catalog.locale())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Validator`].
///
/// Without further calls it produces the default validator. A custom
/// catalog wins over `locale`.
#[derive(Default)]
pub struct ValidatorBuilder {
    locale: Locale,
    catalog: Option<Box<dyn MessageCatalog>>,
    clock: Option<Box<dyn Clock>>,
    options: RuleOptions,
}

impl ValidatorBuilder {
    /// Use a built-in catalog.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn catalog(mut self, catalog: impl MessageCatalog + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn require_team_players(mut self, enabled: bool) -> Self {
        self.options.require_team_players = enabled;
        self
    }

    pub fn build(self) -> Validator {
        let catalog = self
            .catalog
            .unwrap_or_else(|| Box::new(BuiltinCatalog::new(self.locale)));
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        Validator::new(catalog, clock, self.options)
    }
}
