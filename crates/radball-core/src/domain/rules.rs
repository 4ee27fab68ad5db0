//! Rule registry.
//!
//! Every constraint the validator can report is one [`Rule`] variant, and
//! every variant is described exactly once by a [`RuleDef`] in
//! [`RULE_REGISTRY`]. Messages are *not* part of the definition; they are
//! looked up per locale through a
//! [`MessageCatalog`](crate::domain::MessageCatalog).
//!
//! # Adding a New Rule
//!
//! 1. Add the variant to [`Rule`]
//! 2. Add one [`RuleDef`] to [`RULE_REGISTRY`] at the same position
//! 3. Add the English and German texts in `messages.rs`
//! 4. Emit it from the entity's checker

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use self::Rule as R;
use crate::domain::error::DomainError;
use crate::domain::value_objects::Entity as E;
use crate::domain::value_objects::RuleKind as K;
use crate::domain::value_objects::{Entity, RuleKind};

/// Every rule the checkers can report.
///
/// The discriminant doubles as the index into [`RULE_REGISTRY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    // Address
    AddressCityRequired,
    AddressCityTooLong,
    AddressCountryRequired,
    AddressCountryTooLong,
    AddressStreetRequired,
    AddressStreetTooLong,
    AddressZipRequired,
    AddressZipTooLong,
    // League
    LeagueMinAgeNegative,
    LeagueMaxAgeNegative,
    LeagueMaxAgeBelowMinAge,
    LeagueMaxAgeTooHigh,
    LeagueNameRequired,
    LeagueNameTooLong,
    LeagueDescriptionTooLong,
    LeagueShortNameTooLong,
    LeagueShortNameNotAlphanumeric,
    // Club
    ClubNameRequired,
    ClubNameTooLong,
    ClubShortNameTooLong,
    ClubWebsiteInvalid,
    ClubWebsiteScheme,
    // Gym
    GymNameRequired,
    GymNameTooLong,
    GymAvailableFieldsRequired,
    // Season
    SeasonNameRequired,
    SeasonNameTooLong,
    SeasonStartDateInvalid,
    SeasonEndDateInvalid,
    SeasonRegistrationEndInvalid,
    SeasonRegistrationStartInvalid,
    SeasonEndBeforeStart,
    SeasonRegistrationEndBeforeRegistrationStart,
    SeasonRegistrationStartAfterSeasonStart,
    SeasonRegistrationEndAfterSeasonStart,
    SeasonStartInPast,
    SeasonLeagueOrderEmptyId,
    SeasonLeagueOrderDuplicateId,
    // Person
    PersonFirstNameRequired,
    PersonLastNameRequired,
    PersonEmailInvalid,
    PersonPhoneInvalid,
    PersonDateOfBirthInvalid,
    PersonDateOfBirthInFuture,
    // Association
    AssociationNameRequired,
    AssociationNameTooLong,
    AssociationContactEmailRequired,
    AssociationContactEmailInvalid,
    AssociationContactNameRequired,
    // League group
    LeagueGroupNameRequired,
    LeagueGroupNameTooLong,
    LeagueGroupNumberNotPositive,
    LeagueGroupShortNameRequired,
    LeagueGroupShortNameTooLong,
    LeagueGroupShortNameNotAlphanumeric,
    LeagueGroupRegulationRequired,
    // Team
    TeamNameRequired,
    TeamNameEmpty,
    TeamNameTooLong,
    TeamLeagueIdRequired,
    TeamLeagueIdEmpty,
    TeamLeagueIdTooLong,
    TeamExemptionRequestTooLong,
    TeamPlayersTooFew,
}

/// Static description of one rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// The rule this definition describes.
    pub rule: Rule,

    /// Stable machine code, `"<entity>.<field>.<constraint>"`.
    ///
    /// Used as the key in custom message catalogs; never renamed.
    pub code: &'static str,

    pub entity: Entity,

    /// Input field the violation is reported under (schema spelling).
    pub field: &'static str,

    pub kind: RuleKind,
}

const fn def(
    rule: Rule,
    code: &'static str,
    entity: Entity,
    field: &'static str,
    kind: RuleKind,
) -> RuleDef {
    RuleDef {
        rule,
        code,
        entity,
        field,
        kind,
    }
}

/// Single source of truth for rule metadata, in [`Rule`] declaration order.
#[rustfmt::skip]
pub static RULE_REGISTRY: &[RuleDef] = &[
    // ── Address ──────────────────────────────────────────────────────────────
    def(R::AddressCityRequired, "address.city.required", E::Address, "city", K::RequiredFieldMissing),
    def(R::AddressCityTooLong, "address.city.too_long", E::Address, "city", K::LengthExceeded),
    def(R::AddressCountryRequired, "address.country.required", E::Address, "country", K::RequiredFieldMissing),
    def(R::AddressCountryTooLong, "address.country.too_long", E::Address, "country", K::LengthExceeded),
    def(R::AddressStreetRequired, "address.street.required", E::Address, "street", K::RequiredFieldMissing),
    def(R::AddressStreetTooLong, "address.street.too_long", E::Address, "street", K::LengthExceeded),
    def(R::AddressZipRequired, "address.zip.required", E::Address, "zip", K::RequiredFieldMissing),
    def(R::AddressZipTooLong, "address.zip.too_long", E::Address, "zip", K::LengthExceeded),
    // ── League ───────────────────────────────────────────────────────────────
    def(R::LeagueMinAgeNegative, "league.min_age.negative", E::League, "minAge", K::RangeInvalid),
    def(R::LeagueMaxAgeNegative, "league.max_age.negative", E::League, "maxAge", K::RangeInvalid),
    def(R::LeagueMaxAgeBelowMinAge, "league.max_age.below_min_age", E::League, "maxAge", K::RangeInvalid),
    def(R::LeagueMaxAgeTooHigh, "league.max_age.too_high", E::League, "maxAge", K::RangeInvalid),
    def(R::LeagueNameRequired, "league.name.required", E::League, "name", K::RequiredFieldMissing),
    def(R::LeagueNameTooLong, "league.name.too_long", E::League, "name", K::LengthExceeded),
    def(R::LeagueDescriptionTooLong, "league.description.too_long", E::League, "description", K::LengthExceeded),
    def(R::LeagueShortNameTooLong, "league.short_name.too_long", E::League, "shortName", K::LengthExceeded),
    def(R::LeagueShortNameNotAlphanumeric, "league.short_name.not_alphanumeric", E::League, "shortName", K::FormatInvalid),
    // ── Club ─────────────────────────────────────────────────────────────────
    def(R::ClubNameRequired, "club.name.required", E::Club, "name", K::RequiredFieldMissing),
    def(R::ClubNameTooLong, "club.name.too_long", E::Club, "name", K::LengthExceeded),
    def(R::ClubShortNameTooLong, "club.short_name.too_long", E::Club, "shortName", K::LengthExceeded),
    def(R::ClubWebsiteInvalid, "club.website.invalid", E::Club, "website", K::FormatInvalid),
    def(R::ClubWebsiteScheme, "club.website.scheme", E::Club, "website", K::FormatInvalid),
    // ── Gym ──────────────────────────────────────────────────────────────────
    def(R::GymNameRequired, "gym.name.required", E::Gym, "name", K::RequiredFieldMissing),
    def(R::GymNameTooLong, "gym.name.too_long", E::Gym, "name", K::LengthExceeded),
    def(R::GymAvailableFieldsRequired, "gym.available_fields.required", E::Gym, "availableFields", K::RequiredFieldMissing),
    // ── Season ───────────────────────────────────────────────────────────────
    def(R::SeasonNameRequired, "season.name.required", E::Season, "name", K::RequiredFieldMissing),
    def(R::SeasonNameTooLong, "season.name.too_long", E::Season, "name", K::LengthExceeded),
    def(R::SeasonStartDateInvalid, "season.start_date.invalid", E::Season, "startDate", K::FormatInvalid),
    def(R::SeasonEndDateInvalid, "season.end_date.invalid", E::Season, "endDate", K::FormatInvalid),
    def(R::SeasonRegistrationEndInvalid, "season.registration_end.invalid", E::Season, "registrationEnd", K::FormatInvalid),
    def(R::SeasonRegistrationStartInvalid, "season.registration_start.invalid", E::Season, "registrationStart", K::FormatInvalid),
    def(R::SeasonEndBeforeStart, "season.end_date.not_after_start", E::Season, "endDate", K::RangeInvalid),
    def(R::SeasonRegistrationEndBeforeRegistrationStart, "season.registration_end.not_after_registration_start", E::Season, "registrationEnd", K::RangeInvalid),
    def(R::SeasonRegistrationStartAfterSeasonStart, "season.registration_start.not_before_start", E::Season, "registrationStart", K::RangeInvalid),
    def(R::SeasonRegistrationEndAfterSeasonStart, "season.registration_end.after_start", E::Season, "registrationEnd", K::RangeInvalid),
    def(R::SeasonStartInPast, "season.start_date.in_past", E::Season, "startDate", K::TemporalConstraintViolated),
    def(R::SeasonLeagueOrderEmptyId, "season.league_order.empty_id", E::Season, "leagueOrder", K::FormatInvalid),
    def(R::SeasonLeagueOrderDuplicateId, "season.league_order.duplicate_id", E::Season, "leagueOrder", K::RangeInvalid),
    // ── Person ───────────────────────────────────────────────────────────────
    def(R::PersonFirstNameRequired, "person.first_name.required", E::Person, "firstName", K::RequiredFieldMissing),
    def(R::PersonLastNameRequired, "person.last_name.required", E::Person, "lastName", K::RequiredFieldMissing),
    def(R::PersonEmailInvalid, "person.email.invalid", E::Person, "email", K::FormatInvalid),
    def(R::PersonPhoneInvalid, "person.phone.invalid", E::Person, "phone", K::FormatInvalid),
    def(R::PersonDateOfBirthInvalid, "person.date_of_birth.invalid", E::Person, "dateOfBirth", K::FormatInvalid),
    def(R::PersonDateOfBirthInFuture, "person.date_of_birth.in_future", E::Person, "dateOfBirth", K::TemporalConstraintViolated),
    // ── Association ──────────────────────────────────────────────────────────
    def(R::AssociationNameRequired, "association.name.required", E::Association, "name", K::RequiredFieldMissing),
    def(R::AssociationNameTooLong, "association.name.too_long", E::Association, "name", K::LengthExceeded),
    def(R::AssociationContactEmailRequired, "association.contact_email.required", E::Association, "contactEmail", K::RequiredFieldMissing),
    def(R::AssociationContactEmailInvalid, "association.contact_email.invalid", E::Association, "contactEmail", K::FormatInvalid),
    def(R::AssociationContactNameRequired, "association.contact_name.required", E::Association, "contactName", K::RequiredFieldMissing),
    // ── League group ─────────────────────────────────────────────────────────
    def(R::LeagueGroupNameRequired, "league_group.name.required", E::LeagueGroup, "name", K::RequiredFieldMissing),
    def(R::LeagueGroupNameTooLong, "league_group.name.too_long", E::LeagueGroup, "name", K::LengthExceeded),
    def(R::LeagueGroupNumberNotPositive, "league_group.number.not_positive", E::LeagueGroup, "number", K::RangeInvalid),
    def(R::LeagueGroupShortNameRequired, "league_group.short_name.required", E::LeagueGroup, "shortName", K::RequiredFieldMissing),
    def(R::LeagueGroupShortNameTooLong, "league_group.short_name.too_long", E::LeagueGroup, "shortName", K::LengthExceeded),
    def(R::LeagueGroupShortNameNotAlphanumeric, "league_group.short_name.not_alphanumeric", E::LeagueGroup, "shortName", K::FormatInvalid),
    def(R::LeagueGroupRegulationRequired, "league_group.regulation.required", E::LeagueGroup, "regulation", K::RequiredFieldMissing),
    // ── Team ─────────────────────────────────────────────────────────────────
    def(R::TeamNameRequired, "team.name.required", E::Team, "name", K::RequiredFieldMissing),
    def(R::TeamNameEmpty, "team.name.empty", E::Team, "name", K::RequiredFieldMissing),
    def(R::TeamNameTooLong, "team.name.too_long", E::Team, "name", K::LengthExceeded),
    def(R::TeamLeagueIdRequired, "team.league_id.required", E::Team, "leagueId", K::RequiredFieldMissing),
    def(R::TeamLeagueIdEmpty, "team.league_id.empty", E::Team, "leagueId", K::RequiredFieldMissing),
    def(R::TeamLeagueIdTooLong, "team.league_id.too_long", E::Team, "leagueId", K::LengthExceeded),
    def(R::TeamExemptionRequestTooLong, "team.exemption_request.too_long", E::Team, "exemptionRequest", K::LengthExceeded),
    def(R::TeamPlayersTooFew, "team.player_ids.too_few", E::Team, "playerIds", K::RangeInvalid),
];

impl Rule {
    /// The registry entry for this rule.
    pub fn def(self) -> &'static RuleDef {
        &RULE_REGISTRY[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.def().code
    }

    pub fn field(self) -> &'static str {
        self.def().field
    }

    pub fn kind(self) -> RuleKind {
        self.def().kind
    }

    pub fn entity(self) -> Entity {
        self.def().entity
    }

    /// All rules belonging to one entity, in registry order.
    pub fn for_entity(entity: Entity) -> impl Iterator<Item = Rule> {
        RULE_REGISTRY
            .iter()
            .filter(move |d| d.entity == entity)
            .map(|d| d.rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        RULE_REGISTRY
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.rule)
            .ok_or_else(|| DomainError::UnknownRule(code.to_owned()))
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
