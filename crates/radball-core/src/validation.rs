//! Free-function entry points over a shared default [`Validator`].
//!
//! English messages, the system clock and every rule enabled. Use
//! [`Validator::builder`] for anything else.

use std::sync::LazyLock;

use crate::application::Validator;
use crate::domain::{
    AddressInput, AssociationInput, ClubInput, EntityInput, GymInput, LeagueGroupInput,
    LeagueInput, PersonInput, SeasonInput, TeamInput, ValidationError, ValidationResult,
};

static DEFAULT_VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::default);

pub fn check_address(input: &AddressInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_address(input)
}

pub fn validate_address(input: &AddressInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_address(input)
}

pub fn check_league(input: &LeagueInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_league(input)
}

pub fn validate_league(input: &LeagueInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_league(input)
}

pub fn check_club(input: &ClubInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_club(input)
}

pub fn validate_club(input: &ClubInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_club(input)
}

pub fn check_gym(input: &GymInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_gym(input)
}

pub fn validate_gym(input: &GymInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_gym(input)
}

pub fn check_season(input: &SeasonInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_season(input)
}

pub fn validate_season(input: &SeasonInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_season(input)
}

pub fn check_person(input: &PersonInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_person(input)
}

pub fn validate_person(input: &PersonInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_person(input)
}

pub fn check_association(input: &AssociationInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_association(input)
}

pub fn validate_association(input: &AssociationInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_association(input)
}

pub fn check_league_group(input: &LeagueGroupInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_league_group(input)
}

pub fn validate_league_group(input: &LeagueGroupInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_league_group(input)
}

pub fn check_team(input: &TeamInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check_team(input)
}

pub fn validate_team(input: &TeamInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate_team(input)
}

pub fn check(input: &EntityInput) -> ValidationResult {
    DEFAULT_VALIDATOR.check(input)
}

pub fn validate(input: &EntityInput) -> Result<(), ValidationError> {
    DEFAULT_VALIDATOR.validate(input)
}
