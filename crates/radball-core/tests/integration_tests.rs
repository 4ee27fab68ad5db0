//! Integration tests for radball-core: JSON payloads through the public API.

use chrono::{TimeZone, Utc};
use radball_core::domain::{EntityInput, Rule, RuleKind};
use radball_core::prelude::*;
use serde_json::json;

fn validator(locale: Locale) -> Validator {
    Validator::builder()
        .locale(locale)
        .clock(FixedClock(Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap()))
        .build()
}

fn decode(entity: Entity, value: serde_json::Value) -> EntityInput {
    EntityInput::from_json(entity, value).unwrap()
}

// ========================================================================
// Literal scenarios
// ========================================================================

#[test]
fn address_with_empty_street() {
    let input = decode(
        Entity::Address,
        json!({ "street": "", "city": "Springfield", "country": "USA", "zip": "12345" }),
    );
    let result = validator(Locale::English).check(&input);

    assert_eq!(result.field_errors("street"), vec!["Street is required"]);
    assert_eq!(result.error_count(), 1);
    assert!(result.has_kind("street", RuleKind::RequiredFieldMissing));
}

#[test]
fn league_name_too_long() {
    let input = decode(
        Entity::League,
        json!({ "name": "A".repeat(101), "description": "d", "seasonId": "s" }),
    );
    let result = validator(Locale::English).check(&input);

    assert_eq!(
        result.field_errors("name"),
        vec!["League name cannot exceed 100 characters"]
    );
}

#[test]
fn season_end_before_start() {
    let input = decode(
        Entity::Season,
        json!({ "startDate": "2030-06-20", "endDate": "2030-06-10",
                "registrationEnd": "2030-06-01", "name": "S" }),
    );
    let err = validator(Locale::English).validate(&input).unwrap_err();

    assert_eq!(err.message(), "Season end date must be after start date");
}

#[test]
fn person_born_in_the_future() {
    let input = decode(
        Entity::Person,
        json!({ "firstName": "Max", "lastName": "M", "dateOfBirth": "2099-01-01" }),
    );
    let result = validator(Locale::English).check(&input);

    assert_eq!(
        result.error_messages(),
        vec!["Date of birth cannot be in the future"]
    );
    assert!(result.has_kind("dateOfBirth", RuleKind::TemporalConstraintViolated));
}

#[test]
fn team_creation_with_one_player() {
    let input = decode(
        Entity::Team,
        json!({ "clubId": "club-123", "name": "Team Name", "leagueId": "league-123",
                "playerIds": ["p1"] }),
    );
    let err = validator(Locale::German).validate(&input).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Es müssen mindestens 2 Spieler für ein Team angegeben werden"
    );
}

// ========================================================================
// Properties
// ========================================================================

#[test]
fn address_is_valid_iff_all_fields_present_and_short() {
    let cases = [
        (json!({ "street": "a", "city": "b", "country": "c", "zip": "d" }), true),
        (json!({ "street": " ", "city": "b", "country": "c", "zip": "d" }), false),
        (json!({ "city": "b", "country": "c", "zip": "d" }), false),
        (json!({ "street": "a", "city": "b", "country": "c".repeat(21), "zip": "d" }), false),
        (json!({ "street": "a".repeat(200), "city": "b".repeat(200), "country": "c".repeat(20), "zip": "d".repeat(20) }), true),
    ];

    let validator = validator(Locale::English);
    for (payload, expected) in cases {
        let input = decode(Entity::Address, payload.clone());
        assert_eq!(validator.check(&input).is_valid(), expected, "{payload}");
    }
}

#[test]
fn season_without_registration_start() {
    let input = decode(
        Entity::Season,
        json!({ "name": "S", "startDate": "2030-07-01", "endDate": "2030-06-01",
                "registrationEnd": "2030-07-02" }),
    );
    let result = validator(Locale::English).check(&input);

    assert!(!result.has_rule(Rule::SeasonRegistrationStartInvalid));
    assert!(!result.has_rule(Rule::SeasonRegistrationStartAfterSeasonStart));
    assert!(!result.has_rule(Rule::SeasonRegistrationEndBeforeRegistrationStart));
    assert!(result.has_rule(Rule::SeasonEndBeforeStart));
    assert!(result.has_rule(Rule::SeasonRegistrationEndAfterSeasonStart));
}

#[test]
fn team_requiredness_depends_on_identifier() {
    let validator = validator(Locale::English);

    let create = decode(Entity::Team, json!({ "clubId": "c", "playerIds": ["p1", "p2"] }));
    let result = validator.check(&create);
    assert!(result.has_rule(Rule::TeamNameRequired));
    assert!(result.has_rule(Rule::TeamLeagueIdRequired));

    let register = decode(Entity::Team, json!({ "playerIds": ["p1", "p2"] }));
    let result = validator.check(&register);
    assert_eq!(result.error_count(), 2);

    let modify = decode(Entity::Team, json!({ "id": "t1" }));
    assert!(validator.check(&modify).is_valid());

    let modify_blank = decode(Entity::Team, json!({ "id": "t1", "name": "", "leagueId": "" }));
    let result = validator.check(&modify_blank);
    assert!(result.has_rule(Rule::TeamNameEmpty));
    assert!(result.has_rule(Rule::TeamLeagueIdEmpty));
}

#[test]
fn check_is_idempotent() {
    let validator = validator(Locale::German);
    let input = decode(
        Entity::Club,
        json!({ "name": "", "shortName": "x".repeat(31), "website": "ftp://club.example",
                "address": { "city": "Köln" } }),
    );

    let first = validator.check(&input);
    let second = validator.check(&input);
    assert_eq!(first, second);
    assert_eq!(first.error_count(), 6);
}

#[test]
fn nested_addresses_are_prefixed() {
    let input = decode(
        Entity::Association,
        json!({ "name": "RSV", "contactName": "E", "contactEmail": "e@rsv.example",
                "address": { "street": "Weg 1", "city": "Bonn", "country": "DE" } }),
    );
    let result = validator(Locale::English).check(&input);

    let fields: Vec<_> = result.violations().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["address.zip"]);
}

#[test]
fn free_functions_use_english() {
    let gym = GymInput {
        name: "Halle".into(),
        available_fields: String::new(),
        address: AddressInput::new("Weg 1", "Bonn", "DE", "53111"),
        ..Default::default()
    };

    let err = radball_core::validation::validate_gym(&gym).unwrap_err();
    assert_eq!(err.to_string(), "Available fields are required");
}

#[test]
fn results_serialize_for_api_consumers() {
    let input = decode(
        Entity::LeagueGroup,
        json!({ "name": "Gruppe A", "number": 0, "shortName": "GA", "regulation": "SpO" }),
    );
    let result = validator(Locale::English).check(&input);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["errors"]["number"][0]["rule"], "league_group.number.not_positive");
    assert_eq!(json["errors"]["number"][0]["kind"], "range_invalid");
    assert_eq!(
        json["errors"]["number"][0]["message"],
        "League group number must be positive"
    );
}
