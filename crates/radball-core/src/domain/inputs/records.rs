//! Input records for every entity except teams.
//!
//! Each record covers both the save and the modify shape of the API: `id` is
//! `None` when creating and `Some` when modifying. Field names follow the
//! GraphQL schema (camelCase on the wire).
//!
//! Fields the schema marks as required are plain `String`s defaulting to `""`,
//! so an absent value reaches the checkers as blank and is reported as a rule
//! violation instead of a payload error.

use serde::{Deserialize, Serialize};

// ── Address ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressInput {
    pub city: Option<String>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub zip: Option<String>,
}

impl AddressInput {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            city: Some(city.into()),
            country: Some(country.into()),
            street: Some(street.into()),
            zip: Some(zip.into()),
        }
    }

    /// Whether any sub-field carries a non-empty value.
    ///
    /// Optional nested addresses are only checked when this holds.
    pub fn has_any_value(&self) -> bool {
        [&self.city, &self.country, &self.street, &self.zip]
            .into_iter()
            .any(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

// ── League ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub short_name: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matchday_dates: Option<Vec<String>>,
    pub additional_eligible_associations: Vec<Option<String>>,
}

// ── Club ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClubInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub short_name: Option<String>,
    pub website: Option<String>,
    pub address: Option<AddressInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

// ── Gym ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub available_fields: String,
    pub address: AddressInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
}

// ── Season ────────────────────────────────────────────────────────────────────

/// Season dates are ISO calendar dates (`YYYY-MM-DD`); full timestamps are
/// accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub registration_start: Option<String>,
    pub registration_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
    /// Display order of the season's leagues, by league id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_order: Option<Vec<String>>,
}

// ── Person ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub uci_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
    pub address: Option<AddressInput>,
}

// ── Association ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssociationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub short_name: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub coordinators: Vec<String>,
    pub address: AddressInput,
}

// ── League group ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueGroupInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub number: i32,
    pub short_name: String,
    pub regulation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_leader_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_strings_default_to_blank() {
        let gym: GymInput = serde_json::from_str(r#"{ "name": "Halle 1" }"#).unwrap();
        assert_eq!(gym.available_fields, "");
        assert_eq!(gym.address, AddressInput::default());
    }

    #[test]
    fn fields_are_camel_case() {
        let season: SeasonInput = serde_json::from_str(
            r#"{ "name": "S", "startDate": "2030-07-01", "registrationEnd": "2030-06-25",
                 "leagueOrder": ["l1"] }"#,
        )
        .unwrap();
        assert_eq!(season.start_date, "2030-07-01");
        assert_eq!(season.registration_end, "2030-06-25");
        assert_eq!(season.league_order, Some(vec!["l1".to_owned()]));
        assert!(season.registration_start.is_none());
    }

    #[test]
    fn address_with_only_empty_strings_has_no_value() {
        let blank = AddressInput::new("", "", "", "");
        assert!(!blank.has_any_value());

        let partial = AddressInput {
            country: Some("DE".into()),
            ..Default::default()
        };
        assert!(partial.has_any_value());
    }
}
