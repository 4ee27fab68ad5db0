//! Team inputs.
//!
//! The API accepts three team shapes. Instead of guessing the shape from which
//! keys happen to be present, each shape is its own type and [`TeamInput`]
//! names which one a payload is. Only wire decoding looks at field presence,
//! and it does so once.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Creating a team for a club.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTeamInput {
    pub club_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sg_club_id: Option<String>,
    #[serde(default)]
    pub player_ids: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_right_to_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub without_competition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemption_request: Option<String>,
}

/// Partial update of an existing team. Everything but `id` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyTeamInput {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sg_club_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_ids: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_right_to_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub without_competition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemption_request: Option<String>,
}

/// A team entered during season registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTeamInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub player_ids: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sg_club_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_right_to_play: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub without_competition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemption_request: Option<String>,
}

/// One of the three team shapes.
///
/// On the wire the variant is recognised structurally: an `id` makes it a
/// modification, a `clubId` without `id` a creation, anything else a
/// registration entry. A `null` key counts as absent. Only the selected shape
/// is decoded, so a mistyped field is an error rather than another shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TeamInput {
    Modify(ModifyTeamInput),
    Create(SaveTeamInput),
    Register(RegisterTeamInput),
}

impl TeamInput {
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Modify(_) => "modify",
            Self::Register(_) => "register",
        }
    }

    /// Whether `name` and `leagueId` must be supplied.
    ///
    /// Creation and registration need them; a modification may leave them out.
    pub const fn requires_core_fields(&self) -> bool {
        !matches!(self, Self::Modify(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Create(t) => t.name.as_deref(),
            Self::Modify(t) => t.name.as_deref(),
            Self::Register(t) => t.name.as_deref(),
        }
    }

    pub fn league_id(&self) -> Option<&str> {
        match self {
            Self::Create(t) => t.league_id.as_deref(),
            Self::Modify(t) => t.league_id.as_deref(),
            Self::Register(t) => t.league_id.as_deref(),
        }
    }

    pub fn exemption_request(&self) -> Option<&str> {
        match self {
            Self::Create(t) => t.exemption_request.as_deref(),
            Self::Modify(t) => t.exemption_request.as_deref(),
            Self::Register(t) => t.exemption_request.as_deref(),
        }
    }

    /// Player ids, `None` when a modification leaves the roster untouched.
    ///
    /// Entries may be `null`; they still count towards the roster size.
    pub fn player_ids(&self) -> Option<&[Option<String>]> {
        match self {
            Self::Create(t) => Some(&t.player_ids),
            Self::Modify(t) => t.player_ids.as_deref(),
            Self::Register(t) => Some(&t.player_ids),
        }
    }
}

impl<'de> Deserialize<'de> for TeamInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let has = |key: &str| fields.get(key).is_some_and(|value| !value.is_null());
        let (modify, create) = (has("id"), has("clubId"));

        let payload = Value::Object(fields);
        let team = if modify {
            serde_json::from_value(payload).map(Self::Modify)
        } else if create {
            serde_json::from_value(payload).map(Self::Create)
        } else {
            serde_json::from_value(payload).map(Self::Register)
        };
        team.map_err(de::Error::custom)
    }
}

impl From<SaveTeamInput> for TeamInput {
    fn from(value: SaveTeamInput) -> Self {
        Self::Create(value)
    }
}

impl From<ModifyTeamInput> for TeamInput {
    fn from(value: ModifyTeamInput) -> Self {
        Self::Modify(value)
    }
}

impl From<RegisterTeamInput> for TeamInput {
    fn from(value: RegisterTeamInput) -> Self {
        Self::Register(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> TeamInput {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn id_selects_modify() {
        let team = decode(r#"{ "id": "team-1", "clubId": "club-1" }"#);
        assert_eq!(team.variant_name(), "modify");
        assert!(!team.requires_core_fields());
        assert!(team.player_ids().is_none());
    }

    #[test]
    fn club_id_without_id_selects_create() {
        let team = decode(r#"{ "clubId": "club-1", "name": "A", "leagueId": "l" }"#);
        assert!(matches!(team, TeamInput::Create(_)));
        assert_eq!(team.name(), Some("A"));
        assert_eq!(team.player_ids(), Some(&[][..]));
    }

    #[test]
    fn anything_else_is_a_registration() {
        let team = decode(r#"{ "name": "A", "playerIds": ["p1", "p2"] }"#);
        assert!(matches!(team, TeamInput::Register(_)));
        assert!(team.requires_core_fields());
        assert_eq!(team.league_id(), None);
        assert_eq!(team.player_ids().map(<[Option<String>]>::len), Some(2));
    }

    #[test]
    fn mistyped_id_is_an_error_not_a_creation() {
        let err = serde_json::from_str::<TeamInput>(r#"{ "id": 7, "clubId": "c" }"#).unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{err}");
    }

    #[test]
    fn null_id_falls_back_to_club_id() {
        let team = decode(r#"{ "id": null, "clubId": "club-1" }"#);
        assert!(matches!(team, TeamInput::Create(_)));
    }

    #[test]
    fn null_player_ids_are_kept_and_counted() {
        let team =
            decode(r#"{ "clubId": "c", "name": "T", "leagueId": "l", "playerIds": ["p1", null] }"#);
        assert_eq!(team.player_ids(), Some(&[Some("p1".to_owned()), None][..]));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(serde_json::from_str::<TeamInput>(r#"["p1"]"#).is_err());
    }
}
