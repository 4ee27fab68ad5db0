//! Input records accepted by the validator.

pub mod records;
pub mod team;

pub use records::{
    AddressInput, AssociationInput, ClubInput, GymInput, LeagueGroupInput, LeagueInput,
    PersonInput, SeasonInput,
};
pub use team::{ModifyTeamInput, RegisterTeamInput, SaveTeamInput, TeamInput};

use crate::domain::error::DomainError;
use crate::domain::value_objects::Entity;

/// Any input record, tagged with its entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityInput {
    Address(AddressInput),
    League(LeagueInput),
    Club(ClubInput),
    Gym(GymInput),
    Season(SeasonInput),
    Person(PersonInput),
    Association(AssociationInput),
    LeagueGroup(LeagueGroupInput),
    Team(TeamInput),
}

impl EntityInput {
    pub const fn entity(&self) -> Entity {
        match self {
            Self::Address(_) => Entity::Address,
            Self::League(_) => Entity::League,
            Self::Club(_) => Entity::Club,
            Self::Gym(_) => Entity::Gym,
            Self::Season(_) => Entity::Season,
            Self::Person(_) => Entity::Person,
            Self::Association(_) => Entity::Association,
            Self::LeagueGroup(_) => Entity::LeagueGroup,
            Self::Team(_) => Entity::Team,
        }
    }

    /// Decode a JSON document as the given entity.
    ///
    /// Missing required strings are not decode errors; they come back blank and
    /// are reported by the checkers. Only a wrong shape (a string where a
    /// number belongs, a non-object) fails here.
    pub fn from_json(entity: Entity, value: serde_json::Value) -> Result<Self, DomainError> {
        fn decode<T: serde::de::DeserializeOwned>(
            entity: Entity,
            value: serde_json::Value,
        ) -> Result<T, DomainError> {
            serde_json::from_value(value).map_err(|e| DomainError::InvalidPayload {
                entity: entity.to_string(),
                reason: e.to_string(),
            })
        }

        Ok(match entity {
            Entity::Address => Self::Address(decode(entity, value)?),
            Entity::League => Self::League(decode(entity, value)?),
            Entity::Club => Self::Club(decode(entity, value)?),
            Entity::Gym => Self::Gym(decode(entity, value)?),
            Entity::Season => Self::Season(decode(entity, value)?),
            Entity::Person => Self::Person(decode(entity, value)?),
            Entity::Association => Self::Association(decode(entity, value)?),
            Entity::LeagueGroup => Self::LeagueGroup(decode(entity, value)?),
            Entity::Team => Self::Team(decode(entity, value)?),
        })
    }
}

macro_rules! impl_from_input {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for EntityInput {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_input!(
    Address(AddressInput),
    League(LeagueInput),
    Club(ClubInput),
    Gym(GymInput),
    Season(SeasonInput),
    Person(PersonInput),
    Association(AssociationInput),
    LeagueGroup(LeagueGroupInput),
    Team(TeamInput),
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_by_entity() {
        let input = EntityInput::from_json(
            Entity::Address,
            json!({ "street": "Hauptstr. 1", "city": "Köln", "country": "DE", "zip": "50667" }),
        )
        .unwrap();
        assert_eq!(input.entity(), Entity::Address);
    }

    #[test]
    fn wrong_shape_is_a_payload_error() {
        let err = EntityInput::from_json(Entity::LeagueGroup, json!({ "number": "one" }))
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidPayload { ref entity, .. } if entity == "league-group"
        ));
    }

    #[test]
    fn non_object_team_is_rejected() {
        assert!(EntityInput::from_json(Entity::Team, json!(42)).is_err());
    }

    #[test]
    fn team_with_mistyped_id_is_a_payload_error() {
        let err = EntityInput::from_json(Entity::Team, json!({ "id": 7, "clubId": "c" }))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidPayload { ref entity, .. } if entity == "team"));
    }

    #[test]
    fn null_ids_in_arrays_are_accepted() {
        let team = EntityInput::from_json(
            Entity::Team,
            json!({ "clubId": "c", "name": "T", "leagueId": "l", "playerIds": ["p1", null] }),
        );
        assert!(team.is_ok());

        let league = EntityInput::from_json(
            Entity::League,
            json!({ "additionalEligibleAssociations": [null] }),
        );
        assert!(league.is_ok());
    }
}
