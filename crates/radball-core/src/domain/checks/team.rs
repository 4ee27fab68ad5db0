use super::CheckContext;
use super::support::{char_len, is_blank};
use crate::domain::inputs::TeamInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

/// Smallest roster accepted when creating or registering a team.
pub const MIN_TEAM_PLAYERS: usize = 2;

/// Team name, league, exemption request and roster size.
///
/// A supplied `name` or `leagueId` is always shape-checked. Whether an absent
/// one is an error depends on the variant: creation and registration require
/// them, a modification does not.
pub fn check_team(ctx: &CheckContext<'_>, team: &TeamInput) -> ValidationResult {
    let mut result = ValidationResult::new();
    let requires_core = team.requires_core_fields();

    match team.name() {
        Some(name) if is_blank(name) => ctx.report(&mut result, Rule::TeamNameEmpty),
        Some(name) if char_len(name) > 100 => ctx.report(&mut result, Rule::TeamNameTooLong),
        Some(_) => {}
        None if requires_core => ctx.report(&mut result, Rule::TeamNameRequired),
        None => {}
    }

    match team.league_id() {
        Some(id) if is_blank(id) => ctx.report(&mut result, Rule::TeamLeagueIdEmpty),
        Some(id) if char_len(id) > 100 => ctx.report(&mut result, Rule::TeamLeagueIdTooLong),
        Some(_) => {}
        None if requires_core => ctx.report(&mut result, Rule::TeamLeagueIdRequired),
        None => {}
    }

    if team
        .exemption_request()
        .is_some_and(|r| char_len(r.trim()) > 1000)
    {
        ctx.report(&mut result, Rule::TeamExemptionRequestTooLong);
    }

    if ctx.require_team_players
        && requires_core
        && team
            .player_ids()
            .is_some_and(|players| players.len() < MIN_TEAM_PLAYERS)
    {
        ctx.report(&mut result, Rule::TeamPlayersTooFew);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checks::test_support::{ctx, german_ctx};
    use crate::domain::inputs::{ModifyTeamInput, RegisterTeamInput, SaveTeamInput};

    fn players(n: usize) -> Vec<Option<String>> {
        (1..=n).map(|i| Some(format!("player{i}"))).collect()
    }

    fn save() -> SaveTeamInput {
        SaveTeamInput {
            club_id: "club-123".into(),
            name: Some("Team Name".into()),
            league_id: Some("league-123".into()),
            player_ids: players(2),
            ..Default::default()
        }
    }

    fn modify() -> ModifyTeamInput {
        ModifyTeamInput {
            id: "team-123".into(),
            name: Some("Modified Team Name".into()),
            league_id: Some("league-123".into()),
            player_ids: Some(players(2)),
            ..Default::default()
        }
    }

    fn register() -> RegisterTeamInput {
        RegisterTeamInput {
            name: Some("Register Team Name".into()),
            league_id: Some("league-123".into()),
            player_ids: players(2),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_all_three_variants() {
        let teams: [TeamInput; 3] = [save().into(), modify().into(), register().into()];
        for team in teams {
            let result = check_team(&ctx(), &team);
            assert!(result.is_valid(), "{}: {:?}", team.variant_name(), result);
        }
    }

    #[test]
    fn creation_requires_name_and_league() {
        let team = SaveTeamInput {
            name: None,
            league_id: None,
            ..save()
        };
        let result = check_team(&ctx(), &team.into());
        assert_eq!(
            result.error_messages(),
            vec!["Team name is required", "League ID is required"]
        );
    }

    #[test]
    fn modification_may_omit_name_and_league() {
        let team = ModifyTeamInput {
            id: "team-123".into(),
            ..Default::default()
        };
        assert!(check_team(&ctx(), &team.into()).is_valid());
    }

    #[test]
    fn supplied_values_are_checked_for_every_variant() {
        let team = ModifyTeamInput {
            name: Some("   ".into()),
            league_id: Some("l".repeat(101)),
            ..modify()
        };
        let result = check_team(&german_ctx(), &team.into());
        assert_eq!(
            result.error_messages(),
            vec![
                "Teamname darf nicht leer sein",
                "Liga-ID darf 100 Zeichen nicht überschreiten",
            ]
        );
    }

    #[test]
    fn exemption_request_uses_trimmed_length() {
        let padded = SaveTeamInput {
            exemption_request: Some(format!("  {}  ", "x".repeat(1000))),
            ..save()
        };
        assert!(check_team(&ctx(), &padded.into()).is_valid());

        let long = RegisterTeamInput {
            exemption_request: Some("x".repeat(1001)),
            ..register()
        };
        assert!(check_team(&ctx(), &long.into()).has_rule(Rule::TeamExemptionRequestTooLong));
    }

    #[test]
    fn too_few_players_on_creation_and_registration() {
        let one = SaveTeamInput {
            player_ids: players(1),
            ..save()
        };
        assert_eq!(
            check_team(&german_ctx(), &one.into()).error_messages(),
            vec!["Es müssen mindestens 2 Spieler für ein Team angegeben werden"]
        );

        let none = RegisterTeamInput {
            player_ids: vec![],
            ..register()
        };
        assert!(check_team(&ctx(), &none.into()).has_rule(Rule::TeamPlayersTooFew));
    }

    #[test]
    fn roster_rule_skips_modifications_and_can_be_disabled() {
        let modify = ModifyTeamInput {
            player_ids: Some(players(1)),
            ..modify()
        };
        assert!(check_team(&ctx(), &modify.into()).is_valid());

        let one = SaveTeamInput {
            player_ids: players(1),
            ..save()
        };
        let relaxed = ctx().require_team_players(false);
        assert!(check_team(&relaxed, &one.into()).is_valid());
    }

    #[test]
    fn null_player_entries_count_towards_the_roster() {
        let team = SaveTeamInput {
            player_ids: vec![Some("player1".into()), None],
            ..save()
        };
        assert!(check_team(&ctx(), &team.into()).is_valid());
    }
}
