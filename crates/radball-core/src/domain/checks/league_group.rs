use super::CheckContext;
use super::support::{char_len, is_alphanumeric, is_blank, required_text};
use crate::domain::inputs::LeagueGroupInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

pub fn check_league_group(ctx: &CheckContext<'_>, group: &LeagueGroupInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    required_text(
        ctx,
        &mut result,
        &group.name,
        100,
        Rule::LeagueGroupNameRequired,
        Rule::LeagueGroupNameTooLong,
    );

    if group.number < 1 {
        ctx.report(&mut result, Rule::LeagueGroupNumberNotPositive);
    }

    // At most one short-name violation.
    if is_blank(&group.short_name) {
        ctx.report(&mut result, Rule::LeagueGroupShortNameRequired);
    } else if char_len(&group.short_name) > 10 {
        ctx.report(&mut result, Rule::LeagueGroupShortNameTooLong);
    } else if !is_alphanumeric(&group.short_name) {
        ctx.report(&mut result, Rule::LeagueGroupShortNameNotAlphanumeric);
    }

    if is_blank(&group.regulation) {
        ctx.report(&mut result, Rule::LeagueGroupRegulationRequired);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checks::test_support::ctx;

    fn valid() -> LeagueGroupInput {
        LeagueGroupInput {
            name: "Gruppe A".into(),
            number: 1,
            short_name: "GA".into(),
            regulation: "Spielordnung 2030".into(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_group() {
        assert!(check_league_group(&ctx(), &valid()).is_valid());
    }

    #[test]
    fn number_must_be_positive() {
        let group = LeagueGroupInput {
            number: 0,
            ..valid()
        };
        assert_eq!(
            check_league_group(&ctx(), &group).error_messages(),
            vec!["League group number must be positive"]
        );
    }

    #[test]
    fn short_name_reports_first_failure_only() {
        let group = LeagueGroupInput {
            short_name: "Gruppe-A-Nord".into(),
            ..valid()
        };
        let result = check_league_group(&ctx(), &group);
        assert_eq!(
            result.field_errors("shortName"),
            vec!["League group short name cannot exceed 10 characters"]
        );

        let group = LeagueGroupInput {
            short_name: "G-A".into(),
            ..valid()
        };
        assert!(
            check_league_group(&ctx(), &group).has_rule(Rule::LeagueGroupShortNameNotAlphanumeric)
        );
    }

    #[test]
    fn everything_missing() {
        let result = check_league_group(&ctx(), &LeagueGroupInput::default());
        assert_eq!(result.error_count(), 4);
    }
}
