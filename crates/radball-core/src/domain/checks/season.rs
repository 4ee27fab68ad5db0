use std::collections::HashSet;

use super::CheckContext;
use super::support::{is_blank, parse_date, required_text, supplied};
use crate::domain::inputs::SeasonInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

/// Season name, date ordering and league order.
///
/// A malformed date is reported under its own field, and any ordering rule
/// that involves it is skipped.
pub fn check_season(ctx: &CheckContext<'_>, season: &SeasonInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    required_text(
        ctx,
        &mut result,
        &season.name,
        100,
        Rule::SeasonNameRequired,
        Rule::SeasonNameTooLong,
    );

    let mut date = |value: &str, invalid: Rule| {
        let parsed = parse_date(value);
        if parsed.is_none() {
            ctx.report(&mut result, invalid);
        }
        parsed
    };
    let start = date(&season.start_date, Rule::SeasonStartDateInvalid);
    let end = date(&season.end_date, Rule::SeasonEndDateInvalid);
    let registration_end = date(&season.registration_end, Rule::SeasonRegistrationEndInvalid);
    // `None` when not supplied, `Some(None)` when supplied but malformed.
    let registration_start = supplied(&season.registration_start)
        .map(|value| date(value, Rule::SeasonRegistrationStartInvalid));

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            ctx.report(&mut result, Rule::SeasonEndBeforeStart);
        }
    }

    if let Some(Some(registration_start)) = registration_start {
        if registration_end.is_some_and(|re| re <= registration_start) {
            ctx.report(&mut result, Rule::SeasonRegistrationEndBeforeRegistrationStart);
        }
        if start.is_some_and(|s| registration_start >= s) {
            ctx.report(&mut result, Rule::SeasonRegistrationStartAfterSeasonStart);
        }
    }

    if let (Some(start), Some(registration_end)) = (start, registration_end) {
        if registration_end > start {
            ctx.report(&mut result, Rule::SeasonRegistrationEndAfterSeasonStart);
        }
    }

    if start.is_some_and(|s| s < ctx.now()) {
        ctx.report(&mut result, Rule::SeasonStartInPast);
    }

    if let Some(order) = &season.league_order {
        check_league_order(ctx, &mut result, order);
    }

    result
}

fn check_league_order(ctx: &CheckContext<'_>, result: &mut ValidationResult, order: &[String]) {
    if order.iter().any(|id| is_blank(id)) {
        ctx.report(result, Rule::SeasonLeagueOrderEmptyId);
    }

    let mut seen = HashSet::new();
    if order
        .iter()
        .filter(|id| !is_blank(id))
        .any(|id| !seen.insert(id.as_str()))
    {
        ctx.report(result, Rule::SeasonLeagueOrderDuplicateId);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checks::test_support::{ctx, german_ctx};

    fn valid() -> SeasonInput {
        SeasonInput {
            name: "Saison 2030".into(),
            start_date: "2030-07-01".into(),
            end_date: "2030-12-31".into(),
            registration_end: "2030-06-25".into(),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_season() {
        assert!(check_season(&ctx(), &valid()).is_valid());
    }

    #[test]
    fn end_before_start() {
        let season = SeasonInput {
            name: "S".into(),
            start_date: "2030-06-20".into(),
            end_date: "2030-06-10".into(),
            registration_end: "2030-06-01".into(),
            ..Default::default()
        };
        let result = check_season(&ctx(), &season);
        assert_eq!(
            result.error_messages(),
            vec!["Season end date must be after start date"]
        );
    }

    #[test]
    fn equal_start_and_end_is_rejected() {
        let season = SeasonInput {
            end_date: "2030-07-01".into(),
            ..valid()
        };
        assert!(check_season(&ctx(), &season).has_rule(Rule::SeasonEndBeforeStart));
    }

    #[test]
    fn malformed_dates_skip_ordering() {
        let season = SeasonInput {
            start_date: "fdas".into(),
            ..valid()
        };
        let result = check_season(&german_ctx(), &season);

        assert_eq!(result.field_errors("startDate"), vec!["Ungültiges Datumsformat"]);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn each_malformed_field_is_reported_once() {
        let season = SeasonInput {
            start_date: "x".into(),
            end_date: "y".into(),
            registration_end: String::new(),
            registration_start: Some("z".into()),
            ..valid()
        };
        let result = check_season(&ctx(), &season);

        for rule in [
            Rule::SeasonStartDateInvalid,
            Rule::SeasonEndDateInvalid,
            Rule::SeasonRegistrationEndInvalid,
            Rule::SeasonRegistrationStartInvalid,
        ] {
            assert!(result.has_rule(rule), "{rule}");
        }
        assert_eq!(result.error_count(), 4);
    }

    #[test]
    fn registration_start_rules_need_registration_start() {
        let season = SeasonInput {
            registration_end: "2030-07-10".into(),
            ..valid()
        };
        let result = check_season(&ctx(), &season);

        assert_eq!(
            result.error_messages(),
            vec!["Registration must end before season start date"]
        );
    }

    #[test]
    fn registration_end_not_after_registration_start() {
        let season = SeasonInput {
            registration_start: Some("2030-06-26".into()),
            ..valid()
        };
        let result = check_season(&german_ctx(), &season);
        assert_eq!(
            result.field_errors("registrationEnd"),
            vec!["Anmeldungsende muss nach dem Anmeldungsstart liegen"]
        );
    }

    #[test]
    fn registration_starting_after_season_start() {
        let season = SeasonInput {
            registration_start: Some("2030-08-30".into()),
            registration_end: "2030-09-01".into(),
            start_date: "2030-05-08".into(),
            end_date: "2030-06-07".into(),
            ..valid()
        };
        let result = check_season(&ctx(), &season);
        assert!(result.has_rule(Rule::SeasonRegistrationStartAfterSeasonStart));
        assert!(result.has_rule(Rule::SeasonRegistrationEndAfterSeasonStart));
    }

    #[test]
    fn empty_registration_start_counts_as_absent() {
        let season = SeasonInput {
            registration_start: Some(String::new()),
            ..valid()
        };
        assert!(check_season(&ctx(), &season).is_valid());
    }

    #[test]
    fn start_in_the_past() {
        let season = SeasonInput {
            start_date: "2023-08-05".into(),
            end_date: "2023-12-31".into(),
            registration_end: "2023-08-01".into(),
            ..valid()
        };
        let result = check_season(&german_ctx(), &season);
        assert_eq!(
            result.error_messages(),
            vec!["Saison-Startdatum darf nicht in der Vergangenheit liegen"]
        );
    }

    #[test]
    fn league_order_rules() {
        let ok = SeasonInput {
            league_order: Some(vec!["l1".into(), "l2".into()]),
            ..valid()
        };
        assert!(check_season(&ctx(), &ok).is_valid());

        let empty = SeasonInput {
            league_order: Some(vec![]),
            ..valid()
        };
        assert!(check_season(&ctx(), &empty).is_valid());

        let duplicate = SeasonInput {
            league_order: Some(vec!["l1".into(), "l2".into(), "l1".into()]),
            ..valid()
        };
        assert_eq!(
            check_season(&german_ctx(), &duplicate).error_messages(),
            vec!["Liga-Reihenfolge darf keine doppelten Liga-IDs enthalten"]
        );

        let blank = SeasonInput {
            league_order: Some(vec!["l1".into(), "   ".into(), "".into()]),
            ..valid()
        };
        assert_eq!(
            check_season(&german_ctx(), &blank).error_messages(),
            vec!["Liga-Reihenfolge darf keine leeren Liga-IDs enthalten"]
        );
    }
}
