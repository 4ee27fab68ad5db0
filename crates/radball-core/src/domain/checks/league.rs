use super::CheckContext;
use super::support::{char_len, is_alphanumeric, required_text, supplied};
use crate::domain::inputs::LeagueInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

pub const MAX_AGE_LIMIT: i32 = 100;

pub fn check_league(ctx: &CheckContext<'_>, league: &LeagueInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Age bounds only apply as a pair.
    if let (Some(min), Some(max)) = (league.min_age, league.max_age) {
        if min < 0 {
            ctx.report(&mut result, Rule::LeagueMinAgeNegative);
        }
        if max < 0 {
            ctx.report(&mut result, Rule::LeagueMaxAgeNegative);
        }
        if max < min {
            ctx.report(&mut result, Rule::LeagueMaxAgeBelowMinAge);
        }
        if max > MAX_AGE_LIMIT {
            ctx.report(&mut result, Rule::LeagueMaxAgeTooHigh);
        }
    }

    required_text(
        ctx,
        &mut result,
        &league.name,
        100,
        Rule::LeagueNameRequired,
        Rule::LeagueNameTooLong,
    );

    if supplied(&league.description).is_some_and(|d| char_len(d) > 500) {
        ctx.report(&mut result, Rule::LeagueDescriptionTooLong);
    }

    if let Some(short_name) = supplied(&league.short_name) {
        if char_len(short_name) > 10 {
            ctx.report(&mut result, Rule::LeagueShortNameTooLong);
        }
        if !is_alphanumeric(short_name) {
            ctx.report(&mut result, Rule::LeagueShortNameNotAlphanumeric);
        }
    }

    result
}
