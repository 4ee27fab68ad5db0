use super::CheckContext;
use super::address::check_address;
use super::support::{is_blank, required_text};
use crate::domain::inputs::GymInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

/// The gym address is always checked.
pub fn check_gym(ctx: &CheckContext<'_>, gym: &GymInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    required_text(
        ctx,
        &mut result,
        &gym.name,
        100,
        Rule::GymNameRequired,
        Rule::GymNameTooLong,
    );

    if is_blank(&gym.available_fields) {
        ctx.report(&mut result, Rule::GymAvailableFieldsRequired);
    }

    result.merge_prefixed("address", check_address(ctx, &gym.address));

    result
}
