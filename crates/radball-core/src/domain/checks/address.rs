use super::CheckContext;
use super::support::required_text;
use crate::domain::inputs::AddressInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

/// Every address field is required. An absent field counts as blank.
pub fn check_address(ctx: &CheckContext<'_>, address: &AddressInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    required_text(
        ctx,
        &mut result,
        address.city.as_deref().unwrap_or_default(),
        200,
        Rule::AddressCityRequired,
        Rule::AddressCityTooLong,
    );
    required_text(
        ctx,
        &mut result,
        address.country.as_deref().unwrap_or_default(),
        20,
        Rule::AddressCountryRequired,
        Rule::AddressCountryTooLong,
    );
    required_text(
        ctx,
        &mut result,
        address.street.as_deref().unwrap_or_default(),
        200,
        Rule::AddressStreetRequired,
        Rule::AddressStreetTooLong,
    );
    required_text(
        ctx,
        &mut result,
        address.zip.as_deref().unwrap_or_default(),
        20,
        Rule::AddressZipRequired,
        Rule::AddressZipTooLong,
    );

    result
}
