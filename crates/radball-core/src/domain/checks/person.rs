use super::CheckContext;
use super::address::check_address;
use super::support::{is_blank, is_email, is_phone, parse_date, supplied};
use crate::domain::inputs::PersonInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

pub fn check_person(ctx: &CheckContext<'_>, person: &PersonInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    if is_blank(&person.first_name) {
        ctx.report(&mut result, Rule::PersonFirstNameRequired);
    }
    if is_blank(&person.last_name) {
        ctx.report(&mut result, Rule::PersonLastNameRequired);
    }

    if supplied(&person.email).is_some_and(|e| !is_email(e)) {
        ctx.report(&mut result, Rule::PersonEmailInvalid);
    }

    if supplied(&person.phone).is_some_and(|p| !is_phone(p)) {
        ctx.report(&mut result, Rule::PersonPhoneInvalid);
    }

    if let Some(raw) = supplied(&person.date_of_birth) {
        match parse_date(raw) {
            None => ctx.report(&mut result, Rule::PersonDateOfBirthInvalid),
            Some(born) if born > ctx.now() => {
                ctx.report(&mut result, Rule::PersonDateOfBirthInFuture)
            }
            Some(_) => {}
        }
    }

    if let Some(address) = person.address.as_ref().filter(|a| a.has_any_value()) {
        result.merge_prefixed("address", check_address(ctx, address));
    }

    result
}
