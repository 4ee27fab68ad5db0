use super::CheckContext;
use super::address::check_address;
use super::support::{is_blank, is_email, required_text};
use crate::domain::inputs::AssociationInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

/// The association address is always checked.
pub fn check_association(
    ctx: &CheckContext<'_>,
    association: &AssociationInput,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    required_text(
        ctx,
        &mut result,
        &association.name,
        100,
        Rule::AssociationNameRequired,
        Rule::AssociationNameTooLong,
    );

    if is_blank(&association.contact_email) {
        ctx.report(&mut result, Rule::AssociationContactEmailRequired);
    } else if !is_email(&association.contact_email) {
        ctx.report(&mut result, Rule::AssociationContactEmailInvalid);
    }

    if is_blank(&association.contact_name) {
        ctx.report(&mut result, Rule::AssociationContactNameRequired);
    }

    result.merge_prefixed("address", check_address(ctx, &association.address));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checks::test_support::{ctx, german_ctx};
    use crate::domain::inputs::AddressInput;

    fn valid() -> AssociationInput {
        AssociationInput {
            name: "Radsportverband NRW".into(),
            short_name: Some("RSV".into()),
            contact_name: "Erika Musterfrau".into(),
            contact_email: "kontakt@rsv.example".into(),
            address: AddressInput::new("Am Sportpark 1", "Köln", "DE", "50933"),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_association() {
        assert!(check_association(&ctx(), &valid()).is_valid());
    }

    #[test]
    fn contact_email_required_then_shape() {
        let missing = AssociationInput {
            contact_email: "  ".into(),
            ..valid()
        };
        assert_eq!(
            check_association(&german_ctx(), &missing).error_messages(),
            vec!["Kontakt-E-Mail ist erforderlich"]
        );

        let malformed = AssociationInput {
            contact_email: "kontakt@rsv".into(),
            ..valid()
        };
        assert_eq!(
            check_association(&ctx(), &malformed).error_messages(),
            vec!["Invalid contact email format"]
        );
    }

    #[test]
    fn address_always_checked() {
        let association = AssociationInput {
            address: AddressInput::default(),
            contact_name: String::new(),
            ..valid()
        };
        let result = check_association(&ctx(), &association);
        assert!(result.has_rule(Rule::AssociationContactNameRequired));
        assert_eq!(result.field_errors("address.zip"), vec!["Zip code is required"]);
        assert_eq!(result.error_count(), 5);
    }
}
