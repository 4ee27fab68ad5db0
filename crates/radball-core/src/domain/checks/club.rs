use url::Url;

use super::CheckContext;
use super::address::check_address;
use super::support::{char_len, required_text, supplied};
use crate::domain::inputs::ClubInput;
use crate::domain::result::ValidationResult;
use crate::domain::rules::Rule;

pub fn check_club(ctx: &CheckContext<'_>, club: &ClubInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    required_text(
        ctx,
        &mut result,
        &club.name,
        100,
        Rule::ClubNameRequired,
        Rule::ClubNameTooLong,
    );

    if supplied(&club.short_name).is_some_and(|s| char_len(s) > 30) {
        ctx.report(&mut result, Rule::ClubShortNameTooLong);
    }

    if let Some(website) = supplied(&club.website) {
        if Url::parse(website).is_err() {
            ctx.report(&mut result, Rule::ClubWebsiteInvalid);
        } else if !(website.starts_with("http://") || website.starts_with("https://")) {
            ctx.report(&mut result, Rule::ClubWebsiteScheme);
        }
    }

    if let Some(address) = club.address.as_ref().filter(|a| a.has_any_value()) {
        result.merge_prefixed("address", check_address(ctx, address));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checks::test_support::{ctx, german_ctx};
    use crate::domain::inputs::AddressInput;

    fn valid() -> ClubInput {
        ClubInput {
            name: "RV Concordia".into(),
            short_name: Some("Concordia".into()),
            website: Some("https://concordia.example".into()),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_club() {
        assert!(check_club(&ctx(), &valid()).is_valid());
    }

    #[test]
    fn unparseable_website() {
        let club = ClubInput {
            website: Some("www.concordia.example".into()),
            ..valid()
        };
        let result = check_club(&german_ctx(), &club);
        assert_eq!(result.field_errors("website"), vec!["Ungültige Website-URL"]);
    }

    #[test]
    fn website_needs_http_scheme() {
        let club = ClubInput {
            website: Some("ftp://concordia.example".into()),
            ..valid()
        };
        let result = check_club(&ctx(), &club);
        assert_eq!(
            result.field_errors("website"),
            vec!["Website must start with http:// or https://"]
        );
    }

    #[test]
    fn short_name_limit() {
        let club = ClubInput {
            short_name: Some("A".repeat(31)),
            ..valid()
        };
        assert!(check_club(&ctx(), &club).has_rule(Rule::ClubShortNameTooLong));
    }

    #[test]
    fn blank_address_is_skipped() {
        let club = ClubInput {
            address: Some(AddressInput::new("", "", "", "")),
            ..valid()
        };
        assert!(check_club(&ctx(), &club).is_valid());
    }

    #[test]
    fn partial_address_is_checked_with_prefix() {
        let club = ClubInput {
            address: Some(AddressInput {
                city: Some("Köln".into()),
                ..Default::default()
            }),
            ..valid()
        };
        let result = check_club(&ctx(), &club);
        let keys: Vec<_> = result.errors().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["address.country", "address.street", "address.zip"]);
    }
}
