//! Message catalogs.
//!
//! Rule logic never contains message text. A checker reports a [`Rule`] and
//! the active [`MessageCatalog`] turns it into the user-facing sentence, so
//! switching language is a configuration change only.
//!
//! The built-in catalogs are exhaustive `match`es: adding a [`Rule`] without
//! texts does not compile.

use std::collections::HashMap;

use crate::domain::rules::Rule;
use crate::domain::value_objects::Locale;

/// Resolves a rule to its message in one language.
pub trait MessageCatalog: Send + Sync {
    /// The message reported for `rule`.
    fn message(&self, rule: Rule) -> &str;

    /// Language the catalog is written in.
    fn locale(&self) -> Locale;
}

// ── Built-in catalogs ─────────────────────────────────────────────────────────

/// The catalogs compiled into the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinCatalog {
    locale: Locale,
}

impl BuiltinCatalog {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn english() -> Self {
        Self::new(Locale::English)
    }

    pub const fn german() -> Self {
        Self::new(Locale::German)
    }
}

impl MessageCatalog for BuiltinCatalog {
    fn message(&self, rule: Rule) -> &str {
        match self.locale {
            Locale::English => english(rule),
            Locale::German => german(rule),
        }
    }

    fn locale(&self) -> Locale {
        self.locale
    }
}

fn english(rule: Rule) -> &'static str {
    use Rule::*;
    match rule {
        AddressCityRequired => "City is required",
        AddressCityTooLong => "City cannot exceed 200 characters",
        AddressCountryRequired => "Country is required",
        AddressCountryTooLong => "Country cannot exceed 20 characters",
        AddressStreetRequired => "Street is required",
        AddressStreetTooLong => "Street cannot exceed 200 characters",
        AddressZipRequired => "Zip code is required",
        AddressZipTooLong => "Zip code cannot exceed 20 characters",

        LeagueMinAgeNegative => "Minimum age cannot be negative",
        LeagueMaxAgeNegative => "Maximum age cannot be negative",
        LeagueMaxAgeBelowMinAge => "Maximum age must be greater than or equal to minimum age",
        LeagueMaxAgeTooHigh => "Maximum age exceeds reasonable limit",
        LeagueNameRequired => "League name is required",
        LeagueNameTooLong => "League name cannot exceed 100 characters",
        LeagueDescriptionTooLong => "Description cannot exceed 500 characters",
        LeagueShortNameTooLong => "Short name cannot exceed 10 characters",
        LeagueShortNameNotAlphanumeric => "Short name can only contain alphanumeric characters",

        ClubNameRequired => "Club name is required",
        ClubNameTooLong => "Club name cannot exceed 100 characters",
        ClubShortNameTooLong => "Short name cannot exceed 30 characters",
        ClubWebsiteInvalid => "Invalid website URL",
        ClubWebsiteScheme => "Website must start with http:// or https://",

        GymNameRequired => "Gym name is required",
        GymNameTooLong => "Gym name cannot exceed 100 characters",
        GymAvailableFieldsRequired => "Available fields are required",

        SeasonNameRequired => "Season name is required",
        SeasonNameTooLong => "Season name cannot exceed 100 characters",
        SeasonStartDateInvalid
        | SeasonEndDateInvalid
        | SeasonRegistrationEndInvalid
        | SeasonRegistrationStartInvalid => "Invalid date format",
        SeasonEndBeforeStart => "Season end date must be after start date",
        SeasonRegistrationEndBeforeRegistrationStart => {
            "Registration end date must be after registration start date"
        }
        SeasonRegistrationStartAfterSeasonStart => {
            "Registration must start before season start date"
        }
        SeasonRegistrationEndAfterSeasonStart => "Registration must end before season start date",
        SeasonStartInPast => "Season start date cannot be in the past",
        SeasonLeagueOrderEmptyId => "League order must not contain empty league IDs",
        SeasonLeagueOrderDuplicateId => "League order must not contain duplicate league IDs",

        PersonFirstNameRequired => "First name is required",
        PersonLastNameRequired => "Last name is required",
        PersonEmailInvalid => "Invalid email format",
        PersonPhoneInvalid => "Invalid phone number format",
        PersonDateOfBirthInvalid => "Invalid date of birth format",
        PersonDateOfBirthInFuture => "Date of birth cannot be in the future",

        AssociationNameRequired => "Association name is required",
        AssociationNameTooLong => "Association name cannot exceed 100 characters",
        AssociationContactEmailRequired => "Contact email is required",
        AssociationContactEmailInvalid => "Invalid contact email format",
        AssociationContactNameRequired => "Contact name is required",

        LeagueGroupNameRequired => "League group name is required",
        LeagueGroupNameTooLong => "League group name cannot exceed 100 characters",
        LeagueGroupNumberNotPositive => "League group number must be positive",
        LeagueGroupShortNameRequired => "League group short name is required",
        LeagueGroupShortNameTooLong => "League group short name cannot exceed 10 characters",
        LeagueGroupShortNameNotAlphanumeric => {
            "League group short name can only contain alphanumeric characters"
        }
        LeagueGroupRegulationRequired => "League group regulation is required",

        TeamNameRequired => "Team name is required",
        TeamNameEmpty => "Team name cannot be empty",
        TeamNameTooLong => "Team name cannot exceed 100 characters",
        TeamLeagueIdRequired => "League ID is required",
        TeamLeagueIdEmpty => "League ID cannot be empty",
        TeamLeagueIdTooLong => "League ID cannot exceed 100 characters",
        TeamExemptionRequestTooLong => "Exemption request cannot exceed 1000 characters",
        TeamPlayersTooFew => "At least 2 players must be specified for a team",
    }
}

fn german(rule: Rule) -> &'static str {
    use Rule::*;
    match rule {
        AddressCityRequired => "Stadt ist erforderlich",
        AddressCityTooLong => "Stadt darf 200 Zeichen nicht überschreiten",
        AddressCountryRequired => "Land ist erforderlich",
        AddressCountryTooLong => "Land darf 20 Zeichen nicht überschreiten",
        AddressStreetRequired => "Straße ist erforderlich",
        AddressStreetTooLong => "Straße darf 200 Zeichen nicht überschreiten",
        AddressZipRequired => "PLZ ist erforderlich",
        AddressZipTooLong => "PLZ darf 20 Zeichen nicht überschreiten",

        LeagueMinAgeNegative => "Mindestalter darf nicht negativ sein",
        LeagueMaxAgeNegative => "Maximalalter darf nicht negativ sein",
        LeagueMaxAgeBelowMinAge => "Maximalalter muss größer oder gleich dem Mindestalter sein",
        LeagueMaxAgeTooHigh => "Maximalalter überschreitet das vernünftige Limit",
        LeagueNameRequired => "Liganame ist erforderlich",
        LeagueNameTooLong => "Liganame darf 100 Zeichen nicht überschreiten",
        LeagueDescriptionTooLong => "Beschreibung darf 500 Zeichen nicht überschreiten",
        LeagueShortNameTooLong => "Kurzname darf 10 Zeichen nicht überschreiten",
        LeagueShortNameNotAlphanumeric => "Kurzname darf nur alphanumerische Zeichen enthalten",

        ClubNameRequired => "Vereinsname ist erforderlich",
        ClubNameTooLong => "Vereinsname darf 100 Zeichen nicht überschreiten",
        ClubShortNameTooLong => "Kurzname darf 30 Zeichen nicht überschreiten",
        ClubWebsiteInvalid => "Ungültige Website-URL",
        ClubWebsiteScheme => "Website muss mit http:// oder https:// beginnen",

        GymNameRequired => "Hallenname ist erforderlich",
        GymNameTooLong => "Hallenname darf 100 Zeichen nicht überschreiten",
        GymAvailableFieldsRequired => "Verfügbare Felder sind erforderlich",

        SeasonNameRequired => "Saisonname ist erforderlich",
        SeasonNameTooLong => "Saisonname darf 100 Zeichen nicht überschreiten",
        SeasonStartDateInvalid
        | SeasonEndDateInvalid
        | SeasonRegistrationEndInvalid
        | SeasonRegistrationStartInvalid => "Ungültiges Datumsformat",
        SeasonEndBeforeStart => "Saison-Enddatum muss nach dem Startdatum liegen",
        SeasonRegistrationEndBeforeRegistrationStart => {
            "Anmeldungsende muss nach dem Anmeldungsstart liegen"
        }
        SeasonRegistrationStartAfterSeasonStart => "Anmeldung muss vor dem Saisonstart beginnen",
        SeasonRegistrationEndAfterSeasonStart => "Anmeldung muss vor dem Saisonstart enden",
        SeasonStartInPast => "Saison-Startdatum darf nicht in der Vergangenheit liegen",
        SeasonLeagueOrderEmptyId => "Liga-Reihenfolge darf keine leeren Liga-IDs enthalten",
        SeasonLeagueOrderDuplicateId => "Liga-Reihenfolge darf keine doppelten Liga-IDs enthalten",

        PersonFirstNameRequired => "Vorname ist erforderlich",
        PersonLastNameRequired => "Nachname ist erforderlich",
        PersonEmailInvalid => "Ungültiges E-Mail-Format",
        PersonPhoneInvalid => "Ungültiges Telefonnummer-Format",
        PersonDateOfBirthInvalid => "Ungültiges Geburtsdatumsformat",
        PersonDateOfBirthInFuture => "Geburtsdatum darf nicht in der Zukunft liegen",

        AssociationNameRequired => "Verbandsname ist erforderlich",
        AssociationNameTooLong => "Verbandsname darf 100 Zeichen nicht überschreiten",
        AssociationContactEmailRequired => "Kontakt-E-Mail ist erforderlich",
        AssociationContactEmailInvalid => "Ungültiges Kontakt-E-Mail-Format",
        AssociationContactNameRequired => "Kontaktname ist erforderlich",

        LeagueGroupNameRequired => "Gruppenname ist erforderlich",
        LeagueGroupNameTooLong => "Gruppenname darf 100 Zeichen nicht überschreiten",
        LeagueGroupNumberNotPositive => "Gruppennummer muss positiv sein",
        LeagueGroupShortNameRequired => "Gruppenkurzname ist erforderlich",
        LeagueGroupShortNameTooLong => "Gruppenkurzname darf 10 Zeichen nicht überschreiten",
        LeagueGroupShortNameNotAlphanumeric => {
            "Gruppenkurzname darf nur alphanumerische Zeichen enthalten"
        }
        LeagueGroupRegulationRequired => "Spielordnung der Gruppe ist erforderlich",

        TeamNameRequired => "Teamname ist erforderlich",
        TeamNameEmpty => "Teamname darf nicht leer sein",
        TeamNameTooLong => "Teamname darf 100 Zeichen nicht überschreiten",
        TeamLeagueIdRequired => "Liga-ID ist erforderlich",
        TeamLeagueIdEmpty => "Liga-ID darf nicht leer sein",
        TeamLeagueIdTooLong => "Liga-ID darf 100 Zeichen nicht überschreiten",
        TeamExemptionRequestTooLong => "Freistellungsantrag darf 1000 Zeichen nicht überschreiten",
        TeamPlayersTooFew => "Es müssen mindestens 2 Spieler für ein Team angegeben werden",
    }
}

// ── Layered catalog ───────────────────────────────────────────────────────────

/// A built-in catalog with per-rule overrides on top.
///
/// Rules without an override fall through to the base locale, so a partial
/// override file is always complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayeredCatalog {
    base: BuiltinCatalog,
    overrides: HashMap<Rule, String>,
}

impl LayeredCatalog {
    pub fn new(base: Locale) -> Self {
        Self {
            base: BuiltinCatalog::new(base),
            overrides: HashMap::new(),
        }
    }

    /// Replace the message for one rule.
    pub fn insert(&mut self, rule: Rule, message: impl Into<String>) -> &mut Self {
        self.overrides.insert(rule, message.into());
        self
    }

    pub fn with_override(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.insert(rule, message);
        self
    }

    /// Number of rules whose text differs from the base catalog.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl MessageCatalog for LayeredCatalog {
    fn message(&self, rule: Rule) -> &str {
        self.overrides
            .get(&rule)
            .map(String::as_str)
            .unwrap_or_else(|| self.base.message(rule))
    }

    fn locale(&self) -> Locale {
        self.base.locale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::RULE_REGISTRY;

    #[test]
    fn every_rule_has_text_in_both_locales() {
        for def in RULE_REGISTRY {
            assert!(!english(def.rule).is_empty(), "{}", def.code);
            assert!(!german(def.rule).is_empty(), "{}", def.code);
        }
    }

    #[test]
    fn builtin_follows_locale() {
        assert_eq!(
            BuiltinCatalog::english().message(Rule::AddressStreetRequired),
            "Street is required"
        );
        assert_eq!(
            BuiltinCatalog::german().message(Rule::AddressStreetRequired),
            "Straße ist erforderlich"
        );
    }

    #[test]
    fn layered_catalog_falls_back_to_base() {
        let catalog = LayeredCatalog::new(Locale::German)
            .with_override(Rule::TeamNameEmpty, "Bitte einen Teamnamen angeben");

        assert_eq!(
            catalog.message(Rule::TeamNameEmpty),
            "Bitte einen Teamnamen angeben"
        );
        assert_eq!(
            catalog.message(Rule::TeamLeagueIdEmpty),
            "Liga-ID darf nicht leer sein"
        );
        assert_eq!(catalog.locale(), Locale::German);
        assert_eq!(catalog.override_count(), 1);
    }
}
