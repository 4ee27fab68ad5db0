//! Filesystem-based message catalog loader.
//!
//! Custom catalogs replace individual rule messages and fall back to a
//! built-in locale for the rest.
//!
//! # Directory layout expected
//!
//! ```text
//! catalogs/
//! ├── de.toml
//! └── en.toml
//! ```
//!
//! # Catalog format
//!
//! ```toml
//! locale = "de"                    # built-in catalog used as fallback
//!
//! [messages]
//! "team.name.empty" = "Bitte einen Teamnamen angeben"
//! "address.zip.required" = "Postleitzahl fehlt"
//! ```
//!
//! Keys are rule codes as listed by `radball rules`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use radball_core::domain::{LayeredCatalog, Locale, Rule};

use crate::error::AdapterError;

/// Deserialised representation of a catalog file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogFile {
    /// Fallback locale; defaults to the locale the loader was asked for.
    pub locale: Option<String>,
    #[serde(default)]
    pub messages: BTreeMap<String, String>,
}

/// Loads [`LayeredCatalog`]s from `<dir>/<locale>.toml`.
///
/// A missing file is not an error: the built-in catalog for the locale is
/// returned unchanged. Entries whose key is not a known rule code emit a
/// `WARN` log and are skipped.
#[derive(Debug, Clone)]
pub struct FilesystemCatalogLoader {
    catalog_dir: PathBuf,
}

impl FilesystemCatalogLoader {
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }

    /// Path of the catalog file for `locale`.
    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.catalog_dir.join(format!("{}.toml", locale.as_str()))
    }

    /// Load the catalog for `locale`, layered over the built-in texts.
    #[instrument(skip(self), fields(dir = %self.catalog_dir.display()))]
    pub fn load(&self, locale: Locale) -> Result<LayeredCatalog, AdapterError> {
        let path = self.path_for(locale);
        if !path.exists() {
            debug!(path = %path.display(), "no catalog file, using built-in messages");
            return Ok(LayeredCatalog::new(locale));
        }
        load_catalog_file(&path, locale)
    }
}

/// Load one catalog file.
///
/// `default_locale` is used when the file has no `locale` key.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_catalog_file(
    path: &Path,
    default_locale: Locale,
) -> Result<LayeredCatalog, AdapterError> {
    let raw = fs::read_to_string(path).map_err(|source| AdapterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: CatalogFile = toml::from_str(&raw).map_err(|source| AdapterError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let locale = match file.locale.as_deref() {
        Some(name) => name.parse::<Locale>()?,
        None => default_locale,
    };

    let mut catalog = LayeredCatalog::new(locale);
    for (code, message) in file.messages {
        match code.parse::<Rule>() {
            Ok(rule) => {
                catalog.insert(rule, message);
            }
            Err(e) => {
                // One stale key must not discard the whole file.
                warn!(code = %code, error = %e, "skipping unknown rule code in catalog");
            }
        }
    }

    debug!(%locale, overrides = catalog.override_count(), "loaded catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radball_core::domain::MessageCatalog;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let catalog = FilesystemCatalogLoader::new(temp.path())
            .load(Locale::German)
            .unwrap();

        assert_eq!(catalog.override_count(), 0);
        assert_eq!(
            catalog.message(Rule::PersonFirstNameRequired),
            "Vorname ist erforderlich"
        );
    }

    #[test]
    fn overrides_are_layered() {
        let temp = TempDir::new().unwrap();
        write(
            &temp,
            "de.toml",
            r#"
locale = "de"

[messages]
"team.name.empty" = "Bitte einen Teamnamen angeben"
"#,
        );

        let catalog = FilesystemCatalogLoader::new(temp.path())
            .load(Locale::German)
            .unwrap();

        assert_eq!(
            catalog.message(Rule::TeamNameEmpty),
            "Bitte einen Teamnamen angeben"
        );
        assert_eq!(
            catalog.message(Rule::TeamNameRequired),
            "Teamname ist erforderlich"
        );
    }

    #[test]
    fn unknown_codes_are_skipped() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            "custom.toml",
            r#"
[messages]
"team.nickname.required" = "?"
"address.zip.required" = "Postcode is required"
"#,
        );

        let catalog = load_catalog_file(&path, Locale::English).unwrap();
        assert_eq!(catalog.override_count(), 1);
        assert_eq!(catalog.locale(), Locale::English);
        assert_eq!(catalog.message(Rule::AddressZipRequired), "Postcode is required");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        write(&temp, "en.toml", "[messages\n");

        let err = FilesystemCatalogLoader::new(temp.path())
            .load(Locale::English)
            .unwrap_err();
        assert!(matches!(err, AdapterError::Toml { .. }));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fr.toml", "locale = \"fr\"\n");

        let err = load_catalog_file(&path, Locale::English).unwrap_err();
        assert!(matches!(err, AdapterError::Domain(_)));
    }
}
