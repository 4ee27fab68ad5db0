//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `RADBALL__<SECTION>__<KEY>`
//! 3. Config file (`--config`, else `.radball.toml` in the CWD, else the
//!    platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use radball_core::domain::Locale;

/// File name of a project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = ".radball.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "RADBALL";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rule and message settings.
    pub validation: ValidationConfig,
    /// Output settings.
    pub output: OutputConfig,

    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Language of the built-in messages.
    pub locale: Locale,
    /// Enforce the minimum roster on new and registered teams.
    pub require_team_players: bool,
    /// Directory with `<locale>.toml` message overrides.
    pub catalog_dir: Option<PathBuf>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            require_team_players: true,
            catalog_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let source = match config_file {
            Some(path) => Some(path.clone()),
            None => Self::discover(),
        };
        Self::load_from(source.as_deref(), config_file.is_some())
    }

    fn load_from(file: Option<&Path>, required: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AppConfig::default()).context("Failed to encode default config")?,
        );

        if let Some(path) = file {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match file {
                Some(path) => format!("Failed to read config from '{}'", path.display()),
                None => "Failed to read config from the environment".to_owned(),
            })?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .context("Config has invalid values")?;
        config.source = file.filter(|p| p.exists()).map(Path::to_path_buf);

        tracing::debug!(
            source = ?config.source,
            locale = %config.validation.locale,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// First existing implicit config file: local, then global.
    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }

    /// Path to the default (global) configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.radball.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "radball", "radball")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Value of a dotted key, as printed by `radball config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "validation.locale" => self.validation.locale.to_string(),
            "validation.require_team_players" => {
                self.validation.require_team_players.to_string()
            }
            "validation.catalog_dir" => self
                .validation
                .catalog_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }
}
