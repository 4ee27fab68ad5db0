//! Command handlers, one module per subcommand.

use tracing::debug;

use radball_adapters::FilesystemCatalogLoader;
use radball_core::application::{FixedClock, Validator};
use radball_core::domain::{LayeredCatalog, Locale};

use crate::{
    cli::{CheckArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
};

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod rules;
pub mod stats;
pub mod validate;

/// Message language: `--locale`, else `validation.locale`.
pub(crate) fn effective_locale(global: &GlobalArgs, config: &AppConfig) -> Locale {
    global.locale.unwrap_or(config.validation.locale)
}

/// Messages from `validation.catalog_dir`, when one is configured.
pub(crate) fn configured_catalog(
    locale: Locale,
    config: &AppConfig,
) -> CliResult<Option<LayeredCatalog>> {
    let Some(dir) = &config.validation.catalog_dir else {
        return Ok(None);
    };
    Ok(Some(FilesystemCatalogLoader::new(dir).load(locale)?))
}

/// Assemble the validator for `check` and `validate`.
pub(crate) fn build_validator(
    args: &CheckArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<Validator> {
    let locale = effective_locale(global, config);
    let require_players = config.validation.require_team_players && !args.allow_small_teams;

    let mut builder = Validator::builder()
        .locale(locale)
        .require_team_players(require_players);

    if let Some(catalog) = configured_catalog(locale, config)? {
        builder = builder.catalog(catalog);
    }

    if let Some(now) = args.now {
        builder = builder.clock(FixedClock(now));
    }

    let validator = builder.build();
    debug!(?validator, pinned_now = ?args.now, "Validator ready");
    Ok(validator)
}
