//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use radball_core::domain::{Entity, parse_date};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "radball",
    bin_name = "radball",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check Radball league API payloads",
    long_about = "Radball checks create and update payloads of the league API \
                  (clubs, gyms, seasons, teams, ...) against the same rules the \
                  API enforces, in English or German.",
    after_help = "EXAMPLES:\n\
        \x20 radball check team team.json\n\
        \x20 cat season.json | radball check season - --locale de\n\
        \x20 radball rules --entity club\n\
        \x20 radball completions bash > /usr/share/bash-completion/completions/radball",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report every violation in a payload.
    #[command(
        visible_alias = "c",
        about = "Check payloads and report every violation",
        after_help = "EXAMPLES:\n\
            \x20 radball check club club.json\n\
            \x20 radball check season seasons.json --now 2026-01-01\n\
            \x20 radball --output-format json check team - < team.json"
    )]
    Check(CheckArgs),

    /// Print only the combined failure message.
    #[command(
        about = "Validate payloads, printing one message per failure",
        after_help = "EXAMPLES:\n\
            \x20 radball validate gym gym.json\n\
            \x20 radball validate person - --locale de < person.json"
    )]
    Validate(CheckArgs),

    /// List the rule table.
    #[command(
        visible_alias = "ls",
        about = "List validation rules",
        after_help = "EXAMPLES:\n\
            \x20 radball rules\n\
            \x20 radball rules --entity season\n\
            \x20 radball rules --format csv"
    )]
    Rules(RulesArgs),

    /// Recompute the statistics of a league-group export.
    #[command(
        about = "Show league-group export statistics",
        after_help = "EXAMPLES:\n\
            \x20 radball stats export.json"
    )]
    Stats(StatsArgs),

    /// Initialise a Radball configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 radball init           # default location\n\
            \x20 radball init --local   # .radball.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 radball completions bash > ~/.local/share/bash-completion/completions/radball\n\
            \x20 radball completions zsh  > ~/.zfunc/_radball\n\
            \x20 radball completions fish > ~/.config/fish/completions/radball.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Radball configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 radball config get validation.locale\n\
            \x20 radball config list\n\
            \x20 radball config path"
    )]
    Config(ConfigCommands),
}

// ── check / validate ──────────────────────────────────────────────────────────

/// Arguments for `radball check` and `radball validate`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Kind of payload in the document.
    #[arg(
        value_name = "ENTITY",
        value_parser = parse_entity,
        help = "Entity type (address, league, club, gym, season, person, association, league-group, team)"
    )]
    pub entity: Entity,

    /// JSON document with one payload or an array of payloads.
    #[arg(
        value_name = "FILE",
        default_value = "-",
        help = "Payload file, or '-' for stdin"
    )]
    pub input: String,

    /// Pin "now" for date rules, for reproducible runs.
    #[arg(
        long = "now",
        value_name = "DATE",
        value_parser = parse_instant,
        help = "Evaluate date rules as of this date (YYYY-MM-DD or RFC 3339)"
    )]
    pub now: Option<DateTime<Utc>>,

    /// Skip the minimum-roster rule for team payloads.
    #[arg(
        long = "allow-small-teams",
        help = "Do not require the minimum number of players"
    )]
    pub allow_small_teams: bool,
}

fn parse_entity(raw: &str) -> Result<Entity, String> {
    raw.parse::<Entity>().map_err(|e| e.to_string())
}

fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_date(raw).ok_or_else(|| format!("'{raw}' is not a date"))
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `radball rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Only list rules of one entity.
    #[arg(
        short = 'e',
        long = "entity",
        value_parser = parse_entity,
        help = "Filter by entity"
    )]
    pub entity: Option<Entity>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `rules` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One code per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── stats ─────────────────────────────────────────────────────────────────────

/// Arguments for `radball stats`.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// League-group export document.
    #[arg(
        value_name = "FILE",
        default_value = "-",
        help = "Export file, or '-' for stdin"
    )]
    pub input: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `radball init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.radball.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `radball completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `radball config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `validation.locale`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::Parser;
    use radball_core::domain::Locale;

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["radball", "check", "team", "team.json"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.entity, Entity::Team);
        assert_eq!(args.input, "team.json");
        assert!(args.now.is_none());
    }

    #[test]
    fn input_defaults_to_stdin() {
        let cli = Cli::parse_from(["radball", "validate", "gym"]);
        let Commands::Validate(args) = cli.command else {
            panic!("expected Validate command");
        };
        assert_eq!(args.input, "-");
    }

    #[test]
    fn entity_aliases_are_accepted() {
        let cli = Cli::parse_from(["radball", "check", "league_group", "g.json"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.entity, Entity::LeagueGroup);
    }

    #[test]
    fn unknown_entity_is_rejected() {
        assert!(Cli::try_parse_from(["radball", "check", "matchday", "x.json"]).is_err());
    }

    #[test]
    fn now_accepts_plain_dates() {
        let cli = Cli::parse_from(["radball", "check", "season", "-", "--now", "2026-01-01"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(
            args.now,
            Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(Cli::try_parse_from(["radball", "check", "season", "-", "--now", "soon"]).is_err());
    }

    #[test]
    fn locale_is_global() {
        let cli = Cli::parse_from(["radball", "rules", "--locale", "de"]);
        assert_eq!(cli.global.locale, Some(Locale::German));
        assert!(Cli::try_parse_from(["radball", "rules", "--locale", "fr"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["radball", "--quiet", "--verbose", "rules"]);
        assert!(result.is_err());
    }
}
