//! `radball stats` - recompute league-group export statistics.

use serde::Serialize;
use tracing::warn;

use radball_adapters::{DocumentSource, read_league_group_export};
use radball_core::domain::LeagueGroupStatistics;

use crate::{cli::StatsArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    group: String,
    stored: LeagueGroupStatistics,
    recomputed: LeagueGroupStatistics,
    consistent: bool,
}

pub fn execute(args: StatsArgs, output: &OutputManager) -> CliResult<()> {
    let source = DocumentSource::parse(&args.input);
    let export = read_league_group_export(&source)?;

    let report = StatsReport {
        group: export.group.name.clone(),
        stored: export.statistics,
        recomputed: export.recomputed_statistics(),
        consistent: export.statistics_consistent(),
    };

    if !report.consistent {
        warn!(
            stored = ?report.stored,
            recomputed = ?report.recomputed,
            "export statistics out of date"
        );
    }

    if output.is_json() {
        return output.json(&report);
    }

    output.header(&format!(
        "{} ({}) - {}",
        export.group.name, export.group.short_name, export.group.season.name
    ))?;
    let stats = &report.recomputed;
    output.print(&format!("  Teams:   {}", stats.total_teams))?;
    output.print(&format!("  Players: {}", stats.total_players))?;
    output.print(&format!("  Clubs:   {}", stats.total_clubs))?;
    output.print(&format!("  Gyms:    {}", stats.total_gyms))?;

    if report.consistent {
        output.success("Stored statistics match the document")?;
    } else {
        output.warning(&format!(
            "Stored statistics differ: teams {}, players {}, clubs {}, gyms {}",
            report.stored.total_teams,
            report.stored.total_players,
            report.stored.total_clubs,
            report.stored.total_gyms
        ))?;
    }
    Ok(())
}
