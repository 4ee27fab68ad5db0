//! League-group export document.
//!
//! The export bundles everything a group leader needs for one league group:
//! the group with its season, league and leader, every registered team with
//! its players, the clubs with their preferred matchday dates, the gyms, and
//! summary statistics.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAddress {
    pub street: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferredDateStatus {
    Preferred,
    Available,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredMatchdayDate {
    pub preference_date: String,
    pub status: PreferredDateStatus,
    pub notes: Option<String>,
    pub gym_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportClub {
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub preferred_dates: Vec<PreferredMatchdayDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSeason {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLeague {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    #[serde(default)]
    pub matchday_dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLeader {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportGroup {
    pub id: String,
    pub number: i32,
    pub name: String,
    pub short_name: String,
    pub season: ExportSeason,
    pub league: ExportLeague,
    pub leader: GroupLeader,
    pub regulation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPerson {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: String,
    pub date_of_birth: String,
    pub uci_code: String,
    pub nationality: String,
    pub club_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTeam {
    pub id: String,
    pub name: String,
    pub without_competition: bool,
    pub second_right_to_play: bool,
    pub exemption_request: Option<String>,
    #[serde(default)]
    pub players: Vec<ExportPerson>,
    pub club_id: String,
    pub sg_club_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportGym {
    pub id: String,
    pub name: String,
    pub available_fields: String,
    pub address: ExportAddress,
    pub club_id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueGroupStatistics {
    pub total_teams: usize,
    pub total_players: usize,
    pub total_clubs: usize,
    pub total_gyms: usize,
}

impl LeagueGroupStatistics {
    /// Totals over the given lists. Players are summed across teams.
    pub fn compute(teams: &[ExportTeam], clubs: &[ExportClub], gyms: &[ExportGym]) -> Self {
        Self {
            total_teams: teams.len(),
            total_players: teams.iter().map(|t| t.players.len()).sum(),
            total_clubs: clubs.len(),
            total_gyms: gyms.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueGroupExport {
    pub group: ExportGroup,
    #[serde(default)]
    pub teams: Vec<ExportTeam>,
    #[serde(default)]
    pub clubs: Vec<ExportClub>,
    #[serde(default)]
    pub gyms: Vec<ExportGym>,
    pub statistics: LeagueGroupStatistics,
}

impl LeagueGroupExport {
    /// Statistics derived from the document's own lists.
    pub fn recomputed_statistics(&self) -> LeagueGroupStatistics {
        LeagueGroupStatistics::compute(&self.teams, &self.clubs, &self.gyms)
    }

    /// Whether the stored statistics match the lists.
    pub fn statistics_consistent(&self) -> bool {
        self.statistics == self.recomputed_statistics()
    }
}
