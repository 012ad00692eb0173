//! Typed response shapes for the FTC Events API v2.0.
//!
//! Field names mirror the wire format (camelCase). Only the fields the
//! narrator consumes are modeled; serde drops the rest.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: String,
    pub type_name: String,
    pub city: String,
    pub stateprov: String,
    #[serde(default)]
    pub region_code: Option<String>,
    /// ISO-ish timestamp, e.g. "2021-06-05T00:00:00".
    pub date_start: String,
    pub date_end: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPage {
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
    pub page_total: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub team_number: u32,
    pub name_short: String,
    #[serde(default)]
    pub rookie_year: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QualSchedule {
    #[serde(default)]
    pub schedule: Vec<QualMatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualMatch {
    #[serde(default)]
    pub teams: Vec<StationAssignment>,
    #[serde(default)]
    pub score_red_final: i32,
    #[serde(default)]
    pub score_blue_final: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationAssignment {
    pub team_number: u32,
    /// "Red1", "Red2", "Blue1", ...
    pub station: String,
    #[serde(default)]
    pub surrogate: bool,
    #[serde(default)]
    pub no_show: bool,
}

impl StationAssignment {
    pub fn is_red(&self) -> bool {
        self.station.starts_with("Red")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayoffSchedule {
    #[serde(default)]
    pub schedule: Vec<PlayoffMatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffMatch {
    /// 0 = final, 1 = semifinal A, 2 = semifinal B.
    pub series: u32,
    pub match_number: u32,
    #[serde(default)]
    pub score_red_final: i32,
    #[serde(default)]
    pub score_blue_final: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllianceList {
    #[serde(default)]
    pub alliances: Vec<AllianceRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllianceRecord {
    /// Selection order — alliance 1 picked first.
    pub number: u32,
    pub captain: u32,
    #[serde(default)]
    pub round1: Option<u32>,
    #[serde(default)]
    pub round2: Option<u32>,
    #[serde(default)]
    pub round3: Option<u32>,
}

impl AllianceRecord {
    /// Captain then picks, in selection order, unfilled slots skipped.
    pub fn members(&self) -> Vec<u32> {
        std::iter::once(Some(self.captain))
            .chain([self.round1, self.round2, self.round3])
            .flatten()
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwardList {
    #[serde(default)]
    pub awards: Vec<AwardRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub name: String,
    /// Placement within the award: 1 = winner, 2+ = finalists.
    #[serde(default)]
    pub series: u32,
    #[serde(default)]
    pub team_number: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingList {
    #[serde(default)]
    pub rankings: Vec<RankingRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRecord {
    pub rank: u32,
    pub team_number: u32,
    #[serde(default)]
    pub sort_order1: f64,
}
