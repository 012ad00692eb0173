//! Entity-model construction: one fetched event turned into the in-memory
//! snapshot the narrator works from.
//!
//! Everything is built once per script. The statistics engine fills in
//! scores and ranks during construction; after that, only the composer's
//! mention counters change.

use log::{debug, info};
use thiserror::Error;

use crate::api::models::{
    AllianceRecord, AwardRecord, EventRecord, PlayoffMatch, QualMatch, RankingRecord, TeamRecord,
};
use crate::api::{ApiError, EventsClient};
use crate::core::stats::{self, TopScore};
use crate::schema::alliance::Alliance;
use crate::schema::award::Award;
use crate::schema::event::EventInfo;
use crate::schema::series::{EliminationSeries, SeriesGame, SeriesSlot};
use crate::schema::team::{EventTeam, RankedTeam, TeamNumber, TeamRoster};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("no team {0} in the event roster")]
    UnknownTeam(TeamNumber),
    #[error("no alliance seeded {0} in the alliance list")]
    UnknownAlliance(u32),
    #[error("playoff feed reports a final before both semifinals resolved")]
    UndecidedSemifinal,
}

/// The fully-populated entity model for one event.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    pub event: EventInfo,
    pub roster: TeamRoster,
    /// Highest-scoring qualification side, when any match was played.
    pub top_score: Option<TopScore>,
    /// In seed order.
    pub alliances: Vec<Alliance>,
    /// Semifinal A, semifinal B, then the final — the resolution order.
    pub series: Vec<EliminationSeries>,
    pub awards: Vec<Award>,
    /// Official rankings, used only by the no-playoffs narration branch.
    pub rankings: Vec<RankedTeam>,
}

impl EventSnapshot {
    /// Fetch every resource for one event code and build the snapshot.
    pub fn fetch(client: &EventsClient, event_code: &str) -> Result<Self, SnapshotError> {
        info!("fetching snapshot for {}", event_code);
        let event = client.event(event_code)?;
        let teams = client.teams(event_code)?;
        let quals = client.qual_matches(event_code)?;
        let alliances = client.alliances(event_code)?;
        let playoffs = client.playoff_matches(event_code)?;
        let awards = client.awards(event_code)?;
        let rankings = client.rankings(event_code)?;
        Self::build(event, teams, quals, alliances, playoffs, awards, rankings)
    }

    /// Build the snapshot from completed gateway payloads. Team pages are
    /// expected to be merged already; this runs the statistics pass and
    /// resolves the elimination bracket.
    pub fn build(
        event: EventRecord,
        teams: Vec<TeamRecord>,
        quals: Vec<QualMatch>,
        alliances: Vec<AllianceRecord>,
        playoffs: Vec<PlayoffMatch>,
        awards: Vec<AwardRecord>,
        rankings: Vec<RankingRecord>,
    ) -> Result<Self, SnapshotError> {
        let event = build_event_info(event)?;

        let mut roster = TeamRoster::new();
        for record in teams {
            roster.insert(EventTeam::new(
                TeamNumber(record.team_number),
                record.name_short,
                record.rookie_year,
            ));
        }
        debug!("roster holds {} teams", roster.len());

        let top_score = stats::aggregate_scores(&mut roster, &quals)?;
        stats::assign_rankings(&mut roster);

        let mut built_alliances = Vec::with_capacity(alliances.len());
        for record in alliances {
            let mut members = Vec::new();
            for number in record.members() {
                let number = TeamNumber(number);
                if !roster.contains(number) {
                    return Err(SnapshotError::UnknownTeam(number));
                }
                members.push(number);
            }
            built_alliances.push(Alliance::new(record.number, members));
        }

        let series = build_bracket(&mut built_alliances, &playoffs)?;

        let awards = awards
            .into_iter()
            .map(|record| Award {
                name: record.name,
                placement: record.series,
                team: record.team_number.map(TeamNumber),
            })
            .collect();

        let rankings = rankings
            .into_iter()
            .map(|record| RankedTeam {
                rank: record.rank,
                team: TeamNumber(record.team_number),
                sort_metric: record.sort_order1,
            })
            .collect();

        Ok(Self {
            event,
            roster,
            top_score,
            alliances: built_alliances,
            series,
            awards,
            rankings,
        })
    }

    /// Whether narration must take the no-playoffs branch: a remote-format
    /// region and no alliances were ever formed.
    pub fn is_remote_fallback(&self) -> bool {
        self.event.is_remote_region() && self.alliances.is_empty()
    }

    pub fn alliance_by_seed(&self, seed: u32) -> Option<&Alliance> {
        self.alliances.iter().find(|a| a.seed == seed)
    }

    pub fn series_for(&self, slot: SeriesSlot) -> Option<&EliminationSeries> {
        self.series.iter().find(|s| s.slot == slot)
    }
}

fn build_event_info(record: EventRecord) -> Result<EventInfo, SnapshotError> {
    let date_start = EventsClient::parse_date(&record.date_start)?;
    let date_end = EventsClient::parse_date(&record.date_end)?;
    Ok(EventInfo {
        name: record.name,
        type_name: record.type_name,
        city: record.city,
        stateprov: record.stateprov,
        region_code: record.region_code,
        date_start,
        date_end,
    })
}

/// Build the two semifinals and the final from the flat playoff feed.
///
/// Semifinal A pits seed 1 against seed 4, semifinal B seeds 2 and 3.
/// The final's sides exist only once both semifinals have a winner, so
/// the semifinals are constructed and resolved first. Per-game scores are
/// appended to the participating alliances as each game is recorded.
fn build_bracket(
    alliances: &mut [Alliance],
    playoffs: &[PlayoffMatch],
) -> Result<Vec<EliminationSeries>, SnapshotError> {
    if playoffs.is_empty() {
        return Ok(Vec::new());
    }

    let mut semi_a = EliminationSeries::new(SeriesSlot::SemifinalA, 1, 4);
    let mut semi_b = EliminationSeries::new(SeriesSlot::SemifinalB, 2, 3);
    fill_series(&mut semi_a, alliances, playoffs)?;
    fill_series(&mut semi_b, alliances, playoffs)?;

    let final_games_exist = playoffs
        .iter()
        .any(|m| m.series == SeriesSlot::Final.series_id());

    let mut series = vec![semi_a, semi_b];
    let winners = (series[0].winner(), series[1].winner());
    match winners {
        (Some((_, red_seed)), Some((_, blue_seed))) => {
            let mut final_series = EliminationSeries::new(SeriesSlot::Final, red_seed, blue_seed);
            fill_series(&mut final_series, alliances, playoffs)?;
            series.push(final_series);
        }
        _ if final_games_exist => return Err(SnapshotError::UndecidedSemifinal),
        _ => {}
    }

    Ok(series)
}

fn fill_series(
    series: &mut EliminationSeries,
    alliances: &mut [Alliance],
    playoffs: &[PlayoffMatch],
) -> Result<(), SnapshotError> {
    let mut games: Vec<&PlayoffMatch> = playoffs
        .iter()
        .filter(|m| m.series == series.slot.series_id())
        .collect();
    games.sort_by_key(|m| m.match_number);

    for game in games {
        series.record_game(SeriesGame {
            match_number: game.match_number,
            red_score: game.score_red_final,
            blue_score: game.score_blue_final,
        });
        alliance_by_seed(alliances, series.red_seed)?
            .elim_scores
            .push(game.score_red_final);
        alliance_by_seed(alliances, series.blue_seed)?
            .elim_scores
            .push(game.score_blue_final);
    }
    Ok(())
}

fn alliance_by_seed(alliances: &mut [Alliance], seed: u32) -> Result<&mut Alliance, SnapshotError> {
    alliances
        .iter_mut()
        .find(|a| a.seed == seed)
        .ok_or(SnapshotError::UnknownAlliance(seed))
}
