//! The narrative composer: four sections rendered in fixed order —
//! intro, qualification summary, elimination summary (or the remote
//! fallback), awards — then assembled into one normalized script.
//!
//! Section order matters. Mentioning a team bumps its counter, which
//! changes how later mentions read, so every section walks its material
//! strictly left to right.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::phrasebook::PhraseBook;
use crate::core::phrasing::{normalize_whitespace, ordinal, word_join};
use crate::core::snapshot::EventSnapshot;
use crate::core::stats;
use crate::schema::award::Award;
use crate::schema::series::{SeriesSlot, Side};
use crate::schema::team::{TeamNumber, UNRANKED};

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("no team {0} in the event roster")]
    UnknownTeam(TeamNumber),
    #[error("no qualification scores to narrate")]
    NoQualificationData,
    #[error("no rankings available for the remote-format summary")]
    NoRankingData,
    #[error("elimination series {0:?} is missing or undecided")]
    UndecidedSeries(SeriesSlot),
    #[error("no alliance seeded {0} in the snapshot")]
    UnknownAlliance(u32),
}

/// Show name, spelled out the way the TTS should read it.
const SHOW_NAME: &str = "F Tee See Recap";

/// Renders the recap script for one event snapshot.
///
/// Owns the snapshot for the duration of the run — narration mutates
/// mention counters, so a snapshot is good for exactly one script.
pub struct ScriptWriter {
    snapshot: EventSnapshot,
    rng: StdRng,
    phrases: PhraseBook,
    host: Option<String>,
}

impl ScriptWriter {
    pub fn new(snapshot: EventSnapshot) -> Self {
        Self {
            snapshot,
            rng: StdRng::seed_from_u64(0),
            phrases: PhraseBook::default(),
            host: None,
        }
    }

    /// Reseed the phrase-selection RNG. Same snapshot and seed, same
    /// script.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_phrase_book(mut self, phrases: PhraseBook) -> Self {
        self.phrases = phrases;
        self
    }

    /// Host name read out in the greeting.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Produce the full script: all four sections in order, joined, and
    /// whitespace-normalized.
    pub fn write(&mut self) -> Result<String, ComposeError> {
        let intro = self.event_intro();
        let quals = self.quals_summary()?;
        let elims = self.elims_summary()?;
        let awards = self.awards_summary()?;
        let script = [intro, quals, elims, awards].join(" ");
        Ok(normalize_whitespace(&script))
    }

    /// Spoken reference to a team, routed through its mention counter.
    fn mention(&mut self, number: TeamNumber, full: bool) -> Result<String, ComposeError> {
        let team = self
            .snapshot
            .roster
            .get_mut(number)
            .ok_or(ComposeError::UnknownTeam(number))?;
        Ok(team.mention(&mut self.rng, full))
    }

    fn mention_all(&mut self, numbers: &[TeamNumber]) -> Result<Vec<String>, ComposeError> {
        numbers.iter().map(|&n| self.mention(n, false)).collect()
    }

    fn event_intro(&mut self) -> String {
        let event = &self.snapshot.event;
        let greeting = match &self.host {
            Some(host) => format!("Hello, my name is {}, and welcome to {}.", host, SHOW_NAME),
            None => format!("Hello, and welcome to {}.", SHOW_NAME),
        };
        let region_text = event
            .region_name()
            .map(|name| format!(" in the {} region", name))
            .unwrap_or_default();
        format!(
            "{} Today we will be talking about the {} {}. This event happened out of {}, {}{}, on {}.",
            greeting,
            event.name,
            event.type_name,
            event.city,
            event.state_name(),
            region_text,
            event.date_text()
        )
    }

    /// Qualification summary: the top-scoring side, the two strongest
    /// teams behind it, and the most consistent team. Sentences whose
    /// statistics are unavailable are skipped rather than guessed at.
    fn quals_summary(&mut self) -> Result<String, ComposeError> {
        let top = self
            .snapshot
            .top_score
            .clone()
            .ok_or(ComposeError::NoQualificationData)?;

        let mut out = Vec::new();
        if let Some(quip) = self.phrases.opening_quip(&mut self.rng) {
            out.push(quip.to_string());
        }

        let top_mentions = self.mention_all(&top.teams)?;
        out.push(format!(
            "The highest score in qualification matches was an impressive {} points, put up by {}.",
            top.points,
            word_join(&top_mentions)
        ));

        let first_team = top
            .teams
            .iter()
            .copied()
            .min_by_key(|&n| {
                self.snapshot
                    .roster
                    .get(n)
                    .map(|t| t.rank)
                    .unwrap_or(UNRANKED)
            })
            .ok_or(ComposeError::NoQualificationData)?;

        let first_relevant = self
            .snapshot
            .roster
            .get(first_team)
            .and_then(|t| t.relevant_scores(&[top.points]));
        if let Some(rs) = first_relevant {
            let color = self
                .phrases
                .performance_color(&mut self.rng)
                .map(|c| format!(" {},", c))
                .unwrap_or_default();
            let mention = self.mention(first_team, false)?;
            out.push(format!(
                "{} was an incredibly strong team at this event,{} also putting up scores of {} points, {} points, and {} points.",
                mention, color, rs.highest, rs.second, rs.lowest
            ));
        }

        let second_team = self
            .snapshot
            .roster
            .iter()
            .filter(|t| t.number != first_team)
            .min_by_key(|t| t.rank)
            .map(|t| t.number);
        if let Some(second) = second_team {
            let relevant = self
                .snapshot
                .roster
                .get(second)
                .and_then(|t| t.relevant_scores(&[top.points]));
            let average = self
                .snapshot
                .roster
                .get(second)
                .and_then(|t| stats::mean_points(&t.scores));
            if let (Some(rs), Some(avg)) = (relevant, average) {
                let mention = self.mention(second, false)?;
                out.push(format!(
                    "{} also put up {} points and {} points, with an average of {} points.",
                    mention, rs.highest, rs.second, avg
                ));
            }
        }

        let mut highlighted = vec![first_team];
        highlighted.extend(second_team);
        if let Some(steady) = stats::most_consistent(&self.snapshot.roster, &highlighted) {
            let best = self
                .snapshot
                .roster
                .get(steady)
                .and_then(|t| t.scores.iter().max().copied());
            let average = self
                .snapshot
                .roster
                .get(steady)
                .and_then(|t| stats::mean_points(&t.scores));
            if let (Some(best), Some(avg)) = (best, average) {
                let mention = self.mention(steady, false)?;
                out.push(format!(
                    "An incredibly consistent team to watch out for was {}, with a high score of {} and an average of {} points, with not much difference between the two.",
                    mention, best, avg
                ));
            }
        }

        Ok(out.join(" "))
    }

    /// Elimination summary: alliance selection, both semifinals, then the
    /// final — or the rank-based fallback for remote-format events.
    fn elims_summary(&mut self) -> Result<String, ComposeError> {
        if self.snapshot.is_remote_fallback() {
            return self.remote_standings_summary();
        }

        let mut out = Vec::new();
        out.push(
            "After qualification matches wrapped up, the top ranked teams formed their alliances."
                .to_string(),
        );

        let alliances = self.snapshot.alliances.clone();
        for alliance in &alliances {
            let Some(captain) = alliance.captain() else {
                continue;
            };
            let seed_word = ordinal(alliance.seed);
            let captain_text = self.mention(captain, false)?;
            let picks = self.mention_all(alliance.picks())?;
            if picks.is_empty() {
                out.push(format!(
                    "The {} alliance was captained by {}.",
                    seed_word, captain_text
                ));
            } else {
                out.push(format!(
                    "The {} alliance was captained by {}, who picked {}.",
                    seed_word,
                    captain_text,
                    word_join(&picks)
                ));
            }
        }

        out.push(self.series_sentence(SeriesSlot::SemifinalA, "In the first semifinal")?);
        out.push(self.series_sentence(SeriesSlot::SemifinalB, "In the second semifinal")?);
        out.push(self.final_sentence()?);

        Ok(out.join(" "))
    }

    fn series_sentence(&mut self, slot: SeriesSlot, lead_in: &str) -> Result<String, ComposeError> {
        let series = self
            .snapshot
            .series_for(slot)
            .cloned()
            .ok_or(ComposeError::UndecidedSeries(slot))?;
        let (winner_side, winner_seed) = series
            .winner()
            .ok_or(ComposeError::UndecidedSeries(slot))?;
        let game = series
            .deciding_game()
            .copied()
            .ok_or(ComposeError::UndecidedSeries(slot))?;
        let (winning_score, losing_score) = match winner_side {
            Side::Red => (game.red_score, game.blue_score),
            Side::Blue => (game.blue_score, game.red_score),
        };
        Ok(format!(
            "{}, the {} alliance faced the {} alliance, and the {} alliance took the series {}, {} points to {}.",
            lead_in,
            ordinal(series.red_seed),
            ordinal(series.blue_seed),
            ordinal(winner_seed),
            set_length_text(series.rounds()),
            winning_score,
            losing_score
        ))
    }

    fn final_sentence(&mut self) -> Result<String, ComposeError> {
        let slot = SeriesSlot::Final;
        let series = self
            .snapshot
            .series_for(slot)
            .cloned()
            .ok_or(ComposeError::UndecidedSeries(slot))?;
        let (winner_side, winner_seed) = series
            .winner()
            .ok_or(ComposeError::UndecidedSeries(slot))?;
        let game = series
            .deciding_game()
            .copied()
            .ok_or(ComposeError::UndecidedSeries(slot))?;
        let (winning_score, losing_score) = match winner_side {
            Side::Red => (game.red_score, game.blue_score),
            Side::Blue => (game.blue_score, game.red_score),
        };

        let winner_members = self
            .snapshot
            .alliance_by_seed(winner_seed)
            .map(|a| a.members.clone())
            .ok_or(ComposeError::UnknownAlliance(winner_seed))?;
        let members = self.mention_all(&winner_members)?;

        Ok(format!(
            "That set up a final between the {} and {} alliances. The {} alliance of {} took the event title {}, sealing it {} points to {}.",
            ordinal(series.red_seed),
            ordinal(series.blue_seed),
            ordinal(winner_seed),
            word_join(&members),
            set_length_text(series.rounds()),
            winning_score,
            losing_score
        ))
    }

    /// Rank-based narration for remote-format events: no alliances, no
    /// bracket, so the official qualification rankings carry the story.
    fn remote_standings_summary(&mut self) -> Result<String, ComposeError> {
        debug!("remote-format event, narrating official rankings");
        let region_text = self
            .snapshot
            .event
            .region_name()
            .map(|name| format!("the {} region", name))
            .unwrap_or_else(|| "this region".to_string());

        let mut podium = self.snapshot.rankings.clone();
        podium.sort_by_key(|r| r.rank);
        podium.truncate(3);
        if podium.is_empty() {
            return Err(ComposeError::NoRankingData);
        }

        let leader = self.mention(podium[0].team, false)?;
        let mut text = format!(
            "Because {} ran this season in the remote format, no alliances were formed and no elimination matches were played. The final standings came down to the qualification rankings, and {} finished at the top of the field.",
            region_text, leader
        );
        if podium.len() > 1 {
            let runner_numbers: Vec<TeamNumber> = podium[1..].iter().map(|r| r.team).collect();
            let runners = self.mention_all(&runner_numbers)?;
            text.push_str(&format!(
                " {} rounded out the top of the leaderboard.",
                word_join(&runners)
            ));
        }
        Ok(text)
    }

    /// Awards summary: the Inspire winner and finalists, then a sign-off.
    fn awards_summary(&mut self) -> Result<String, ComposeError> {
        let mut inspire: Vec<Award> = self
            .snapshot
            .awards
            .iter()
            .filter(|a| a.is_inspire())
            .cloned()
            .collect();
        inspire.sort_by_key(|a| a.placement);

        let mut out = Vec::new();
        let winner = inspire
            .iter()
            .find(|a| a.placement == 1)
            .and_then(|a| a.team);
        if let Some(winner) = winner {
            let mention = self.mention(winner, true)?;
            out.push(format!(
                "Finally, the Inspire award, the highest honor at any event, went to {}.",
                mention
            ));
            let finalists: Vec<TeamNumber> = inspire
                .iter()
                .filter(|a| a.placement > 1)
                .filter_map(|a| a.team)
                .collect();
            if !finalists.is_empty() {
                let mentions = self.mention_all(&finalists)?;
                out.push(format!(
                    "{} were also recognized as Inspire finalists.",
                    word_join(&mentions)
                ));
            }
        }

        if let Some(quip) = self.phrases.closing_quip(&mut self.rng) {
            out.push(quip.to_string());
        }
        Ok(out.join(" "))
    }
}

/// How the deciding game gets described, from the series round count.
fn set_length_text(rounds: u32) -> &'static str {
    match rounds {
        0 | 1 => "in a single match",
        2 => "in two straight matches",
        _ => "after a tie-breaker match",
    }
}
