use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::phrasing::spoken_number;

/// Rank sentinel for a team before standings have been computed.
pub const UNRANKED: u32 = u32::MAX;

/// Newtype wrapper for team numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamNumber(pub u32);

impl std::fmt::Display for TeamNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three scores the narrator cares about for one team: the two highest
/// and the single lowest remaining after exclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevantScores {
    pub highest: i32,
    pub second: i32,
    pub lowest: i32,
}

/// One team at one event: identity plus the per-event state the statistics
/// engine and the narrator accumulate over a single script run.
///
/// `scores` is kept in match order. `mentioned` is bumped only by
/// [`EventTeam::mention`]; `rank` stays [`UNRANKED`] until standings are
/// assigned.
#[derive(Debug, Clone)]
pub struct EventTeam {
    pub number: TeamNumber,
    pub nick: String,
    pub rookie_year: u16,
    pub scores: Vec<i32>,
    pub mentioned: u32,
    pub rank: u32,
}

impl PartialEq for EventTeam {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for EventTeam {}

impl std::hash::Hash for EventTeam {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl EventTeam {
    pub fn new(number: TeamNumber, nick: impl Into<String>, rookie_year: u16) -> Self {
        Self {
            number,
            nick: nick.into(),
            rookie_year,
            scores: Vec::new(),
            mentioned: 0,
            rank: UNRANKED,
        }
    }

    /// Spoken reference to this team, bumping the mention counter.
    ///
    /// The second mention in a script drops to the nickname alone; every
    /// other mention reads the team number out for the TTS, then the
    /// nickname. `full` forces the long form regardless of the counter.
    pub fn mention(&mut self, rng: &mut StdRng, full: bool) -> String {
        self.mentioned += 1;
        if self.mentioned == 2 && !full {
            self.nick.clone()
        } else {
            format!("{} {}", spoken_number(self.number.0, rng), self.nick)
        }
    }

    /// Sum of all recorded qualification scores.
    pub fn total_score(&self) -> i64 {
        self.scores.iter().map(|&s| s as i64).sum()
    }

    /// The two highest scores and the lowest score, after dropping every
    /// occurrence of the values in `exclude`.
    ///
    /// Returns `None` when fewer than two scores survive the exclusion —
    /// there is no second-highest to report for such a team.
    pub fn relevant_scores(&self, exclude: &[i32]) -> Option<RelevantScores> {
        let mut kept: Vec<i32> = self
            .scores
            .iter()
            .copied()
            .filter(|s| !exclude.contains(s))
            .collect();
        if kept.len() < 2 {
            return None;
        }
        kept.sort_unstable_by(|a, b| b.cmp(a));
        Some(RelevantScores {
            highest: kept[0],
            second: kept[1],
            lowest: kept[kept.len() - 1],
        })
    }
}

/// One row of the official event rankings, fetched separately from the
/// approximate standings the statistics engine computes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTeam {
    pub rank: u32,
    pub team: TeamNumber,
    pub sort_metric: f64,
}

/// Owning registry of every team at the event.
///
/// Insertion order is preserved — it is the iteration order of the merged
/// page listing, and the stable tie-break order for approximate rankings.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    teams: Vec<EventTeam>,
    index: FxHashMap<TeamNumber, usize>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a team, replacing any previous entry with the same number.
    pub fn insert(&mut self, team: EventTeam) {
        match self.index.get(&team.number) {
            Some(&i) => self.teams[i] = team,
            None => {
                self.index.insert(team.number, self.teams.len());
                self.teams.push(team);
            }
        }
    }

    pub fn get(&self, number: TeamNumber) -> Option<&EventTeam> {
        self.index.get(&number).map(|&i| &self.teams[i])
    }

    pub fn get_mut(&mut self, number: TeamNumber) -> Option<&mut EventTeam> {
        let i = *self.index.get(&number)?;
        Some(&mut self.teams[i])
    }

    pub fn contains(&self, number: TeamNumber) -> bool {
        self.index.contains_key(&number)
    }

    /// Teams in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EventTeam> {
        self.teams.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EventTeam> {
        self.teams.iter_mut()
    }

    /// Team numbers in insertion order.
    pub fn numbers(&self) -> impl Iterator<Item = TeamNumber> + '_ {
        self.teams.iter().map(|t| t.number)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn make_team(number: u32, scores: &[i32]) -> EventTeam {
        let mut team = EventTeam::new(TeamNumber(number), format!("Team {number}"), 2019);
        team.scores = scores.to_vec();
        team
    }

    #[test]
    fn equality_by_number_only() {
        let a = make_team(7, &[10, 20]);
        let mut b = make_team(7, &[99]);
        b.nick = "Other Name".to_string();
        assert_eq!(a, b);
        assert_ne!(a, make_team(8, &[10, 20]));
    }

    #[test]
    fn relevant_scores_sorted_descending() {
        let team = make_team(1, &[40, 90, 55, 70]);
        let rs = team.relevant_scores(&[]).unwrap();
        assert_eq!(rs.highest, 90);
        assert_eq!(rs.second, 70);
        assert_eq!(rs.lowest, 40);
        assert!(rs.highest >= rs.second && rs.second >= rs.lowest);
    }

    #[test]
    fn relevant_scores_excludes_all_occurrences() {
        let team = make_team(1, &[80, 80, 60, 50]);
        let rs = team.relevant_scores(&[80]).unwrap();
        assert_eq!(rs.highest, 60);
        assert_eq!(rs.second, 50);
        assert_eq!(rs.lowest, 50);
    }

    #[test]
    fn relevant_scores_values_come_from_recorded_scores() {
        let team = make_team(1, &[31, 62, 17, 62]);
        let rs = team.relevant_scores(&[17]).unwrap();
        for v in [rs.highest, rs.second, rs.lowest] {
            assert!(team.scores.contains(&v));
            assert_ne!(v, 17);
        }
    }

    #[test]
    fn relevant_scores_guards_short_lists() {
        assert!(make_team(1, &[]).relevant_scores(&[]).is_none());
        assert!(make_team(1, &[50]).relevant_scores(&[]).is_none());
        // Two scores, one excluded — only one survivor.
        assert!(make_team(1, &[50, 80]).relevant_scores(&[80]).is_none());
    }

    #[test]
    fn mention_short_form_on_exactly_second_call() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut team = make_team(12345, &[]);
        team.nick = "RoboLobsters".to_string();

        let first = team.mention(&mut rng, false);
        let second = team.mention(&mut rng, false);
        let third = team.mention(&mut rng, false);
        let fourth = team.mention(&mut rng, false);

        assert!(first.ends_with("RoboLobsters") && first.len() > "RoboLobsters".len());
        assert_eq!(second, "RoboLobsters");
        for later in [&third, &fourth] {
            assert!(later.ends_with("RoboLobsters") && later.len() > "RoboLobsters".len());
        }
    }

    #[test]
    fn mention_full_overrides_counter() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut team = make_team(9, &[]);
        team.nick = "Gears".to_string();

        team.mention(&mut rng, false);
        let second = team.mention(&mut rng, true);
        assert_ne!(second, "Gears");
        assert!(second.ends_with("Gears"));
    }

    #[test]
    fn roster_preserves_insertion_order() {
        let mut roster = TeamRoster::new();
        for n in [30, 10, 20] {
            roster.insert(make_team(n, &[]));
        }
        let order: Vec<u32> = roster.numbers().map(|n| n.0).collect();
        assert_eq!(order, vec![30, 10, 20]);
    }

    #[test]
    fn roster_replaces_duplicates_in_place() {
        let mut roster = TeamRoster::new();
        roster.insert(make_team(5, &[1]));
        roster.insert(make_team(6, &[2]));
        roster.insert(make_team(5, &[3]));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(TeamNumber(5)).unwrap().scores, vec![3]);
        let order: Vec<u32> = roster.numbers().map(|n| n.0).collect();
        assert_eq!(order, vec![5, 6]);
    }
}
