//! Derived statistics: score attribution, the top-scoring side,
//! approximate rankings, and the consistency metric.
//!
//! Everything here runs once, between snapshot construction and
//! narration. Nothing reads the mention counters the composer mutates.

use crate::api::models::QualMatch;
use crate::core::snapshot::SnapshotError;
use crate::schema::team::{TeamNumber, TeamRoster};

/// The single highest-scoring alliance side seen across qualification
/// matches: the score and the teams on that side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopScore {
    pub points: i32,
    pub teams: Vec<TeamNumber>,
}

/// Attribute every qualification match's red/blue final score to the
/// non-surrogate, non-no-show teams on that side, and track the top side.
///
/// The comparison is strict — the first side to post the maximum keeps
/// it; an equal score seen later does not replace it. A participant
/// missing from the roster is a fatal lookup error.
pub fn aggregate_scores(
    roster: &mut TeamRoster,
    quals: &[QualMatch],
) -> Result<Option<TopScore>, SnapshotError> {
    let mut top: Option<TopScore> = None;

    for qual in quals {
        let mut red_side = Vec::new();
        let mut blue_side = Vec::new();

        for assignment in &qual.teams {
            let number = TeamNumber(assignment.team_number);
            let score;
            if assignment.is_red() {
                score = qual.score_red_final;
                red_side.push(number);
            } else {
                score = qual.score_blue_final;
                blue_side.push(number);
            }

            if assignment.surrogate || assignment.no_show {
                // Surrogate and no-show slots don't count toward the
                // team's own score list.
                continue;
            }
            let team = roster
                .get_mut(number)
                .ok_or(SnapshotError::UnknownTeam(number))?;
            team.scores.push(score);
        }

        for (points, teams) in [
            (qual.score_red_final, red_side),
            (qual.score_blue_final, blue_side),
        ] {
            let beats = top.as_ref().map(|t| points > t.points).unwrap_or(true);
            if beats {
                top = Some(TopScore { points, teams });
            }
        }
    }

    Ok(top)
}

/// Rank every team 1..N by summed qualification score, descending.
///
/// This is an approximation of the official algorithm. The sort is
/// stable, so ties keep the roster's insertion order.
pub fn assign_rankings(roster: &mut TeamRoster) {
    let mut order: Vec<(TeamNumber, i64)> = roster
        .iter()
        .map(|t| (t.number, t.total_score()))
        .collect();
    order.sort_by_key(|&(_, total)| std::cmp::Reverse(total));
    for (position, (number, _)) in order.into_iter().enumerate() {
        if let Some(team) = roster.get_mut(number) {
            team.rank = position as u32 + 1;
        }
    }
}

/// The non-excluded team with the lowest sample standard deviation of
/// scores. Teams with fewer than two scores can't have one and are
/// skipped; ties keep the first team in roster order.
pub fn most_consistent(roster: &TeamRoster, exclude: &[TeamNumber]) -> Option<TeamNumber> {
    let mut best: Option<(TeamNumber, f64)> = None;
    for team in roster.iter() {
        if exclude.contains(&team.number) {
            continue;
        }
        let Some(sd) = stdev(&team.scores) else {
            continue;
        };
        let better = best.as_ref().map(|&(_, b)| sd < b).unwrap_or(true);
        if better {
            best = Some((team.number, sd));
        }
    }
    best.map(|(number, _)| number)
}

/// Sample standard deviation; `None` below two samples.
pub fn stdev(scores: &[i32]) -> Option<f64> {
    let n = scores.len();
    if n < 2 {
        return None;
    }
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / n as f64;
    let variance = scores
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Average score rounded to the nearest whole point — fractional point
/// values read badly through a TTS engine.
pub fn mean_points(scores: &[i32]) -> Option<i64> {
    if scores.is_empty() {
        return None;
    }
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64;
    Some(mean.round() as i64)
}
