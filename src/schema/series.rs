//! Elimination bracket slots: two semifinals feeding one final, each
//! played as a best-of series between a red and a blue alliance.

/// Which bracket slot a series occupies. The series identifiers in the
/// playoff match feed are 0 = final, 1 = semifinal A, 2 = semifinal B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesSlot {
    Final,
    SemifinalA,
    SemifinalB,
}

impl SeriesSlot {
    /// The series identifier used by the playoff match feed.
    pub fn series_id(&self) -> u32 {
        match self {
            Self::Final => 0,
            Self::SemifinalA => 1,
            Self::SemifinalB => 2,
        }
    }

    pub fn from_series_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Final),
            1 => Some(Self::SemifinalA),
            2 => Some(Self::SemifinalB),
            _ => None,
        }
    }
}

/// One side of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Red,
    Blue,
}

/// One played match within a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesGame {
    /// 1-indexed match number within the series.
    pub match_number: u32,
    pub red_score: i32,
    pub blue_score: i32,
}

/// One best-of tie between two alliances, identified by their seeds.
///
/// The winner is whichever side scored higher in the deciding game — the
/// game with the highest match number reported. The round count assumes
/// 1-indexed, gapless match numbering.
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationSeries {
    pub slot: SeriesSlot,
    pub red_seed: u32,
    pub blue_seed: u32,
    pub games: Vec<SeriesGame>,
}

impl EliminationSeries {
    pub fn new(slot: SeriesSlot, red_seed: u32, blue_seed: u32) -> Self {
        Self {
            slot,
            red_seed,
            blue_seed,
            games: Vec::new(),
        }
    }

    pub fn record_game(&mut self, game: SeriesGame) {
        self.games.push(game);
    }

    /// The game with the highest match number seen so far.
    pub fn deciding_game(&self) -> Option<&SeriesGame> {
        self.games.iter().max_by_key(|g| g.match_number)
    }

    /// Winning side and its alliance seed, from the deciding game only.
    pub fn winner(&self) -> Option<(Side, u32)> {
        let game = self.deciding_game()?;
        if game.red_score >= game.blue_score {
            Some((Side::Red, self.red_seed))
        } else {
            Some((Side::Blue, self.blue_seed))
        }
    }

    /// How many matches were played, read off the deciding game's number.
    pub fn rounds(&self) -> u32 {
        self.deciding_game().map(|g| g.match_number).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_comes_from_deciding_game_only() {
        let mut series = EliminationSeries::new(SeriesSlot::SemifinalA, 1, 4);
        series.record_game(SeriesGame {
            match_number: 1,
            red_score: 50,
            blue_score: 40,
        });
        series.record_game(SeriesGame {
            match_number: 2,
            red_score: 30,
            blue_score: 60,
        });
        assert_eq!(series.winner(), Some((Side::Blue, 4)));
        assert_eq!(series.rounds(), 2);
    }

    #[test]
    fn deciding_game_by_match_number_not_insertion_order() {
        let mut series = EliminationSeries::new(SeriesSlot::Final, 1, 2);
        series.record_game(SeriesGame {
            match_number: 2,
            red_score: 10,
            blue_score: 80,
        });
        series.record_game(SeriesGame {
            match_number: 1,
            red_score: 90,
            blue_score: 0,
        });
        assert_eq!(series.deciding_game().unwrap().match_number, 2);
        assert_eq!(series.winner(), Some((Side::Blue, 2)));
    }

    #[test]
    fn empty_series_has_no_winner() {
        let series = EliminationSeries::new(SeriesSlot::SemifinalB, 2, 3);
        assert_eq!(series.winner(), None);
        assert_eq!(series.rounds(), 0);
    }

    #[test]
    fn slot_ids_round_trip() {
        for slot in [SeriesSlot::Final, SeriesSlot::SemifinalA, SeriesSlot::SemifinalB] {
            assert_eq!(SeriesSlot::from_series_id(slot.series_id()), Some(slot));
        }
        assert_eq!(SeriesSlot::from_series_id(7), None);
    }
}
