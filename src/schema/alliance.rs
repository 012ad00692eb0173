use crate::schema::team::TeamNumber;

/// An elimination alliance: the captain plus up to three picks, in
/// selection order, with the scores it posted in elimination play.
#[derive(Debug, Clone, PartialEq)]
pub struct Alliance {
    /// Selection order — seed 1 picked first.
    pub seed: u32,
    /// Captain first, then picks in order. Unfilled slots are skipped, so
    /// the length is 1 to 4.
    pub members: Vec<TeamNumber>,
    /// Scores accumulated as elimination matches resolve, in match order.
    pub elim_scores: Vec<i32>,
}

impl Alliance {
    pub fn new(seed: u32, members: Vec<TeamNumber>) -> Self {
        Self {
            seed,
            members,
            elim_scores: Vec::new(),
        }
    }

    pub fn captain(&self) -> Option<TeamNumber> {
        self.members.first().copied()
    }

    /// Members other than the captain, in selection order.
    pub fn picks(&self) -> &[TeamNumber] {
        if self.members.is_empty() {
            &[]
        } else {
            &self.members[1..]
        }
    }
}
