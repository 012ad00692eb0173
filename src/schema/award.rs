use crate::schema::team::TeamNumber;

/// One award line from the event feed: the award name, the placement
/// within it (1 = winner, 2+ = finalists), and the recognized team.
#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub name: String,
    pub placement: u32,
    pub team: Option<TeamNumber>,
}

impl Award {
    /// Whether this is the Inspire award, the top overall recognition.
    pub fn is_inspire(&self) -> bool {
        self.name.to_lowercase().contains("inspire")
    }
}
