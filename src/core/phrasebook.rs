//! Phrase pools for the narrator's color commentary.
//!
//! Each pool is drawn from uniformly and independently — a phrase used
//! once stays in the pool for the rest of the script. Pools ship with
//! compiled-in defaults and can be extended from RON files.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhraseBookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// The narrator's phrase pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseBook {
    /// Scene-setting quips opening the qualification summary.
    #[serde(default)]
    pub opening_quips: Vec<String>,
    /// Color commentary on a strong robot's performance.
    #[serde(default)]
    pub performance_colors: Vec<String>,
    /// Sign-off quips closing the awards summary.
    #[serde(default)]
    pub closing_quips: Vec<String>,
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            opening_quips: vec![
                "This event sure was competitive yet diverse, with both veteran teams and new teams."
                    .to_string(),
                "Qualification matches gave us a little bit of everything, from runaway wins to real nail-biters."
                    .to_string(),
                "The qualification rounds set a quick pace right from the first match."
                    .to_string(),
            ],
            performance_colors: vec![
                "with a robot that looked dialed in all day".to_string(),
                "driving with remarkable confidence".to_string(),
                "stacking up points almost every time they hit the field".to_string(),
            ],
            closing_quips: vec![
                "We are excited to see how all of these teams do later in the season."
                    .to_string(),
                "Keep an eye on these teams as the season rolls on. Thanks for watching!"
                    .to_string(),
                "That wraps it up for this event. We cannot wait for the next one!"
                    .to_string(),
            ],
        }
    }
}

impl PhraseBook {
    /// A book with empty pools, for tests and overrides.
    pub fn empty() -> Self {
        Self {
            opening_quips: Vec::new(),
            performance_colors: Vec::new(),
            closing_quips: Vec::new(),
        }
    }

    /// Load a phrase book from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<PhraseBook, PhraseBookError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a phrase book from a RON string.
    pub fn parse_ron(input: &str) -> Result<PhraseBook, PhraseBookError> {
        Ok(ron::from_str(input)?)
    }

    /// Merge another book into this one. Pools concatenate, so loaded
    /// phrases extend the defaults rather than replacing them.
    pub fn merge(&mut self, other: PhraseBook) {
        self.opening_quips.extend(other.opening_quips);
        self.performance_colors.extend(other.performance_colors);
        self.closing_quips.extend(other.closing_quips);
    }

    pub fn opening_quip(&self, rng: &mut StdRng) -> Option<&str> {
        self.opening_quips.choose(rng).map(String::as_str)
    }

    pub fn performance_color(&self, rng: &mut StdRng) -> Option<&str> {
        self.performance_colors.choose(rng).map(String::as_str)
    }

    pub fn closing_quip(&self, rng: &mut StdRng) -> Option<&str> {
        self.closing_quips.choose(rng).map(String::as_str)
    }
}
