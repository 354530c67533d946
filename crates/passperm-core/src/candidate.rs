// Password candidate type

use crate::seed::{Provenance, SeedId};

/// Number of seed words combined into a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];

    /// How many provenance entries a candidate of this tier carries.
    pub fn word_count(self) -> usize {
        match self {
            Tier::One => 1,
            Tier::Two => 2,
            Tier::Three => 3,
        }
    }
}

/// A generated password string together with the seed words it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub provenance: Provenance,
}

impl Candidate {
    pub fn new(text: impl Into<String>, provenance: Provenance) -> Self {
        Self {
            text: text.into(),
            provenance,
        }
    }

    /// A one-word candidate for the given seed.
    pub fn single(text: impl Into<String>, seed: SeedId) -> Self {
        Self::new(text, Provenance::single(seed))
    }

    /// The tier this candidate belongs to, judged by its provenance.
    pub fn tier(&self) -> Option<Tier> {
        match self.provenance.len() {
            1 => Some(Tier::One),
            2 => Some(Tier::Two),
            3 => Some(Tier::Three),
            _ => None,
        }
    }
}
