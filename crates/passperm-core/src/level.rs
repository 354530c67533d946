// Leetspeak intensity level

use serde::{Deserialize, Serialize};

/// How many leetspeak substitution rules a word form may have applied.
///
/// Negative raw values are normalized to 0, which disables substitution
/// entirely in form expansion. The value 5 is the historical "apply
/// everything" setting and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct IntensityLevel(u32);

impl IntensityLevel {
    /// The "no early stop" level.
    pub const UNBOUNDED: IntensityLevel = IntensityLevel(5);

    /// Level 0: case variants only.
    pub const NONE: IntensityLevel = IntensityLevel(0);

    /// Create a level from a non-negative value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a level from an untrusted signed value, clamping negatives to 0.
    pub fn from_raw(raw: i64) -> Self {
        Self(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Number of rules considered before substitution stops, or `None`
    /// when every rule is applied.
    pub fn rule_limit(self) -> Option<usize> {
        if self == Self::UNBOUNDED {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    /// Iterate the levels `1..=self` used during form expansion.
    pub fn steps(self) -> impl Iterator<Item = IntensityLevel> {
        (1..=self.0).map(IntensityLevel)
    }
}

impl Default for IntensityLevel {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl From<i64> for IntensityLevel {
    fn from(raw: i64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<IntensityLevel> for i64 {
    fn from(level: IntensityLevel) -> Self {
        i64::from(level.0)
    }
}

impl std::fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
