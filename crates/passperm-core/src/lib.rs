//! Shared types for passperm.
//!
//! - [`seed`] -- seed words, seed identities and candidate provenance
//! - [`candidate`] -- generated candidates and their tiers
//! - [`case`] -- upper/lower/title/as-given renderings
//! - [`level`] -- leetspeak intensity level

pub mod candidate;
pub mod case;
pub mod level;
pub mod seed;

pub use candidate::{Candidate, Tier};
pub use case::CaseVariant;
pub use level::IntensityLevel;
pub use seed::{Provenance, SeedId, SeedWord};

/// Error raised while handing generated lines to an output sink.
///
/// Generation itself cannot fail; only the destination can.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write candidate: {0}")]
    Io(#[from] std::io::Error),
}
