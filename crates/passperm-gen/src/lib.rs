//! Password candidate generation.
//!
//! Seed words are expanded into case and leetspeak forms, then combined
//! into one-, two- and three-word candidates with numeric and symbol
//! suffixes.
//!
//! # Architecture
//!
//! - [`leet`] -- ordered, level-bounded character substitution
//! - [`forms`] -- per-seed form pools (case variants × leetspeak levels)
//! - [`combiner`] -- the three candidate tiers, eager and lazy
//! - [`assemble`] -- tier concatenation and output sinks
//! - [`estimate`] -- tier sizes computed without generating
//! - [`options`] -- suffix, symbol and connector tables, intensity level
//! - [`generator`] -- the handle tying it all together
//!
//! ```
//! use passperm_gen::{Generator, GeneratorOptions};
//! use passperm_core::IntensityLevel;
//!
//! let options = GeneratorOptions::default().with_level(IntensityLevel::new(3));
//! let generator = Generator::new(["test"], options);
//! let words = generator.generate();
//! assert!(words.iter().any(|w| w == "te$t1*"));
//! ```

pub mod assemble;
pub mod combiner;
pub mod estimate;
pub mod forms;
pub mod generator;
pub mod leet;
pub mod options;

pub use assemble::{CandidateSink, LineWriter, ResultAssembler};
pub use combiner::{CandidateCombiner, CandidateIter, Tiers};
pub use estimate::SizeEstimate;
pub use forms::{FormPools, WordFormExpander};
pub use generator::Generator;
pub use leet::{DEFAULT_RULES, LeetspeakSubstitutor, SubstitutionRule};
pub use options::GeneratorOptions;
