// Tiered candidate combination
//
// The one-word tier crosses every form with the suffix and symbol tables.
// The two-word tier prepends a form of another seed to every one-word
// candidate, and the three-word tier does the same to every two-word
// candidate. A seed never appears twice in one candidate's provenance.
//
// Design notes:
// - `build` materializes all three tiers; `stream` (see `stream.rs`)
//   yields the same candidates in the same order without storing tiers.
// - Both paths share `extend_provenance` so the reuse rule is defined once.

pub mod stream;

use passperm_core::{Candidate, Provenance, SeedId, SeedWord, Tier};
use tracing::debug;

use crate::forms::FormPools;
use crate::options::GeneratorOptions;

pub use stream::CandidateIter;

/// The three candidate tiers of a generation run, in dependency order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tiers {
    pub one_word: Vec<Candidate>,
    pub two_word: Vec<Candidate>,
    pub three_word: Vec<Candidate>,
}

impl Tiers {
    pub fn get(&self, tier: Tier) -> &[Candidate] {
        match tier {
            Tier::One => &self.one_word,
            Tier::Two => &self.two_word,
            Tier::Three => &self.three_word,
        }
    }

    /// Total number of candidates across tiers.
    pub fn len(&self) -> usize {
        self.one_word.len() + self.two_word.len() + self.three_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All candidates, tier one first.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.one_word
            .iter()
            .chain(&self.two_word)
            .chain(&self.three_word)
    }
}

/// Builds candidate tiers from seeds, their form pools and the suffix,
/// symbol and connector tables.
#[derive(Debug, Clone, Copy)]
pub struct CandidateCombiner<'a> {
    seeds: &'a [SeedWord],
    pools: &'a FormPools,
    options: &'a GeneratorOptions,
}

impl<'a> CandidateCombiner<'a> {
    pub fn new(seeds: &'a [SeedWord], pools: &'a FormPools, options: &'a GeneratorOptions) -> Self {
        Self {
            seeds,
            pools,
            options,
        }
    }

    /// Build every tier, each exactly once, in order.
    pub fn build(&self) -> Tiers {
        let one_word = self.one_word();
        let two_word = self.two_word(&one_word);
        let three_word = self.three_word(&two_word);
        debug!(
            one_word = one_word.len(),
            two_word = two_word.len(),
            three_word = three_word.len(),
            "candidate tiers built"
        );
        Tiers {
            one_word,
            two_word,
            three_word,
        }
    }

    /// Plain forms, then numeric-suffixed, then symbol-suffixed, then
    /// numeric-and-symbol-suffixed. Each group runs seeds outer, forms
    /// inner.
    pub fn one_word(&self) -> Vec<Candidate> {
        let suffixes = &self.options.suffixes;
        let symbols = &self.options.symbols;

        let mut plain = Vec::new();
        let mut numeric = Vec::new();
        let mut symbolic = Vec::new();
        let mut both = Vec::new();

        for seed in self.seeds {
            for form in self.pools.get(seed.id) {
                plain.push(Candidate::single(form.as_str(), seed.id));
                for suffix in suffixes {
                    numeric.push(Candidate::single(format!("{form}{suffix}"), seed.id));
                }
                for symbol in symbols {
                    symbolic.push(Candidate::single(format!("{form}{symbol}"), seed.id));
                }
                for suffix in suffixes {
                    for symbol in symbols {
                        both.push(Candidate::single(
                            format!("{form}{suffix}{symbol}"),
                            seed.id,
                        ));
                    }
                }
            }
        }

        plain.extend(numeric);
        plain.extend(symbolic);
        plain.extend(both);
        plain
    }

    pub fn two_word(&self, one_word: &[Candidate]) -> Vec<Candidate> {
        self.extend_tier(one_word, Tier::Two)
    }

    pub fn three_word(&self, two_word: &[Candidate]) -> Vec<Candidate> {
        self.extend_tier(two_word, Tier::Three)
    }

    /// Prepend a form of each seed to each eligible base candidate.
    ///
    /// The directly joined group is emitted in full before the connector
    /// group.
    fn extend_tier(&self, base: &[Candidate], tier: Tier) -> Vec<Candidate> {
        let carried = tier.word_count() - 1;
        let connectors = &self.options.connectors;

        let mut joined = Vec::new();
        let mut connected = Vec::new();

        for seed in self.seeds {
            let forms = self.pools.get(seed.id);
            for candidate in base {
                let Some(provenance) = extend_provenance(candidate, seed.id, carried) else {
                    continue;
                };
                for form in forms {
                    joined.push(Candidate::new(
                        format!("{form}{}", candidate.text),
                        provenance,
                    ));
                    for connector in connectors {
                        connected.push(Candidate::new(
                            format!("{form}{connector}{}", candidate.text),
                            provenance,
                        ));
                    }
                }
            }
        }

        joined.extend(connected);
        joined
    }

    pub(crate) fn seeds(&self) -> &'a [SeedWord] {
        self.seeds
    }

    pub(crate) fn pools(&self) -> &'a FormPools {
        self.pools
    }

    pub(crate) fn options(&self) -> &'a GeneratorOptions {
        self.options
    }
}

/// Provenance of `seed` joined in front of `base`, keeping the first
/// `carried` entries of the base.
///
/// Returns `None` when the seed already contributed to `base`, or when
/// `base` carries fewer than `carried` entries.
pub(crate) fn extend_provenance(
    base: &Candidate,
    seed: SeedId,
    carried: usize,
) -> Option<Provenance> {
    if base.provenance.contains(seed) || base.provenance.len() < carried {
        return None;
    }
    base.provenance.prefix(carried).with_front(seed)
}
