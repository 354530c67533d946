// Generator: top-level handle for a generation run.
//
// Owns the seed list, the options and the per-seed form pools, and exposes
// eager generation, lazy streaming and size estimation over them.
//
// Design notes:
// - Form pools are computed once in `new` and never mutated.
// - Tiers are rebuilt on each `generate` / `tiers` call; the handle holds
//   no tier state, so repeated calls are deterministic and independent.
// - Seed identity is the seed string: repeated strings share the id of
//   their first occurrence.

use hashbrown::HashMap;
use passperm_core::{SeedId, SeedWord, SinkError};
use tracing::{debug, info};

use crate::assemble::{CandidateSink, ResultAssembler};
use crate::combiner::{CandidateCombiner, CandidateIter, Tiers};
use crate::estimate::SizeEstimate;
use crate::forms::{FormPools, WordFormExpander};
use crate::leet::LeetspeakSubstitutor;
use crate::options::GeneratorOptions;

/// A configured generation run over a fixed list of seed words.
#[derive(Debug)]
pub struct Generator {
    seeds: Vec<SeedWord>,
    pools: FormPools,
    options: GeneratorOptions,
}

impl Generator {
    /// Assign seed identities and precompute every form pool.
    pub fn new<I, S>(words: I, options: GeneratorOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let seeds = assign_ids(words);
        let expander = WordFormExpander::new(LeetspeakSubstitutor::default(), options.level);
        let pools = FormPools::build(&seeds, &expander);
        debug!(
            seeds = seeds.len(),
            distinct = pools.len(),
            level = %options.level,
            "form pools built"
        );
        Self {
            seeds,
            pools,
            options,
        }
    }

    /// Build with default options (level 5, built-in suffix tables).
    pub fn with_defaults<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words, GeneratorOptions::default())
    }

    pub fn seeds(&self) -> &[SeedWord] {
        &self.seeds
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// First seed entry with the given identity.
    pub fn seed(&self, id: SeedId) -> Option<&SeedWord> {
        self.seeds.iter().find(|s| s.id == id)
    }

    /// Form pool of a seed identity.
    pub fn forms(&self, id: SeedId) -> &[String] {
        self.pools.get(id)
    }

    fn combiner(&self) -> CandidateCombiner<'_> {
        CandidateCombiner::new(&self.seeds, &self.pools, &self.options)
    }

    /// Materialize all three tiers.
    pub fn tiers(&self) -> Tiers {
        self.combiner().build()
    }

    /// The full output sequence: one-word, then two-word, then three-word
    /// candidate texts.
    pub fn generate(&self) -> Vec<String> {
        let result = ResultAssembler::assemble(&self.tiers());
        info!(lines = result.len(), "generation complete");
        result
    }

    /// Build the tiers, then hand every candidate to `sink` in order.
    pub fn write_to<S>(&self, sink: &mut S) -> Result<usize, SinkError>
    where
        S: CandidateSink + ?Sized,
    {
        let tiers = self.tiers();
        let written = ResultAssembler::drain(tiers.iter(), sink)?;
        info!(lines = written, "generation complete");
        Ok(written)
    }

    /// Lazily yield candidates in the same order as [`Generator::generate`].
    pub fn stream(&self) -> CandidateIter<'_> {
        self.combiner().stream()
    }

    /// Stream candidates straight into `sink` without materializing tiers.
    pub fn write_streaming<S>(&self, sink: &mut S) -> Result<usize, SinkError>
    where
        S: CandidateSink + ?Sized,
    {
        let written = ResultAssembler::drain_owned(self.stream(), sink)?;
        info!(lines = written, "streamed generation complete");
        Ok(written)
    }

    /// Tier sizes this run will produce.
    pub fn estimate(&self) -> SizeEstimate {
        SizeEstimate::compute(&self.seeds, &self.pools, &self.options)
    }
}

/// Give each seed string the index of its first occurrence as identity.
fn assign_ids<I, S>(words: I) -> Vec<SeedWord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut first_seen: HashMap<String, SeedId> = HashMap::new();
    words
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let text: String = word.into();
            let id = *first_seen
                .entry(text.clone())
                .or_insert(SeedId(i as u32));
            SeedWord::new(id, text)
        })
        .collect()
}
