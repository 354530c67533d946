// Lazy candidate production
//
// Yields exactly the sequence `CandidateCombiner::build` would produce,
// tier by tier, without holding any tier in memory. The two- and
// three-word tiers re-derive their base tier once per seed instead of
// storing it, trading repeated work for flat memory use.

use std::rc::Rc;

use passperm_core::{Candidate, SeedId, Tier};

use super::{CandidateCombiner, extend_provenance};

/// A boxed stream of candidates borrowing from the generator.
pub type CandidateIter<'a> = Box<dyn Iterator<Item = Candidate> + 'a>;

/// Factory for a fresh pass over a base tier.
type BaseTier<'a> = Rc<dyn Fn() -> CandidateIter<'a> + 'a>;

impl<'a> CandidateCombiner<'a> {
    /// Stream every candidate of every tier in eager order.
    pub fn stream(self) -> CandidateIter<'a> {
        let one_word: BaseTier<'a> = Rc::new(move || self.one_word_iter());
        let two_word: BaseTier<'a> = {
            let one_word = Rc::clone(&one_word);
            Rc::new(move || self.extend_iter(Rc::clone(&one_word), Tier::Two))
        };
        let three_word = self.extend_iter(Rc::clone(&two_word), Tier::Three);
        Box::new((*one_word)().chain((*two_word)()).chain(three_word))
    }

    /// Lazy counterpart of [`CandidateCombiner::one_word`].
    pub fn one_word_iter(self) -> CandidateIter<'a> {
        let options = self.options();
        let suffixes: &'a [String] = &options.suffixes;
        let symbols: &'a [String] = &options.symbols;

        let plain = self
            .forms_iter()
            .map(|(id, form)| Candidate::single(form, id));
        let numeric = self.forms_iter().flat_map(move |(id, form)| {
            suffixes
                .iter()
                .map(move |suffix| Candidate::single(format!("{form}{suffix}"), id))
        });
        let symbolic = self.forms_iter().flat_map(move |(id, form)| {
            symbols
                .iter()
                .map(move |symbol| Candidate::single(format!("{form}{symbol}"), id))
        });
        let both = self.forms_iter().flat_map(move |(id, form)| {
            suffixes.iter().flat_map(move |suffix| {
                symbols
                    .iter()
                    .map(move |symbol| Candidate::single(format!("{form}{suffix}{symbol}"), id))
            })
        });

        Box::new(plain.chain(numeric).chain(symbolic).chain(both))
    }

    /// Every (seed, form) pair, seeds outer.
    fn forms_iter(self) -> impl Iterator<Item = (SeedId, &'a str)> + 'a {
        let pools = self.pools();
        self.seeds().iter().flat_map(move |seed| {
            pools
                .get(seed.id)
                .iter()
                .map(move |form| (seed.id, form.as_str()))
        })
    }

    /// Lazy counterpart of the tier extension used by the eager path.
    fn extend_iter(self, base: BaseTier<'a>, tier: Tier) -> CandidateIter<'a> {
        let carried = tier.word_count() - 1;
        let pools = self.pools();
        let connectors: &'a [String] = &self.options().connectors;

        let joined = {
            let base = Rc::clone(&base);
            self.seeds().iter().flat_map(move |seed| {
                let forms = pools.get(seed.id);
                (*base)()
                    .filter_map(move |c| extend_provenance(&c, seed.id, carried).map(|p| (c, p)))
                    .flat_map(move |(c, provenance)| {
                        forms.iter().map(move |form| {
                            Candidate::new(format!("{form}{}", c.text), provenance)
                        })
                    })
            })
        };

        if connectors.is_empty() {
            return Box::new(joined);
        }

        let connected = self.seeds().iter().flat_map(move |seed| {
            let forms = pools.get(seed.id);
            (*base)()
                .filter_map(move |c| extend_provenance(&c, seed.id, carried).map(|p| (c, p)))
                .flat_map(move |(c, provenance)| {
                    let text: Rc<str> = Rc::from(c.text);
                    forms.iter().flat_map(move |form| {
                        let text = Rc::clone(&text);
                        connectors.iter().map(move |connector| {
                            Candidate::new(format!("{form}{connector}{text}"), provenance)
                        })
                    })
                })
        });

        Box::new(joined.chain(connected))
    }
}

#[cfg(test)]
mod tests {
    use passperm_core::{IntensityLevel, SeedWord};

    use crate::forms::{FormPools, WordFormExpander};
    use crate::leet::LeetspeakSubstitutor;
    use crate::options::GeneratorOptions;

    use super::*;

    fn assert_stream_matches(words: &[&str], options: GeneratorOptions) {
        let seeds: Vec<SeedWord> = words
            .iter()
            .enumerate()
            .map(|(i, w)| SeedWord::new(SeedId(i as u32), *w))
            .collect();
        let expander = WordFormExpander::new(LeetspeakSubstitutor::default(), options.level);
        let pools = FormPools::build(&seeds, &expander);
        let combiner = CandidateCombiner::new(&seeds, &pools, &options);

        let eager: Vec<Candidate> = combiner.build().iter().cloned().collect();
        let lazy: Vec<Candidate> = combiner.stream().collect();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn stream_matches_build() {
        let options = GeneratorOptions::default().with_level(IntensityLevel::new(1));
        assert_stream_matches(&["cat", "dog"], options.clone());
        assert_stream_matches(&["ab", "c:d", "e"], options.with_level(IntensityLevel::NONE));
    }

    #[test]
    fn stream_matches_build_with_connectors() {
        let options = GeneratorOptions::default()
            .with_level(IntensityLevel::NONE)
            .with_suffixes(["1"])
            .with_connectors(["_", "-"]);
        assert_stream_matches(&["x", "y", "z"], options);
    }

    #[test]
    fn stream_of_nothing() {
        assert_stream_matches(&[], GeneratorOptions::default());
    }

    #[test]
    fn one_word_iter_matches_one_word() {
        let seeds = vec![SeedWord::new(SeedId(0), "test")];
        let options = GeneratorOptions::default().with_level(IntensityLevel::new(3));
        let expander = WordFormExpander::new(LeetspeakSubstitutor::default(), options.level);
        let pools = FormPools::build(&seeds, &expander);
        let combiner = CandidateCombiner::new(&seeds, &pools, &options);
        assert_eq!(combiner.one_word_iter().collect::<Vec<_>>(), combiner.one_word());
    }
}
