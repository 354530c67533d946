// Word form expansion: case variants crossed with leetspeak levels

use hashbrown::{HashMap, HashSet};
use passperm_core::{CaseVariant, IntensityLevel, SeedId, SeedWord};

use crate::leet::LeetspeakSubstitutor;

/// Produces the ordered, duplicate-free surface forms of a seed word.
///
/// For each sub-token of the seed the four base case variants come first,
/// followed by the four variants substituted at level 1, then at level 2,
/// and so on up to the configured level. Sub-token lists are concatenated
/// and deduplicated globally, keeping the first occurrence.
#[derive(Debug, Clone, Copy)]
pub struct WordFormExpander {
    substitutor: LeetspeakSubstitutor,
    level: IntensityLevel,
}

impl WordFormExpander {
    pub fn new(substitutor: LeetspeakSubstitutor, level: IntensityLevel) -> Self {
        Self { substitutor, level }
    }

    pub fn level(&self) -> IntensityLevel {
        self.level
    }

    /// Expand a seed word into its form pool.
    pub fn expand(&self, seed: &SeedWord) -> Vec<String> {
        let mut forms = Vec::new();
        for token in seed.sub_tokens() {
            self.expand_token(token, &mut forms);
        }
        dedup_preserving_order(forms)
    }

    /// Append one sub-token's variants to `out`, without deduplication.
    fn expand_token(&self, token: &str, out: &mut Vec<String>) {
        let bases: Vec<String> = CaseVariant::ALL.iter().map(|v| v.apply(token)).collect();
        out.extend(bases.iter().cloned());
        for level in self.effective_level().steps() {
            out.extend(bases.iter().map(|base| self.substitutor.apply(base, level)));
        }
    }

    /// Levels past every rule (and past the unbounded level 5) only repeat
    /// the fully substituted forms, which deduplication would drop anyway.
    fn effective_level(&self) -> IntensityLevel {
        let saturated = self
            .substitutor
            .rules()
            .len()
            .max(IntensityLevel::UNBOUNDED.value() as usize);
        let saturated = u32::try_from(saturated).unwrap_or(u32::MAX);
        IntensityLevel::new(self.level.value().min(saturated))
    }
}

/// Remove exact duplicates, keeping the first occurrence of each string.
pub fn dedup_preserving_order(words: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(words.len());
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Form pools for every distinct seed identity, computed once.
#[derive(Debug, Default)]
pub struct FormPools {
    pools: HashMap<SeedId, Vec<String>>,
}

impl FormPools {
    /// Expand every distinct seed. Repeated seeds share their pool.
    pub fn build(seeds: &[SeedWord], expander: &WordFormExpander) -> Self {
        let mut pools = HashMap::with_capacity(seeds.len());
        for seed in seeds {
            pools
                .entry(seed.id)
                .or_insert_with(|| expander.expand(seed));
        }
        Self { pools }
    }

    /// Forms of a seed; empty for an unknown id.
    pub fn get(&self, id: SeedId) -> &[String] {
        self.pools.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct seed identities.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(word: &str, level: u32) -> Vec<String> {
        let expander =
            WordFormExpander::new(LeetspeakSubstitutor::default(), IntensityLevel::new(level));
        expander.expand(&SeedWord::new(SeedId(0), word))
    }

    #[test]
    fn level_zero_gives_case_variants_only() {
        assert_eq!(forms("tEst", 0), ["TEST", "test", "Test", "tEst"]);
    }

    #[test]
    fn case_variants_collapse() {
        // Lowercase input equals its as-given form.
        assert_eq!(forms("test", 0), ["TEST", "test", "Test"]);
    }

    #[test]
    fn level_three_test() {
        let f = forms("test", 3);
        for expected in ["test", "TEST", "Test", "te$t", "TE$T", "Te$t"] {
            assert!(f.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!f.contains(&"t3$t".to_string()));
    }

    #[test]
    fn level_five_test() {
        let f = forms("test", 5);
        assert!(f.contains(&"t3$t".to_string()));
        assert!(f.contains(&"T3$T".to_string()));
    }

    #[test]
    fn order_is_levels_outer_variants_inner() {
        assert_eq!(
            forms("Soda", 2),
            [
                "SODA", "soda", "Soda", // as-given equals title
                "SOD@", "sod@", "Sod@", // level 1
                "S0D@", "s0d@", "S0d@", // level 2
            ]
        );
    }

    #[test]
    fn digits_collapse_to_one_form() {
        for level in 0..=6 {
            assert_eq!(forms("2024", level), ["2024"]);
        }
    }

    #[test]
    fn composite_merges_sub_tokens() {
        let f = forms("ab:cd", 0);
        assert_eq!(f, ["AB", "ab", "Ab", "CD", "cd", "Cd"]);
    }

    #[test]
    fn composite_dedups_across_sub_tokens() {
        let f = forms("cat:CAT", 0);
        assert_eq!(f, ["CAT", "cat", "Cat"]);
    }

    #[test]
    fn higher_levels_extend_lower_levels() {
        for word in ["password", "seaside", "x"] {
            let mut previous = forms(word, 0);
            for level in 1..=6 {
                let current = forms(word, level);
                assert!(
                    current.starts_with(&previous),
                    "{word}: level {level} does not extend level {}",
                    level - 1
                );
                previous = current;
            }
        }
    }

    #[test]
    fn composite_pools_grow_with_level() {
        // Later sub-tokens shift, so only containment holds.
        let low = forms("Alice:Bob", 1);
        let high = forms("Alice:Bob", 3);
        assert!(low.iter().all(|f| high.contains(f)));
        assert!(high.len() > low.len());
    }

    #[test]
    fn levels_past_five_add_nothing() {
        assert_eq!(forms("seaside", 5), forms("seaside", 50));
        assert_eq!(forms("seaside", 5), forms("seaside", u32::MAX));
    }

    #[test]
    fn dedup_keeps_first() {
        let words = ["a", "b", "a", "c", "b"].map(String::from).to_vec();
        assert_eq!(dedup_preserving_order(words), ["a", "b", "c"]);
    }

    #[test]
    fn pools_shared_by_repeated_seeds() {
        let seeds = [
            SeedWord::new(SeedId(0), "cat"),
            SeedWord::new(SeedId(1), "dog"),
            SeedWord::new(SeedId(0), "cat"),
        ];
        let expander = WordFormExpander::new(LeetspeakSubstitutor::default(), IntensityLevel::NONE);
        let pools = FormPools::build(&seeds, &expander);
        assert_eq!(pools.len(), 2);
        assert_eq!(pools.get(SeedId(0)), ["CAT", "cat", "Cat"]);
        assert!(pools.get(SeedId(9)).is_empty());
    }
}
