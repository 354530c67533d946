// Closed-form tier sizes
//
// Output grows combinatorially: with n seeds of f forms each, the
// two-word tier holds on the order of n²f² candidates and the three-word
// tier n³f³. The estimate lets callers see that before anything is
// materialized.

use hashbrown::HashMap;
use passperm_core::{SeedId, SeedWord, Tier};

use crate::forms::FormPools;
use crate::options::GeneratorOptions;

/// Exact number of candidates each tier will hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeEstimate {
    pub one_word: u128,
    pub two_word: u128,
    pub three_word: u128,
}

/// One distinct seed identity and how it contributes to the counts.
struct SeedCounts {
    /// How many entries of the seed list share this identity.
    entries: u128,
    /// Size of the identity's form pool.
    forms: u128,
}

impl SizeEstimate {
    /// Count tier sizes without building any tier.
    pub fn compute(seeds: &[SeedWord], pools: &FormPools, options: &GeneratorOptions) -> Self {
        let suffixes = options.suffixes.len() as u128;
        let symbols = options.symbols.len() as u128;
        // Per form: plain, numeric, symbol, numeric+symbol.
        let per_form = 1 + suffixes + symbols + suffixes.saturating_mul(symbols);
        // Per joined form: direct, plus one per connector.
        let per_join = 1 + options.connectors.len() as u128;

        let counts = distinct_counts(seeds, pools);

        let one_word_of =
            |s: &SeedCounts| s.entries.saturating_mul(s.forms).saturating_mul(per_form);
        let joins_of =
            |s: &SeedCounts| s.entries.saturating_mul(s.forms).saturating_mul(per_join);

        let one_word = counts.iter().map(one_word_of).fold(0u128, u128::saturating_add);

        // two_by_pair[i][j]: two-word candidates with provenance [i, j].
        let mut two_by_pair = vec![vec![0u128; counts.len()]; counts.len()];
        let mut two_word = 0u128;
        for (i, front) in counts.iter().enumerate() {
            for (j, back) in counts.iter().enumerate() {
                if i == j {
                    continue;
                }
                let n = joins_of(front).saturating_mul(one_word_of(back));
                two_by_pair[i][j] = n;
                two_word = two_word.saturating_add(n);
            }
        }

        let mut three_word = 0u128;
        for (w, front) in counts.iter().enumerate() {
            let mut eligible = 0u128;
            for (i, row) in two_by_pair.iter().enumerate() {
                for (j, n) in row.iter().enumerate() {
                    if i != w && j != w {
                        eligible = eligible.saturating_add(*n);
                    }
                }
            }
            three_word = three_word.saturating_add(joins_of(front).saturating_mul(eligible));
        }

        Self {
            one_word,
            two_word,
            three_word,
        }
    }

    pub fn get(&self, tier: Tier) -> u128 {
        match tier {
            Tier::One => self.one_word,
            Tier::Two => self.two_word,
            Tier::Three => self.three_word,
        }
    }

    pub fn total(&self) -> u128 {
        self.one_word
            .saturating_add(self.two_word)
            .saturating_add(self.three_word)
    }
}

/// Group seed entries by identity, in first-seen order.
fn distinct_counts(seeds: &[SeedWord], pools: &FormPools) -> Vec<SeedCounts> {
    let mut index: HashMap<SeedId, usize> = HashMap::new();
    let mut counts: Vec<SeedCounts> = Vec::new();
    for seed in seeds {
        match index.get(&seed.id) {
            Some(&i) => counts[i].entries += 1,
            None => {
                index.insert(seed.id, counts.len());
                counts.push(SeedCounts {
                    entries: 1,
                    forms: pools.get(seed.id).len() as u128,
                });
            }
        }
    }
    counts
}
