// Leetspeak substitution with a counted, ordered rule table

use passperm_core::IntensityLevel;

/// One substitution: both cases of a letter map to the same replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub lower: char,
    pub upper: char,
    pub replacement: &'static str,
}

impl SubstitutionRule {
    pub const fn new(lower: char, upper: char, replacement: &'static str) -> Self {
        Self {
            lower,
            upper,
            replacement,
        }
    }

    /// Replace every occurrence of the lowercase letter, then of the
    /// uppercase letter.
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.lower, self.replacement)
            .replace(self.upper, self.replacement)
    }
}

/// Built-in substitution table, in application order.
pub const DEFAULT_RULES: &[SubstitutionRule] = &[
    SubstitutionRule::new('a', 'A', "@"),
    SubstitutionRule::new('o', 'O', "0"),
    SubstitutionRule::new('s', 'S', "$"),
    SubstitutionRule::new('e', 'E', "3"),
];

/// Applies a prefix of an ordered rule table to a string.
///
/// Rules compose: each one sees the previous rule's output. The number of
/// rules considered is bounded by the intensity level, and a rule counts as
/// considered whether or not it matched anything. Level 5 lifts the bound.
/// The stop check runs after a rule is applied, so level 0 still considers
/// the first rule.
#[derive(Debug, Clone, Copy)]
pub struct LeetspeakSubstitutor {
    rules: &'static [SubstitutionRule],
}

impl LeetspeakSubstitutor {
    pub const fn new(rules: &'static [SubstitutionRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [SubstitutionRule] {
        self.rules
    }

    /// Substitute `text` at the given level.
    pub fn apply(&self, text: &str, level: IntensityLevel) -> String {
        let limit = level.rule_limit();
        let mut output = text.to_string();
        for (considered, rule) in self.rules.iter().enumerate() {
            output = rule.apply(&output);
            if limit.is_some_and(|limit| considered + 1 >= limit) {
                break;
            }
        }
        output
    }
}

impl Default for LeetspeakSubstitutor {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}
