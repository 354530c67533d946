// Generator options and built-in suffix tables

use passperm_core::IntensityLevel;
use serde::{Deserialize, Serialize};

/// Numeric suffixes appended to one-word candidates.
pub const DEFAULT_SUFFIXES: &[&str] = &["1", "12", "123", "1234"];

/// Symbol suffixes appended to one-word candidates.
pub const DEFAULT_SYMBOLS: &[&str] = &["*"];

/// Strings placed between joined words. Empty by default, which disables
/// the connector groups of the two- and three-word tiers.
pub const DEFAULT_CONNECTORS: &[&str] = &[];

/// Options controlling a generation run.
///
/// Deserializable from a JSON options file; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Leetspeak intensity ceiling (default 5).
    pub level: IntensityLevel,
    /// Treat the seed list as ordered. Reserved: accepted and carried, but
    /// the combination algorithm does not read it.
    pub strict_order: bool,
    /// Numeric suffixes, in emission order.
    pub suffixes: Vec<String>,
    /// Symbol suffixes, in emission order.
    pub symbols: Vec<String>,
    /// Connectors for the joined-word groups.
    pub connectors: Vec<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            level: IntensityLevel::default(),
            strict_order: false,
            suffixes: to_owned(DEFAULT_SUFFIXES),
            symbols: to_owned(DEFAULT_SYMBOLS),
            connectors: to_owned(DEFAULT_CONNECTORS),
        }
    }
}

impl GeneratorOptions {
    pub fn with_level(mut self, level: IntensityLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_strict_order(mut self, strict_order: bool) -> Self {
        self.strict_order = strict_order;
        self
    }

    pub fn with_suffixes<S: Into<String>>(mut self, suffixes: impl IntoIterator<Item = S>) -> Self {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_symbols<S: Into<String>>(mut self, symbols: impl IntoIterator<Item = S>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_connectors<S: Into<String>>(
        mut self,
        connectors: impl IntoIterator<Item = S>,
    ) -> Self {
        self.connectors = connectors.into_iter().map(Into::into).collect();
        self
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = GeneratorOptions::default();
        assert_eq!(o.level, IntensityLevel::new(5));
        assert!(!o.strict_order);
        assert_eq!(o.suffixes, ["1", "12", "123", "1234"]);
        assert_eq!(o.symbols, ["*"]);
        assert!(o.connectors.is_empty());
    }

    #[test]
    fn builder_setters() {
        let o = GeneratorOptions::default()
            .with_level(IntensityLevel::new(2))
            .with_strict_order(true)
            .with_suffixes(["99"])
            .with_symbols(["!", "?"])
            .with_connectors(["_"]);
        assert_eq!(o.level.value(), 2);
        assert!(o.strict_order);
        assert_eq!(o.suffixes, ["99"]);
        assert_eq!(o.symbols, ["!", "?"]);
        assert_eq!(o.connectors, ["_"]);
    }
}
