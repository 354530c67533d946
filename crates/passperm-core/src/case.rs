// Case variants applied to seed words before substitution

/// One of the four base renderings of a seed word (or sub-token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseVariant {
    /// Every letter uppercased: "ALICE".
    Upper,
    /// Every letter lowercased: "alice".
    Lower,
    /// First letter of each segment uppercased, rest lowercased: "Alice".
    Title,
    /// The text exactly as supplied by the caller.
    AsGiven,
}

impl CaseVariant {
    /// All variants in expansion order.
    pub const ALL: [CaseVariant; 4] = [
        CaseVariant::Upper,
        CaseVariant::Lower,
        CaseVariant::Title,
        CaseVariant::AsGiven,
    ];

    /// Render `word` in this case.
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseVariant::Upper => word.to_uppercase(),
            CaseVariant::Lower => word.to_lowercase(),
            CaseVariant::Title => title_case(word),
            CaseVariant::AsGiven => word.to_string(),
        }
    }
}

/// Title-case a string.
///
/// A segment starts at the beginning of the string and after every
/// non-letter character, so `"o'neil"` becomes `"O'Neil"` and
/// `"abc1def"` becomes `"Abc1Def"`. Letters inside a segment are
/// lowercased.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_segment = false;
    for c in word.chars() {
        if in_segment {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_segment = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower() {
        assert_eq!(CaseVariant::Upper.apply("koIra"), "KOIRA");
        assert_eq!(CaseVariant::Lower.apply("KoIRA"), "koira");
    }

    #[test]
    fn as_given_is_untouched() {
        assert_eq!(CaseVariant::AsGiven.apply("McDonalds"), "McDonalds");
    }

    #[test]
    fn title_simple() {
        assert_eq!(title_case("test"), "Test");
        assert_eq!(title_case("TEST"), "Test");
        assert_eq!(title_case("tEsT"), "Test");
    }

    #[test]
    fn title_segments() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("abc1def"), "Abc1Def");
        assert_eq!(title_case("jean-luc"), "Jean-Luc");
    }

    #[test]
    fn title_no_letters() {
        assert_eq!(title_case("1234"), "1234");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_non_ascii() {
        assert_eq!(title_case("\u{00E4}iti"), "\u{00C4}iti"); // äiti -> Äiti
    }

    #[test]
    fn all_is_in_expansion_order() {
        let rendered: Vec<String> = CaseVariant::ALL.iter().map(|v| v.apply("bOb")).collect();
        assert_eq!(rendered, ["BOB", "bob", "Bob", "bOb"]);
    }
}
