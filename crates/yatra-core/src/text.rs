// crates/yatra-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Kōṇārk` -> `Konark`)
/// 2\) Normalize to lowercase
///
/// ```rust
/// use yatra_core::text::fold_key;
///
/// assert_eq!(fold_key("Kōṇārk"), "konark");
/// assert_eq!(fold_key("TAJ Mahal"), "taj mahal");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`] normalization.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Folds a free-text string for similarity scoring.
///
/// On top of [`fold_key`], every character that is not alphanumeric becomes
/// a separator and runs of whitespace collapse to a single space, so
/// `"Taj-Mahal's  history?"` becomes `"taj mahal s history"`.
pub fn fold_words(s: &str) -> String {
    let folded = fold_key(s);
    let spaced: String = folded
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a trimmed string into an `f64`, `None` when it is not a number.
///
/// Thousands separators (`1,234.5`) are accepted.
pub fn parse_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_words_drops_punctuation_and_case() {
        assert_eq!(fold_words("  Taj-Mahal's  HISTORY? "), "taj mahal s history");
        assert_eq!(fold_words("!!!"), "");
    }

    #[test]
    fn equals_folded_ignores_accents() {
        assert!(equals_folded("Kōṇārk", "konark"));
        assert!(!equals_folded("Agra", "Delhi"));
    }

    #[test]
    fn parse_f64_accepts_separators() {
        assert_eq!(parse_f64(" 1,234.5 "), Some(1234.5));
        assert_eq!(parse_f64("N/A"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("NaN"), None);
    }
}
