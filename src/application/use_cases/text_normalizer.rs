use once_cell::sync::Lazy;
use regex::Regex;
use unidecode::unidecode;

use crate::domain::csv::CellValue;

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a cell: missing cells become the empty string, everything
/// else goes through [`normalize_text`] using its textual form.
pub fn normalize_cell(value: &CellValue) -> String {
    if value.is_missing() {
        return String::new();
    }
    normalize_text(value.as_str())
}

/// Folds accents to ASCII, collapses whitespace runs to a single space,
/// trims and upper-cases.
pub fn normalize_text(text: &str) -> String {
    // Transliterate to ASCII ("é" -> "e", "ñ" -> "n")
    let folded = unidecode(text);

    let collapsed = WHITESPACE_PATTERN.replace_all(&folded, " ");

    collapsed.trim().to_uppercase()
}

/// Keeps only the ASCII digits of `text`
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
