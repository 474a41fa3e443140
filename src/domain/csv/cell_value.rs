// ============================================================
// CELL VALUE
// ============================================================
// A single CSV field, tagged with the primitive type it parses as

use super::{FALSE_LITERALS, MISSING_MARKERS, TRUE_LITERALS};

/// A parsed CSV field. Every non-missing variant keeps the raw field text
/// so untouched values are written back exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// One of the missing-value markers (including the empty field)
    Missing,

    /// Boolean literal such as `true` or `FALSE`
    Bool(String),

    /// Signed 64-bit integer
    Integer(String),

    /// Floating point number that is not an integer
    Float(String),

    /// Anything else
    Text(String),
}

impl CellValue {
    /// Classify a raw field value
    pub fn parse(raw: &str) -> Self {
        if MISSING_MARKERS.contains(&raw) {
            return CellValue::Missing;
        }

        if TRUE_LITERALS.contains(&raw) || FALSE_LITERALS.contains(&raw) {
            return CellValue::Bool(raw.to_string());
        }

        let trimmed = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.parse::<i64>().is_ok() {
            CellValue::Integer(raw.to_string())
        } else if !trimmed.is_empty() && trimmed.parse::<f64>().is_ok() {
            CellValue::Float(raw.to_string())
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Textual representation; missing cells render as the empty string
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Missing => "",
            CellValue::Bool(raw)
            | CellValue::Integer(raw)
            | CellValue::Float(raw)
            | CellValue::Text(raw) => raw,
        }
    }
}
