// ============================================================
// COLUMN KIND
// ============================================================
// Type classification decided once per column when the table is built

use super::CellValue;

/// Inferred value type of a whole column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every cell is missing (or the column has no rows)
    Empty,

    /// Every non-missing cell is a boolean literal
    Boolean,

    /// Every non-missing cell is an integer
    Integer,

    /// Every non-missing cell is numeric and at least one is not an integer
    Float,

    /// Any other mix of values
    Text,
}

impl ColumnKind {
    /// Classify a column from its cells
    pub fn classify(cells: &[CellValue]) -> Self {
        let mut kind = ColumnKind::Empty;

        for cell in cells {
            kind = match (kind, cell) {
                (_, CellValue::Missing) => kind,
                (_, CellValue::Text(_)) => return ColumnKind::Text,
                (ColumnKind::Empty | ColumnKind::Boolean, CellValue::Bool(_)) => {
                    ColumnKind::Boolean
                }
                (ColumnKind::Empty | ColumnKind::Integer, CellValue::Integer(_)) => {
                    ColumnKind::Integer
                }
                (
                    ColumnKind::Empty | ColumnKind::Integer | ColumnKind::Float,
                    CellValue::Integer(_) | CellValue::Float(_),
                ) => ColumnKind::Float,
                _ => return ColumnKind::Text,
            };
        }

        kind
    }

    /// Whether the text normalizer applies to this column
    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnKind::Text)
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Empty => write!(f, "Empty"),
            ColumnKind::Boolean => write!(f, "Boolean"),
            ColumnKind::Integer => write!(f, "Integer"),
            ColumnKind::Float => write!(f, "Float"),
            ColumnKind::Text => write!(f, "Text"),
        }
    }
}
