// ============================================================
// TABLE TRANSFORMER
// ============================================================
// Apply text normalization to text columns and digit extraction
// to the phone column, mutating the table in place

use super::text_normalizer::{digits_only, normalize_cell};
use crate::domain::csv::{Table, PHONE_COLUMN};

/// What the transformer touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Columns that went through the text normalizer
    pub normalized_columns: Vec<String>,

    /// Whether the phone column was present and reduced to digits
    pub phone_column_applied: bool,
}

#[derive(Debug, Default)]
pub struct TableTransformer;

impl TableTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize every text column, then strip the phone column to digits.
    /// Numeric, boolean and all-missing columns are left untouched.
    pub fn transform(&self, table: &mut Table) -> TransformReport {
        let mut report = TransformReport::default();

        for column in table.columns_mut().filter(|c| c.kind.is_textual()) {
            column.rewrite_cells(normalize_cell);
            report.normalized_columns.push(column.name.clone());
        }

        // Applies whatever the column's kind, replacing the original formatting
        if let Some(column) = table.column_mut(PHONE_COLUMN) {
            column.rewrite_cells(|cell| digits_only(cell.as_str()));
            report.phone_column_applied = true;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::{CellValue, ColumnKind};

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_records(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| v.to_string()).collect::<Vec<String>>())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_text_columns_are_normalized() {
        let mut table = table(&["NAME", "CITY"], &[&["José Pérez", " bogotá "], &["ana", "NA"]]);
        let report = TableTransformer::new().transform(&mut table);

        assert_eq!(report.normalized_columns, vec!["NAME", "CITY"]);
        assert!(!report.phone_column_applied);
        assert_eq!(table.row(0), vec!["JOSE PEREZ", "BOGOTA"]);
        assert_eq!(table.row(1), vec!["ANA", ""]);
    }

    #[test]
    fn test_numeric_columns_are_untouched() {
        let mut table = table(&["NAME", "AGE", "SCORE"], &[&["a", "30", "1.50"], &["b", "45", "2"]]);
        let report = TableTransformer::new().transform(&mut table);

        assert_eq!(report.normalized_columns, vec!["NAME"]);
        assert_eq!(table.columns()[1].kind, ColumnKind::Integer);
        assert_eq!(table.row(0), vec!["A", "30", "1.50"]);
        assert_eq!(table.row(1), vec!["B", "45", "2"]);
    }

    #[test]
    fn test_boolean_and_empty_columns_are_untouched() {
        let mut table = table(&["FLAG", "BLANK"], &[&["true", ""], &["False", "NA"]]);
        let report = TableTransformer::new().transform(&mut table);

        assert!(report.normalized_columns.is_empty());
        assert_eq!(table.row(1), vec!["False", ""]);
    }

    #[test]
    fn test_phone_column_reduced_to_digits() {
        let mut table = table(
            &["NAME", "CONTACTO 1"],
            &[&["x", "(555) 123-4567"], &["y", "+57 300-555-0101"], &["z", ""]],
        );
        let report = TableTransformer::new().transform(&mut table);

        assert!(report.phone_column_applied);
        let phones: Vec<&str> = table.columns()[1].cells().iter().map(CellValue::as_str).collect();
        assert_eq!(phones, vec!["5551234567", "573005550101", ""]);
    }

    #[test]
    fn test_numeric_phone_column_is_still_rewritten() {
        let mut table = table(&["CONTACTO 1"], &[&["5551234567"], &[" 3001234567 "]]);
        TableTransformer::new().transform(&mut table);

        assert_eq!(table.columns()[0].kind, ColumnKind::Text);
        assert_eq!(table.row(0), vec!["5551234567"]);
        assert_eq!(table.row(1), vec!["3001234567"]);
    }

    #[test]
    fn test_alphabetic_phone_becomes_empty() {
        let mut table = table(&["CONTACTO 1"], &[&["no tiene"]]);
        TableTransformer::new().transform(&mut table);

        assert_eq!(table.row(0), vec![""]);
    }

    #[test]
    fn test_phone_column_name_is_exact() {
        let mut table = table(&["contacto 1"], &[&["555-1234"]]);
        let report = TableTransformer::new().transform(&mut table);

        assert!(!report.phone_column_applied);
        assert_eq!(table.row(0), vec!["555-1234"]);
    }

    #[test]
    fn test_shape_is_preserved() {
        let mut table = table(
            &["B", "A", "CONTACTO 1", "N"],
            &[&["x", "y", "1-2", "1"], &["", "", "", ""], &["z", "w", "3", "2"]],
        );
        TableTransformer::new().transform(&mut table);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_names(), vec!["B", "A", "CONTACTO 1", "N"]);
        assert!(table.columns().iter().all(|c| c.len() == 3));
    }
}
