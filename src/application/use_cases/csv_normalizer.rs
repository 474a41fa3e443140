// ============================================================
// CSV NORMALIZER USE CASE
// ============================================================
// Orchestrate CSV parsing, table transformation, and serialization

use std::time::Instant;

use super::table_transformer::TableTransformer;
use crate::domain::error::Result;
use crate::infrastructure::csv::{CsvParser, CsvWriter};

/// Result of a successful normalization
#[derive(Debug, Clone)]
pub struct NormalizedCsv {
    /// Transformed CSV document
    pub content: String,

    /// Number of data rows (header excluded)
    pub row_count: usize,

    /// Number of columns
    pub column_count: usize,

    /// Columns that went through the text normalizer
    pub normalized_columns: Vec<String>,

    /// Whether the phone column was reduced to digits
    pub phone_column_applied: bool,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Parse -> transform -> serialize. Any failure aborts the whole
/// document; no partial output is produced.
#[derive(Default)]
pub struct CsvNormalizerUseCase {
    parser: CsvParser,
    transformer: TableTransformer,
    writer: CsvWriter,
}

impl CsvNormalizerUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&self, csv_content: &str) -> Result<NormalizedCsv> {
        let start = Instant::now();

        let mut table = self.parser.parse_content(csv_content)?;
        for column in table.columns() {
            tracing::debug!(column = %column.name, kind = %column.kind, "Classified column");
        }

        let report = self.transformer.transform(&mut table);
        let content = self.writer.write_table(&table)?;

        Ok(NormalizedCsv {
            content,
            row_count: table.row_count(),
            column_count: table.column_count(),
            normalized_columns: report.normalized_columns,
            phone_column_applied: report.phone_column_applied,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;

    const CONTACTS_CSV: &str = "\
NAME,CITY,AGE,CONTACTO 1
José Pérez,  Medellín ,30,(555) 123-4567
  maría   del   carmen,Bogotá,45,+57 300 555 0101
Ñoño,NA,52,
";

    #[test]
    fn test_end_to_end_example() {
        let result = CsvNormalizerUseCase::new()
            .execute("NAME,CONTACTO 1\nJosé Pérez,555-123-4567\n")
            .unwrap();

        assert_eq!(result.content, "NAME,CONTACTO 1\nJOSE PEREZ,5551234567\n");
        assert_eq!(result.row_count, 1);
        assert!(result.phone_column_applied);
    }

    #[test]
    fn test_contacts_document() {
        let result = CsvNormalizerUseCase::new().execute(CONTACTS_CSV).unwrap();

        assert_eq!(
            result.content,
            "NAME,CITY,AGE,CONTACTO 1\n\
             JOSE PEREZ,MEDELLIN,30,5551234567\n\
             MARIA DEL CARMEN,BOGOTA,45,573005550101\n\
             NONO,,52,\n"
        );
        assert_eq!(result.row_count, 3);
        assert_eq!(result.column_count, 4);
        assert_eq!(
            result.normalized_columns,
            vec!["NAME", "CITY", "CONTACTO 1"]
        );
    }

    #[test]
    fn test_numeric_values_keep_their_bytes() {
        let result = CsvNormalizerUseCase::new()
            .execute("name,price,qty\nlápiz,01.50,007\n")
            .unwrap();

        assert_eq!(result.content, "name,price,qty\nLAPIZ,01.50,007\n");
    }

    #[test]
    fn test_output_is_stable_under_renormalization() {
        let use_case = CsvNormalizerUseCase::new();
        let once = use_case.execute(CONTACTS_CSV).unwrap().content;
        let twice = use_case.execute(&once).unwrap().content;

        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_input_is_rejected() {
        let result = CsvNormalizerUseCase::new().execute("A,B\n1,2\n3,4,5\n");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_failure_does_not_affect_next_request() {
        let use_case = CsvNormalizerUseCase::new();
        assert!(use_case.execute("").is_err());

        let result = use_case.execute("A\nb\n").unwrap();
        assert_eq!(result.content, "A\nB\n");
    }
}
