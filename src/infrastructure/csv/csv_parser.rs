// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV text into a Table, rejecting malformed documents

use csv::{ReaderBuilder, Trim};

use crate::domain::csv::Table;
use crate::domain::error::{AppError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strict CSV parser: a header row is required and every record must
/// have as many fields as the header.
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Quote character (default: double quote)
    quote: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Table> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);

        if content.trim().is_empty() {
            return Err(AppError::ParseError(
                "No columns to parse from input".to_string(),
            ));
        }

        // The csv crate reads an unterminated quote to EOF without complaint
        if let Some(line) = self.find_unterminated_quote(content) {
            return Err(AppError::ParseError(format!(
                "EOF inside quoted field starting on line {}",
                line
            )));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.quote)
            .trim(Trim::None)
            .flexible(false)
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            records.push(record.iter().map(str::to_string).collect());
        }

        Table::from_records(headers, records)
    }

    /// Line number where a quoted field opens without ever closing
    fn find_unterminated_quote(&self, content: &str) -> Option<usize> {
        let bytes = content.as_bytes();
        let mut line = 1;
        let mut field_start = true;
        let mut open_line = None;
        let mut i = 0;

        while i < bytes.len() {
            let byte = bytes[i];

            if open_line.is_some() {
                if byte == self.quote {
                    if bytes.get(i + 1) == Some(&self.quote) {
                        i += 1;
                    } else {
                        open_line = None;
                    }
                }
            } else if byte == self.delimiter || byte == b'\n' || byte == b'\r' {
                field_start = true;
            } else if byte == self.quote && field_start {
                open_line = Some(line);
                field_start = false;
            } else {
                field_start = false;
            }

            if byte == b'\n' {
                line += 1;
            }
            i += 1;
        }

        open_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::csv::{CellValue, ColumnKind};

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let table = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["name", "age", "city"]);
        assert_eq!(table.columns()[1].kind, ColumnKind::Integer);
        assert_eq!(table.row(0), vec!["Alice", "30", "NYC"]);
    }

    #[test]
    fn test_parse_keeps_whitespace_and_quoted_fields() {
        let content = "name,note\n\"Pérez, José\",\"  two\nlines \"\n";
        let table = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.columns()[0].cells(),
            &[CellValue::Text("Pérez, José".to_string())]
        );
        assert_eq!(table.row(0)[1], "  two\nlines ");
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let table = CsvParser::new().parse_content("\u{feff}NAME\nAna\n").unwrap();
        assert_eq!(table.column_names(), vec!["NAME"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let table = CsvParser::new().parse_content("A,B\n1,2\n\n3,4\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let result = CsvParser::new().parse_content("  \n ");
        assert!(matches!(result, Err(AppError::ParseError(msg)) if msg.contains("No columns")));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let result = CsvParser::new().parse_content("A,B\n1,2\n1,2,3\n");
        assert!(matches!(result, Err(AppError::ParseError(msg)) if msg.contains("row 2")));
    }

    #[test]
    fn test_parse_rejects_short_rows() {
        let result = CsvParser::new().parse_content("A,B,C\n1,2\n");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_unterminated_quote() {
        let result = CsvParser::new().parse_content("A,B\n1,\"open\n2,3\n");
        assert!(matches!(result, Err(AppError::ParseError(msg)) if msg.contains("line 2")));
    }

    #[test]
    fn test_inner_quotes_are_literal() {
        let table = CsvParser::new()
            .parse_content("A,B\nab\"c,\"say \"\"hi\"\"\"\n")
            .unwrap();
        assert_eq!(table.row(0), vec!["ab\"c", "say \"hi\""]);
    }
}
