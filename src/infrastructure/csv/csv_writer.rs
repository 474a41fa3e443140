// ============================================================
// CSV WRITER
// ============================================================
// Serialize a Table back to CSV text

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::csv::Table;
use crate::domain::error::{AppError, Result};

/// Writes the header row followed by every row, `\n` terminated,
/// quoting only when a field requires it.
pub struct CsvWriter {
    delimiter: u8,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_table(&self, table: &Table) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(table.column_names())?;
        for index in 0..table.row_count() {
            writer.write_record(table.row(index))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::IoError(format!("Failed to flush CSV output: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| AppError::TransformError(format!("CSV output is not UTF-8: {}", e)))
    }
}
