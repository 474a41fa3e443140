// ============================================================
// TABLE TYPES
// ============================================================
// Column-major representation of a parsed CSV document

use std::collections::HashSet;

use super::{CellValue, ColumnKind};
use crate::domain::error::{AppError, Result};

/// A named column and its cells, one per row
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header name, exactly as supplied (after de-duplication)
    pub name: String,

    /// Inferred value type
    pub kind: ColumnKind,

    cells: Vec<CellValue>,
}

impl Column {
    /// Create a column and classify its type
    pub fn new(name: String, cells: Vec<CellValue>) -> Self {
        let kind = ColumnKind::classify(&cells);
        Self { name, kind, cells }
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Replace every cell with the text produced by `f`. The column
    /// becomes a text column and keeps its length.
    pub fn rewrite_cells<F>(&mut self, f: F)
    where
        F: Fn(&CellValue) -> String,
    {
        for cell in self.cells.iter_mut() {
            *cell = CellValue::Text(f(cell));
        }
        self.kind = ColumnKind::Text;
    }
}

/// Rectangular table: every column holds `row_count` cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns of equal length
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);

        if let Some(column) = columns.iter().find(|c| c.len() != row_count) {
            return Err(AppError::ParseError(format!(
                "Column '{}' has {} rows, expected {}",
                column.name,
                column.len(),
                row_count
            )));
        }

        Ok(Self { columns, row_count })
    }

    /// Build a table from a header row and row-major records
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
        let headers = normalize_headers(headers);
        let mut cells: Vec<Vec<CellValue>> = headers
            .iter()
            .map(|_| Vec::with_capacity(records.len()))
            .collect();

        for (index, record) in records.iter().enumerate() {
            if record.len() != headers.len() {
                return Err(AppError::ParseError(format!(
                    "Expected {} fields in row {}, saw {}",
                    headers.len(),
                    index + 1,
                    record.len()
                )));
            }

            for (column, value) in cells.iter_mut().zip(record) {
                column.push(CellValue::parse(value));
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| Column::new(name, cells))
            .collect();

        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn columns_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.columns.iter_mut()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Field texts of one row, in column order
    pub fn row(&self, index: usize) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| c.cells().get(index).map(CellValue::as_str).unwrap_or(""))
            .collect()
    }
}

/// Name blank headers `Unnamed: <position>` and suffix repeated ones
/// with `.1`, `.2`, ... skipping names already present in the header.
pub fn normalize_headers(headers: Vec<String>) -> Vec<String> {
    let headers: Vec<String> = headers
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            if name.is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                name
            }
        })
        .collect();

    let original: HashSet<String> = headers.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut result = Vec::with_capacity(headers.len());

    for name in headers {
        if seen.insert(name.clone()) {
            result.push(name);
            continue;
        }

        let mut suffix = 1;
        let renamed = loop {
            let candidate = format!("{}.{}", name, suffix);
            if !seen.contains(&candidate) && !original.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };

        seen.insert(renamed.clone());
        result.push(renamed);
    }

    result
}
