// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Core table types for CSV normalization
// No I/O, no async

mod cell_value;
mod column_kind;
mod table;

pub use cell_value::CellValue;
pub use column_kind::ColumnKind;
pub use table::{Column, Table};

/// Column whose values are reduced to their ASCII digits.
pub const PHONE_COLUMN: &str = "CONTACTO 1";

/// Field values treated as a missing cell.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub const TRUE_LITERALS: &[&str] = &["True", "TRUE", "true"];
pub const FALSE_LITERALS: &[&str] = &["False", "FALSE", "false"];
