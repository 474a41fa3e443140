// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV text <-> Table conversion on top of the csv crate

mod csv_parser;
mod csv_writer;

pub use csv_parser::CsvParser;
pub use csv_writer::CsvWriter;
