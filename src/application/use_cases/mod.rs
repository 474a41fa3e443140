pub mod csv_normalizer;
pub mod table_transformer;
pub mod text_normalizer;
