pub mod error;

// CSV table model
pub mod csv;
