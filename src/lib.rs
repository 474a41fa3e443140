mod app;
mod application;
mod domain;
mod infrastructure;
mod interfaces;

pub use app::{init_tracing, run};
pub use application::{CsvNormalizerUseCase, NormalizedCsv};
pub use domain::error::{AppError, Result};
