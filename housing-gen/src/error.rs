use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Unknown district: {0}")]
    UnknownDistrict(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}
