use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid weight type: {0}")]
    InvalidWeightDimension(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
