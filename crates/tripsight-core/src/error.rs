//! Error types for tripsight-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripError {
    #[error("Invalid visibility level: {0}")]
    InvalidVisibility(String),

    #[error("Invalid datetime: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, TripError>;
