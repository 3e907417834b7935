// Fri Oct 16 2026 - Alex

use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("Failed to find pattern: {0}")]
    PatternNotFound(String),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("{field} must be between 1 and 65535, got {value}")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("Invalid resolution '{0}', expected WIDTHxHEIGHT")]
    Format(String),
}
