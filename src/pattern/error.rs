// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,
    #[error("Malformed pattern token '{token}' at position {index}: expected two hex digits or '??'")]
    MalformedToken { token: String, index: usize },
    #[error("{field} pattern must be exactly 2 tokens, got {tokens}")]
    FieldWidth { field: &'static str, tokens: usize },
}

impl PatternError {
    /// True for every syntax failure, i.e. anything that stops a scan before it starts.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Empty | Self::MalformedToken { .. })
    }
}
