// Fri Oct 16 2026 - Alex

//! Wildcard byte patterns: parsing, leftmost-match search, and the
//! width/between/height signature used to locate a resolution pair.

pub mod error;
pub mod matcher;
pub mod pattern;
pub mod signature;
pub mod token;

pub use error::PatternError;
pub use matcher::PatternMatcher;
pub use pattern::Pattern;
pub use signature::{encode_field, ResolutionSignature};
pub use token::{PatternToken, WILDCARD_MARKER};

/// Parses `text` into a [`Pattern`].
pub fn parse(text: &str) -> Result<Pattern, PatternError> {
    Pattern::parse(text)
}

/// Offset of the first window of `buffer` matching `pattern`, if any.
pub fn find(buffer: &[u8], pattern: &Pattern) -> Option<usize> {
    PatternMatcher::new(pattern).find(buffer)
}
