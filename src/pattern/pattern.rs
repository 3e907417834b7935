// Fri Oct 16 2026 - Alex

use crate::pattern::{PatternError, PatternMatcher, PatternToken};
use std::fmt;
use std::str::FromStr;

/// An ordered, non-empty sequence of fixed-byte and wildcard tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Parses whitespace separated tokens such as `"20 03 ?? ?? 58 02"`.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let tokens = text
            .split_whitespace()
            .enumerate()
            .map(|(index, part)| {
                PatternToken::parse(part).ok_or_else(|| PatternError::MalformedToken {
                    token: part.to_string(),
                    index,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_tokens(tokens)
    }

    pub fn from_tokens(tokens: Vec<PatternToken>) -> Result<Self, PatternError> {
        if tokens.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { tokens })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PatternError> {
        Self::from_tokens(bytes.iter().copied().map(PatternToken::Fixed).collect())
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false for a parsed pattern; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks the window starting at `data[0]`. Short data never matches.
    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.tokens.len() {
            return false;
        }

        self.tokens
            .iter()
            .zip(data.iter())
            .all(|(token, &byte)| token.matches(byte))
    }

    /// Offset of the leftmost match in `data`.
    pub fn find_in(&self, data: &[u8]) -> Option<usize> {
        PatternMatcher::new(self).find(data)
    }

    pub fn significant_byte_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.is_wildcard()).count()
    }

    pub fn wildcard_byte_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_wildcard()).count()
    }

    pub fn to_hex_string(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternToken::{Fixed, Wildcard};

    #[test]
    fn test_parse_fixed_bytes() {
        let pattern = Pattern::parse("4D 5A").unwrap();
        assert_eq!(pattern.tokens(), &[Fixed(0x4D), Fixed(0x5A)]);
    }

    #[test]
    fn test_parse_with_wildcard() {
        let pattern = Pattern::parse("4D ?? 5A").unwrap();
        assert_eq!(pattern.tokens(), &[Fixed(0x4D), Wildcard, Fixed(0x5A)]);
        assert_eq!(pattern.significant_byte_count(), 2);
        assert_eq!(pattern.wildcard_byte_count(), 1);
    }

    #[test]
    fn test_parse_tolerates_irregular_whitespace() {
        let pattern = Pattern::parse("  20 03\t??  ??\n58 02 ").unwrap();
        assert_eq!(pattern.len(), 6);
        assert_eq!(pattern.to_hex_string(), "20 03 ?? ?? 58 02");
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        let err = Pattern::parse("4D ZZ").unwrap_err();
        assert_eq!(
            err,
            PatternError::MalformedToken {
                token: "ZZ".to_string(),
                index: 1
            }
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(Pattern::parse(""), Err(PatternError::Empty));
        assert_eq!(Pattern::parse("   \t\n"), Err(PatternError::Empty));
        assert!(PatternError::Empty.is_malformed());
    }

    #[test]
    fn test_parse_rejects_single_question_mark() {
        assert!(Pattern::parse("4D ? 5A").is_err());
        assert!(Pattern::parse("4D5A").is_err());
    }

    #[test]
    fn test_parse_is_deterministic() {
        for text in ["4D ?? 5A", "4D ZZ", "", "00 ff ?? Ab"] {
            assert_eq!(Pattern::parse(text), Pattern::parse(text));
        }
    }

    #[test]
    fn test_from_str() {
        let pattern: Pattern = "de ad ?? ef".parse().unwrap();
        assert_eq!(pattern.to_string(), "DE AD ?? EF");
    }

    #[test]
    fn test_matches_window() {
        let pattern = Pattern::parse("4D ?? 5A").unwrap();
        assert!(pattern.matches(&[0x4D, 0xAA, 0x5A, 0x00]));
        assert!(!pattern.matches(&[0x4D, 0xAA]));
        assert!(!pattern.matches(&[0x4D, 0xAA, 0x5B]));
    }
}
