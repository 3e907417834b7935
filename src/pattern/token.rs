// Fri Oct 16 2026 - Alex

use std::fmt;

pub const WILDCARD_MARKER: &str = "??";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternToken {
    Fixed(u8),
    Wildcard,
}

impl PatternToken {
    pub fn matches(&self, byte: u8) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Fixed(b) => *b == byte,
        }
    }

    /// Accepts exactly two hex digits (any case) or the wildcard marker.
    pub fn parse(s: &str) -> Option<Self> {
        if s == WILDCARD_MARKER {
            return Some(Self::Wildcard);
        }
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(s, 16).ok().map(Self::Fixed)
    }

    pub fn to_byte(&self) -> Option<u8> {
        match self {
            Self::Wildcard => None,
            Self::Fixed(b) => Some(*b),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl From<u8> for PatternToken {
    fn from(byte: u8) -> Self {
        Self::Fixed(byte)
    }
}

impl fmt::Display for PatternToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str(WILDCARD_MARKER),
            Self::Fixed(b) => write!(f, "{:02X}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_is_case_insensitive() {
        assert_eq!(PatternToken::parse("4d"), Some(PatternToken::Fixed(0x4D)));
        assert_eq!(PatternToken::parse("4D"), Some(PatternToken::Fixed(0x4D)));
        assert_eq!(PatternToken::parse("ff"), Some(PatternToken::Fixed(0xFF)));
    }

    #[test]
    fn test_parse_rejects_wrong_width() {
        assert_eq!(PatternToken::parse("4"), None);
        assert_eq!(PatternToken::parse("04D"), None);
        assert_eq!(PatternToken::parse("?"), None);
        assert_eq!(PatternToken::parse("+F"), None);
        assert_eq!(PatternToken::parse("ZZ"), None);
    }

    #[test]
    fn test_wildcard_matches_everything() {
        let token = PatternToken::parse("??").unwrap();
        assert!(token.is_wildcard());
        assert!((0..=255u8).all(|b| token.matches(b)));
        assert_eq!(token.to_byte(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(PatternToken::Fixed(0x0A).to_string(), "0A");
        assert_eq!(PatternToken::Wildcard.to_string(), "??");
    }
}
