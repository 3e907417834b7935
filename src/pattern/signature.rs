// Fri Oct 16 2026 - Alex

use crate::pattern::{Pattern, PatternError, PatternToken};
use std::fmt;

/// The width/between/height pattern triple that locates a resolution pair.
///
/// The width and height segments each cover one little-endian `u16` field,
/// so they must be two tokens long. The between segment is whatever sits
/// between the two fields and may be empty; its token count is the gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSignature {
    width: String,
    between: String,
    height: String,
    pattern: Pattern,
    gap: usize,
}

impl ResolutionSignature {
    pub fn new(width: &str, between: &str, height: &str) -> Result<Self, PatternError> {
        check_field("Width", width)?;
        check_field("Height", height)?;

        // An empty between segment is a zero gap, not a malformed pattern.
        let gap = if between.trim().is_empty() {
            0
        } else {
            Pattern::parse(between)?.len()
        };

        let pattern = Pattern::parse(&Self::concat(width, between, height))?;

        Ok(Self {
            width: normalize(width),
            between: normalize(between),
            height: normalize(height),
            pattern,
            gap,
        })
    }

    /// Joins the three segments with single spaces, width first.
    pub fn concat(width: &str, between: &str, height: &str) -> String {
        format!("{} {} {}", width, between, height)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn gap(&self) -> usize {
        self.gap
    }

    pub fn width_segment(&self) -> &str {
        &self.width
    }

    pub fn between_segment(&self) -> &str {
        &self.between
    }

    pub fn height_segment(&self) -> &str {
        &self.height
    }

    /// Offset of the height field relative to the match start.
    pub fn height_offset(&self) -> usize {
        2 + self.gap
    }

    /// Same between segment, width and height replaced by the encoded values.
    pub fn retarget(&self, width: u16, height: u16) -> Self {
        let width_text = encode_field(width);
        let height_text = encode_field(height);
        let mut tokens = Vec::with_capacity(self.pattern.len());
        tokens.extend(width.to_le_bytes().map(PatternToken::Fixed));
        tokens.extend_from_slice(&self.pattern.tokens()[2..2 + self.gap]);
        tokens.extend(height.to_le_bytes().map(PatternToken::Fixed));

        Self {
            width: width_text,
            between: self.between.clone(),
            height: height_text,
            pattern: Pattern::from_tokens(tokens).unwrap_or_else(|_| self.pattern.clone()),
            gap: self.gap,
        }
    }
}

impl fmt::Display for ResolutionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

/// Little-endian hex text for a 16-bit field, e.g. 800 -> `"20 03"`.
pub fn encode_field(value: u16) -> String {
    let [lo, hi] = value.to_le_bytes();
    format!("{:02X} {:02X}", lo, hi)
}

fn check_field(field: &'static str, text: &str) -> Result<(), PatternError> {
    let tokens = Pattern::parse(text)?.len();
    if tokens != 2 {
        return Err(PatternError::FieldWidth { field, tokens });
    }
    Ok(())
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
