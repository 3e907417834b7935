// Fri Oct 16 2026 - Alex

use crate::pattern::Pattern;
use memchr::memchr_iter;

/// Leftmost-match search for a wildcard pattern over an in-memory buffer.
///
/// Candidate starts are located with `memchr` on the first fixed token of
/// the pattern (the anchor), then the full window is verified. The result
/// is identical to a naive scan of every start offset in ascending order.
pub struct PatternMatcher<'a> {
    pattern: &'a Pattern,
    anchor: Option<(usize, u8)>,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(pattern: &'a Pattern) -> Self {
        let anchor = pattern
            .tokens()
            .iter()
            .enumerate()
            .find_map(|(i, token)| token.to_byte().map(|b| (i, b)));

        Self { pattern, anchor }
    }

    pub fn pattern(&self) -> &Pattern {
        self.pattern
    }

    pub fn find(&self, data: &[u8]) -> Option<usize> {
        let len = self.pattern.len();
        if len == 0 || data.len() < len {
            return None;
        }

        let last_start = data.len() - len;

        let (anchor_index, anchor_byte) = match self.anchor {
            Some(anchor) => anchor,
            // All wildcards: the first window that fits is a match.
            None => return Some(0),
        };

        let haystack = &data[anchor_index..=last_start + anchor_index];
        memchr_iter(anchor_byte, haystack).find(|&start| self.pattern.matches(&data[start..]))
    }

    pub fn is_match(&self, data: &[u8]) -> bool {
        self.find(data).is_some()
    }
}
