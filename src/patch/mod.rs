// Fri Oct 16 2026 - Alex

//! Writes a resolution pair into a buffer at the location found by a
//! [`ResolutionSignature`]. The write happens only after a successful
//! search, and all four bytes are written or none are.

pub mod error;
pub mod resolution;

pub use error::{PatchError, ResolutionError};
pub use resolution::Resolution;

use crate::pattern::{PatternMatcher, ResolutionSignature};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchOutcome {
    pub offset: usize,
    pub gap: usize,
    pub previous: Resolution,
    pub applied: Resolution,
}

impl PatchOutcome {
    pub fn height_offset(&self) -> usize {
        self.offset + 2 + self.gap
    }

    pub fn changed(&self) -> bool {
        self.previous != self.applied
    }
}

/// Locates the signature in `buffer` without modifying it.
pub fn locate(buffer: &[u8], signature: &ResolutionSignature) -> Result<PatchOutcome, PatchError> {
    let offset = PatternMatcher::new(signature.pattern())
        .find(buffer)
        .ok_or_else(|| PatchError::PatternNotFound(signature.to_string()))?;

    let h = offset + signature.height_offset();
    let previous = Resolution::from_le_fields(
        [buffer[offset], buffer[offset + 1]],
        [buffer[h], buffer[h + 1]],
    );

    Ok(PatchOutcome {
        offset,
        gap: signature.gap(),
        previous,
        applied: previous,
    })
}

/// Finds the signature and overwrites the width and height fields in place.
pub fn apply(
    buffer: &mut [u8],
    signature: &ResolutionSignature,
    resolution: Resolution,
) -> Result<PatchOutcome, PatchError> {
    let mut outcome = locate(buffer, signature)?;

    let s = outcome.offset;
    let h = outcome.height_offset();
    let [w_lo, w_hi] = resolution.width.to_le_bytes();
    let [h_lo, h_hi] = resolution.height.to_le_bytes();

    buffer[s] = w_lo;
    buffer[s + 1] = w_hi;
    buffer[h] = h_lo;
    buffer[h + 1] = h_hi;

    outcome.applied = resolution;
    Ok(outcome)
}

/// Parses the three segments and patches `buffer`.
pub fn apply_text(
    buffer: &mut [u8],
    width_pattern: &str,
    between_pattern: &str,
    height_pattern: &str,
    resolution: Resolution,
) -> Result<PatchOutcome, PatchError> {
    let signature = ResolutionSignature::new(width_pattern, between_pattern, height_pattern)?;
    apply(buffer, &signature, resolution)
}
