// Fri Oct 16 2026 - Alex

use std::path::Path;

/// A whole file's contents, addressed by zero-based file offset.
pub trait ByteSource: Send + Sync {
    fn path(&self) -> &Path;
    fn bytes(&self) -> &[u8];

    fn len(&self) -> usize {
        self.bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}
