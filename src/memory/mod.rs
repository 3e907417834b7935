// Fri Oct 16 2026 - Alex

pub mod binary;
pub mod error;
pub mod mmap;
pub mod traits;

pub use binary::BinaryFile;
pub use error::MemoryError;
pub use mmap::MmapFile;
pub use traits::ByteSource;
