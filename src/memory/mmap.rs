// Fri Oct 16 2026 - Alex

use crate::memory::binary::ensure_file;
use crate::memory::{ByteSource, MemoryError};
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Read-only view of a file for scanning without copying it.
pub struct MmapFile {
    // Empty files cannot be mapped on every platform, so they are kept unmapped.
    mmap: Option<Mmap>,
    path: PathBuf,
}

impl MmapFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path = path.as_ref().to_path_buf();
        ensure_file(&path)?;

        let map_err = |source| MemoryError::Map {
            path: path.clone(),
            source,
        };

        let file = File::open(&path).map_err(map_err)?;
        let len = file.metadata().map_err(map_err)?.len();
        let mmap = if len == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file) }.map_err(map_err)?)
        };

        Ok(Self { mmap, path })
    }
}

impl ByteSource for MmapFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}
