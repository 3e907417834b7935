// Fri Oct 16 2026 - Alex

use crate::memory::{ByteSource, MemoryError};
use std::fs;
use std::path::{Path, PathBuf};

/// An executable loaded fully into memory so it can be patched in place.
pub struct BinaryFile {
    data: Vec<u8>,
    path: PathBuf,
}

impl BinaryFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path = path.as_ref().to_path_buf();
        ensure_file(&path)?;

        let data = fs::read(&path).map_err(|source| MemoryError::Read {
            path: path.clone(),
            source,
        })?;

        Ok(Self { data, path })
    }

    pub fn from_vec<P: AsRef<Path>>(path: P, data: Vec<u8>) -> Self {
        Self {
            data,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Writes the current contents back over the file it was loaded from.
    pub fn save(&self) -> Result<(), MemoryError> {
        self.save_as(&self.path)
    }

    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<(), MemoryError> {
        let path = path.as_ref();
        fs::write(path, &self.data).map_err(|source| MemoryError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ByteSource for BinaryFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

pub(crate) fn ensure_file(path: &Path) -> Result<(), MemoryError> {
    if !path.exists() {
        return Err(MemoryError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(MemoryError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}
