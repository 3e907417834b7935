// Fri Oct 16 2026 - Alex

use crate::backup::BackupError;
use crate::memory::MemoryError;
use crate::patch::PatchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Backup(#[from] BackupError),
    #[error(transparent)]
    Patch(#[from] PatchError),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl PipelineError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Patch(PatchError::PatternNotFound(_)))
    }
}
