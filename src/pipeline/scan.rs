// Fri Oct 16 2026 - Alex

use crate::backup;
use crate::memory::{ByteSource, MmapFile};
use crate::patch::{self, PatchError, PatchOutcome};
use crate::pattern::ResolutionSignature;
use crate::pipeline::PipelineError;
use log::debug;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub has_backup: bool,
    /// `Ok(None)` when the file was read but the pattern is absent.
    pub result: Result<Option<PatchOutcome>, PipelineError>,
}

impl ScanEntry {
    pub fn is_match(&self) -> bool {
        matches!(self.result, Ok(Some(_)))
    }
}

/// Read-only lookup of the signature in a single file.
pub fn scan_file(path: &Path, signature: &ResolutionSignature) -> ScanEntry {
    let result = MmapFile::open(path)
        .map_err(PipelineError::from)
        .and_then(|file| {
            debug!("Scanning {} ({} bytes)", path.display(), file.len());
            match patch::locate(file.bytes(), signature) {
                Ok(outcome) => Ok(Some(outcome)),
                Err(PatchError::PatternNotFound(_)) => Ok(None),
                Err(e) => Err(e.into()),
            }
        });

    ScanEntry {
        path: path.to_path_buf(),
        has_backup: backup::exists(path),
        result,
    }
}

/// Scans every path on a pool of `threads` workers. Results keep input order.
pub fn scan_files<F>(
    paths: &[PathBuf],
    signature: &ResolutionSignature,
    threads: usize,
    on_done: F,
) -> Result<Vec<ScanEntry>, PipelineError>
where
    F: Fn(&ScanEntry) + Send + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()?;

    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let entry = scan_file(path, signature);
                on_done(&entry);
                entry
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Resolution;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    fn signature() -> ResolutionSignature {
        ResolutionSignature::new("20 03", "??", "58 02").unwrap()
    }

    #[test]
    fn test_scan_file_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.exe");
        fs::write(&path, [0xFFu8, 0x20, 0x03, 0x00, 0x58, 0x02]).unwrap();

        let entry = scan_file(&path, &signature());
        assert!(entry.is_match());
        assert!(!entry.has_backup);
        let outcome = entry.result.unwrap().unwrap();
        assert_eq!(outcome.offset, 1);
        assert_eq!(outcome.previous, Resolution::new(800, 600));
    }

    #[test]
    fn test_scan_files_keeps_order_and_reports_each() {
        let dir = tempdir().unwrap();
        let found = dir.path().join("found.exe");
        let absent = dir.path().join("absent.exe");
        let missing = dir.path().join("missing.exe");
        fs::write(&found, [0x20u8, 0x03, 0x00, 0x58, 0x02]).unwrap();
        fs::write(&absent, [0x00u8; 64]).unwrap();

        let paths = vec![found.clone(), absent.clone(), missing.clone()];
        let done = AtomicUsize::new(0);
        let entries = scan_files(&paths, &signature(), 2, |_| {
            done.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert_eq!(done.load(Ordering::SeqCst), 3);
        assert_eq!(
            entries.iter().map(|e| e.path.clone()).collect::<Vec<_>>(),
            paths
        );
        assert!(entries[0].is_match());
        assert!(matches!(entries[1].result, Ok(None)));
        assert!(matches!(entries[2].result, Err(PipelineError::Memory(_))));
    }

    #[test]
    fn test_scan_does_not_modify_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.exe");
        let bytes = [0x20u8, 0x03, 0x00, 0x58, 0x02];
        fs::write(&path, bytes).unwrap();

        scan_files(&[path.clone()], &signature(), 1, |_| {}).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }
}
