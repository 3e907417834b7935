// Fri Oct 16 2026 - Alex

//! Side-by-side backups of a target executable.
//!
//! The backup lives next to the target as `"<stem> Backup.<ext>"`. It is
//! created once before the first patch and never overwritten, so it always
//! holds the unpatched original.

use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BACKUP_SUFFIX: &str = " Backup";

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("No backup found at {0}")]
    Missing(PathBuf),
    #[error("Target path {0} has no file name")]
    InvalidTarget(PathBuf),
    #[error("Failed to create backup {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to restore {path}: {source}")]
    Restore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    Created,
    AlreadyExists,
}

pub fn backup_path(target: &Path) -> Result<PathBuf, BackupError> {
    let stem = target
        .file_stem()
        .ok_or_else(|| BackupError::InvalidTarget(target.to_path_buf()))?
        .to_string_lossy();
    let parent = target.parent().unwrap_or(Path::new("."));

    let name = match target.extension() {
        Some(ext) => format!("{}{}.{}", stem, BACKUP_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, BACKUP_SUFFIX),
    };

    Ok(parent.join(name))
}

pub fn exists(target: &Path) -> bool {
    backup_path(target).map(|p| p.is_file()).unwrap_or(false)
}

pub fn create(target: &Path) -> Result<BackupStatus, BackupError> {
    let path = backup_path(target)?;

    if path.exists() {
        info!("A previous backup already exists at {}, not creating another.", path.display());
        return Ok(BackupStatus::AlreadyExists);
    }

    fs::copy(target, &path).map_err(|source| BackupError::Create {
        path: path.clone(),
        source,
    })?;
    info!("Created backup {}", path.display());

    Ok(BackupStatus::Created)
}

/// Replaces the target with its backup. The backup file is consumed.
pub fn restore(target: &Path) -> Result<PathBuf, BackupError> {
    let path = backup_path(target)?;
    if !path.is_file() {
        return Err(BackupError::Missing(path));
    }

    let restore_err = |source| BackupError::Restore {
        path: target.to_path_buf(),
        source,
    };

    if target.exists() {
        info!("Deleting {}", target.display());
        fs::remove_file(target).map_err(restore_err)?;
    }
    fs::rename(&path, target).map_err(restore_err)?;
    info!("Restored {} from {}", target.display(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_backup_path_keeps_extension() {
        let path = backup_path(Path::new("/games/Sims/Sims.exe")).unwrap();
        assert_eq!(path, PathBuf::from("/games/Sims/Sims Backup.exe"));
    }

    #[test]
    fn test_backup_path_without_extension() {
        let path = backup_path(Path::new("bin/game")).unwrap();
        assert_eq!(path, PathBuf::from("bin/game Backup"));
    }

    #[test]
    fn test_backup_path_rejects_root() {
        assert!(matches!(
            backup_path(Path::new("/")),
            Err(BackupError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_create_never_overwrites() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Sims.exe");
        fs::write(&target, b"original").unwrap();

        assert!(!exists(&target));
        assert_eq!(create(&target).unwrap(), BackupStatus::Created);
        assert!(exists(&target));

        fs::write(&target, b"patched").unwrap();
        assert_eq!(create(&target).unwrap(), BackupStatus::AlreadyExists);

        let backup = fs::read(dir.path().join("Sims Backup.exe")).unwrap();
        assert_eq!(backup, b"original");
    }

    #[test]
    fn test_restore_replaces_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Sims.exe");
        fs::write(&target, b"original").unwrap();
        create(&target).unwrap();
        fs::write(&target, b"patched").unwrap();

        let consumed = restore(&target).unwrap();
        assert!(!consumed.exists());
        assert!(!exists(&target));
        assert_eq!(fs::read(&target).unwrap(), b"original");
    }

    #[test]
    fn test_restore_without_backup() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("Sims.exe");
        fs::write(&target, b"patched").unwrap();

        assert!(matches!(restore(&target), Err(BackupError::Missing(_))));
        assert_eq!(fs::read(&target).unwrap(), b"patched");
    }
}
