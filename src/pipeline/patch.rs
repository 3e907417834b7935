// Fri Oct 16 2026 - Alex

use crate::backup::{self, BackupStatus};
use crate::memory::{BinaryFile, ByteSource};
use crate::patch::{self, PatchOutcome, Resolution};
use crate::pattern::ResolutionSignature;
use crate::pipeline::PipelineError;
use crate::utils::Fingerprint;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PatchRequest {
    pub target: PathBuf,
    pub resolution: Resolution,
    pub signature: ResolutionSignature,
    pub create_backup: bool,
}

#[derive(Debug, Clone)]
pub struct PatchReport {
    pub target: PathBuf,
    pub outcome: PatchOutcome,
    pub before: Fingerprint,
    pub after: Fingerprint,
    pub backup: Option<BackupStatus>,
    /// Pattern that locates the fields now that they hold the new resolution.
    pub retargeted: ResolutionSignature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStep {
    Load,
    Locate,
    Backup,
    Save,
}

impl PatchStep {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Load => "Loading executable",
            Self::Locate => "Searching for resolution pattern",
            Self::Backup => "Creating backup",
            Self::Save => "Writing patched executable",
        }
    }
}

/// Load, locate, back up, write. The file on disk is only touched once the
/// pattern has been found in memory.
pub struct PatchPipeline {
    request: PatchRequest,
    on_step: Option<Box<dyn Fn(PatchStep) + Send + Sync>>,
}

impl PatchPipeline {
    pub fn new(request: PatchRequest) -> Self {
        Self {
            request,
            on_step: None,
        }
    }

    pub fn on_step<F>(mut self, f: F) -> Self
    where
        F: Fn(PatchStep) + Send + Sync + 'static,
    {
        self.on_step = Some(Box::new(f));
        self
    }

    fn step(&self, step: PatchStep) {
        debug!("{}", step.description());
        if let Some(f) = &self.on_step {
            f(step);
        }
    }

    pub fn run(self) -> Result<PatchReport, PipelineError> {
        let request = &self.request;
        info!(
            "Patching {} to {} using pattern {}",
            request.target.display(),
            request.resolution,
            request.signature
        );

        self.step(PatchStep::Load);
        let mut file = BinaryFile::load(&request.target)?;
        let before = Fingerprint::of(file.bytes());
        info!("Before patch: {}", before);

        self.step(PatchStep::Locate);
        let outcome = patch::apply(file.data_mut(), &request.signature, request.resolution)?;
        info!(
            "{} found at offset 0x{:x}, current resolution {}",
            request.signature, outcome.offset, outcome.previous
        );

        let backup = if request.create_backup {
            self.step(PatchStep::Backup);
            Some(backup::create(&request.target)?)
        } else {
            info!("Backups disabled, not creating one.");
            None
        };

        self.step(PatchStep::Save);
        file.save()?;
        let after = Fingerprint::of(file.bytes());
        info!("After patch: {}", after);

        Ok(PatchReport {
            target: request.target.clone(),
            outcome,
            before,
            after,
            backup,
            retargeted: request
                .signature
                .retarget(request.resolution.width, request.resolution.height),
        })
    }
}

/// Restores the backup over `target`.
pub fn uninstall(target: &Path) -> Result<PathBuf, PipelineError> {
    info!("Uninstalling patch from {}", target.display());
    Ok(backup::restore(target)?)
}
