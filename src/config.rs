// Fri Oct 16 2026 - Alex

use crate::pattern::{PatternError, ResolutionSignature};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_EXECUTABLE: &str = "Sims";
pub const DEFAULT_WIDTH_PATTERN: &str = "20 03";
pub const DEFAULT_BETWEEN_PATTERN: &str = "?? ??";
pub const DEFAULT_HEIGHT_PATTERN: &str = "58 02";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),
    #[error("Invalid config: {0}")]
    Validation(String),
    #[error("Invalid config pattern: {0}")]
    Pattern(#[from] PatternError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Executable name without extension, used for messages and file filters.
    pub executable: String,
    pub width_pattern: String,
    pub between_pattern: String,
    pub height_pattern: String,
    pub create_backup: bool,
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            width_pattern: DEFAULT_WIDTH_PATTERN.to_string(),
            between_pattern: DEFAULT_BETWEEN_PATTERN.to_string(),
            height_pattern: DEFAULT_HEIGHT_PATTERN.to_string(),
            create_backup: true,
            threads: num_cpus::get(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        check_extension(path)?;
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        check_extension(path)?;

        let contents = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;
        Ok(())
    }

    pub fn with_width_pattern(mut self, pattern: &str) -> Self {
        self.width_pattern = pattern.to_string();
        self
    }

    pub fn with_between_pattern(mut self, pattern: &str) -> Self {
        self.between_pattern = pattern.to_string();
        self
    }

    pub fn with_height_pattern(mut self, pattern: &str) -> Self {
        self.height_pattern = pattern.to_string();
        self
    }

    pub fn with_backup(mut self, enabled: bool) -> Self {
        self.create_backup = enabled;
        self
    }

    pub fn signature(&self) -> Result<ResolutionSignature, PatternError> {
        ResolutionSignature::new(&self.width_pattern, &self.between_pattern, &self.height_pattern)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.executable.trim().is_empty() {
            return Err(ConfigError::Validation("executable must not be empty".to_string()));
        }
        if self.threads == 0 {
            return Err(ConfigError::Validation("threads must be > 0".to_string()));
        }
        self.signature()?;
        Ok(())
    }

    /// The file name a target is expected to have, e.g. `Sims.exe`.
    pub fn executable_file_name(&self) -> String {
        format!("{}.exe", self.executable)
    }
}

fn check_extension(path: &Path) -> Result<(), ConfigError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext.eq_ignore_ascii_case("json") {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedFormat(ext.to_string()))
    }
}
