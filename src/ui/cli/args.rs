// Fri Oct 16 2026 - Alex

use crate::patch::{Resolution, ResolutionError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resolution-patcher")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Hard-patch the screen resolution of a legacy executable", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON config with the executable name and pattern segments
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Patch the resolution into the target executable
    Patch(PatchArgs),
    /// Restore the target from its backup
    Uninstall(TargetArgs),
    /// Show backup state and the resolution currently in the target
    Status(TargetArgs),
    /// Look for the pattern in one or more files without modifying them
    Scan(ScanArgs),
    /// Write the default config to a file
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
pub struct PatchArgs {
    #[arg(short, long)]
    pub target: PathBuf,

    #[arg(long, allow_negative_numbers = true)]
    pub width: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub height: i64,

    #[arg(long)]
    pub width_pattern: Option<String>,

    #[arg(long)]
    pub between_pattern: Option<String>,

    #[arg(long)]
    pub height_pattern: Option<String>,

    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Parser, Debug)]
pub struct TargetArgs {
    #[arg(short, long)]
    pub target: PathBuf,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long)]
    pub threads: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    #[arg(short, long, default_value = "resolution-patcher.json")]
    pub output: PathBuf,

    #[arg(long)]
    pub force: bool,
}

impl PatchArgs {
    pub fn resolution(&self) -> Result<Resolution, ResolutionError> {
        Resolution::checked(self.width, self.height)
    }
}

impl ScanArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == Some(0) {
            return Err("Thread count must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patch_command() {
        let args = Args::try_parse_from([
            "resolution-patcher",
            "patch",
            "--target",
            "Sims.exe",
            "--width",
            "1920",
            "--height",
            "1080",
            "--between-pattern",
            "?? ?? ??",
            "--no-backup",
        ])
        .unwrap();

        match args.command {
            Command::Patch(patch) => {
                assert_eq!(patch.target, PathBuf::from("Sims.exe"));
                assert_eq!(patch.resolution().unwrap(), Resolution::new(1920, 1080));
                assert_eq!(patch.between_pattern.as_deref(), Some("?? ?? ??"));
                assert!(patch.no_backup);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_patch_resolution_out_of_range() {
        let args = Args::try_parse_from([
            "resolution-patcher", "patch", "-t", "Sims.exe", "--width", "70000", "--height", "600",
        ])
        .unwrap();

        let Command::Patch(patch) = args.command else {
            panic!("expected patch");
        };
        assert!(patch.resolution().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "resolution-patcher", "status", "-t", "Sims.exe", "--quiet", "--config", "p.json",
        ])
        .unwrap();
        assert!(args.quiet);
        assert_eq!(args.config, Some(PathBuf::from("p.json")));
    }

    #[test]
    fn test_scan_requires_files() {
        assert!(Args::try_parse_from(["resolution-patcher", "scan"]).is_err());

        let args = Args::try_parse_from(["resolution-patcher", "scan", "a.exe", "b.exe", "--threads", "0"]).unwrap();
        let Command::Scan(scan) = args.command else {
            panic!("expected scan");
        };
        assert_eq!(scan.files.len(), 2);
        assert!(scan.validate().is_err());
    }
}
