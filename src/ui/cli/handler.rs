// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, InitConfigArgs, PatchArgs, ScanArgs, TargetArgs};
use crate::backup::{self, BackupStatus};
use crate::config::Config;
use crate::pipeline::{self, PatchPipeline, PatchRequest, ScanEntry};
use crate::ui::progress::ProgressManager;
use crate::utils::measure_time;
use anyhow::{anyhow, Context};
use colored::Colorize;
use log::{info, warn};
use std::path::Path;

pub struct CommandHandler {
    progress: ProgressManager,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            progress: ProgressManager::new(),
        }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;

        if args.no_color {
            colored::control::set_override(false);
        }
        self.progress = ProgressManager::new().with_enabled(!args.quiet);

        let config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        match args.command {
            Command::Patch(patch_args) => self.handle_patch(config, patch_args),
            Command::Uninstall(target_args) => self.handle_uninstall(target_args),
            Command::Status(target_args) => self.handle_status(&config, target_args),
            Command::Scan(scan_args) => self.handle_scan(&config, scan_args),
            Command::InitConfig(init_args) => self.handle_init_config(&config, init_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialise logging: {}", e))?;

        Ok(())
    }

    fn handle_patch(&self, config: Config, args: PatchArgs) -> anyhow::Result<()> {
        let resolution = args.resolution()?;

        let mut config = config;
        if let Some(p) = &args.width_pattern {
            config = config.with_width_pattern(p);
        }
        if let Some(p) = &args.between_pattern {
            config = config.with_between_pattern(p);
        }
        if let Some(p) = &args.height_pattern {
            config = config.with_height_pattern(p);
        }
        if args.no_backup {
            config = config.with_backup(false);
        }

        let signature = config.signature()?;
        self.check_target_name(&config, &args.target);

        println!("{} Target: {}", "[*]".blue(), args.target.display());
        println!("{} Resolution chosen is: {}", "[*]".blue(), resolution);

        let spinner = self.progress.create_spinner("Patching...");
        let progress = spinner.clone();
        let pipeline = PatchPipeline::new(PatchRequest {
            target: args.target.clone(),
            resolution,
            signature,
            create_backup: config.create_backup,
        })
        .on_step(move |step| progress.set_message(step.description()));

        let (result, elapsed) = measure_time(|| pipeline.run());
        spinner.finish_and_clear();

        let report = match result {
            Ok(report) => report,
            Err(e) if e.is_not_found() => {
                println!("{} {} was left untouched", "[!]".red(), args.target.display());
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        match report.backup {
            Some(BackupStatus::Created) => println!("{} Created backup", "[+]".green()),
            Some(BackupStatus::AlreadyExists) => {
                println!("{} A previous backup already exists, kept it", "[*]".blue())
            }
            None => println!("{} No backup created", "[*]".yellow()),
        }

        println!(
            "{} Pattern found at 0x{:x}, {} -> {}",
            "[+]".green(),
            report.outcome.offset,
            report.outcome.previous,
            report.outcome.applied
        );
        println!("{} Before: {}", "[*]".blue(), report.before);
        println!("{} After:  {}", "[*]".blue(), report.after);
        println!(
            "{} Patched in {:.2}s",
            "[+]".green(),
            elapsed.as_secs_f64()
        );
        println!(
            "{} To patch again use --width-pattern \"{}\" --height-pattern \"{}\"",
            "[*]".blue(),
            report.retargeted.width_segment(),
            report.retargeted.height_segment()
        );

        Ok(())
    }

    fn handle_uninstall(&self, args: TargetArgs) -> anyhow::Result<()> {
        let consumed = pipeline::uninstall(&args.target)?;
        println!(
            "{} Uninstalled, restored {} from {}",
            "[+]".green(),
            args.target.display(),
            consumed.display()
        );
        Ok(())
    }

    fn handle_status(&self, config: &Config, args: TargetArgs) -> anyhow::Result<()> {
        let signature = config.signature()?;
        let entry = pipeline::scan_file(&args.target, &signature);
        self.print_entry(&entry);

        if entry.has_backup {
            let path = backup::backup_path(&args.target)?;
            println!("{} Backup: {}", "[+]".green(), path.display());
        } else {
            println!("{} No backup present", "[*]".yellow());
        }

        entry.result.map(|_| ()).map_err(Into::into)
    }

    fn handle_scan(&self, config: &Config, args: ScanArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow!(e))?;

        let signature = config.signature()?;
        let threads = args.threads.unwrap_or(config.threads);
        info!("Scanning {} files on {} threads", args.files.len(), threads);

        let bar = self.progress.create_bar(args.files.len() as u64, "Scanning");
        let entries = pipeline::scan_files(&args.files, &signature, threads, |_| bar.inc(1))?;
        bar.finish_and_clear();

        for entry in &entries {
            self.print_entry(entry);
        }

        let matched = entries.iter().filter(|e| e.is_match()).count();
        println!(
            "{} {} of {} files contain {}",
            "[*]".blue(),
            matched,
            entries.len(),
            signature
        );
        Ok(())
    }

    fn handle_init_config(&self, config: &Config, args: InitConfigArgs) -> anyhow::Result<()> {
        if args.output.exists() && !args.force {
            return Err(anyhow!(
                "{} already exists, pass --force to overwrite",
                args.output.display()
            ));
        }

        config.save(&args.output)?;
        println!("{} Config written to: {}", "[+]".green(), args.output.display());
        Ok(())
    }

    fn print_entry(&self, entry: &ScanEntry) {
        match &entry.result {
            Ok(Some(outcome)) => println!(
                "{} {}: 0x{:x} ({})",
                "[+]".green(),
                entry.path.display(),
                outcome.offset,
                outcome.previous
            ),
            Ok(None) => println!("{} {}: pattern not found", "[-]".yellow(), entry.path.display()),
            Err(e) => println!("{} {}: {}", "[!]".red(), entry.path.display(), e),
        }
    }

    fn check_target_name(&self, config: &Config, target: &Path) {
        let expected = config.executable_file_name();
        let matches = target
            .file_name()
            .map(|n| n.to_string_lossy().eq_ignore_ascii_case(&expected))
            .unwrap_or(false);
        if !matches {
            warn!("Target {} is not named {}", target.display(), expected);
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
