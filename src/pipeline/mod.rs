// Fri Oct 16 2026 - Alex

//! The ordered file operations around the patcher core: patch, uninstall,
//! status and scan. Each step returns a typed result.

pub mod error;
pub mod patch;
pub mod scan;

pub use error::PipelineError;
pub use patch::{uninstall, PatchPipeline, PatchReport, PatchRequest, PatchStep};
pub use scan::{scan_file, scan_files, ScanEntry};
