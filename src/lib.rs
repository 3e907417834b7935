// Fri Oct 16 2026 - Alex

//! Locate a width/height pair in a legacy executable by wildcard byte
//! pattern and hard-patch it to a new screen resolution.

pub mod backup;
pub mod config;
pub mod memory;
pub mod patch;
pub mod pattern;
pub mod pipeline;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use patch::{PatchError, PatchOutcome, Resolution};
pub use pattern::{Pattern, PatternError, PatternMatcher, PatternToken, ResolutionSignature};
pub use pipeline::{PatchPipeline, PipelineError};
