pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{dedup_camera, run_dedup, run_dedup_reported};
pub use types::{CameraReport, DedupReport, DedupStage, ProgressReporter};
