use std::path::PathBuf;

use crate::io::delete::DeletionReport;
use crate::walker::RetentionDecision;

/// Deduplication stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedupStage {
    Discovering,
    Walking,
}

impl std::fmt::Display for DedupStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discovering => write!(f, "Discovering frames"),
            Self::Walking => write!(f, "Comparing frames"),
        }
    }
}

/// Result of processing one camera.
#[derive(Clone, Debug)]
pub struct CameraReport {
    pub camera_id: String,
    pub decision: RetentionDecision,
    /// Path of the review contact sheet, when one was written.
    pub review: Option<PathBuf>,
    /// Present when deletion was requested.
    pub deletion: Option<DeletionReport>,
}

/// Result of a whole run, cameras in identifier order.
#[derive(Clone, Debug, Default)]
pub struct DedupReport {
    pub cameras: Vec<CameraReport>,
    pub unrecognized: Vec<PathBuf>,
    pub invalid: Vec<PathBuf>,
}

impl DedupReport {
    pub fn total_frames(&self) -> usize {
        self.cameras.iter().map(|c| c.decision.len()).sum()
    }

    pub fn total_retained(&self) -> usize {
        self.cameras.iter().map(|c| c.decision.retained_count()).sum()
    }
}

/// Thread-safe progress reporting for a run.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// in this stage (e.g., camera count), if known.
    fn begin_stage(&self, _stage: DedupStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_dedup` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
