use std::path::PathBuf;

use tracing::{info, warn};

use crate::walker::{RetentionDecision, Verdict};

/// Outcome of removing a camera's dropped frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeletionReport {
    /// Files removed, or that would be removed in a dry run.
    pub deleted: Vec<PathBuf>,
    /// Files that could not be removed, with the error message.
    pub failed: Vec<(PathBuf, String)>,
    /// Dropped frames left on disk because they were never actually compared.
    pub skipped: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Delete every frame the decision judged a duplicate.
///
/// Must run only after the camera's walk has finished. Retained frames are
/// never touched, so the reference chain stays intact. Frames dropped on a
/// load failure are kept on disk: with an unreadable reference nothing was
/// compared. Individual failures are collected rather than aborting.
pub fn delete_duplicates(decision: &RetentionDecision, dry_run: bool) -> DeletionReport {
    let mut report = DeletionReport {
        dry_run,
        ..Default::default()
    };

    for entry in decision.iter().filter(|d| !d.retained()) {
        let frame = &entry.frame;
        if entry.verdict == Verdict::LoadFailure {
            report.skipped.push(frame.path.clone());
            continue;
        }
        if dry_run {
            report.deleted.push(frame.path.clone());
            continue;
        }
        match std::fs::remove_file(&frame.path) {
            Ok(()) => report.deleted.push(frame.path.clone()),
            Err(err) => {
                warn!(file = %frame.path.display(), error = %err, "Failed to delete frame");
                report.failed.push((frame.path.clone(), err.to_string()));
            }
        }
    }

    info!(
        deleted = report.deleted.len(),
        failed = report.failed.len(),
        skipped = report.skipped.len(),
        dry_run,
        "Duplicate deletion finished"
    );
    report
}
