use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::frame::FrameRecord;
use crate::io::decode::{FrameDecoder, FsDecoder};
use crate::io::delete::delete_duplicates;
use crate::io::discover::discover;
use crate::review::write_contact_sheet;
use crate::walker::{walk, ImageScorer};

use super::config::DedupConfig;
use super::types::{CameraReport, DedupReport, DedupStage, NoOpReporter, ProgressReporter};

/// Run deduplication over `config.input` with no progress reporting.
pub fn run_dedup(config: &DedupConfig) -> Result<DedupReport> {
    run_dedup_reported(config, &FsDecoder, Arc::new(NoOpReporter))
}

/// Run deduplication with an explicit decoder and progress reporter.
///
/// Cameras are processed in parallel; each camera's frames are walked
/// strictly in order. Review rendering and deletion for a camera happen only
/// after its walk has completed.
pub fn run_dedup_reported<D: FrameDecoder + ?Sized>(
    config: &DedupConfig,
    decoder: &D,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<DedupReport> {
    config.validate()?;

    reporter.begin_stage(DedupStage::Discovering, None);
    let validator = config.discovery.validate_images.then_some(decoder);
    let discovery = discover(&config.input, validator)?;
    reporter.finish_stage();

    let total = discovery.cameras.len();
    info!(
        cameras = total,
        frames = discovery.frame_count(),
        threshold = config.walker.change_threshold,
        min_area = config.comparator.min_region_area,
        "Starting deduplication"
    );

    reporter.begin_stage(DedupStage::Walking, Some(total));
    let done = AtomicUsize::new(0);
    let cameras = discovery
        .cameras
        .par_iter()
        .map(|(camera_id, frames)| {
            let report = dedup_camera(camera_id, frames, config, decoder)?;
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            reporter.advance(n);
            Ok(report)
        })
        .collect::<Result<Vec<_>>>()?;
    reporter.finish_stage();

    let report = DedupReport {
        cameras,
        unrecognized: discovery.unrecognized,
        invalid: discovery.invalid,
    };
    info!(
        frames = report.total_frames(),
        retained = report.total_retained(),
        "Deduplication complete"
    );
    Ok(report)
}

/// Walk, review and optionally delete one camera's ordered frames.
pub fn dedup_camera<D: FrameDecoder + ?Sized>(
    camera_id: &str,
    frames: &[FrameRecord],
    config: &DedupConfig,
    decoder: &D,
) -> Result<CameraReport> {
    let mut scorer = ImageScorer::new(decoder, &config.comparator);
    let decision = walk(frames, &mut scorer, &config.walker);
    info!(
        camera = camera_id,
        frames = decision.len(),
        retained = decision.retained_count(),
        load_failures = decision.load_failures(),
        "Camera walk complete"
    );

    let review = match &config.review {
        Some(review) if !decision.is_empty() => {
            Some(write_contact_sheet(camera_id, &decision, decoder, review)?)
        }
        _ => None,
    };

    let deletion = config
        .delete
        .then(|| delete_duplicates(&decision, config.dry_run));

    Ok(CameraReport {
        camera_id: camera_id.to_string(),
        decision,
        review,
        deletion,
    })
}
