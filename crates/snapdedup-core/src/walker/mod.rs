//! Moving-reference walk over one camera's chronologically ordered frames.

pub mod decision;
pub mod scorer;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::compare::ComparisonOutcome;
use crate::consts::DEFAULT_CHANGE_THRESHOLD;
use crate::frame::FrameRecord;

pub use decision::{FrameDecision, RetentionDecision, Verdict};
pub use scorer::{FrameScorer, ImageScorer};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// A frame is kept when its change score is strictly greater than this.
    #[serde(default = "default_change_threshold")]
    pub change_threshold: u64,
}

fn default_change_threshold() -> u64 {
    DEFAULT_CHANGE_THRESHOLD
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
        }
    }
}

/// Walk a camera's frames in order, comparing each against the most recently
/// retained frame.
///
/// The first frame is always kept. A later frame is kept, and becomes the new
/// reference, when its score exceeds `change_threshold`. Frames that fail to
/// load are dropped without moving the reference. The scorer is called
/// exactly `frames.len() - 1` times.
pub fn walk<S: FrameScorer + ?Sized>(
    frames: &[FrameRecord],
    scorer: &mut S,
    config: &WalkerConfig,
) -> RetentionDecision {
    let Some((seed, rest)) = frames.split_first() else {
        return RetentionDecision::default();
    };

    let mut decisions = Vec::with_capacity(frames.len());
    decisions.push(FrameDecision {
        frame: seed.clone(),
        verdict: Verdict::Seed,
    });

    let (_, decisions) = rest
        .iter()
        .fold((seed, decisions), |(reference, mut decisions), frame| {
            let verdict = match scorer.score(reference, frame) {
                ComparisonOutcome::LoadFailure => {
                    warn!(
                        reference = %reference.path.display(),
                        candidate = %frame.path.display(),
                        "Could not load frame pair, dropping candidate"
                    );
                    Verdict::LoadFailure
                }
                ComparisonOutcome::Compared(result) if result.score > config.change_threshold => {
                    Verdict::Changed {
                        score: result.score,
                    }
                }
                ComparisonOutcome::Compared(result) => Verdict::Duplicate {
                    score: result.score,
                },
            };
            debug!(frame = %frame.file_name(), %verdict, "Frame scored");

            let next_reference = if verdict.retained() { frame } else { reference };
            decisions.push(FrameDecision {
                frame: frame.clone(),
                verdict,
            });
            (next_reference, decisions)
        });

    RetentionDecision { decisions }
}
