use std::fmt;

use crate::frame::FrameRecord;

/// Why a frame was kept or dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// First frame of the sequence; seeds the reference.
    Seed,
    /// Score exceeded the change threshold; frame became the new reference.
    Changed { score: u64 },
    /// Score at or below the threshold.
    Duplicate { score: u64 },
    /// Reference or candidate could not be decoded.
    LoadFailure,
}

impl Verdict {
    pub fn retained(&self) -> bool {
        matches!(self, Self::Seed | Self::Changed { .. })
    }

    /// Score that caused retention: 0 for the seed and for dropped frames.
    pub fn triggering_score(&self) -> u64 {
        match self {
            Self::Changed { score } => *score,
            _ => 0,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seed => write!(f, "seed"),
            Self::Changed { score } => write!(f, "changed ({score})"),
            Self::Duplicate { score } => write!(f, "duplicate ({score})"),
            Self::LoadFailure => write!(f, "load failure"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameDecision {
    pub frame: FrameRecord,
    pub verdict: Verdict,
}

impl FrameDecision {
    pub fn retained(&self) -> bool {
        self.verdict.retained()
    }
}

/// Retention decisions for one camera, one entry per input frame in
/// sequence order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetentionDecision {
    pub decisions: Vec<FrameDecision>,
}

impl RetentionDecision {
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameDecision> {
        self.decisions.iter()
    }

    pub fn retained(&self) -> impl Iterator<Item = &FrameRecord> {
        self.decisions
            .iter()
            .filter(|d| d.retained())
            .map(|d| &d.frame)
    }

    pub fn retained_count(&self) -> usize {
        self.decisions.iter().filter(|d| d.retained()).count()
    }

    pub fn load_failures(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.verdict == Verdict::LoadFailure)
            .count()
    }
}
