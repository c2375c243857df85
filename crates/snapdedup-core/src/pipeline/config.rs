use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::compare::ComparatorConfig;
use crate::error::Result;
use crate::io::discover::DiscoveryConfig;
use crate::review::ReviewConfig;
use crate::walker::WalkerConfig;

/// Full configuration of a deduplication run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Flat folder of camera snapshots.
    pub input: PathBuf,
    /// Remove dropped frames from disk after each camera's walk.
    #[serde(default)]
    pub delete: bool,
    /// Report what would be deleted without touching any file.
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub comparator: ComparatorConfig,
    #[serde(default)]
    pub walker: WalkerConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Write a contact sheet per camera when set.
    #[serde(default)]
    pub review: Option<ReviewConfig>,
}

impl DedupConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            delete: false,
            dry_run: false,
            comparator: ComparatorConfig::default(),
            walker: WalkerConfig::default(),
            discovery: DiscoveryConfig::default(),
            review: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.comparator.validate()?;
        if let Some(review) = &self.review {
            review.validate()?;
        }
        Ok(())
    }
}
