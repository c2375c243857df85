use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BLUR_SIGMA, DEFAULT_DILATE_ITERATIONS, DEFAULT_MIN_REGION_AREA,
    DEFAULT_PIXEL_THRESHOLD,
};
use crate::error::{DedupError, Result};
use crate::filters::BorderMask;

/// Parameters of the frame comparator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Changed regions smaller than this many pixels are discarded.
    #[serde(default = "default_min_region_area")]
    pub min_region_area: u64,
    /// Per-pixel absolute difference cutoff in [0.0, 1.0].
    #[serde(default = "default_pixel_threshold")]
    pub pixel_threshold: f32,
    /// Gaussian blur sigmas, applied in order during preprocessing.
    #[serde(default = "default_blur_sigmas")]
    pub blur_sigmas: Vec<f32>,
    /// 3x3 dilation passes over the thresholded difference mask.
    #[serde(default = "default_dilate_iterations")]
    pub dilate_iterations: usize,
    /// Keep the binary difference mask in the comparison result.
    #[serde(default, skip_serializing)]
    pub keep_mask: bool,
    /// Edge strips blanked before differencing.
    #[serde(default)]
    pub border_mask: BorderMask,
}

fn default_min_region_area() -> u64 {
    DEFAULT_MIN_REGION_AREA
}
fn default_pixel_threshold() -> f32 {
    DEFAULT_PIXEL_THRESHOLD
}
fn default_blur_sigmas() -> Vec<f32> {
    vec![DEFAULT_BLUR_SIGMA]
}
fn default_dilate_iterations() -> usize {
    DEFAULT_DILATE_ITERATIONS
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            min_region_area: DEFAULT_MIN_REGION_AREA,
            pixel_threshold: DEFAULT_PIXEL_THRESHOLD,
            blur_sigmas: vec![DEFAULT_BLUR_SIGMA],
            dilate_iterations: DEFAULT_DILATE_ITERATIONS,
            keep_mask: false,
            border_mask: BorderMask::default(),
        }
    }
}

impl ComparatorConfig {
    /// Raw pixel differencing: no blur, no border mask, no dilation.
    pub fn raw(min_region_area: u64) -> Self {
        Self {
            min_region_area,
            blur_sigmas: Vec::new(),
            border_mask: BorderMask::none(),
            dilate_iterations: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.pixel_threshold > 0.0 && self.pixel_threshold <= 1.0) {
            return Err(DedupError::InvalidConfig(format!(
                "pixel_threshold must be in (0, 1], got {}",
                self.pixel_threshold
            )));
        }
        if let Some(sigma) = self.blur_sigmas.iter().find(|s| !(**s > 0.0)) {
            return Err(DedupError::InvalidConfig(format!(
                "blur sigmas must be positive, got {sigma}"
            )));
        }
        let m = &self.border_mask;
        let fractions = [m.left, m.top, m.right, m.bottom];
        if fractions.iter().any(|f| !(0.0..1.0).contains(f)) {
            return Err(DedupError::InvalidConfig(
                "border mask fractions must be in [0, 1)".into(),
            ));
        }
        if m.left + m.right >= 1.0 || m.top + m.bottom >= 1.0 {
            return Err(DedupError::InvalidConfig(
                "border mask covers the whole image".into(),
            ));
        }
        Ok(())
    }
}
