//! Change detection between two frames.
//!
//! Pipeline: size reconciliation -> preprocessing (luminance, blur, border
//! mask) -> absolute difference -> threshold -> dilation -> connected
//! components -> area filter -> score.

pub mod config;
pub mod preprocess;

use std::borrow::Cow;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ndarray::{Array2, Zip};
use tracing::debug;

use crate::detection::{connected_components, dilate, ComponentStats};

pub use config::ComparatorConfig;
pub use preprocess::{preprocess, to_luminance};

/// Bounding geometry of one connected group of changed pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeRegion {
    /// Left column of the bounding box.
    pub x: usize,
    /// Top row of the bounding box.
    pub y: usize,
    pub width: usize,
    pub height: usize,
    /// Number of changed pixels in the region.
    pub area: u64,
}

impl From<&ComponentStats> for ChangeRegion {
    fn from(c: &ComponentStats) -> Self {
        let (min_row, max_row, min_col, max_col) = c.bbox;
        Self {
            x: min_col,
            y: min_row,
            width: max_col - min_col + 1,
            height: max_row - min_row + 1,
            area: c.area as u64,
        }
    }
}

/// A successful comparison.
///
/// `score` always equals the sum of `regions[i].area`.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub score: u64,
    /// Surviving regions in discovery (raster-scan) order.
    pub regions: Vec<ChangeRegion>,
    /// Dilated binary difference mask, present when `keep_mask` is set.
    pub diff_mask: Option<Array2<bool>>,
}

impl ComparisonResult {
    fn from_regions(regions: Vec<ChangeRegion>, diff_mask: Option<Array2<bool>>) -> Self {
        Self {
            score: regions.iter().map(|r| r.area).sum(),
            regions,
            diff_mask,
        }
    }
}

/// Outcome of comparing two frames. A frame that could not be loaded is a
/// value here, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ComparisonOutcome {
    Compared(ComparisonResult),
    LoadFailure,
}

impl ComparisonOutcome {
    /// Change score, or `None` on load failure.
    pub fn score(&self) -> Option<u64> {
        match self {
            Self::Compared(result) => Some(result.score),
            Self::LoadFailure => None,
        }
    }
}

/// Compare two decoded images. `None` stands for an image that failed to
/// load and yields [`ComparisonOutcome::LoadFailure`].
pub fn compare_images(
    a: Option<&DynamicImage>,
    b: Option<&DynamicImage>,
    config: &ComparatorConfig,
) -> ComparisonOutcome {
    let (Some(a), Some(b)) = (a, b) else {
        return ComparisonOutcome::LoadFailure;
    };

    let (a, b) = reconcile_sizes(a, b);
    let prev = preprocess(&a, config);
    let next = preprocess(&b, config);

    ComparisonOutcome::Compared(compare_preprocessed(&prev, &next, config))
}

/// Difference two preprocessed frames of identical shape.
pub fn compare_preprocessed(
    prev: &Array2<f32>,
    next: &Array2<f32>,
    config: &ComparatorConfig,
) -> ComparisonResult {
    debug_assert_eq!(prev.dim(), next.dim());

    let mut mask = Array2::from_elem(prev.dim(), false);
    Zip::from(&mut mask)
        .and(prev)
        .and(next)
        .for_each(|m, &p, &n| *m = (p - n).abs() > config.pixel_threshold);
    let mask = dilate(&mask, config.dilate_iterations);

    let components = connected_components(&mask);
    let total = components.len();
    let regions: Vec<ChangeRegion> = components
        .iter()
        .filter(|c| c.area as u64 >= config.min_region_area)
        .map(ChangeRegion::from)
        .collect();

    debug!(
        components = total,
        kept = regions.len(),
        min_area = config.min_region_area,
        "Difference mask analysed"
    );

    let diff_mask = config.keep_mask.then_some(mask);
    ComparisonResult::from_regions(regions, diff_mask)
}

/// Bring both images to the same size by shrinking the one with more pixels
/// (nearest neighbour) to the other's dimensions. On equal pixel counts the
/// second image is resized.
pub fn reconcile_sizes<'a>(
    a: &'a DynamicImage,
    b: &'a DynamicImage,
) -> (Cow<'a, DynamicImage>, Cow<'a, DynamicImage>) {
    let (aw, ah) = a.dimensions();
    let (bw, bh) = b.dimensions();
    if (aw, ah) == (bw, bh) {
        return (Cow::Borrowed(a), Cow::Borrowed(b));
    }

    let a_pixels = aw as u64 * ah as u64;
    let b_pixels = bw as u64 * bh as u64;
    debug!(a = ?(aw, ah), b = ?(bw, bh), "Resizing to reconcile frame sizes");

    if a_pixels > b_pixels {
        let resized = a.resize_exact(bw, bh, FilterType::Nearest);
        (Cow::Owned(resized), Cow::Borrowed(b))
    } else {
        let resized = b.resize_exact(aw, ah, FilterType::Nearest);
        (Cow::Borrowed(a), Cow::Owned(resized))
    }
}
