use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MASK_BOTTOM, DEFAULT_MASK_LEFT, DEFAULT_MASK_RIGHT, DEFAULT_MASK_TOP};

/// Fractions of the image blanked to black on each edge before differencing.
///
/// Camera overlays (timestamps, logos) change every frame and would otherwise
/// register as change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BorderMask {
    #[serde(default = "default_left")]
    pub left: f32,
    #[serde(default = "default_top")]
    pub top: f32,
    #[serde(default = "default_right")]
    pub right: f32,
    #[serde(default = "default_bottom")]
    pub bottom: f32,
}

fn default_left() -> f32 {
    DEFAULT_MASK_LEFT
}
fn default_top() -> f32 {
    DEFAULT_MASK_TOP
}
fn default_right() -> f32 {
    DEFAULT_MASK_RIGHT
}
fn default_bottom() -> f32 {
    DEFAULT_MASK_BOTTOM
}

impl Default for BorderMask {
    fn default() -> Self {
        Self {
            left: DEFAULT_MASK_LEFT,
            top: DEFAULT_MASK_TOP,
            right: DEFAULT_MASK_RIGHT,
            bottom: DEFAULT_MASK_BOTTOM,
        }
    }
}

impl BorderMask {
    /// A mask that blanks nothing.
    pub fn none() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
        }
    }

    /// Pixel extents `(left, top, right, bottom)` for an image of the given size.
    /// Fractions are truncated toward zero.
    pub fn extents(&self, height: usize, width: usize) -> (usize, usize, usize, usize) {
        let px = |frac: f32, len: usize| ((frac.max(0.0) * len as f32) as usize).min(len);
        (
            px(self.left, width),
            px(self.top, height),
            px(self.right, width),
            px(self.bottom, height),
        )
    }
}

/// Zero out the configured border strips in place.
pub fn apply_border_mask(data: &mut Array2<f32>, mask: &BorderMask) {
    let (h, w) = data.dim();
    let (left, top, right, bottom) = mask.extents(h, w);

    data.slice_mut(s![.., ..left]).fill(0.0);
    data.slice_mut(s![..top, ..]).fill(0.0);
    data.slice_mut(s![.., w - right..]).fill(0.0);
    data.slice_mut(s![h - bottom.., ..]).fill(0.0);
}
