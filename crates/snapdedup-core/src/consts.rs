/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Connected components smaller than this (in pixels) are treated as sensor noise.
pub const DEFAULT_MIN_REGION_AREA: u64 = 200;

/// A candidate frame is kept when its change score exceeds this many pixels.
pub const DEFAULT_CHANGE_THRESHOLD: u64 = 800;

/// Per-pixel absolute difference cutoff, 45 on an 8-bit scale.
pub const DEFAULT_PIXEL_THRESHOLD: f32 = 45.0 / 255.0;

/// Gaussian blur sigma applied once during preprocessing.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.5;

/// Number of 3x3 dilation passes over the thresholded difference mask.
pub const DEFAULT_DILATE_ITERATIONS: usize = 2;

/// Fraction of the width blanked on the left edge (timestamp overlays, vignetting).
pub const DEFAULT_MASK_LEFT: f32 = 0.05;

/// Fraction of the height blanked on the top edge.
pub const DEFAULT_MASK_TOP: f32 = 0.10;

/// Fraction of the width blanked on the right edge.
pub const DEFAULT_MASK_RIGHT: f32 = 0.05;

/// Fraction of the height blanked on the bottom edge.
pub const DEFAULT_MASK_BOTTOM: f32 = 0.0;

/// Width of the fixed `YYYYMMDDHHMMSS` canonical timestamp key.
pub const CANONICAL_KEY_LEN: usize = 14;

/// Default thumbnail width (pixels) in review contact sheets.
pub const DEFAULT_THUMB_WIDTH: u32 = 160;

/// Default thumbnail height (pixels) in review contact sheets.
pub const DEFAULT_THUMB_HEIGHT: u32 = 120;

/// Default number of thumbnail columns in a review contact sheet.
pub const DEFAULT_SHEET_COLUMNS: u32 = 8;

/// Thickness of the retained/dropped border drawn around each thumbnail.
pub const REVIEW_BORDER_PX: u32 = 3;
