pub mod border_mask;
pub mod gaussian_blur;

pub use border_mask::{apply_border_mask, BorderMask};
pub use gaussian_blur::gaussian_blur_array;
