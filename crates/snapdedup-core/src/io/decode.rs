use std::path::Path;

use image::DynamicImage;
use tracing::debug;

/// Loads a raster image from storage. Failures are values, never panics.
pub trait FrameDecoder: Sync {
    fn decode(&self, path: &Path) -> Option<DynamicImage>;
}

/// Decodes files from the local filesystem with the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsDecoder;

impl FrameDecoder for FsDecoder {
    fn decode(&self, path: &Path) -> Option<DynamicImage> {
        match image::open(path) {
            Ok(img) => Some(img),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Failed to decode image");
                None
            }
        }
    }
}
