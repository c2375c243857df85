//! Contact-sheet rendering of a camera's walk for human review.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{
    DEFAULT_SHEET_COLUMNS, DEFAULT_THUMB_HEIGHT, DEFAULT_THUMB_WIDTH, REVIEW_BORDER_PX,
};
use crate::error::{DedupError, Result};
use crate::io::decode::FrameDecoder;
use crate::walker::{RetentionDecision, Verdict};

const RETAINED_COLOR: Rgb<u8> = Rgb([40, 180, 60]);
const DROPPED_COLOR: Rgb<u8> = Rgb([200, 40, 40]);
const FAILED_COLOR: Rgb<u8> = Rgb([110, 110, 110]);
const BACKGROUND: Rgb<u8> = Rgb([20, 20, 20]);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Directory receiving one `<camera>.png` sheet per camera.
    pub output_dir: PathBuf,
    #[serde(default = "default_thumb_width")]
    pub thumb_width: u32,
    #[serde(default = "default_thumb_height")]
    pub thumb_height: u32,
    #[serde(default = "default_columns")]
    pub columns: u32,
}

fn default_thumb_width() -> u32 {
    DEFAULT_THUMB_WIDTH
}
fn default_thumb_height() -> u32 {
    DEFAULT_THUMB_HEIGHT
}
fn default_columns() -> u32 {
    DEFAULT_SHEET_COLUMNS
}

impl ReviewConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            thumb_width: DEFAULT_THUMB_WIDTH,
            thumb_height: DEFAULT_THUMB_HEIGHT,
            columns: DEFAULT_SHEET_COLUMNS,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.thumb_width == 0 || self.thumb_height == 0 || self.columns == 0 {
            return Err(DedupError::InvalidConfig(
                "review thumbnails and columns must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Tile every frame of the decision in sequence order.
///
/// Each thumbnail is framed green when retained, red when dropped as a
/// duplicate and grey when it failed to load. Frames that cannot be decoded
/// are drawn as an empty grey cell.
pub fn render_contact_sheet<D: FrameDecoder + ?Sized>(
    camera_id: &str,
    decision: &RetentionDecision,
    decoder: &D,
    config: &ReviewConfig,
) -> Result<RgbImage> {
    if decision.is_empty() {
        return Err(DedupError::EmptyReview(camera_id.to_string()));
    }
    config.validate()?;

    let count = decision.len() as u32;
    let columns = config.columns.min(count);
    let rows = count.div_ceil(columns);
    let cell_w = config.thumb_width + 2 * REVIEW_BORDER_PX;
    let cell_h = config.thumb_height + 2 * REVIEW_BORDER_PX;

    let mut sheet = RgbImage::from_pixel(columns * cell_w, rows * cell_h, BACKGROUND);

    for (i, entry) in decision.iter().enumerate() {
        let x0 = (i as u32 % columns) * cell_w;
        let y0 = (i as u32 / columns) * cell_h;

        let border = match entry.verdict {
            Verdict::Seed | Verdict::Changed { .. } => RETAINED_COLOR,
            Verdict::Duplicate { .. } => DROPPED_COLOR,
            Verdict::LoadFailure => FAILED_COLOR,
        };
        fill_rect(&mut sheet, x0, y0, cell_w, cell_h, border);
        fill_rect(
            &mut sheet,
            x0 + REVIEW_BORDER_PX,
            y0 + REVIEW_BORDER_PX,
            config.thumb_width,
            config.thumb_height,
            BACKGROUND,
        );

        if let Some(img) = decoder.decode(&entry.frame.path) {
            let thumb = img
                .resize(config.thumb_width, config.thumb_height, FilterType::Triangle)
                .to_rgb8();
            // Centre the aspect-preserving thumbnail inside the cell.
            let dx = config.thumb_width.saturating_sub(thumb.width()) / 2;
            let dy = config.thumb_height.saturating_sub(thumb.height()) / 2;
            imageops::overlay(
                &mut sheet,
                &thumb,
                (x0 + REVIEW_BORDER_PX + dx) as i64,
                (y0 + REVIEW_BORDER_PX + dy) as i64,
            );
        }
    }

    Ok(sheet)
}

/// Render and save `<output_dir>/<camera>.png`, returning the written path.
pub fn write_contact_sheet<D: FrameDecoder + ?Sized>(
    camera_id: &str,
    decision: &RetentionDecision,
    decoder: &D,
    config: &ReviewConfig,
) -> Result<PathBuf> {
    let sheet = render_contact_sheet(camera_id, decision, decoder, config)?;
    std::fs::create_dir_all(&config.output_dir)?;
    let path = sheet_path(&config.output_dir, camera_id);
    sheet.save_with_format(&path, ImageFormat::Png)?;
    info!(camera = camera_id, path = %path.display(), "Review sheet saved");
    Ok(path)
}

fn sheet_path(dir: &Path, camera_id: &str) -> PathBuf {
    dir.join(format!("{camera_id}.png"))
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgb<u8>) {
    for y in y0..(y0 + h).min(img.height()) {
        for x in x0..(x0 + w).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}
