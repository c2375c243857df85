use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Empty review sheet for camera {0}")]
    EmptyReview(String),
}

pub type Result<T> = std::result::Result<T, DedupError>;
