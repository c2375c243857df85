use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DedupError, Result};
use crate::frame::FrameRecord;

use super::decode::FrameDecoder;
use super::filename::parse_filename;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Decode every recognized file up front and exclude unreadable ones.
    #[serde(default = "default_validate_images")]
    pub validate_images: bool,
}

fn default_validate_images() -> bool {
    true
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            validate_images: true,
        }
    }
}

/// Frames found in a folder, grouped per camera and sorted chronologically.
#[derive(Clone, Debug, Default)]
pub struct Discovery {
    pub cameras: BTreeMap<String, Vec<FrameRecord>>,
    /// Files whose names match neither known timestamp shape.
    pub unrecognized: Vec<PathBuf>,
    /// Recognized files that failed to decode.
    pub invalid: Vec<PathBuf>,
}

impl Discovery {
    pub fn frame_count(&self) -> usize {
        self.cameras.values().map(Vec::len).sum()
    }
}

/// List `folder` (non-recursive) and group parseable snapshots by camera.
///
/// Each camera's frames are ordered by one merged sort over the canonical
/// timestamp key, regardless of which filename shape they came from.
/// When `decoder` is given, files that fail to decode are moved to
/// `invalid` instead of being grouped.
pub fn discover<D: FrameDecoder + ?Sized>(
    folder: &Path,
    decoder: Option<&D>,
) -> Result<Discovery> {
    if !folder.is_dir() {
        return Err(DedupError::NotADirectory(folder.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let mut discovery = Discovery::default();
    let mut parsed = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match parse_filename(&name) {
            Some(p) => parsed.push(FrameRecord::new(p.camera_id, p.timestamp_key, path)),
            None => {
                warn!(file = %name, "Skipping file with unrecognized name");
                discovery.unrecognized.push(path);
            }
        }
    }

    let records = match decoder {
        Some(decoder) => {
            let checked: Vec<(FrameRecord, bool)> = parsed
                .into_par_iter()
                .map(|record| {
                    let ok = decoder.decode(&record.path).is_some();
                    (record, ok)
                })
                .collect();
            let mut valid = Vec::with_capacity(checked.len());
            for (record, ok) in checked {
                if ok {
                    valid.push(record);
                } else {
                    warn!(file = %record.file_name(), "Excluding unreadable image");
                    discovery.invalid.push(record.path);
                }
            }
            valid
        }
        None => parsed,
    };

    for record in records {
        discovery
            .cameras
            .entry(record.camera_id.clone())
            .or_default()
            .push(record);
    }
    for frames in discovery.cameras.values_mut() {
        frames.sort();
    }

    info!(
        cameras = discovery.cameras.len(),
        frames = discovery.frame_count(),
        unrecognized = discovery.unrecognized.len(),
        invalid = discovery.invalid.len(),
        "Discovery complete"
    );
    Ok(discovery)
}
