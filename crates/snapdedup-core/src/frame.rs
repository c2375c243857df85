use std::cmp::Ordering;
use std::path::PathBuf;

/// One discovered camera snapshot.
///
/// Records are built once per file during discovery and never mutated.
/// Within a camera they are ordered by `timestamp_key`, with the file name
/// as a tie-break so that the order is total.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameRecord {
    /// Camera identifier parsed from the filename prefix.
    pub camera_id: String,
    /// Fixed-width `YYYYMMDDHHMMSS` capture time, lexicographically sortable.
    pub timestamp_key: String,
    /// Location of the source image.
    pub path: PathBuf,
}

impl FrameRecord {
    pub fn new(
        camera_id: impl Into<String>,
        timestamp_key: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            camera_id: camera_id.into(),
            timestamp_key: timestamp_key.into(),
            path: path.into(),
        }
    }

    /// File name component of the source path, for reporting.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Ord for FrameRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.camera_id
            .cmp(&other.camera_id)
            .then_with(|| self.timestamp_key.cmp(&other.timestamp_key))
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for FrameRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
