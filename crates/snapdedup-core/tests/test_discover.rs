mod common;

use std::fs;

use common::{solid, write_png};
use snapdedup_core::error::DedupError;
use snapdedup_core::io::{discover, parse_filename, FsDecoder, NameShape};

// ---------------------------------------------------------------------------
// Filename parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_epoch_millis() {
    let parsed = parse_filename("c10-1623871124416.png").unwrap();
    assert_eq!(parsed.camera_id, "c10");
    assert_eq!(parsed.timestamp_key, "20210616191844");
    assert_eq!(parsed.shape, NameShape::EpochMillis);
}

#[test]
fn test_parse_calendar_fields() {
    let parsed = parse_filename("c21_2021_03_27__10_36_36.png").unwrap();
    assert_eq!(parsed.camera_id, "c21");
    assert_eq!(parsed.timestamp_key, "20210327103636");
    assert_eq!(parsed.shape, NameShape::CalendarFields);
}

#[test]
fn test_parse_accepts_jpeg_and_uppercase_extension() {
    assert!(parse_filename("c10-1623871124416.jpg").is_some());
    assert!(parse_filename("c10-1623871124416.JPEG").is_some());
    assert!(parse_filename("c21_2021_03_27__10_36_36.PNG").is_some());
}

#[test]
fn test_parse_key_is_fixed_width() {
    for name in ["c1-0000000001000.png", "c1_0999_01_02__03_04_05.png"] {
        let parsed = parse_filename(name).unwrap();
        assert_eq!(parsed.timestamp_key.len(), 14, "{name}");
    }
}

#[test]
fn test_parse_rejects_unknown_shapes() {
    for name in [
        "notes.txt",
        "c10-123.png",
        "c10-1623871124416.gif",
        "c10_2021_03_27_10_36_36.png",
        "c10 2021_03_27__10_36_36.png",
        "-1623871124416.png",
    ] {
        assert!(parse_filename(name).is_none(), "{name}");
    }
}

#[test]
fn test_parse_rejects_impossible_dates() {
    assert!(parse_filename("c21_2021_02_30__10_00_00.png").is_none());
    assert!(parse_filename("c21_2021_13_01__10_00_00.png").is_none());
    assert!(parse_filename("c21_2021_03_27__25_00_00.png").is_none());
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

#[test]
fn test_discover_groups_and_merges_shapes() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "c20_2021_06_16__19_30_00.png",
        "c20-1623871124416.png",
        "c20_2021_06_16__19_00_00.png",
        "c10-1623871184416.png",
        "c10-1623871124416.png",
    ] {
        fs::write(dir.path().join(name), b"").unwrap();
    }

    let discovery = discover::<FsDecoder>(dir.path(), None).unwrap();
    assert_eq!(discovery.cameras.len(), 2);
    assert_eq!(discovery.frame_count(), 5);

    let c20: Vec<&str> = discovery.cameras["c20"]
        .iter()
        .map(|f| f.timestamp_key.as_str())
        .collect();
    assert_eq!(c20, vec!["20210616190000", "20210616191844", "20210616193000"]);

    let c10: Vec<String> = discovery.cameras["c10"].iter().map(|f| f.file_name()).collect();
    assert_eq!(c10, vec!["c10-1623871124416.png", "c10-1623871184416.png"]);
}

#[test]
fn test_discover_reports_unrecognized_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), b"hello").unwrap();
    fs::write(dir.path().join("c10-1623871124416.png"), b"").unwrap();
    fs::create_dir(dir.path().join("c11-1623871124416.png")).unwrap();

    let discovery = discover::<FsDecoder>(dir.path(), None).unwrap();
    assert_eq!(discovery.frame_count(), 1);
    assert_eq!(discovery.unrecognized, vec![dir.path().join("README.md")]);
    assert!(discovery.invalid.is_empty());
}

#[test]
fn test_discover_validation_excludes_unreadable_images() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "c10-1623871124416.png", &solid(16, 16, 0));
    fs::write(dir.path().join("c10-1623871184416.png"), b"not an image").unwrap();

    let discovery = discover(dir.path(), Some(&FsDecoder)).unwrap();
    assert_eq!(discovery.frame_count(), 1);
    assert_eq!(
        discovery.invalid,
        vec![dir.path().join("c10-1623871184416.png")]
    );
}

#[test]
fn test_discover_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = discover::<FsDecoder>(&missing, None).unwrap_err();
    assert!(matches!(err, DedupError::NotADirectory(_)));
}
