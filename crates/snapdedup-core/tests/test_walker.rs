mod common;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{solid, with_block};
use image::DynamicImage;
use snapdedup_core::compare::{ComparatorConfig, ComparisonOutcome, ComparisonResult};
use snapdedup_core::frame::FrameRecord;
use snapdedup_core::io::FrameDecoder;
use snapdedup_core::walker::{walk, ImageScorer, Verdict, WalkerConfig};

fn frames(n: usize) -> Vec<FrameRecord> {
    (1..=n)
        .map(|i| FrameRecord::new("c1", format!("202101010000{i:02}"), format!("f{i}.png")))
        .collect()
}

fn scored(score: u64) -> ComparisonOutcome {
    ComparisonOutcome::Compared(ComparisonResult {
        score,
        regions: Vec::new(),
        diff_mask: None,
    })
}

fn name(frame: &FrameRecord) -> String {
    frame.path.display().to_string()
}

/// In-memory decoder that counts decode calls.
struct MapDecoder {
    images: HashMap<PathBuf, DynamicImage>,
    calls: AtomicUsize,
}

impl MapDecoder {
    fn new(entries: Vec<(&str, DynamicImage)>) -> Self {
        Self {
            images: entries
                .into_iter()
                .map(|(p, img)| (PathBuf::from(p), img))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FrameDecoder for MapDecoder {
    fn decode(&self, path: &Path) -> Option<DynamicImage> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.images.get(path).cloned()
    }
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_walk_empty_sequence() {
    let mut calls = 0;
    let mut scorer = |_: &FrameRecord, _: &FrameRecord| {
        calls += 1;
        scored(0)
    };
    let decision = walk(&[], &mut scorer, &WalkerConfig::default());
    assert!(decision.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn test_walk_single_frame_is_seed() {
    let mut calls = 0;
    let mut scorer = |_: &FrameRecord, _: &FrameRecord| {
        calls += 1;
        scored(0)
    };
    let seq = frames(1);
    let decision = walk(&seq, &mut scorer, &WalkerConfig::default());

    assert_eq!(decision.len(), 1);
    assert_eq!(decision.decisions[0].verdict, Verdict::Seed);
    assert!(decision.decisions[0].retained());
    assert_eq!(decision.decisions[0].verdict.triggering_score(), 0);
    assert_eq!(calls, 0);
}

#[test]
fn test_walk_calls_scorer_n_minus_one_times() {
    for (n, score) in [(2, 0), (5, 0), (5, 10_000), (9, 801)] {
        let mut calls = 0;
        let mut scorer = |_: &FrameRecord, _: &FrameRecord| {
            calls += 1;
            scored(score)
        };
        let seq = frames(n);
        let decision = walk(&seq, &mut scorer, &WalkerConfig::default());
        assert_eq!(calls, n - 1, "n={n} score={score}");
        assert_eq!(decision.len(), n);
    }
}

#[test]
fn test_threshold_is_strict() {
    let seq = frames(3);
    let mut scores = vec![800, 801].into_iter();
    let mut scorer = |_: &FrameRecord, _: &FrameRecord| scored(scores.next().unwrap());
    let decision = walk(&seq, &mut scorer, &WalkerConfig::default());

    assert_eq!(decision.decisions[1].verdict, Verdict::Duplicate { score: 800 });
    assert_eq!(decision.decisions[2].verdict, Verdict::Changed { score: 801 });
    assert_eq!(decision.decisions[2].verdict.triggering_score(), 801);
}

// ---------------------------------------------------------------------------
// Reference updates
// ---------------------------------------------------------------------------

#[test]
fn test_reference_moves_only_on_retained_frames() {
    let seq = frames(5);
    let table: HashMap<(&str, &str), u64> = [
        (("f1.png", "f2.png"), 100),
        (("f1.png", "f3.png"), 900),
        (("f3.png", "f4.png"), 50),
        (("f3.png", "f5.png"), 300),
    ]
    .into_iter()
    .collect();

    let mut seen = Vec::new();
    let mut scorer = |reference: &FrameRecord, candidate: &FrameRecord| {
        let key = (name(reference), name(candidate));
        seen.push(key.clone());
        let score = table
            .get(&(key.0.as_str(), key.1.as_str()))
            .copied()
            .unwrap_or_else(|| panic!("unexpected comparison {key:?}"));
        scored(score)
    };
    let decision = walk(&seq, &mut scorer, &WalkerConfig::default());

    let retained: Vec<String> = decision.retained().map(name).collect();
    assert_eq!(retained, vec!["f1.png", "f3.png"]);
    assert_eq!(
        seen,
        vec![
            ("f1.png".to_string(), "f2.png".to_string()),
            ("f1.png".to_string(), "f3.png".to_string()),
            ("f3.png".to_string(), "f4.png".to_string()),
            ("f3.png".to_string(), "f5.png".to_string()),
        ]
    );
    assert_eq!(decision.decisions[2].verdict, Verdict::Changed { score: 900 });
    assert_eq!(decision.decisions[4].verdict, Verdict::Duplicate { score: 300 });
}

#[test]
fn test_slow_drift_accumulates_against_reference() {
    // Each step drifts 300 from its predecessor; the reference only moves
    // once the accumulated change passes the threshold.
    let seq = frames(6);
    let position = |f: &FrameRecord| -> u64 {
        name(f)[1..2].parse::<u64>().unwrap() * 300
    };
    let mut scorer = |r: &FrameRecord, c: &FrameRecord| scored(position(c) - position(r));
    let decision = walk(&seq, &mut scorer, &WalkerConfig::default());

    let retained: Vec<String> = decision.retained().map(name).collect();
    assert_eq!(retained, vec!["f1.png", "f4.png"]);
}

#[test]
fn test_load_failure_drops_frame_and_keeps_reference() {
    let seq = frames(4);
    let mut seen = Vec::new();
    let mut scorer = |r: &FrameRecord, c: &FrameRecord| {
        seen.push(name(r));
        match name(c).as_str() {
            "f2.png" => ComparisonOutcome::LoadFailure,
            "f3.png" => scored(5_000),
            _ => scored(0),
        }
    };
    let decision = walk(&seq, &mut scorer, &WalkerConfig::default());

    assert_eq!(decision.decisions[1].verdict, Verdict::LoadFailure);
    assert!(!decision.decisions[1].retained());
    assert_eq!(decision.load_failures(), 1);
    assert_eq!(seen, vec!["f1.png", "f1.png", "f3.png"]);
}

// ---------------------------------------------------------------------------
// ImageScorer
// ---------------------------------------------------------------------------

#[test]
fn test_identical_images_not_retained() {
    let decoder = MapDecoder::new(vec![
        ("f1.png", solid(100, 100, 90)),
        ("f2.png", solid(100, 100, 90)),
    ]);
    let config = ComparatorConfig::default();
    let mut scorer = ImageScorer::new(&decoder, &config);
    let decision = walk(&frames(2), &mut scorer, &WalkerConfig::default());

    assert_eq!(decision.decisions[1].verdict, Verdict::Duplicate { score: 0 });
    assert_eq!(decision.retained_count(), 1);
}

#[test]
fn test_image_scorer_decodes_each_frame_once() {
    let decoder = MapDecoder::new(vec![
        ("f1.png", solid(100, 100, 0)),
        ("f2.png", solid(100, 100, 0)),
        ("f3.png", with_block(100, 100, 0, 30, 30, 40, 255)),
        ("f4.png", with_block(100, 100, 0, 30, 30, 40, 255)),
    ]);
    let config = ComparatorConfig::default();
    let mut scorer = ImageScorer::new(&decoder, &config);
    let decision = walk(&frames(4), &mut scorer, &WalkerConfig::default());

    let verdicts: Vec<bool> = decision.iter().map(|d| d.retained()).collect();
    assert_eq!(verdicts, vec![true, false, true, false]);
    assert_eq!(decoder.calls.load(Ordering::Relaxed), 4);
}

#[test]
fn test_image_scorer_missing_file_is_load_failure() {
    let decoder = MapDecoder::new(vec![
        ("f1.png", solid(64, 64, 0)),
        ("f3.png", with_block(64, 64, 0, 10, 10, 40, 255)),
    ]);
    let config = ComparatorConfig::default();
    let mut scorer = ImageScorer::new(&decoder, &config);
    let decision = walk(&frames(3), &mut scorer, &WalkerConfig::default());

    assert_eq!(decision.decisions[1].verdict, Verdict::LoadFailure);
    assert!(decision.decisions[2].retained());
}

#[test]
fn test_unreadable_seed_drops_every_candidate() {
    let decoder = MapDecoder::new(vec![("f2.png", solid(32, 32, 0))]);
    let config = ComparatorConfig::default();
    let mut scorer = ImageScorer::new(&decoder, &config);
    let decision = walk(&frames(3), &mut scorer, &WalkerConfig::default());

    assert_eq!(decision.decisions[0].verdict, Verdict::Seed);
    assert_eq!(decision.load_failures(), 2);
    assert_eq!(decision.retained_count(), 1);
}
