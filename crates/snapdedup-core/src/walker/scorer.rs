use std::path::PathBuf;

use image::DynamicImage;

use crate::compare::{compare_images, ComparatorConfig, ComparisonOutcome};
use crate::frame::FrameRecord;
use crate::io::decode::FrameDecoder;

/// Scores a candidate frame against the current reference.
pub trait FrameScorer {
    fn score(&mut self, reference: &FrameRecord, candidate: &FrameRecord) -> ComparisonOutcome;
}

impl<F> FrameScorer for F
where
    F: FnMut(&FrameRecord, &FrameRecord) -> ComparisonOutcome,
{
    fn score(&mut self, reference: &FrameRecord, candidate: &FrameRecord) -> ComparisonOutcome {
        self(reference, candidate)
    }
}

type Decoded = (PathBuf, Option<DynamicImage>);

/// Decodes both frames and runs the image comparator.
///
/// The decoded reference is cached, and the last candidate is kept so that a
/// candidate promoted to reference is not decoded twice. A walk over N frames
/// therefore decodes each frame once.
pub struct ImageScorer<'a, D: FrameDecoder + ?Sized> {
    decoder: &'a D,
    config: &'a ComparatorConfig,
    reference: Option<Decoded>,
    last_candidate: Option<Decoded>,
}

impl<'a, D: FrameDecoder + ?Sized> ImageScorer<'a, D> {
    pub fn new(decoder: &'a D, config: &'a ComparatorConfig) -> Self {
        Self {
            decoder,
            config,
            reference: None,
            last_candidate: None,
        }
    }

    fn promote_reference(&mut self, reference: &FrameRecord) {
        if matches!(&self.reference, Some((path, _)) if *path == reference.path) {
            return;
        }
        let image = match self.last_candidate.take() {
            Some((path, image)) if path == reference.path => image,
            _ => self.decoder.decode(&reference.path),
        };
        self.reference = Some((reference.path.clone(), image));
    }
}

impl<D: FrameDecoder + ?Sized> FrameScorer for ImageScorer<'_, D> {
    fn score(&mut self, reference: &FrameRecord, candidate: &FrameRecord) -> ComparisonOutcome {
        self.promote_reference(reference);
        let candidate_image = self.decoder.decode(&candidate.path);
        let reference_image = self.reference.as_ref().and_then(|(_, image)| image.as_ref());
        let outcome = compare_images(reference_image, candidate_image.as_ref(), self.config);
        self.last_candidate = Some((candidate.path.clone(), candidate_image));
        outcome
    }
}
