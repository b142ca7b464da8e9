//! Single-stroke gesture recognition.
//!
//! A candidate stroke is resampled to a fixed point count, rotated to its
//! indicative angle, scaled to a reference square and centered on the
//! origin, then compared against a store of identically preprocessed
//! templates. Comparison is a golden-section search for the rotation that
//! minimizes mean point-to-point distance, so recognition is invariant
//! under rotation, scale and translation of the drawn stroke.
//!
//! The entry point is [`Recognizer`]: load templates once, stage a
//! candidate with `construct_stroke`, then call `recognize`.

mod error;
mod match_collector;
mod matcher;
mod normalized_stroke;
mod templates;

use log::info;

use match_collector::MatchCollector;
use matcher::Matcher;
use normalized_stroke::NormalizedStroke;
use serde_derive::{Deserialize, Serialize};

pub use error::RecognizerError;
pub use templates::{Template, TemplateStore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct Stroke {
    pub points: Vec<Point>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub name: String,
    pub score: f64,
}

// Best scores below this are reported as no-match. Zero means the best
// guess is always reported.
const MIN_SCORE: f64 = 0.0;

/// The recognition engine: a template store plus one pending candidate.
///
/// The store is written only during the load phase; `lookup` takes `&self`
/// and touches no shared mutable state, so once loading has completed a
/// `Recognizer` behind a shared reference supports any number of
/// simultaneous lookups.
pub struct Recognizer {
    store: TemplateStore,
    staged: Option<Stroke>,
}

impl Recognizer {
    /// An engine with an empty template store and nothing staged.
    pub fn new() -> Recognizer {
        Recognizer {
            store: TemplateStore::new(),
            staged: None,
        }
    }

    /// An engine recognizing against a caller-built template set.
    pub fn with_templates(store: TemplateStore) -> Recognizer {
        Recognizer {
            store: store,
            staged: None,
        }
    }

    /// Populates the store with the bundled gesture set. A no-op when
    /// templates are already present, so hosts may call it again freely.
    pub fn load_templates(&mut self) -> Result<(), RecognizerError> {
        if !self.store.is_empty() {
            return Ok(());
        }
        for (name, stroke) in templates::bundled_gestures() {
            self.store.load(&name, &stroke)?;
        }
        info!("loaded {} templates", self.store.len());
        Ok(())
    }

    pub fn template_count(&self) -> usize {
        self.store.len()
    }

    /// Stages a candidate stroke from a flat buffer of x,y pairs
    /// (`x0,y0,x1,y1,...`). The points are copied out; no reference to the
    /// buffer is kept. Replaces any previously staged candidate.
    pub fn construct_stroke(&mut self, buffer: &[f64], num_points: usize) -> Result<(), RecognizerError> {
        let expected = num_points * 2;
        if buffer.len() < expected {
            return Err(RecognizerError::BufferTooShort {
                expected: expected,
                actual: buffer.len(),
            });
        }
        let mut points: Vec<Point> = Vec::with_capacity(num_points);
        for i in 0..num_points {
            points.push(Point {
                x: buffer[i * 2],
                y: buffer[i * 2 + 1],
            });
        }
        self.staged = Some(Stroke { points: points });
        Ok(())
    }

    /// Classifies the staged candidate. The candidate is consumed whether
    /// or not classification succeeds; a later call without a fresh
    /// `construct_stroke` fails with `NoCandidateStaged` instead of
    /// operating on leftover state. `Ok(None)` means no template cleared
    /// the confidence threshold.
    pub fn recognize(&mut self) -> Result<Option<Match>, RecognizerError> {
        let stroke = self.staged.take().ok_or(RecognizerError::NoCandidateStaged)?;
        let mut matches = self.lookup(&stroke, 1)?;
        match matches.pop() {
            Some(best) if best.score >= MIN_SCORE => Ok(Some(best)),
            _ => Ok(None),
        }
    }

    /// Scores a raw stroke against every template and returns up to
    /// `limit` matches, best first. Duplicate template names are compared
    /// separately; only the better-scoring entry per name is reported.
    pub fn lookup(&self, stroke: &Stroke, limit: usize) -> Result<Vec<Match>, RecognizerError> {
        if self.store.is_empty() {
            return Err(RecognizerError::EmptyTemplateSet);
        }
        let candidate = NormalizedStroke::from_stroke(stroke)?;
        let mut matches: Vec<Match> = Vec::with_capacity(limit);
        let mut collector = MatchCollector::new(&mut matches, limit);
        Matcher::new(&self.store).lookup(&candidate, &mut collector);
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_buffer() -> Vec<f64> {
        let mut values: Vec<f64> = Vec::new();
        for i in 0..40 {
            let theta = 2f64 * std::f64::consts::PI * i as f64 / 40f64;
            values.push(150.0 + 70.0 * theta.cos());
            values.push(140.0 + 70.0 * theta.sin());
        }
        values
    }

    fn loaded_recognizer() -> Recognizer {
        let mut rec = Recognizer::new();
        rec.load_templates().unwrap();
        rec
    }

    #[test]
    fn test_recognize_before_construct() {
        let mut rec = loaded_recognizer();
        assert_eq!(rec.recognize().err(), Some(RecognizerError::NoCandidateStaged));
    }

    #[test]
    fn test_recognize_before_load() {
        let mut rec = Recognizer::new();
        let values = circle_buffer();
        rec.construct_stroke(&values, values.len() / 2).unwrap();
        assert_eq!(rec.recognize().err(), Some(RecognizerError::EmptyTemplateSet));
    }

    #[test]
    fn test_load_templates_is_idempotent() {
        let mut rec = loaded_recognizer();
        let count = rec.template_count();
        assert!(count >= 10);
        rec.load_templates().unwrap();
        assert_eq!(rec.template_count(), count);
    }

    #[test]
    fn test_buffer_too_short() {
        let mut rec = loaded_recognizer();
        let values = [10.0, 20.0, 30.0];
        let res = rec.construct_stroke(&values, 2);
        assert_eq!(
            res.err(),
            Some(RecognizerError::BufferTooShort { expected: 4, actual: 3 })
        );
        // Nothing was staged by the failed call
        assert_eq!(rec.recognize().err(), Some(RecognizerError::NoCandidateStaged));
    }

    #[test]
    fn test_recognize_circle_from_buffer() {
        let mut rec = loaded_recognizer();
        let values = circle_buffer();
        rec.construct_stroke(&values, values.len() / 2).unwrap();
        let mc = rec.recognize().unwrap().unwrap();
        assert_eq!(mc.name, "circle");
        assert!(mc.score > 0.8, "score was {}", mc.score);
    }

    #[test]
    fn test_candidate_consumed_by_recognize() {
        let mut rec = loaded_recognizer();
        let values = circle_buffer();
        rec.construct_stroke(&values, values.len() / 2).unwrap();
        rec.recognize().unwrap();
        assert_eq!(rec.recognize().err(), Some(RecognizerError::NoCandidateStaged));
    }

    #[test]
    fn test_degenerate_candidate() {
        let mut rec = loaded_recognizer();
        // A two-point line has no shape to classify
        rec.construct_stroke(&[20.0, 20.0, 180.0, 90.0], 2).unwrap();
        assert_eq!(rec.recognize().err(), Some(RecognizerError::DegenerateStroke));
        // The engine accepts a fresh candidate after the failure
        let values = circle_buffer();
        rec.construct_stroke(&values, values.len() / 2).unwrap();
        assert!(rec.recognize().unwrap().is_some());
    }

    #[test]
    fn test_recognize_is_deterministic() {
        let mut rec = loaded_recognizer();
        let values = circle_buffer();
        rec.construct_stroke(&values, values.len() / 2).unwrap();
        let a = rec.recognize().unwrap();
        rec.construct_stroke(&values, values.len() / 2).unwrap();
        let b = rec.recognize().unwrap();
        assert_eq!(a, b);
    }
}
