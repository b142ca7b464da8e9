use std::f64::consts::PI;

use log::trace;

use super::match_collector::MatchCollector;
use super::normalized_stroke;
use super::normalized_stroke::{NormalizedStroke, SQUARE_SIZE};
use super::templates::TemplateStore;
use super::*;

// Rotation search runs over [-ANGLE_RANGE, ANGLE_RANGE] radians (±45°).
const ANGLE_RANGE: f64 = PI / 4.0;

// The search stops once the bracket is narrower than this (2°)...
const ANGLE_PRECISION: f64 = PI / 90.0;

// ...or after this many narrowing steps. Golden-section convergence is
// geometric, so the cap is never reached with the bounds above; it guards
// against a pathological precision constant.
const MAX_SEARCH_STEPS: u32 = 20;

// Golden ratio, (sqrt(5) - 1) / 2.
const PHI: f64 = 0.618_033_988_749_894_9;

pub struct Matcher<'a> {
    store: &'a TemplateStore,
}

impl<'a> Matcher<'a> {
    pub fn new(store: &'a TemplateStore) -> Matcher<'a> {
        Matcher { store: store }
    }

    /// Scores the candidate against every stored template and files the
    /// results into the collector, best score first.
    pub fn lookup(&self, candidate: &NormalizedStroke, collector: &mut MatchCollector) {
        for template in self.store.all() {
            let d = distance_at_best_angle(&candidate.points, &template.stroke.points);
            let score = (1f64 - d / half_diagonal()).max(0f64);
            trace!("template {}: distance {:.3}, score {:.3}", template.name, d, score);
            collector.file_match(Match {
                name: template.name.clone(),
                score: score,
            });
        }
    }
}

// Half the diagonal of the reference square; a path distance of this much
// maps to score zero.
pub fn half_diagonal() -> f64 {
    0.5 * (2f64 * SQUARE_SIZE * SQUARE_SIZE).sqrt()
}

// Finds the rotation of the candidate that minimizes path distance to the
// template, by golden-section search over the rotation angle. The interior
// point with the lower cost survives into the next, narrower bracket, so
// each step costs one new evaluation. Deterministic: no random restarts.
fn distance_at_best_angle(candidate: &[Point], template: &[Point]) -> f64 {
    let mut a = -ANGLE_RANGE;
    let mut b = ANGLE_RANGE;
    let mut x1 = PHI * a + (1f64 - PHI) * b;
    let mut f1 = distance_at_angle(candidate, template, x1);
    let mut x2 = (1f64 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(candidate, template, x2);
    let mut steps = 0;
    while (b - a).abs() > ANGLE_PRECISION && steps < MAX_SEARCH_STEPS {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1f64 - PHI) * b;
            f1 = distance_at_angle(candidate, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1f64 - PHI) * a + PHI * b;
            f2 = distance_at_angle(candidate, template, x2);
        }
        steps += 1;
    }
    f64::min(f1, f2)
}

fn distance_at_angle(candidate: &[Point], template: &[Point], theta: f64) -> f64 {
    let mut rotated = candidate.to_vec();
    normalized_stroke::rotate_by(&mut rotated, theta);
    path_distance(&rotated, template)
}

// Mean distance between index-paired points of two equal-length strokes
fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    let n = usize::min(a.len(), b.len());
    let mut total = 0f64;
    for i in 0..n {
        total += normalized_stroke::dist(a[i], b[i]);
    }
    total / n as f64
}
