use super::error::RecognizerError;
use super::*;

// Every stroke is resampled to this many evenly spaced points before
// normalization; templates and candidates always have the same length.
pub const NUM_POINTS: usize = 64;

// Side of the reference square that the bounding box is scaled to.
pub const SQUARE_SIZE: f64 = 250.0;

// A path shorter than this counts as zero extent (all points coincident).
const MIN_PATH_LENGTH: f64 = 1e-9;

// An axis of the bounding box narrower than this is left unscaled.
const MIN_EXTENT: f64 = 1e-9;

pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A stroke that has been resampled to `NUM_POINTS` points, rotated so its
/// indicative angle is zero, scaled to the reference square, and centered
/// on the origin. Templates and candidates are both stored in this form,
/// so index-paired point comparison is meaningful.
pub struct NormalizedStroke {
    pub points: Vec<Point>,
}

impl NormalizedStroke {
    pub fn from_stroke(stroke: &Stroke) -> Result<NormalizedStroke, RecognizerError> {
        // A stroke with fewer than three points, or with all points on top
        // of each other, has no shape to resample or scale.
        if stroke.points.len() < 3 || path_length(&stroke.points) < MIN_PATH_LENGTH {
            return Err(RecognizerError::DegenerateStroke);
        }
        let mut points = resample(&stroke.points, NUM_POINTS);
        normalize(&mut points);
        Ok(NormalizedStroke { points })
    }
}

// Rotate to indicative angle, scale to the reference square, translate the
// centroid to the origin. Applying this to already-normalized points is a
// no-op: the first point stays due east of the centroid through the
// per-axis scaling, so the second rotation is by zero.
pub fn normalize(points: &mut [Point]) {
    let delta = -indicative_angle(points);
    rotate_by(points, delta);
    scale_to_square(points);
    translate_to_origin(points);
}

// Gets distance between two points
pub(crate) fn dist(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

// Sum of distances between consecutive points
pub fn path_length(points: &[Point]) -> f64 {
    let mut length = 0f64;
    for i in 1..points.len() {
        length += dist(points[i - 1], points[i]);
    }
    length
}

pub fn centroid(points: &[Point]) -> Point {
    let mut sum_x = 0f64;
    let mut sum_y = 0f64;
    for pt in points {
        sum_x += pt.x;
        sum_y += pt.y;
    }
    Point {
        x: sum_x / points.len() as f64,
        y: sum_y / points.len() as f64,
    }
}

pub fn bounding_rect(points: &[Point]) -> Rect {
    let mut res = Rect {
        top: std::f64::MAX,
        bottom: std::f64::MIN,
        left: std::f64::MAX,
        right: std::f64::MIN,
    };
    for pt in points {
        if pt.x < res.left { res.left = pt.x; }
        if pt.x > res.right { res.right = pt.x; }
        if pt.y < res.top { res.top = pt.y; }
        if pt.y > res.bottom { res.bottom = pt.y; }
    }
    res
}

// Walks the polyline and emits a point every interval_length units of
// accumulated distance, interpolating linearly within segments. The first
// and last input points are always kept. Floating-point drift can leave
// the walk one point short; the final point is then duplicated to pad the
// output to exactly n.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let interval_length = path_length(points) / (n - 1) as f64;
    let mut accumulated = 0f64;

    let mut work: Vec<Point> = points.to_vec();
    let mut res: Vec<Point> = Vec::with_capacity(n);
    res.push(work[0]);

    let mut i = 1;
    while i < work.len() && res.len() < n {
        let d = dist(work[i - 1], work[i]);
        if accumulated + d >= interval_length {
            let t = (interval_length - accumulated) / d;
            let q = Point {
                x: work[i - 1].x + t * (work[i].x - work[i - 1].x),
                y: work[i - 1].y + t * (work[i].y - work[i - 1].y),
            };
            res.push(q);
            // q becomes the previous point for the rest of this segment
            work.insert(i, q);
            accumulated = 0f64;
        } else {
            accumulated += d;
        }
        i += 1;
    }

    while res.len() < n {
        res.push(*points.last().unwrap());
    }
    res
}

// Angle from the centroid to the first point
pub fn indicative_angle(points: &[Point]) -> f64 {
    let c = centroid(points);
    (points[0].y - c.y).atan2(points[0].x - c.x)
}

// Rotates all points about their centroid by theta radians
pub fn rotate_by(points: &mut [Point], theta: f64) {
    let c = centroid(points);
    let cos = theta.cos();
    let sin = theta.sin();
    for pt in points.iter_mut() {
        let dx = pt.x - c.x;
        let dy = pt.y - c.y;
        pt.x = dx * cos - dy * sin + c.x;
        pt.y = dx * sin + dy * cos + c.y;
    }
}

// Scales x and y independently so the bounding box becomes the reference
// square. An axis with no extent (a horizontal or vertical line) is left
// alone rather than divided by zero.
fn scale_to_square(points: &mut [Point]) {
    let rect = bounding_rect(points);
    let sx = if rect.width() > MIN_EXTENT { SQUARE_SIZE / rect.width() } else { 1f64 };
    let sy = if rect.height() > MIN_EXTENT { SQUARE_SIZE / rect.height() } else { 1f64 };
    for pt in points.iter_mut() {
        pt.x *= sx;
        pt.y *= sy;
    }
}

fn translate_to_origin(points: &mut [Point]) {
    let c = centroid(points);
    for pt in points.iter_mut() {
        pt.x -= c.x;
        pt.y -= c.y;
    }
}
