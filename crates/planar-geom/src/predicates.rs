//! Proximity predicates used for interactive hit-testing.
//!
//! All tests are outline tests: a shape is "hit" when the probe lies near its
//! boundary, never merely inside its area.

use crate::point::Point2;

/// Radii at or below this are treated as collapsed.
const DEGENERATE_RADIUS: f64 = 1e-12;

/// Euclidean distance from `p` to the closed segment `a..b`.
///
/// `a == b` degrades to the distance to `a`.
pub fn distance_point_segment(p: Point2, a: Point2, b: Point2) -> f64 {
    let ab = b - a;
    let len2 = ab.dot(ab);
    if len2 == 0.0 {
        return p.distance(a);
    }

    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// `true` if `p` is within `threshold` of `q`.
#[inline]
pub fn point_near_point(p: Point2, q: Point2, threshold: f64) -> bool {
    p.distance(q) <= threshold
}

/// `true` if `p` is within `threshold` of any of the four edges of the
/// quadrilateral `corners` (taken in order, closed).
pub fn point_in_rectangle(p: Point2, corners: &[Point2; 4], threshold: f64) -> bool {
    (0..4).any(|i| distance_point_segment(p, corners[i], corners[(i + 1) % 4]) <= threshold)
}

/// Approximate outline test for an axis-aligned ellipse.
///
/// `p` is mapped into the ellipse's unit-circle space; the radial error
/// `|‖p‖ - 1|` is scaled back by the mean radius and compared with
/// `threshold`. Not an exact boundary distance, but close enough for picking.
pub fn point_in_ellipse(p: Point2, center: Point2, radii: (f64, f64), threshold: f64) -> bool {
    let (rx, ry) = (radii.0.abs(), radii.1.abs());

    if rx <= DEGENERATE_RADIUS || ry <= DEGENERATE_RADIUS {
        // Collapsed ellipse: its outline is the segment spanning the non-zero axis.
        let half = Point2::new(rx, ry);
        return distance_point_segment(p, center - half, center + half) <= threshold;
    }

    let nx = (p.x - center.x) / rx;
    let ny = (p.y - center.y) / ry;
    let radial_error = (nx.hypot(ny) - 1.0).abs();

    radial_error * (rx + ry) * 0.5 <= threshold
}
