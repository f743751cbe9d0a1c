use crate::point::Point2;

use super::{ClipBounds, Outcode};

/// Every pass clears at least one outcode bit of one endpoint, so a
/// well-formed segment settles in at most four passes. The cap only guards
/// against rounding ping-pong at window corners.
const MAX_PASSES: usize = 8;

/// Cohen–Sutherland line clipping.
///
/// Returns the visible part of `a..b`, or `None` when the segment lies
/// entirely outside `bounds`. Fully inside segments come back unchanged.
pub fn cohen_sutherland(a: Point2, b: Point2, bounds: &ClipBounds) -> Option<(Point2, Point2)> {
    let (mut p0, mut p1) = (a, b);
    let mut c0 = Outcode::of(p0, bounds);
    let mut c1 = Outcode::of(p1, bounds);

    for _ in 0..MAX_PASSES {
        if c0.is_inside() && c1.is_inside() {
            return Some((p0, p1));
        }
        if c0.intersects(c1) {
            return None;
        }

        let move_first = !c0.is_inside();
        let out = if move_first { c0 } else { c1 };
        let hit = edge_intersection(p0, p1, out, bounds);

        if move_first {
            p0 = hit;
            c0 = Outcode::of(p0, bounds);
        } else {
            p1 = hit;
            c1 = Outcode::of(p1, bounds);
        }
    }

    log::debug!("cohen_sutherland: pass limit reached, clamping endpoints");
    Some((bounds.clamp(p0), bounds.clamp(p1)))
}

/// Intersects the line through `p0`,`p1` with the window edge selected by the
/// first bit of `out` in priority TOP, BOTTOM, RIGHT, LEFT.
fn edge_intersection(p0: Point2, p1: Point2, out: Outcode, bounds: &ClipBounds) -> Point2 {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    let at_y = |y: f64| {
        let x = if dy != 0.0 { p0.x + dx * (y - p0.y) / dy } else { p0.x };
        Point2::new(x, y)
    };
    let at_x = |x: f64| {
        let y = if dx != 0.0 { p0.y + dy * (x - p0.x) / dx } else { p0.y };
        Point2::new(x, y)
    };

    if out.contains(Outcode::TOP) {
        at_y(bounds.ymax)
    } else if out.contains(Outcode::BOTTOM) {
        at_y(bounds.ymin)
    } else if out.contains(Outcode::RIGHT) {
        at_x(bounds.xmax)
    } else {
        at_x(bounds.xmin)
    }
}
