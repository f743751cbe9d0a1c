use crate::point::Point2;

use super::ClipBounds;

/// Liang–Barsky parametric line clipping.
///
/// Same contract as [`cohen_sutherland`](super::cohen_sutherland): the
/// visible part of `a..b`, or `None` when nothing is inside `bounds`.
pub fn liang_barsky(a: Point2, b: Point2, bounds: &ClipBounds) -> Option<(Point2, Point2)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    // One inequality per window edge: left, right, bottom, top.
    let p = [-dx, dx, -dy, dy];
    let q = [
        a.x - bounds.xmin,
        bounds.xmax - a.x,
        a.y - bounds.ymin,
        bounds.ymax - a.y,
    ];

    let mut u1: f64 = 0.0;
    let mut u2: f64 = 1.0;

    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi == 0.0 {
            // Parallel to this edge: outside it means outside the window.
            if qi < 0.0 {
                return None;
            }
        } else {
            let r = qi / pi;
            if pi < 0.0 {
                u1 = u1.max(r);
            } else {
                u2 = u2.min(r);
            }
        }
    }

    if u1 > u2 {
        return None;
    }

    Some((
        Point2::new(a.x + u1 * dx, a.y + u1 * dy),
        Point2::new(a.x + u2 * dx, a.y + u2 * dy),
    ))
}
