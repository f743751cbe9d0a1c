use crate::point::Point2;
use crate::shape::Ellipse;

use super::{cohen_sutherland, ClipBounds};

/// Relation of a closed outline to the clip window.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegionClass {
    /// Everything lies inside the window.
    AllInside,
    /// Nothing of the outline or the window interior is shared.
    AllOutside,
    /// Partial overlap; the outline has to be clipped edge by edge.
    Straddling,
}

/// Classifies a quadrilateral against `bounds`.
///
/// Corners are counted strictly inside the window. With no corner inside, a
/// rectangle whose bounding box swallows the whole window still straddles it;
/// otherwise it straddles only if one of its edges survives line clipping.
pub fn classify_rectangle(corners: &[Point2; 4], bounds: &ClipBounds) -> RegionClass {
    let inside = corners
        .iter()
        .filter(|&&c| bounds.strictly_contains(c))
        .count();

    match inside {
        4 => RegionClass::AllInside,
        1..=3 => RegionClass::Straddling,
        _ => {
            let engulfs = ClipBounds::enclosing(corners)
                .is_some_and(|bbox| bbox.covers(bounds));
            if engulfs {
                return RegionClass::Straddling;
            }

            let any_edge_visible = (0..4)
                .any(|i| cohen_sutherland(corners[i], corners[(i + 1) % 4], bounds).is_some());
            if any_edge_visible {
                RegionClass::Straddling
            } else {
                RegionClass::AllOutside
            }
        }
    }
}

/// Classifies an ellipse by its tessellated boundary.
///
/// Inside when every sample is inside (boundary inclusive), outside when the
/// boundary's bounding box misses the window, straddling otherwise.
pub fn classify_ellipse(ellipse: &Ellipse, bounds: &ClipBounds) -> RegionClass {
    let boundary = ellipse.boundary();

    if boundary.iter().all(|&p| bounds.contains(p)) {
        return RegionClass::AllInside;
    }

    match ClipBounds::enclosing(boundary) {
        Some(bbox) if bbox.overlaps(bounds) => RegionClass::Straddling,
        _ => RegionClass::AllOutside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn window() -> ClipBounds {
        ClipBounds::new(-100.0, 100.0, -100.0, 100.0)
    }

    fn quad(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> [Point2; 4] {
        [p(xmin, ymin), p(xmax, ymin), p(xmax, ymax), p(xmin, ymax)]
    }

    // ── classify_rectangle ────────────────────────────────────────────────

    #[test]
    fn rectangle_inside() {
        assert_eq!(classify_rectangle(&quad(-50.0, -50.0, 50.0, 50.0), &window()), RegionClass::AllInside);
    }

    #[test]
    fn rectangle_far_away_is_outside() {
        assert_eq!(classify_rectangle(&quad(200.0, 200.0, 300.0, 300.0), &window()), RegionClass::AllOutside);
    }

    #[test]
    fn rectangle_engulfing_window_straddles() {
        assert_eq!(classify_rectangle(&quad(-300.0, -300.0, 300.0, 300.0), &window()), RegionClass::Straddling);
    }

    #[test]
    fn rectangle_with_some_corners_inside_straddles() {
        assert_eq!(classify_rectangle(&quad(50.0, 50.0, 150.0, 150.0), &window()), RegionClass::Straddling);
    }

    #[test]
    fn band_crossing_window_without_corners_inside_straddles() {
        // A wide, short band: no corner inside, not engulfing, edges cross.
        assert_eq!(classify_rectangle(&quad(-300.0, -10.0, 300.0, 10.0), &window()), RegionClass::Straddling);
    }

    #[test]
    fn rectangle_on_window_outline_is_not_strictly_inside() {
        // Corners lie on the boundary; the bounding box equals the window.
        assert_eq!(classify_rectangle(&quad(-100.0, -100.0, 100.0, 100.0), &window()), RegionClass::Straddling);
    }

    // ── classify_ellipse ──────────────────────────────────────────────────

    #[test]
    fn ellipse_inside() {
        let e = Ellipse::new(p(0.0, 0.0), (40.0, 20.0));
        assert_eq!(classify_ellipse(&e, &window()), RegionClass::AllInside);
    }

    #[test]
    fn ellipse_outside() {
        let e = Ellipse::new(p(400.0, 0.0), (40.0, 20.0));
        assert_eq!(classify_ellipse(&e, &window()), RegionClass::AllOutside);
    }

    #[test]
    fn ellipse_crossing_edge() {
        let e = Ellipse::new(p(100.0, 0.0), (40.0, 20.0));
        assert_eq!(classify_ellipse(&e, &window()), RegionClass::Straddling);
    }
}
