//! Pivot-based affine transforms applied in place to shapes.
//!
//! Only the resulting geometry is kept; transforms are never recorded.

use core::fmt;

use crate::point::Point2;
use crate::shape::{rotate_rect, Geometry, Shape, ShapeId};

/// A single transform step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transform {
    Translate { dx: f64, dy: f64 },
    /// Counter-clockwise, in degrees.
    Rotate { degrees: f64 },
    Scale { sx: f64, sy: f64 },
}

impl Transform {
    fn is_finite(&self) -> bool {
        match *self {
            Transform::Translate { dx, dy } => dx.is_finite() && dy.is_finite(),
            Transform::Rotate { degrees } => degrees.is_finite(),
            Transform::Scale { sx, sy } => sx.is_finite() && sy.is_finite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The selected shape no longer exists.
    MissingTarget(ShapeId),
    /// A parameter or the pivot is NaN or infinite.
    NonFinite(Transform),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::MissingTarget(id) => write!(f, "no shape with id {id}"),
            TransformError::NonFinite(t) => write!(f, "non-finite transform parameters: {t:?}"),
        }
    }
}

impl std::error::Error for TransformError {}

/// Moves every stored coordinate by `(dx, dy)`.
pub fn translate(shape: &mut Shape, dx: f64, dy: f64) {
    let d = Point2::new(dx, dy);
    match &mut shape.geometry {
        Geometry::Point { position } => *position = *position + d,
        Geometry::Segment { a, b } => {
            *a = *a + d;
            *b = *b + d;
        }
        Geometry::Rect(r) => r.translate(dx, dy),
        Geometry::Ellipse(e) => e.translate(dx, dy),
    }
}

/// Rotates counter-clockwise by `degrees` about `pivot` (shape center if `None`).
///
/// Rectangles become polygons; ellipses accumulate the angle.
pub fn rotate(shape: &mut Shape, degrees: f64, pivot: Option<Point2>) {
    let pivot = pivot.unwrap_or_else(|| shape.center());
    match &mut shape.geometry {
        Geometry::Point { position } => *position = position.rotated_about(pivot, degrees),
        Geometry::Segment { a, b } => {
            *a = a.rotated_about(pivot, degrees);
            *b = b.rotated_about(pivot, degrees);
        }
        Geometry::Rect(r) => *r = rotate_rect(r, pivot, degrees),
        Geometry::Ellipse(e) => e.rotate_about(pivot, degrees),
    }
}

/// Scales offsets from `pivot` (shape center if `None`) per axis.
pub fn scale(shape: &mut Shape, sx: f64, sy: f64, pivot: Option<Point2>) {
    let pivot = pivot.unwrap_or_else(|| shape.center());
    match &mut shape.geometry {
        Geometry::Point { position } => *position = position.scaled_about(pivot, sx, sy),
        Geometry::Segment { a, b } => {
            *a = a.scaled_about(pivot, sx, sy);
            *b = b.scaled_about(pivot, sx, sy);
        }
        Geometry::Rect(r) => r.scale_about(pivot, sx, sy),
        Geometry::Ellipse(e) => e.scale_about(pivot, sx, sy),
    }
}

/// Applies `t` to the shape with id `target`.
///
/// Fails without touching anything when the target is gone or the parameters
/// are not finite.
pub fn apply(
    shapes: &mut [Shape],
    target: ShapeId,
    t: Transform,
    pivot: Option<Point2>,
) -> Result<(), TransformError> {
    if !t.is_finite() || pivot.is_some_and(|p| !p.is_finite()) {
        return Err(TransformError::NonFinite(t));
    }

    let shape = shapes
        .iter_mut()
        .find(|s| s.id == target)
        .ok_or(TransformError::MissingTarget(target))?;

    match t {
        Transform::Translate { dx, dy } => translate(shape, dx, dy),
        Transform::Rotate { degrees } => rotate(shape, degrees, pivot),
        Transform::Scale { sx, sy } => scale(shape, sx, sy, pivot),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::shape::{RectShape, Stroke};

    const EPS: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn all_variants() -> Vec<Shape> {
        let s = Stroke::new(Rgb::CYAN, 2.0);
        vec![
            Shape::point(ShapeId(1), p(3.0, -7.0), s),
            Shape::segment(ShapeId(2), p(-20.0, 5.0), p(40.0, 60.0), s),
            Shape::rect(ShapeId(3), p(-50.0, -25.0), p(10.0, 35.0), s),
            Shape::ellipse(ShapeId(4), p(100.0, 100.0), p(160.0, 130.0), s),
        ]
    }

    fn geometry_approx_eq(lhs: &Geometry, rhs: &Geometry, eps: f64) -> bool {
        match (lhs, rhs) {
            (Geometry::Point { position: a }, Geometry::Point { position: b }) => a.approx_eq(*b, eps),
            (Geometry::Segment { a: a0, b: b0 }, Geometry::Segment { a: a1, b: b1 }) => {
                a0.approx_eq(*a1, eps) && b0.approx_eq(*b1, eps)
            }
            (Geometry::Rect(r0), Geometry::Rect(r1)) => r0
                .corners()
                .iter()
                .zip(r1.corners().iter())
                .all(|(a, b)| a.approx_eq(*b, eps)),
            (Geometry::Ellipse(e0), Geometry::Ellipse(e1)) => e0
                .boundary()
                .iter()
                .zip(e1.boundary().iter())
                .all(|(a, b)| a.approx_eq(*b, eps)),
            _ => false,
        }
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_round_trip_restores_every_variant() {
        for original in all_variants() {
            let mut s = original.clone();
            translate(&mut s, 37.5, -12.25);
            assert!(!geometry_approx_eq(&s.geometry, &original.geometry, EPS));
            translate(&mut s, -37.5, 12.25);
            assert!(geometry_approx_eq(&s.geometry, &original.geometry, EPS), "{:?}", s.kind());
        }
    }

    #[test]
    fn translate_keeps_rect_axis_aligned() {
        let mut s = Shape::rect(ShapeId(0), p(0.0, 0.0), p(10.0, 10.0), Stroke::default());
        translate(&mut s, 5.0, 5.0);
        assert_eq!(
            s.geometry,
            Geometry::Rect(RectShape::AxisAligned { min: p(5.0, 5.0), max: p(15.0, 15.0) })
        );
    }

    // ── rotate ────────────────────────────────────────────────────────────

    #[test]
    fn full_turn_restores_ellipse_boundary() {
        let original = Shape::ellipse(ShapeId(0), p(-30.0, -10.0), p(50.0, 30.0), Stroke::default());
        let mut s = original.clone();
        rotate(&mut s, 360.0, None);
        assert!(geometry_approx_eq(&s.geometry, &original.geometry, 1e-9));
    }

    #[test]
    fn rotating_rect_promotes_to_polygon() {
        let mut s = Shape::rect(ShapeId(0), p(0.0, 0.0), p(20.0, 10.0), Stroke::default());
        rotate(&mut s, 90.0, None);
        let Geometry::Rect(r) = &s.geometry else {
            panic!("rect stays a rect");
        };
        assert!(!r.is_axis_aligned());
        // Rotating about the center keeps the center.
        assert!(r.center().approx_eq(p(10.0, 5.0), EPS));
        assert!(r.corners()[0].approx_eq(p(15.0, -5.0), EPS));
    }

    #[test]
    fn rotate_segment_about_custom_pivot() {
        let mut s = Shape::segment(ShapeId(0), p(10.0, 0.0), p(20.0, 0.0), Stroke::default());
        rotate(&mut s, 90.0, Some(p(0.0, 0.0)));
        assert!(geometry_approx_eq(
            &s.geometry,
            &Geometry::Segment { a: p(0.0, 10.0), b: p(0.0, 20.0) },
            EPS
        ));
    }

    // ── scale ─────────────────────────────────────────────────────────────

    #[test]
    fn scale_about_center_keeps_center() {
        for original in all_variants() {
            let mut s = original.clone();
            scale(&mut s, 1.1, 0.9, None);
            assert!(s.center().approx_eq(original.center(), 1e-9), "{:?}", s.kind());
        }
    }

    #[test]
    fn scale_ellipse_updates_radii() {
        let mut s = Shape::ellipse(ShapeId(0), p(-10.0, -5.0), p(10.0, 5.0), Stroke::default());
        scale(&mut s, 2.0, 3.0, None);
        let Geometry::Ellipse(e) = &s.geometry else {
            panic!("ellipse stays an ellipse");
        };
        assert_eq!(e.radii(), (20.0, 15.0));
    }

    // ── apply ─────────────────────────────────────────────────────────────

    #[test]
    fn apply_to_missing_target_fails_without_change() {
        let mut shapes = all_variants();
        let before = shapes.clone();
        let err = apply(&mut shapes, ShapeId(99), Transform::Translate { dx: 1.0, dy: 0.0 }, None)
            .unwrap_err();
        assert_eq!(err, TransformError::MissingTarget(ShapeId(99)));
        assert_eq!(shapes, before);
    }

    #[test]
    fn apply_rejects_non_finite_parameters() {
        let mut shapes = all_variants();
        let before = shapes.clone();
        let t = Transform::Scale { sx: f64::NAN, sy: 1.0 };
        assert!(matches!(apply(&mut shapes, ShapeId(1), t, None), Err(TransformError::NonFinite(_))));

        let t = Transform::Rotate { degrees: 10.0 };
        assert!(apply(&mut shapes, ShapeId(1), t, Some(p(f64::INFINITY, 0.0))).is_err());
        assert_eq!(shapes, before);
    }

    #[test]
    fn apply_targets_by_id() {
        let mut shapes = all_variants();
        apply(&mut shapes, ShapeId(1), Transform::Translate { dx: 1.0, dy: 1.0 }, None).unwrap();
        assert_eq!(shapes[0].geometry, Geometry::Point { position: p(4.0, -6.0) });
        assert_eq!(shapes[1], all_variants()[1]);
    }
}
