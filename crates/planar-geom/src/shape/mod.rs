//! Shape model.
//!
//! A [`Shape`] is a [`Geometry`] plus presentation attributes. Geometry is a
//! closed sum; every consumer matches on it exhaustively.

mod ellipse;
mod rect;

pub use ellipse::{Ellipse, SAMPLES as ELLIPSE_SAMPLES};
pub use rect::{rotate_rect, RectShape};

use core::fmt;

use crate::color::Rgb;
use crate::point::Point2;
use crate::predicates::{distance_point_segment, point_in_ellipse, point_in_rectangle, point_near_point};

/// Stable identity of a shape within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outline color and width (world units, also used as point size).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

impl Stroke {
    #[inline]
    pub const fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Rgb::WHITE, 1.0)
    }
}

/// Kind of primitive, without coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Rect,
    Ellipse,
}

impl ShapeKind {
    /// Clicks needed to define a shape of this kind.
    #[inline]
    pub fn clicks_required(self) -> usize {
        match self {
            ShapeKind::Point => 1,
            ShapeKind::Line | ShapeKind::Rect | ShapeKind::Ellipse => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rectangle",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point { position: Point2 },
    Segment { a: Point2, b: Point2 },
    Rect(RectShape),
    Ellipse(Ellipse),
}

impl Geometry {
    /// Builds a geometry of `kind` from its defining clicks.
    ///
    /// Returns `None` unless exactly [`ShapeKind::clicks_required`] points
    /// are given.
    pub fn from_clicks(kind: ShapeKind, points: &[Point2]) -> Option<Self> {
        if points.len() != kind.clicks_required() {
            return None;
        }
        Some(match kind {
            ShapeKind::Point => Geometry::Point { position: points[0] },
            ShapeKind::Line => Geometry::Segment { a: points[0], b: points[1] },
            ShapeKind::Rect => Geometry::Rect(RectShape::from_corners(points[0], points[1])),
            ShapeKind::Ellipse => Geometry::Ellipse(Ellipse::from_corners(points[0], points[1])),
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Point { .. } => ShapeKind::Point,
            Geometry::Segment { .. } => ShapeKind::Line,
            Geometry::Rect(_) => ShapeKind::Rect,
            Geometry::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    /// Mean of the defining points; the default transform pivot.
    pub fn center(&self) -> Point2 {
        match self {
            Geometry::Point { position } => *position,
            Geometry::Segment { a, b } => a.midpoint(*b),
            Geometry::Rect(r) => r.center(),
            Geometry::Ellipse(e) => e.center(),
        }
    }

    /// Outline proximity test.
    pub fn hit_test(&self, p: Point2, threshold: f64) -> bool {
        match self {
            Geometry::Point { position } => point_near_point(p, *position, threshold),
            Geometry::Segment { a, b } => distance_point_segment(p, *a, *b) <= threshold,
            Geometry::Rect(r) => point_in_rectangle(p, &r.corners(), threshold),
            Geometry::Ellipse(e) => {
                // Evaluate in the ellipse's own frame so rotated outlines pick correctly.
                let local = p.rotated_about(e.center(), -e.rotation());
                point_in_ellipse(local, e.center(), e.radii(), threshold)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: Geometry,
    pub stroke: Stroke,
    pub visible: bool,
}

impl Shape {
    pub fn new(id: ShapeId, geometry: Geometry, stroke: Stroke) -> Self {
        Self { id, geometry, stroke, visible: true }
    }

    pub fn point(id: ShapeId, position: Point2, stroke: Stroke) -> Self {
        Self::new(id, Geometry::Point { position }, stroke)
    }

    pub fn segment(id: ShapeId, a: Point2, b: Point2, stroke: Stroke) -> Self {
        Self::new(id, Geometry::Segment { a, b }, stroke)
    }

    pub fn rect(id: ShapeId, a: Point2, b: Point2, stroke: Stroke) -> Self {
        Self::new(id, Geometry::Rect(RectShape::from_corners(a, b)), stroke)
    }

    pub fn ellipse(id: ShapeId, a: Point2, b: Point2, stroke: Stroke) -> Self {
        Self::new(id, Geometry::Ellipse(Ellipse::from_corners(a, b)), stroke)
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.geometry.center()
    }

    /// Hit test with the pick radius widened to the stroke width.
    pub fn hit_test(&self, p: Point2, threshold: f64) -> bool {
        self.visible && self.geometry.hit_test(p, threshold.max(self.stroke.width))
    }
}

/// Topmost shape under `p`: searches newest first.
pub fn pick(shapes: &[Shape], p: Point2, threshold: f64) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|s| s.hit_test(p, threshold))
        .map(|s| s.id)
}
