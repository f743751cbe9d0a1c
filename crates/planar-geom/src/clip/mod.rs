//! Clipping engine.
//!
//! Line clipping against an axis-aligned window (Cohen–Sutherland and
//! Liang–Barsky, interchangeable) and coarse classification of closed
//! outlines as inside / outside / straddling.

mod classify;
mod cohen_sutherland;
mod liang_barsky;
mod outcode;

pub use classify::{classify_ellipse, classify_rectangle, RegionClass};
pub use cohen_sutherland::cohen_sutherland;
pub use liang_barsky::liang_barsky;
pub use outcode::Outcode;

use crate::point::Point2;

/// Axis-aligned clip window in world units.
///
/// Invariant: `xmin <= xmax` and `ymin <= ymax`. [`ClipBounds::from_corners`]
/// normalizes arbitrary click order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl ClipBounds {
    #[inline]
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        debug_assert!(xmin <= xmax && ymin <= ymax, "ClipBounds must be normalized");
        Self { xmin, xmax, ymin, ymax }
    }

    /// Builds normalized bounds from two opposite corners in any order.
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            xmin: a.x.min(b.x),
            xmax: a.x.max(b.x),
            ymin: a.y.min(b.y),
            ymax: a.y.max(b.y),
        }
    }

    /// Bounding box of `points`; `None` for an empty slice.
    pub fn enclosing(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Self::from_corners(*first, *first);
        for p in rest {
            b.xmin = b.xmin.min(p.x);
            b.xmax = b.xmax.max(p.x);
            b.ymin = b.ymin.min(p.y);
            b.ymax = b.ymax.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        Point2::new((self.xmin + self.xmax) * 0.5, (self.ymin + self.ymax) * 0.5)
    }

    /// Closed containment: points on the boundary are inside.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Open containment: points on the boundary are outside.
    #[inline]
    pub fn strictly_contains(&self, p: Point2) -> bool {
        p.x > self.xmin && p.x < self.xmax && p.y > self.ymin && p.y < self.ymax
    }

    /// `true` if `self` swallows `other` entirely (shared edges allowed).
    #[inline]
    pub fn covers(&self, other: &ClipBounds) -> bool {
        self.xmin <= other.xmin
            && self.xmax >= other.xmax
            && self.ymin <= other.ymin
            && self.ymax >= other.ymax
    }

    /// `true` if the two closed boxes share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &ClipBounds) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Nearest point of the window to `p`.
    #[inline]
    pub fn clamp(&self, p: Point2) -> Point2 {
        Point2::new(p.x.clamp(self.xmin, self.xmax), p.y.clamp(self.ymin, self.ymax))
    }

    /// Corners counter-clockwise from bottom-left.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.xmin, self.ymin),
            Point2::new(self.xmax, self.ymin),
            Point2::new(self.xmax, self.ymax),
            Point2::new(self.xmin, self.ymax),
        ]
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            xmin: self.xmin + dx,
            xmax: self.xmax + dx,
            ymin: self.ymin + dy,
            ymax: self.ymax + dy,
        }
    }

    /// Scales width and height by `factor` around the center.
    ///
    /// Non-positive factors are ignored to keep the bounds normalized.
    pub fn resized(&self, factor: f64) -> Self {
        if !(factor > 0.0) {
            return *self;
        }
        let c = self.center();
        let hw = self.width() * factor * 0.5;
        let hh = self.height() * factor * 0.5;
        Self {
            xmin: c.x - hw,
            xmax: c.x + hw,
            ymin: c.y - hh,
            ymax: c.y + hh,
        }
    }
}

/// Selectable line clipping algorithm.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ClipAlgorithm {
    #[default]
    CohenSutherland,
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Clips `a..b` against `bounds` with this algorithm.
    #[inline]
    pub fn clip(self, a: Point2, b: Point2, bounds: &ClipBounds) -> Option<(Point2, Point2)> {
        match self {
            ClipAlgorithm::CohenSutherland => cohen_sutherland(a, b, bounds),
            ClipAlgorithm::LiangBarsky => liang_barsky(a, b, bounds),
        }
    }

    /// The other algorithm.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ClipAlgorithm::CohenSutherland => ClipAlgorithm::LiangBarsky,
            ClipAlgorithm::LiangBarsky => ClipAlgorithm::CohenSutherland,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ClipAlgorithm::CohenSutherland => "Cohen-Sutherland",
            ClipAlgorithm::LiangBarsky => "Liang-Barsky",
        }
    }
}
