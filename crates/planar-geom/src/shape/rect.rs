use crate::clip::ClipBounds;
use crate::point::{centroid, Point2};

/// Rectangle storage.
///
/// Starts axis-aligned; the first rotation turns it into a free
/// quadrilateral and it never goes back.
#[derive(Debug, Clone, PartialEq)]
pub enum RectShape {
    AxisAligned { min: Point2, max: Point2 },
    /// Corners in drawing order (closed outline).
    Polygon { corners: [Point2; 4] },
}

impl RectShape {
    /// Axis-aligned rectangle spanned by two opposite corners in any order.
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let b = ClipBounds::from_corners(a, b);
        RectShape::AxisAligned {
            min: Point2::new(b.xmin, b.ymin),
            max: Point2::new(b.xmax, b.ymax),
        }
    }

    /// Corners bottom-left, bottom-right, top-right, top-left for the
    /// axis-aligned form; stored order for polygons.
    pub fn corners(&self) -> [Point2; 4] {
        match *self {
            RectShape::AxisAligned { min, max } => [
                min,
                Point2::new(max.x, min.y),
                max,
                Point2::new(min.x, max.y),
            ],
            RectShape::Polygon { corners } => corners,
        }
    }

    pub fn center(&self) -> Point2 {
        match self {
            RectShape::AxisAligned { min, max } => min.midpoint(*max),
            RectShape::Polygon { corners } => centroid(corners),
        }
    }

    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        matches!(self, RectShape::AxisAligned { .. })
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        let d = Point2::new(dx, dy);
        match self {
            RectShape::AxisAligned { min, max } => {
                *min = *min + d;
                *max = *max + d;
            }
            RectShape::Polygon { corners } => {
                for c in corners.iter_mut() {
                    *c = *c + d;
                }
            }
        }
    }

    /// Scales every corner about `pivot`.
    ///
    /// The axis-aligned form survives only while both factors are positive;
    /// otherwise the corners are stored as a polygon to keep the mirrored
    /// winding.
    pub fn scale_about(&mut self, pivot: Point2, sx: f64, sy: f64) {
        match self {
            RectShape::AxisAligned { min, max } if sx > 0.0 && sy > 0.0 => {
                *min = min.scaled_about(pivot, sx, sy);
                *max = max.scaled_about(pivot, sx, sy);
            }
            _ => {
                let corners = self.corners().map(|c| c.scaled_about(pivot, sx, sy));
                *self = RectShape::Polygon { corners };
            }
        }
    }
}

/// Rotates a rectangle about `pivot`, promoting it to [`RectShape::Polygon`].
///
/// One-way: a rotated rectangle stays a polygon even after rotating back.
pub fn rotate_rect(rect: &RectShape, pivot: Point2, degrees: f64) -> RectShape {
    let corners = rect.corners().map(|c| c.rotated_about(pivot, degrees));
    RectShape::Polygon { corners }
}
