use core::ops::{Add, Mul, Neg, Sub};

/// 2D point (or offset) in world units.
///
/// World space is Y-up: the editor maps window pixels onto an orthographic
/// region centered on the origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Point2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (self - other).length()
    }

    /// Midpoint of `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point2) -> Point2 {
        Point2::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Rotates `self` counter-clockwise by `degrees` around `pivot`.
    pub fn rotated_about(self, pivot: Point2, degrees: f64) -> Point2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self - pivot;
        Point2::new(
            pivot.x + d.x * cos - d.y * sin,
            pivot.y + d.x * sin + d.y * cos,
        )
    }

    /// Scales the offset from `pivot` independently per axis.
    #[inline]
    pub fn scaled_about(self, pivot: Point2, sx: f64, sy: f64) -> Point2 {
        Point2::new(
            pivot.x + (self.x - pivot.x) * sx,
            pivot.y + (self.y - pivot.y) * sy,
        )
    }

    /// Component-wise approximate equality.
    #[inline]
    pub fn approx_eq(self, other: Point2, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

/// Arithmetic mean of `points`; the origin for an empty slice.
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::zero();
    }
    let sum = points.iter().fold(Point2::zero(), |acc, &p| acc + p);
    sum * (1.0 / points.len() as f64)
}

impl Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;
    #[inline]
    fn mul(self, rhs: f64) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point2 {
    type Output = Point2;
    #[inline]
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2::new(x, y)
    }
}
