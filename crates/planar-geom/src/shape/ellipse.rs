use crate::clip::ClipBounds;
use crate::point::Point2;

/// Number of boundary samples, one every `360 / SAMPLES` degrees.
pub const SAMPLES: usize = 36;

const STEP_DEGREES: f64 = 360.0 / SAMPLES as f64;

/// Ellipse with a cached, tessellated outline.
///
/// The outline is always derived from `(center, radii, rotation)`; fields are
/// private so every mutation goes through a method that retessellates.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point2,
    radii: (f64, f64),
    rotation: f64,
    boundary: [Point2; SAMPLES],
}

impl Ellipse {
    /// Unrotated ellipse. Negative radii are taken by magnitude.
    pub fn new(center: Point2, radii: (f64, f64)) -> Self {
        let mut e = Self {
            center,
            radii: (radii.0.abs(), radii.1.abs()),
            rotation: 0.0,
            boundary: [Point2::zero(); SAMPLES],
        };
        e.retessellate();
        e
    }

    /// Ellipse inscribed in the box spanned by two opposite corners.
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        let b = ClipBounds::from_corners(a, b);
        Self::new(b.center(), (b.width() * 0.5, b.height() * 0.5))
    }

    #[inline]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[inline]
    pub fn radii(&self) -> (f64, f64) {
        self.radii
    }

    /// Accumulated rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn boundary(&self) -> &[Point2; SAMPLES] {
        &self.boundary
    }

    /// Unrotated bounding box derived from center and radii.
    pub fn bounds(&self) -> ClipBounds {
        let (rx, ry) = self.radii;
        ClipBounds::new(
            self.center.x - rx,
            self.center.x + rx,
            self.center.y - ry,
            self.center.y + ry,
        )
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Point2::new(dx, dy);
        self.retessellate();
    }

    /// Moves the center around `pivot` and adds `degrees` to the rotation.
    pub fn rotate_about(&mut self, pivot: Point2, degrees: f64) {
        self.center = self.center.rotated_about(pivot, degrees);
        self.rotation += degrees;
        self.retessellate();
    }

    /// Scales the center offset from `pivot` and the radii by the factor
    /// magnitudes. The accumulated rotation is kept.
    pub fn scale_about(&mut self, pivot: Point2, sx: f64, sy: f64) {
        self.center = self.center.scaled_about(pivot, sx, sy);
        self.radii = ((self.radii.0 * sx).abs(), (self.radii.1 * sy).abs());
        self.retessellate();
    }

    fn retessellate(&mut self) {
        let (rx, ry) = self.radii;
        let (sin_r, cos_r) = self.rotation.to_radians().sin_cos();

        for (i, slot) in self.boundary.iter_mut().enumerate() {
            let (sin, cos) = (i as f64 * STEP_DEGREES).to_radians().sin_cos();
            let (x, y) = (rx * cos, ry * sin);
            *slot = Point2::new(
                self.center.x + x * cos_r - y * sin_r,
                self.center.y + x * sin_r + y * cos_r,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn from_corners_normalizes_and_samples_every_ten_degrees() {
        let e = Ellipse::from_corners(p(60.0, 20.0), p(-20.0, -20.0));
        assert!(e.center().approx_eq(p(20.0, 0.0), EPS));
        assert_eq!(e.radii(), (40.0, 20.0));
        assert_eq!(e.rotation(), 0.0);

        let b = e.boundary();
        assert!(b[0].approx_eq(p(60.0, 0.0), EPS));
        assert!(b[9].approx_eq(p(20.0, 20.0), EPS));
        assert!(b[18].approx_eq(p(-20.0, 0.0), EPS));
        assert!(b[27].approx_eq(p(20.0, -20.0), EPS));
    }

    #[test]
    fn rotation_accumulates_and_turns_the_outline() {
        let mut e = Ellipse::new(p(0.0, 0.0), (40.0, 20.0));
        e.rotate_about(p(0.0, 0.0), 45.0);
        e.rotate_about(p(0.0, 0.0), 45.0);
        assert!((e.rotation() - 90.0).abs() < EPS);
        // Major axis now vertical.
        assert!(e.boundary()[0].approx_eq(p(0.0, 40.0), 1e-9));
    }

    #[test]
    fn rotation_about_external_pivot_moves_center() {
        let mut e = Ellipse::new(p(100.0, 0.0), (10.0, 5.0));
        e.rotate_about(p(0.0, 0.0), 90.0);
        assert!(e.center().approx_eq(p(0.0, 100.0), 1e-9));
    }

    #[test]
    fn scale_takes_factor_magnitudes_and_keeps_rotation() {
        let mut e = Ellipse::new(p(10.0, 10.0), (40.0, 20.0));
        e.rotate_about(e.center(), 30.0);
        e.scale_about(e.center(), -0.5, 2.0);
        assert_eq!(e.radii(), (20.0, 40.0));
        assert!((e.rotation() - 30.0).abs() < EPS);
        assert_eq!(e.bounds(), ClipBounds::new(-10.0, 30.0, -30.0, 50.0));
    }

    #[test]
    fn negative_radii_are_taken_by_magnitude() {
        let e = Ellipse::new(p(0.0, 0.0), (-3.0, -4.0));
        assert_eq!(e.radii(), (3.0, 4.0));
    }
}
