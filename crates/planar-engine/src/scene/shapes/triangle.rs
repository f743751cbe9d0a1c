use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled triangle in logical pixels, color interpolated between corners.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub colors: [Color; 3],
}

impl TriangleCmd {
    #[inline]
    pub fn new(points: [Vec2; 3], colors: [Color; 3]) -> Self {
        Self { points, colors }
    }

    /// Same color at every corner.
    #[inline]
    pub fn flat(points: [Vec2; 3], color: Color) -> Self {
        Self { points, colors: [color; 3] }
    }

    /// Twice the signed area; positive when the corners run clockwise on
    /// screen (y grows downwards).
    pub fn signed_area2(&self) -> f32 {
        let [a, b, c] = self.points;
        let ab = b - a;
        let ac = c - a;
        ab.x * ac.y - ab.y * ac.x
    }

    /// Zero-area or non-finite triangles draw nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.points.iter().all(|p| p.is_finite()) || self.signed_area2() == 0.0
    }
}

impl DrawList {
    /// Records a triangle with per-corner colors.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, points: [Vec2; 3], colors: [Color; 3]) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(points, colors)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn winding_sign_follows_screen_orientation() {
        let cw = TriangleCmd::flat([v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)], Color::transparent());
        let ccw = TriangleCmd::flat([v(0.0, 0.0), v(0.0, 10.0), v(10.0, 0.0)], Color::transparent());
        assert_eq!(cw.signed_area2(), 100.0);
        assert_eq!(ccw.signed_area2(), -100.0);
    }

    #[test]
    fn collinear_and_non_finite_corners_are_degenerate() {
        let line = TriangleCmd::flat([v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)], Color::transparent());
        let nan = TriangleCmd::flat([v(f32::NAN, 0.0), v(1.0, 0.0), v(0.0, 1.0)], Color::transparent());
        assert!(line.is_degenerate());
        assert!(nan.is_degenerate());
    }

    #[test]
    fn push_records_a_triangle_command() {
        let mut dl = DrawList::new();
        let white = Color::opaque(1.0, 1.0, 1.0);
        dl.push_triangle(ZIndex::CANVAS, [v(0.0, 0.0), v(4.0, 0.0), v(0.0, 4.0)], [white; 3]);
        assert!(matches!(dl.items()[0].cmd, DrawCmd::Triangle(_)));
    }
}
