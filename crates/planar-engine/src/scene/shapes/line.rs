use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment with butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub a: Vec2,
    pub b: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, width: f32, color: Color) -> Self {
        Self { a, b, width, color }
    }

    /// Zero-length or zero-width lines draw nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || (self.a.x == self.b.x && self.a.y == self.b.y)
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, a: Vec2, b: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(a, b, width, color)));
    }

    /// Records `points` as connected segments, closing the loop if `closed`.
    pub fn push_polyline(&mut self, z: ZIndex, points: &[Vec2], width: f32, color: Color, closed: bool) {
        for pair in points.windows(2) {
            self.push_line(z, pair[0], pair[1], width, color);
        }
        if closed && points.len() > 2 {
            if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
                self.push_line(z, last, first, width, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn open_polyline_has_one_segment_per_pair() {
        let mut dl = DrawList::new();
        dl.push_polyline(ZIndex::default(), &[v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)], 1.0, Color::transparent(), false);
        assert_eq!(dl.items().len(), 2);
    }

    #[test]
    fn closed_polyline_adds_closing_segment() {
        let mut dl = DrawList::new();
        let pts = [v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)];
        dl.push_polyline(ZIndex::default(), &pts, 1.0, Color::transparent(), true);
        assert_eq!(dl.items().len(), 4);
        let DrawCmd::Line(last) = &dl.items()[3].cmd else {
            panic!("expected a line");
        };
        assert_eq!((last.a, last.b), (v(0.0, 1.0), v(0.0, 0.0)));
    }

    #[test]
    fn degenerate_lines_are_detected() {
        assert!(LineCmd::new(v(1.0, 1.0), v(1.0, 1.0), 2.0, Color::transparent()).is_degenerate());
        assert!(LineCmd::new(v(0.0, 0.0), v(1.0, 1.0), 0.0, Color::transparent()).is_degenerate());
        assert!(!LineCmd::new(v(0.0, 0.0), v(1.0, 1.0), 1.0, Color::transparent()).is_degenerate());
    }
}
