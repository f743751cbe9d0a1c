//! World/screen mapping.
//!
//! World space is Y-up with the ortho rectangle stretched over the whole
//! window; screen space is logical pixels with a top-left origin.

use planar_engine::coords::Vec2;
use planar_geom::{ClipBounds, Point2};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldView {
    ortho: ClipBounds,
    width: f32,
    height: f32,
}

impl WorldView {
    /// Zero or negative sizes (minimized windows) are treated as one pixel.
    pub fn new(ortho: ClipBounds, width: f32, height: f32) -> Self {
        Self { ortho, width: width.max(1.0), height: height.max(1.0) }
    }

    #[inline]
    pub fn ortho(&self) -> &ClipBounds {
        &self.ortho
    }

    #[inline]
    pub fn screen_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn screen_to_world(&self, s: Vec2) -> Point2 {
        let o = &self.ortho;
        let nx = s.x as f64 / self.width as f64;
        let ny = 1.0 - s.y as f64 / self.height as f64;
        Point2::new(o.xmin + o.width() * nx, o.ymin + o.height() * ny)
    }

    /// World length covered by `px` logical pixels along the coarser axis.
    pub fn pixels_to_world(&self, px: f64) -> f64 {
        let sx = self.ortho.width() / self.width as f64;
        let sy = self.ortho.height() / self.height as f64;
        px * sx.max(sy)
    }

    pub fn world_to_screen(&self, p: Point2) -> Vec2 {
        let o = &self.ortho;
        let nx = (p.x - o.xmin) / o.width();
        let ny = (p.y - o.ymin) / o.height();
        Vec2::new((nx * self.width as f64) as f32, ((1.0 - ny) * self.height as f64) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> WorldView {
        WorldView::new(ClipBounds::new(-400.0, 400.0, -300.0, 300.0), 800.0, 600.0)
    }

    #[test]
    fn screen_center_is_world_origin() {
        assert_eq!(view().screen_to_world(Vec2::new(400.0, 300.0)), Point2::new(0.0, 0.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        let v = view();
        assert_eq!(v.screen_to_world(Vec2::new(0.0, 0.0)), Point2::new(-400.0, 300.0));
        assert_eq!(v.screen_to_world(Vec2::new(800.0, 600.0)), Point2::new(400.0, -300.0));
        assert_eq!(v.world_to_screen(Point2::new(-400.0, -300.0)), Vec2::new(0.0, 600.0));
    }

    #[test]
    fn mapping_follows_window_size() {
        let v = WorldView::new(ClipBounds::new(-400.0, 400.0, -300.0, 300.0), 400.0, 300.0);
        assert_eq!(v.screen_to_world(Vec2::new(100.0, 75.0)), Point2::new(-200.0, 150.0));
        assert_eq!(v.world_to_screen(Point2::new(200.0, -150.0)), Vec2::new(300.0, 225.0));
    }

    #[test]
    fn pixel_lengths_scale_with_window_size() {
        assert_eq!(view().pixels_to_world(5.0), 5.0);
        let half = WorldView::new(ClipBounds::new(-400.0, 400.0, -300.0, 300.0), 400.0, 300.0);
        assert_eq!(half.pixels_to_world(5.0), 10.0);
        // Stretched only horizontally: the coarser axis wins.
        let wide = WorldView::new(ClipBounds::new(-400.0, 400.0, -300.0, 300.0), 1600.0, 600.0);
        assert_eq!(wide.pixels_to_world(5.0), 5.0);
    }

    #[test]
    fn degenerate_size_does_not_divide_by_zero() {
        let v = WorldView::new(ClipBounds::new(-1.0, 1.0, -1.0, 1.0), 0.0, 0.0);
        assert!(v.screen_to_world(Vec2::new(0.0, 0.0)).is_finite());
    }
}
