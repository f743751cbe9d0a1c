//! World to screen projection for one frame.

use glam::{Mat4, Vec3};
use planar_engine::coords::Vec2;

use crate::camera::{Camera, FOV_Y, NEAR};

/// Camera matrices plus the screen they map onto (logical pixels, +Y down).
#[derive(Debug, Copy, Clone)]
pub struct Projector {
    view: Mat4,
    view_proj: Mat4,
    width: f32,
    height: f32,
}

impl Projector {
    /// Zero or negative sizes are treated as one pixel.
    pub fn new(camera: &Camera, width: f32, height: f32) -> Self {
        let (width, height) = (width.max(1.0), height.max(1.0));
        let view = camera.view_matrix();
        let view_proj = Camera::projection_matrix(width / height) * view;
        Self { view, view_proj, width, height }
    }

    /// Distance in front of the camera along the view axis.
    #[inline]
    pub fn depth(&self, p: Vec3) -> f32 {
        -self.view.transform_point3(p).z
    }

    /// Screen position of `p`, or `None` when it is behind the near plane.
    pub fn project(&self, p: Vec3) -> Option<Vec2> {
        (self.depth(p) >= NEAR).then(|| self.to_screen(p))
    }

    /// Screen segment for `a..b` after cutting away what lies behind the
    /// near plane.
    pub fn project_segment(&self, a: Vec3, b: Vec3) -> Option<(Vec2, Vec2)> {
        let (da, db) = (self.depth(a), self.depth(b));
        match (da >= NEAR, db >= NEAR) {
            (true, true) => Some((self.to_screen(a), self.to_screen(b))),
            (false, false) => None,
            (true, false) => Some((self.to_screen(a), self.to_screen(a.lerp(b, (da - NEAR) / (da - db))))),
            (false, true) => Some((self.to_screen(b.lerp(a, (db - NEAR) / (db - da))), self.to_screen(b))),
        }
    }

    /// On-screen radius of a sphere of `radius` at `depth`.
    pub fn pixel_radius(&self, radius: f32, depth: f32) -> f32 {
        let focal = self.height * 0.5 / (FOV_Y.to_radians() * 0.5).tan();
        radius * focal / depth.max(NEAR)
    }

    fn to_screen(&self, p: Vec3) -> Vec2 {
        let clip = self.view_proj * p.extend(1.0);
        let w = clip.w.max(f32::EPSILON);
        let (nx, ny) = (clip.x / w, clip.y / w);
        Vec2::new((nx + 1.0) * 0.5 * self.width, (1.0 - ny) * 0.5 * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector() -> Projector {
        Projector::new(&Camera::default(), 800.0, 600.0)
    }

    fn near(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn look_target_lands_in_the_middle() {
        let p = projector().project(Vec3::ZERO).unwrap();
        assert!(near(p, Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn up_is_up_on_screen() {
        let p = projector().project(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert!(p.y < 300.0);
        let q = projector().project(Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(q.x > 400.0);
    }

    #[test]
    fn points_behind_the_camera_are_dropped() {
        let pr = projector();
        assert_eq!(pr.depth(Vec3::new(0.0, 0.0, 6.0)), -1.0);
        assert!(pr.project(Vec3::new(0.0, 0.0, 6.0)).is_none());
    }

    #[test]
    fn segments_are_cut_at_the_near_plane() {
        let pr = projector();
        assert!(pr.project_segment(Vec3::new(0.0, 0.0, 6.0), Vec3::new(1.0, 0.0, 7.0)).is_none());

        let (a, b) = pr.project_segment(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0)).unwrap();
        assert!(near(a, Vec2::new(400.0, 300.0)));
        assert!(b.is_finite());

        let (c, d) = pr.project_segment(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO).unwrap();
        assert!(near(d, Vec2::new(400.0, 300.0)));
        assert!(c.is_finite());
    }

    #[test]
    fn apparent_size_shrinks_with_distance() {
        let pr = projector();
        // 45 degree fov over 600 px: a unit radius five units away.
        let r = pr.pixel_radius(1.0, 5.0);
        assert!((r - 300.0 / (22.5f32.to_radians().tan() * 5.0)).abs() < 1e-3);
        assert!(pr.pixel_radius(1.0, 10.0) < r);
    }
}
