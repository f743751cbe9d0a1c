//! Free-look camera: a position plus pitch and yaw.

use glam::{Mat4, Vec3};

const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Vertical field of view in degrees.
pub const FOV_Y: f32 = 45.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 50.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Degrees; positive looks down.
    pub pitch: f32,
    /// Degrees; positive turns right.
    pub yaw: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { position: DEFAULT_POSITION, pitch: 0.0, yaw: 0.0 }
    }
}

impl Camera {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Unit view direction. Yaw and pitch of zero look down -Z.
    pub fn forward(&self) -> Vec3 {
        let (pitch, yaw) = (self.pitch.to_radians(), self.yaw.to_radians());
        Vec3::new(yaw.sin() * pitch.cos(), -pitch.sin(), -yaw.cos() * pitch.cos())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y.to_radians(), aspect, NEAR, FAR)
    }
}
