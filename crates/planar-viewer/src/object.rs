//! Objects placed in the scene: a mesh plus its pose and material color.

use glam::{Mat3, Mat4, Vec3};

use crate::mesh::Mesh;

/// Smallest per-axis scale; shrinking stops here.
pub const MIN_SCALE: f32 = 0.05;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Cube,
    Pyramid,
}

impl ObjectKind {
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Cube => "cube",
            ObjectKind::Pyramid => "pyramid",
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Solid,
    Wireframe,
}

impl DisplayMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Solid => DisplayMode::Wireframe,
            DisplayMode::Wireframe => DisplayMode::Solid,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Solid => "solid",
            DisplayMode::Wireframe => "wireframe",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub mesh: Mesh,
    pub position: Vec3,
    /// Euler angles in degrees, applied X, then Y, then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Linear RGB in `[0, 1]`.
    pub color: Vec3,
    pub display: DisplayMode,
    pub visible: bool,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, mesh: Mesh, position: Vec3, color: Vec3) -> Self {
        Self {
            kind,
            mesh,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            color,
            display: DisplayMode::default(),
            visible: true,
        }
    }

    pub fn cube() -> Self {
        Self::new(ObjectKind::Cube, Mesh::cube(), Vec3::ZERO, Vec3::new(0.0, 0.5, 1.0))
    }

    pub fn pyramid() -> Self {
        Self::new(ObjectKind::Pyramid, Mesh::pyramid(), Vec3::new(0.0, 0.15, 0.0), Vec3::new(1.0, 0.5, 0.0))
    }

    /// Object to world: translate, rotate about X, Y, Z, then scale.
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(self.scale)
    }

    /// Inverse transpose of the model's linear part, for normals.
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.model_matrix()).inverse().transpose()
    }

    /// Multiplies every axis by `factor`, never below [`MIN_SCALE`].
    pub fn scale_by(&mut self, factor: f32) {
        self.scale = (self.scale * factor).max(Vec3::splat(MIN_SCALE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrix_scales_before_translating() {
        let mut obj = SceneObject::cube();
        obj.position = Vec3::new(1.0, 2.0, 3.0);
        obj.scale = Vec3::splat(2.0);
        let p = obj.model_matrix().transform_point3(Vec3::new(0.5, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(2.0, 2.0, 3.0), 1e-6));
    }

    #[test]
    fn rotation_is_in_degrees() {
        let mut obj = SceneObject::cube();
        obj.rotation = Vec3::new(0.0, 90.0, 0.0);
        let p = obj.model_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn normals_stay_perpendicular_under_uneven_scale() {
        let mut obj = SceneObject::cube();
        obj.scale = Vec3::new(4.0, 1.0, 1.0);
        obj.rotation = Vec3::new(0.0, 0.0, 30.0);
        let model = obj.model_matrix();
        // Edge lying in the top face and the transformed top normal.
        let edge = model.transform_vector3(Vec3::new(1.0, 0.0, 0.0));
        let n = obj.normal_matrix() * Vec3::Y;
        assert!(edge.dot(n).abs() < 1e-5);
    }

    #[test]
    fn shrinking_stops_at_minimum() {
        let mut obj = SceneObject::pyramid();
        for _ in 0..100 {
            obj.scale_by(0.9);
        }
        assert_eq!(obj.scale, Vec3::splat(MIN_SCALE));
        obj.scale_by(1.1);
        assert!(obj.scale.x > MIN_SCALE);
    }

    #[test]
    fn display_mode_toggles_back() {
        assert_eq!(DisplayMode::Solid.toggled().toggled(), DisplayMode::Solid);
        assert_eq!(DisplayMode::default().toggled().name(), "wireframe");
    }
}
