//! Single point light with toggleable ambient, diffuse and specular terms.

use glam::Vec3;

/// Global ambient level left over when the ambient term is switched off.
const AMBIENT_FLOOR: f32 = 0.1;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Shading {
    /// Corner colors from averaged vertex normals, interpolated across faces.
    #[default]
    Smooth,
    /// One color per face.
    Flat,
}

impl Shading {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Shading::Smooth => Shading::Flat,
            Shading::Flat => Shading::Smooth,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shading::Smooth => "smooth",
            Shading::Flat => "flat",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: bool,
    pub diffuse: bool,
    pub specular: bool,
    pub ambient_intensity: f32,
    pub diffuse_intensity: f32,
    pub specular_intensity: f32,
    pub shininess: f32,
    pub shading: Shading,
    /// World position of the light (drawn as the sun).
    pub position: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: true,
            diffuse: true,
            specular: true,
            ambient_intensity: 0.3,
            diffuse_intensity: 0.7,
            specular_intensity: 0.5,
            shininess: 50.0,
            shading: Shading::default(),
            position: Vec3::new(0.0, 10.0, 10.0),
        }
    }
}

impl Lighting {
    /// With every term off, objects show their flat base color.
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.ambient || self.diffuse || self.specular
    }

    /// Color of a surface with base color `base` at `point`, unit `normal`,
    /// seen from `eye`. Channels are clamped to `[0, 1]`.
    pub fn shade(&self, base: Vec3, point: Vec3, normal: Vec3, eye: Vec3) -> Vec3 {
        if !self.is_lit() {
            return base;
        }

        let global = if self.ambient { self.ambient_intensity } else { AMBIENT_FLOOR };
        let mut color = base * global;

        let to_light = (self.position - point).normalize_or_zero();
        let lambert = normal.dot(to_light).max(0.0);
        if self.diffuse {
            color += base * self.diffuse_intensity * lambert;
        }
        if self.specular && lambert > 0.0 {
            let half = (to_light + (eye - point).normalize_or_zero()).normalize_or_zero();
            let highlight = normal.dot(half).max(0.0).powf(self.shininess);
            color += Vec3::splat(self.specular_intensity * highlight);
        }
        color.clamp(Vec3::ZERO, Vec3::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Vec3 = Vec3::new(0.0, 0.5, 1.0);

    fn lit(ambient: bool, diffuse: bool, specular: bool) -> Lighting {
        Lighting { ambient, diffuse, specular, ..Lighting::default() }
    }

    /// Surface at the origin facing straight at the light.
    fn facing_light(l: &Lighting) -> Vec3 {
        let n = l.position.normalize();
        l.shade(BASE, Vec3::ZERO, n, l.position)
    }

    #[test]
    fn all_terms_off_shows_base_color() {
        let l = lit(false, false, false);
        assert!(!l.is_lit());
        assert_eq!(l.shade(BASE, Vec3::ZERO, Vec3::Y, Vec3::Z), BASE);
    }

    #[test]
    fn ambient_only_scales_base() {
        let c = facing_light(&lit(true, false, false));
        assert!(c.abs_diff_eq(BASE * 0.3, 1e-6));
        let dim = facing_light(&lit(false, false, true));
        // Specular is still white on top of the ambient floor.
        assert!(dim.x > 0.0);
    }

    #[test]
    fn diffuse_follows_the_angle_to_the_light() {
        let l = lit(false, true, false);
        let toward = facing_light(&l);
        let away = l.shade(BASE, Vec3::ZERO, -l.position.normalize(), l.position);
        assert!(toward.z > away.z);
        assert!(away.abs_diff_eq(BASE * AMBIENT_FLOOR, 1e-6));
    }

    #[test]
    fn specular_adds_a_white_highlight() {
        let without = facing_light(&lit(true, true, false));
        let with = facing_light(&lit(true, true, true));
        assert!(with.x > without.x);
        assert!(with.cmple(Vec3::ONE).all());
    }

    #[test]
    fn shading_toggles() {
        assert_eq!(Shading::default().toggled(), Shading::Flat);
        assert_eq!(Shading::Flat.toggled().name(), "smooth");
    }
}
