use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled disc, or a ring when `ring_width` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct DotCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Outline thickness for hollow markers. `None` fills the disc.
    pub ring_width: Option<f32>,
}

impl DotCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color, ring_width: None }
    }

    #[inline]
    pub fn ring(center: Vec2, radius: f32, width: f32, color: Color) -> Self {
        Self { center, radius, color, ring_width: Some(width) }
    }
}

impl DrawList {
    /// Records a filled dot.
    #[inline]
    pub fn push_dot(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::Dot(DotCmd::new(center, radius, color)));
    }

    /// Records a hollow ring.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, width: f32, color: Color) {
        self.push(z, DrawCmd::Dot(DotCmd::ring(center, radius, width, color)));
    }
}
