use winit::dpi::PhysicalSize;

/// Drawable area in logical pixels, as uploaded to the shaders' uniform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Divides a physical size by the window's scale factor.
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(
            (size.width as f64 / scale) as f32,
            (size.height as f64 / scale) as f32,
        )
    }

    /// False while minimized or before the first resize arrives.
    #[inline]
    pub fn has_area(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Both sides at least one pixel, so shader divisions stay finite.
    #[inline]
    pub fn uniform_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
