/// Swapchain and adapter preferences.
///
/// The editor draws thin opaque strokes on a flat background, so nothing here
/// asks for optional device features.
#[derive(Debug, Clone)]
pub struct SurfacePrefs {
    /// Present through FIFO. Off selects `AutoNoVsync` and leaves pacing to
    /// the runtime's frame cap.
    pub vsync: bool,

    /// Use an sRGB swapchain when the surface offers one.
    pub prefer_srgb: bool,

    /// Frames the presentation engine may queue ahead.
    pub frame_latency: u32,

    pub power: wgpu::PowerPreference,
}

impl SurfacePrefs {
    #[inline]
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }

    /// Latency clamped to the `1..=3` range every backend accepts.
    #[inline]
    pub fn clamped_latency(&self) -> u32 {
        self.frame_latency.clamp(1, 3)
    }
}

impl Default for SurfacePrefs {
    fn default() -> Self {
        Self {
            vsync: true,
            prefer_srgb: true,
            frame_latency: 2,
            power: wgpu::PowerPreference::LowPower,
        }
    }
}
