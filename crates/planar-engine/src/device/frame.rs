/// One swapchain image plus the encoder recording into it.
///
/// Must go back through [`crate::device::Gpu::present`] before the next
/// acquire; the swapchain has no spare image while this is alive.
pub struct AcquiredFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl AcquiredFrame {
    pub(super) fn new(surface_texture: wgpu::SurfaceTexture, device: &wgpu::Device) -> Self {
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("planar frame"),
        });
        Self { surface_texture, view, encoder }
    }

    pub(super) fn finish(self, queue: &wgpu::Queue) {
        let AcquiredFrame { surface_texture, view, encoder } = self;
        queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }
}

/// What the frame loop does after an acquire fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Recovery {
    /// The surface was set up again; try next frame.
    Reconfigure,
    /// Drop this frame only.
    Skip,
    /// Out of memory. The editor shuts down.
    Abort,
}

impl Recovery {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Recovery::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => Recovery::Abort,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Recovery::Skip,
        }
    }

    #[inline]
    pub fn is_fatal(self) -> bool {
        self == Recovery::Abort
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(Recovery::for_error(&wgpu::SurfaceError::Lost), Recovery::Reconfigure);
        assert_eq!(Recovery::for_error(&wgpu::SurfaceError::Outdated), Recovery::Reconfigure);
    }

    #[test]
    fn only_oom_is_fatal() {
        assert!(Recovery::for_error(&wgpu::SurfaceError::OutOfMemory).is_fatal());
        assert!(!Recovery::for_error(&wgpu::SurfaceError::Timeout).is_fatal());
        assert_eq!(Recovery::for_error(&wgpu::SurfaceError::Other), Recovery::Skip);
    }
}
