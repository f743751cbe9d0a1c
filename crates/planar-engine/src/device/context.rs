use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::SurfaceSlot;
use super::{AcquiredFrame, Recovery, SurfacePrefs};

/// Device, queue and surface for one editor window.
///
/// `'w` ties the surface to the window it was created from.
pub struct Gpu<'w> {
    // Instance and adapter must outlive the surface.
    _instance: wgpu::Instance,
    _adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
    slot: SurfaceSlot<'w>,
}

impl<'w> Gpu<'w> {
    pub async fn new(window: &'w Window, prefs: SurfacePrefs) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(
            size.width > 0 && size.height > 0,
            "cannot create a surface for a {}x{} window",
            size.width,
            size.height
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("creating the window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: prefs.power,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no adapter can present to this window")?;
        let info = adapter.get_info();
        log::info!("adapter: {} via {:?}", info.name, info.backend);

        // Downlevel limits: the editor only needs vertex and uniform buffers.
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("planar device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("requesting a device")?;

        let slot = SurfaceSlot::configure(surface, &adapter, &device, &prefs, size)?;

        Ok(Self {
            _instance: instance,
            _adapter: adapter,
            device,
            queue,
            slot,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.slot.format()
    }

    /// Physical pixels.
    pub fn size(&self) -> PhysicalSize<u32> {
        self.slot.size()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.slot.resize(&self.device, size);
    }

    pub fn acquire(&self) -> Result<AcquiredFrame, wgpu::SurfaceError> {
        let texture = self.slot.surface().get_current_texture()?;
        Ok(AcquiredFrame::new(texture, &self.device))
    }

    /// Submits the recorded commands and shows the image.
    pub fn present(&self, frame: AcquiredFrame) {
        frame.finish(&self.queue);
    }

    /// Decides what to do about a failed [`Gpu::acquire`], setting the surface
    /// up again when that is the fix.
    pub fn recover(&mut self, err: wgpu::SurfaceError) -> Recovery {
        log::warn!("acquire failed: {err}");
        self.slot.recover(&self.device, &err)
    }
}
