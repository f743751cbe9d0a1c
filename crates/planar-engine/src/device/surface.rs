use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;

use super::{Recovery, SurfacePrefs};

/// The window's surface together with the configuration last applied to it.
pub(super) struct SurfaceSlot<'w> {
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
    /// Latest window size, possibly zero while minimized.
    size: PhysicalSize<u32>,
}

impl<'w> SurfaceSlot<'w> {
    pub(super) fn configure(
        surface: wgpu::Surface<'w>,
        adapter: &wgpu::Adapter,
        device: &wgpu::Device,
        prefs: &SurfacePrefs,
        size: PhysicalSize<u32>,
    ) -> Result<Self> {
        let caps = surface.get_capabilities(adapter);
        let format = pick_format(&caps.formats, prefs.prefer_srgb)
            .context("surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: prefs.present_mode(),
            alpha_mode: pick_alpha(&caps.alpha_modes),
            view_formats: Vec::new(),
            desired_maximum_frame_latency: prefs.clamped_latency(),
        };
        surface.configure(device, &config);
        log::debug!(
            "surface {}x{} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        Ok(Self { surface, config, size })
    }

    #[inline]
    pub(super) fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    pub(super) fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    #[inline]
    pub(super) fn surface(&self) -> &wgpu::Surface<'w> {
        &self.surface
    }

    /// Records the new size and reconfigures unless the window has no area.
    pub(super) fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        self.size = size;
        if has_area(size) {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(device, &self.config);
        }
    }

    pub(super) fn recover(&self, device: &wgpu::Device, err: &wgpu::SurfaceError) -> Recovery {
        let recovery = Recovery::for_error(err);
        if recovery == Recovery::Reconfigure && has_area(self.size) {
            self.surface.configure(device, &self.config);
        }
        recovery
    }
}

#[inline]
fn has_area(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

/// First sRGB 8-bit format when asked for one, else whatever the surface lists first.
fn pick_format(formats: &[wgpu::TextureFormat], prefer_srgb: bool) -> Option<wgpu::TextureFormat> {
    let srgb = [wgpu::TextureFormat::Bgra8UnormSrgb, wgpu::TextureFormat::Rgba8UnormSrgb];
    prefer_srgb
        .then(|| srgb.into_iter().find(|f| formats.contains(f)))
        .flatten()
        .or_else(|| formats.first().copied())
}

/// The canvas is always painted edge to edge, so opaque compositing is enough.
fn pick_alpha(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Fmt};

    #[test]
    fn srgb_is_preferred_when_listed() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(pick_format(&formats, true), Some(Fmt::Rgba8UnormSrgb));
        assert_eq!(pick_format(&formats, false), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(pick_format(&[Fmt::Rgba16Float], true), Some(Fmt::Rgba16Float));
        assert_eq!(pick_format(&[], true), None);
    }

    #[test]
    fn opaque_alpha_wins() {
        assert_eq!(pick_alpha(&[Alpha::PreMultiplied, Alpha::Opaque]), Alpha::Opaque);
        assert_eq!(pick_alpha(&[Alpha::PostMultiplied]), Alpha::PostMultiplied);
        assert_eq!(pick_alpha(&[]), Alpha::Auto);
    }

    #[test]
    fn zero_sized_window_has_no_area() {
        assert!(!has_area(PhysicalSize::new(0, 600)));
        assert!(has_area(PhysicalSize::new(1, 1)));
    }
}
