use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::Gpu;
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// The window a frame is being produced for.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Replaces the window title. Callers skip unchanged titles themselves;
    /// some platforms cannot report the current one.
    #[inline]
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Everything [`super::App::on_frame`] may touch for one frame.
///
/// `'a` spans the callback; `'w` is the window borrow inside [`Gpu`].
pub struct FrameCtx<'a, 'w> {
    pub window:       WindowCtx<'a>,
    pub gpu:          &'a mut Gpu<'w>,
    pub input:        &'a InputState,
    pub input_frame:  &'a InputFrame,
    pub runtime:      &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Viewport of this window in logical pixels.
    pub fn viewport(&self) -> Viewport {
        Viewport::from_physical(self.gpu.size(), self.window.window.scale_factor())
    }

    /// Acquires the next image, clears it to `clear`, lets `draw` record its
    /// passes on top and presents the result.
    ///
    /// Skipped frames are normal (minimized window, stale surface); only an
    /// unrecoverable acquire failure returns [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.viewport();
        if !viewport.has_area() {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.acquire() {
            Ok(frame) => frame,
            Err(err) => {
                if self.gpu.recover(err).is_fatal() {
                    log::error!("surface cannot recover, shutting down");
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        // The target borrows the frame's encoder and must be gone before present().
        {
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            drop(target.clearing_pass(clear.to_wgpu()));
            draw(&RenderCtx::from_gpu(self.gpu, viewport), &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.present(frame);
        AppControl::Continue
    }
}
