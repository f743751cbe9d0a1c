use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, SurfacePrefs};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FramePacer;

/// Startup parameters for the editor window.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Redraw cap; `0` redraws on every wake-up.
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "planar".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            target_fps: 60,
        }
    }
}

/// Requests an app can make from inside a frame.
///
/// Applied once the callback has returned.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }
}

/// Runs one window until the app or the user closes it.
pub struct Runtime;

impl Runtime {
    pub fn run<A: App + 'static>(config: RuntimeConfig, prefs: SurfacePrefs, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("creating the event loop")?;
        let mut host = Host {
            pacer: FramePacer::new(config.target_fps),
            config,
            prefs,
            app,
            canvas: None,
            quitting: false,
        };

        event_loop.run_app(&mut host).context("event loop failed")?;
        Ok(())
    }
}

/// The window and everything whose lifetime is tied to it.
#[self_referencing]
struct Canvas {
    input: InputState,
    pending: InputFrame,
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl Canvas {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, prefs: SurfacePrefs) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        let window = event_loop.create_window(attrs).context("opening the window")?;

        CanvasTryBuilder {
            input: InputState::default(),
            pending: InputFrame::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, prefs)),
        }
        .try_build()
        .context("setting up the GPU for the window")
    }

    fn id(&self) -> WindowId {
        self.with_window(|w| w.id())
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.request_redraw();
    }
}

struct Host<A: App> {
    config: RuntimeConfig,
    prefs: SurfacePrefs,
    app: A,
    canvas: Option<Canvas>,
    pacer: FramePacer,
    quitting: bool,
}

impl<A: App> Host<A> {
    fn quit(&mut self, event_loop: &ActiveEventLoop) {
        self.quitting = true;
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(canvas) = self.canvas.as_mut() else { return };
        self.pacer.mark_frame(Instant::now());

        let app = &mut self.app;
        let mut runtime = RuntimeCtx::default();
        let control = canvas.with_mut(|f| {
            let id = f.window.id();
            let mut ctx = FrameCtx {
                window: WindowCtx { id, window: f.window },
                gpu: f.gpu,
                input: f.input,
                input_frame: f.pending,
                runtime: &mut runtime,
            };
            let control = app.on_frame(&mut ctx);
            f.pending.clear();
            control
        });

        if control == AppControl::Exit || runtime.exit_requested() {
            self.quit(event_loop);
        }
    }
}

impl<A: App> ApplicationHandler for Host<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.canvas.is_some() {
            return;
        }
        match Canvas::open(event_loop, &self.config, self.prefs.clone()) {
            Ok(canvas) => {
                log::info!("window {:?} open", canvas.id());
                canvas.request_redraw();
                self.canvas = Some(canvas);
            }
            Err(e) => {
                log::error!("cannot open the editor window: {e:#}");
                self.quit(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.quitting {
            event_loop.exit();
            return;
        }
        let Some(canvas) = self.canvas.as_ref() else { return };

        let now = Instant::now();
        if self.pacer.frame_due(now) {
            // RedrawRequested wakes the loop again.
            canvas.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.next_deadline(now)));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.quitting {
            event_loop.exit();
            return;
        }
        let Some(canvas) = self.canvas.as_mut() else { return };
        if canvas.id() != window_id {
            return;
        }

        canvas.with_mut(|f| {
            if let Some(ev) = translate_window_event(f.window, f.input, &event) {
                f.input.apply_event(f.pending, ev);
            }
        });

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.quit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.canvas = None;
                self.quit(event_loop);
            }
            WindowEvent::Resized(size) => canvas.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = canvas.with_window(|w| w.inner_size());
                canvas.resize(size);
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.app.on_exit();
        // The surface must go before the event loop tears the window down.
        self.canvas = None;
    }
}
