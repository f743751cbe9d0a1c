use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::window::WindowId;

use planar_engine::coords::Vec2;
use planar_engine::core::{App as EngineApp, AppControl, FrameCtx};
use planar_engine::device::SurfacePrefs;
use planar_engine::input::{InputEvent, KeyState, MouseButton, MouseButtonState, PointerButtonEvent};
use planar_engine::render::SceneRenderer;
use planar_engine::scene::DrawList;
use planar_engine::window::{Runtime, RuntimeConfig};

use crate::config::EditorConfig;
use crate::controller::{self, EditorEvent};
use crate::hud;
use crate::render::{draw_session, to_color, DrawListSink};
use crate::session::Session;
use crate::view::WorldView;

// ── Studio ────────────────────────────────────────────────────────────────

/// Editor application builder.
///
/// ```rust,ignore
/// Studio::new()
///     .title("planar")
///     .size(800.0, 600.0)
///     .run()?;
/// ```
pub struct Studio {
    title:      String,
    width:      f64,
    height:     f64,
    target_fps: u32,
    vsync:      bool,
    config:     EditorConfig,
}

impl Studio {
    pub fn new() -> Self {
        Self {
            title:      "planar".to_string(),
            width:      800.0,
            height:     600.0,
            target_fps: 60,
            vsync:      true,
            config:     EditorConfig::default(),
        }
    }

    /// Set the initial window title; the status line replaces it once running.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Redraw cap; `0` disables pacing.
    pub fn target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Present without waiting for vblank; the fps cap still applies.
    pub fn vsync(mut self, on: bool) -> Self {
        self.vsync = on;
        self
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Opens the window and runs until the user quits.
    pub fn run(self) -> anyhow::Result<()> {
        let runtime = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            target_fps:   self.target_fps,
        };
        let view = WorldView::new(self.config.ortho, self.width as f32, self.height as f32);
        let state = EditorApp::new(Session::new(self.config), view);
        let prefs = SurfacePrefs { vsync: self.vsync, ..SurfacePrefs::default() };
        Runtime::run(runtime, prefs, state)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

// ── EditorApp ─────────────────────────────────────────────────────────────

/// Engine-facing state: session, last known view and the renderers.
struct EditorApp {
    session:   Session,
    view:      WorldView,
    draw_list: DrawList,
    renderer:  SceneRenderer,
    /// Last text handed to the window title.
    title:     String,
}

impl EditorApp {
    fn new(session: Session, view: WorldView) -> Self {
        Self {
            session,
            view,
            draw_list: DrawList::new(),
            renderer:  SceneRenderer::new(),
            title:     String::new(),
        }
    }

    /// Returns the status line when it differs from the current title.
    fn title_update(&mut self) -> Option<&str> {
        let status = hud::status_text(&self.session);
        if status == self.title {
            return None;
        }
        self.title = status;
        Some(&self.title)
    }
}

/// Maps engine input to editor events. Only presses matter, and a held key
/// acts once.
fn editor_event(ev: &InputEvent) -> Option<EditorEvent> {
    match ev {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            ..
        }) => Some(EditorEvent::Click(Vec2::new(*x, *y))),
        InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false, .. } => {
            Some(EditorEvent::KeyDown { key: *key, modifiers: *modifiers })
        }
        _ => None,
    }
}

impl EngineApp for EditorApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CloseRequested => {
                controller::handle_event(&mut self.session, &self.view, EditorEvent::Quit)
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();
        self.view = WorldView::new(self.session.config.ortho, viewport.width, viewport.height);

        // ── Input ─────────────────────────────────────────────────────────
        for ev in ctx.input_frame.events.iter().filter_map(editor_event) {
            if controller::handle_event(&mut self.session, &self.view, ev) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        // ── Draw list ─────────────────────────────────────────────────────
        self.draw_list.clear();
        draw_session(&self.session, &mut DrawListSink::new(&mut self.draw_list, &self.view));
        hud::push_hud(&mut self.draw_list, &hud::hud_lines(&self.session), Vec2::new(15.0, 15.0));
        if let Some(title) = self.title_update() {
            ctx.window.set_title(title);
        }

        // ── Render ────────────────────────────────────────────────────────
        let dl = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(to_color(self.session.config.background), |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }

    fn on_exit(&mut self) {
        log::info!("exiting with {} shapes", self.session.shapes.len());
    }
}
