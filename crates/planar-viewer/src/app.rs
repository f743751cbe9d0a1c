use std::time::Instant;

use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::window::WindowId;

use planar_engine::coords::Vec2;
use planar_engine::core::{App as EngineApp, AppControl, FrameCtx};
use planar_engine::device::SurfacePrefs;
use planar_engine::input::{InputFrame, InputState, Key, MouseButton};
use planar_engine::render::SceneRenderer;
use planar_engine::scene::DrawList;
use planar_engine::window::{Runtime, RuntimeConfig};

use crate::controller::{self, ViewerEvent};
use crate::render::{draw_scene, title_text, CLEAR};
use crate::session::ViewerSession;

/// Keys the viewer reacts to.
const BOUND_KEYS: [Key; 19] = [
    Key::Escape,
    Key::R,
    Key::Digit1,
    Key::Digit2,
    Key::W,
    Key::A,
    Key::D,
    Key::S,
    Key::P,
    Key::H,
    Key::U,
    Key::Tab,
    Key::Plus,
    Key::Equal,
    Key::Minus,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowUp,
    Key::ArrowDown,
];

// ── Viewer ────────────────────────────────────────────────────────────────

/// 3D viewer application builder.
///
/// ```rust,ignore
/// Viewer::new().size(1000.0, 700.0).run()?;
/// ```
pub struct Viewer {
    title:      String,
    width:      f64,
    height:     f64,
    target_fps: u32,
    vsync:      bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            title:      "planar viewer".to_string(),
            width:      1000.0,
            height:     700.0,
            target_fps: 60,
            vsync:      true,
        }
    }

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

    pub fn vsync(mut self, on: bool) -> Self {
        self.vsync = on;
        self
    }

    /// Opens the window and runs until the user quits.
    pub fn run(self) -> anyhow::Result<()> {
        let runtime = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
            target_fps:   self.target_fps,
        };
        let prefs = SurfacePrefs { vsync: self.vsync, ..SurfacePrefs::default() };
        Runtime::run(runtime, prefs, ViewerApp::new(ViewerSession::new()))
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

// ── ViewerApp ─────────────────────────────────────────────────────────────

struct ViewerApp {
    session:   ViewerSession,
    draw_list: DrawList,
    renderer:  SceneRenderer,
    /// Last text handed to the window title.
    title:     String,
}

impl ViewerApp {
    fn new(session: ViewerSession) -> Self {
        Self {
            session,
            draw_list: DrawList::new(),
            renderer:  SceneRenderer::new(),
            title:     String::new(),
        }
    }

    /// Returns the title text when it differs from what the window shows.
    fn title_update(&mut self, now: Instant) -> Option<&str> {
        let text = title_text(&mut self.session, now);
        if text == self.title {
            return None;
        }
        self.title = text;
        Some(&self.title)
    }
}

/// Viewer events for one frame, from its edges and the held state.
///
/// Key presses come first, then the drag: start, move, end.
fn viewer_events(input: &InputState, frame: &InputFrame) -> Vec<ViewerEvent> {
    let mut events: Vec<ViewerEvent> = BOUND_KEYS
        .iter()
        .filter(|k| frame.keys.pressed(k))
        .map(|k| ViewerEvent::KeyPressed(*k))
        .collect();

    let pointer = input.pointer_pos.map(|(x, y)| Vec2::new(x, y));
    if frame.buttons.pressed(&MouseButton::Left) {
        if let Some(at) = pointer {
            events.push(ViewerEvent::DragStart { at, modifiers: input.modifiers });
        }
    }
    if input.button_down(MouseButton::Left) {
        if let Some(at) = pointer {
            events.push(ViewerEvent::DragMove(at));
        }
    } else if frame.buttons.released(&MouseButton::Left) {
        events.push(ViewerEvent::DragEnd);
    }
    events
}

impl EngineApp for ViewerApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CloseRequested => controller::handle_event(&mut self.session, ViewerEvent::Quit),
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.viewport();

        // ── Input ─────────────────────────────────────────────────────────
        for ev in viewer_events(ctx.input, ctx.input_frame) {
            if controller::handle_event(&mut self.session, ev) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        // ── Draw list ─────────────────────────────────────────────────────
        self.draw_list.clear();
        draw_scene(&self.session, &mut self.draw_list, viewport.width, viewport.height);
        if let Some(title) = self.title_update(Instant::now()) {
            ctx.window.set_title(title);
        }

        // ── Render ────────────────────────────────────────────────────────
        let dl = &mut self.draw_list;
        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }

    fn on_exit(&mut self) {
        log::info!("viewer closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_engine::input::{
        InputEvent, KeyState, Modifiers, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
    };

    fn key(key: Key, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, modifiers: Modifiers::NONE, code: 0, repeat }
    }

    fn left(state: MouseButtonState, x: f32, y: f32, modifiers: Modifiers) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y, modifiers })
    }

    fn frame_of(input: &mut InputState, events: Vec<InputEvent>) -> Vec<ViewerEvent> {
        let mut frame = InputFrame::default();
        for ev in events {
            input.apply_event(&mut frame, ev);
        }
        viewer_events(input, &frame)
    }

    #[test]
    fn held_key_acts_once() {
        let mut input = InputState::default();
        let first = frame_of(&mut input, vec![key(Key::W, false)]);
        assert_eq!(first, vec![ViewerEvent::KeyPressed(Key::W)]);
        let held = frame_of(&mut input, vec![key(Key::W, true), key(Key::W, true)]);
        assert!(held.is_empty());
    }

    #[test]
    fn unbound_keys_are_dropped() {
        let mut input = InputState::default();
        assert!(frame_of(&mut input, vec![key(Key::Q, false)]).is_empty());
    }

    #[test]
    fn press_move_release_is_one_drag() {
        let mut input = InputState::default();
        let shift = Modifiers { shift: true, ..Modifiers::NONE };

        let down = frame_of(&mut input, vec![left(MouseButtonState::Pressed, 10.0, 20.0, shift)]);
        assert_eq!(
            down,
            vec![
                ViewerEvent::DragStart { at: Vec2::new(10.0, 20.0), modifiers: shift },
                ViewerEvent::DragMove(Vec2::new(10.0, 20.0)),
            ]
        );

        let moved = frame_of(
            &mut input,
            vec![InputEvent::PointerMoved(PointerMoveEvent { x: 15.0, y: 25.0 })],
        );
        assert_eq!(moved, vec![ViewerEvent::DragMove(Vec2::new(15.0, 25.0))]);

        let up = frame_of(&mut input, vec![left(MouseButtonState::Released, 15.0, 25.0, shift)]);
        assert_eq!(up, vec![ViewerEvent::DragEnd]);
    }

    #[test]
    fn drag_frames_rotate_the_object() {
        let mut input = InputState::default();
        let mut app = ViewerApp::new(ViewerSession::new());
        for events in [
            vec![left(MouseButtonState::Pressed, 0.0, 0.0, Modifiers::NONE)],
            vec![InputEvent::PointerMoved(PointerMoveEvent { x: 20.0, y: 0.0 })],
            vec![left(MouseButtonState::Released, 20.0, 0.0, Modifiers::NONE)],
        ] {
            for ev in frame_of(&mut input, events) {
                controller::handle_event(&mut app.session, ev);
            }
        }
        let rotation = app.session.current_object().map(|o| o.rotation.y);
        assert_eq!(rotation, Some(10.0));
        assert!(app.session.drag.is_none());
    }

    #[test]
    fn title_changes_only_with_state() {
        let mut app = ViewerApp::new(ViewerSession::new());
        let now = Instant::now();
        assert!(app.title_update(now).is_some());
        assert!(app.title_update(now).is_none());

        controller::key_pressed(&mut app.session, Key::P);
        assert!(app.title_update(now).is_some());
        assert!(app.title_update(now).is_none());
    }
}
