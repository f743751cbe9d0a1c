//! Interaction controller: turns clicks and key presses into session changes.

use planar_engine::coords::Vec2;
use planar_engine::core::AppControl;
use planar_engine::input::{Key, Modifiers};
use planar_geom::shape::pick;
use planar_geom::transform::{self, Transform};
use planar_geom::{Geometry, Point2, Rgb};

use crate::config::EditorConfig;
use crate::session::{PivotMode, Session, Tool, TransformMode};
use crate::view::WorldView;

/// Editor-level input, already stripped of platform details.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EditorEvent {
    /// Primary button press at a screen position (logical pixels).
    Click(Vec2),
    KeyDown { key: Key, modifiers: Modifiers },
    Quit,
}

pub fn handle_event(session: &mut Session, view: &WorldView, event: EditorEvent) -> AppControl {
    match event {
        EditorEvent::Click(screen) => {
            let radius = view.pixels_to_world(session.config.hit_threshold);
            click(session, view.screen_to_world(screen), radius);
            AppControl::Continue
        }
        EditorEvent::KeyDown { key, modifiers } => key_down(session, key, modifiers),
        EditorEvent::Quit => {
            log::info!("quit requested");
            AppControl::Exit
        }
    }
}

/// Handles a click at world position `p`; `pick_radius` is in world units.
///
/// Precedence: custom pivot placement, then clip window definition, then
/// selection (only when no shape is under construction), then shape input.
pub fn click(session: &mut Session, p: Point2, pick_radius: f64) {
    let ix = &mut session.interaction;

    if ix.pivot_mode == PivotMode::Custom {
        ix.custom_pivot = Some(p);
        log::info!("custom pivot set at ({:.1}, {:.1})", p.x, p.y);
        return;
    }

    if ix.window_definition {
        ix.window_pending.push(p);
        if let [a, b] = ix.window_pending[..] {
            session.window.define(a, b);
            ix.window_definition = false;
            ix.window_pending.clear();
            let w = &session.window.bounds;
            log::info!(
                "clip window defined: ({:.1}, {:.1}) to ({:.1}, {:.1}), clipping on",
                w.xmin, w.ymin, w.xmax, w.ymax
            );
        }
        return;
    }

    if ix.pending_points.is_empty() {
        if let Some(id) = pick(&session.shapes, p, pick_radius) {
            ix.selected = Some(id);
            log::info!("selected shape {id}");
            return;
        }
        if ix.selected.take().is_some() {
            log::info!("selection cleared");
        }
    }

    ix.pending_points.push(p);
    let kind = ix.tool.kind();
    if ix.pending_points.len() < kind.clicks_required() {
        log::debug!("{}: {} of {} clicks", kind.name(), ix.pending_points.len(), kind.clicks_required());
        return;
    }

    let points = std::mem::take(&mut ix.pending_points);
    match Geometry::from_clicks(kind, &points) {
        Some(geometry) => {
            let id = session.add_shape(geometry);
            session.interaction.selected = Some(id);
            log::info!("created {} {id}", kind.name());
        }
        None => log::debug!("discarding {} clicks for {}", points.len(), kind.name()),
    }
}

pub fn key_down(session: &mut Session, key: Key, modifiers: Modifiers) -> AppControl {
    match key {
        Key::Digit1 => set_tool(session, Tool::Point),
        Key::Digit2 => set_tool(session, Tool::Line),
        Key::Digit3 => set_tool(session, Tool::Rect),
        Key::Digit4 => set_tool(session, Tool::Ellipse),

        Key::R => set_color(session, Rgb::RED),
        Key::G => set_color(session, Rgb::GREEN),
        Key::B => set_color(session, Rgb::BLUE),
        Key::Y => set_color(session, Rgb::YELLOW),
        Key::M => set_color(session, Rgb::MAGENTA),
        Key::W if !modifiers.ctrl => set_color(session, Rgb::WHITE),
        Key::W => begin_window_definition(session),
        Key::C if !modifiers.ctrl => set_color(session, Rgb::CYAN),

        Key::Plus | Key::Equal => adjust_width(session, 1.0),
        Key::Minus => adjust_width(session, -1.0),

        Key::T => set_transform_mode(session, TransformMode::Translate),
        Key::O => set_transform_mode(session, TransformMode::Rotate),
        Key::S if !modifiers.ctrl => set_transform_mode(session, TransformMode::Scale),
        Key::P => toggle_pivot_mode(session),

        Key::Q => begin_window_definition(session),
        Key::V => {
            let w = &mut session.window;
            w.clipping_enabled = !w.clipping_enabled;
            log::info!("clipping {}", if w.clipping_enabled { "on" } else { "off" });
        }
        Key::N => {
            session.window.disable();
            session.interaction.window_definition = false;
            session.interaction.window_pending.clear();
            log::info!("clip window disabled");
        }
        Key::L => {
            let w = &mut session.window;
            w.algorithm = w.algorithm.toggled();
            log::info!("line clipping: {}", w.algorithm.name());
        }

        Key::Delete | Key::Backspace => {
            let n = session.shapes.len();
            session.clear_shapes();
            log::info!("cleared {n} shapes");
        }

        Key::F1 => nudge_window(session, 0.0, 1.0),
        Key::F2 => nudge_window(session, 0.0, -1.0),
        Key::F3 => nudge_window(session, -1.0, 0.0),
        Key::F4 => nudge_window(session, 1.0, 0.0),
        Key::F5 => resize_window(session, false),
        Key::F6 => resize_window(session, true),

        Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => arrow(session, key),

        Key::Escape => {
            log::info!("escape pressed, quitting");
            return AppControl::Exit;
        }

        other => log::debug!("ignored key {other}"),
    }

    AppControl::Continue
}

/// Transform bound to an arrow key in `mode`; `None` when the key does nothing.
pub fn arrow_transform(mode: TransformMode, key: Key, cfg: &EditorConfig) -> Option<Transform> {
    let step = cfg.translate_step;
    let (up, down) = (cfg.scale_up, cfg.scale_down);
    match (mode, key) {
        (TransformMode::Translate, Key::ArrowUp) => Some(Transform::Translate { dx: 0.0, dy: step }),
        (TransformMode::Translate, Key::ArrowDown) => Some(Transform::Translate { dx: 0.0, dy: -step }),
        (TransformMode::Translate, Key::ArrowLeft) => Some(Transform::Translate { dx: -step, dy: 0.0 }),
        (TransformMode::Translate, Key::ArrowRight) => Some(Transform::Translate { dx: step, dy: 0.0 }),

        (TransformMode::Rotate, Key::ArrowLeft) => Some(Transform::Rotate { degrees: -cfg.rotate_step }),
        (TransformMode::Rotate, Key::ArrowRight) => Some(Transform::Rotate { degrees: cfg.rotate_step }),

        (TransformMode::Scale, Key::ArrowUp) => Some(Transform::Scale { sx: up, sy: up }),
        (TransformMode::Scale, Key::ArrowDown) => Some(Transform::Scale { sx: down, sy: down }),
        (TransformMode::Scale, Key::ArrowLeft) => Some(Transform::Scale { sx: down, sy: 1.0 }),
        (TransformMode::Scale, Key::ArrowRight) => Some(Transform::Scale { sx: up, sy: 1.0 }),

        _ => None,
    }
}

// ── helpers ───────────────────────────────────────────────────────────────

fn set_tool(session: &mut Session, tool: Tool) {
    let ix = &mut session.interaction;
    ix.tool = tool;
    ix.pending_points.clear();
    log::info!("tool: {}", tool.name());
}

fn set_color(session: &mut Session, color: Rgb) {
    session.interaction.stroke.color = color;
    log::info!("color: {}", color.palette_name().unwrap_or("custom"));
}

fn adjust_width(session: &mut Session, delta: f64) {
    let cfg = &session.config;
    let stroke = &mut session.interaction.stroke;
    stroke.width = (stroke.width + delta).clamp(cfg.min_stroke_width, cfg.max_stroke_width);
    log::info!("stroke width {}", stroke.width);
}

fn toggle_pivot_mode(session: &mut Session) {
    let ix = &mut session.interaction;
    ix.custom_pivot = None;
    ix.pivot_mode = match ix.pivot_mode {
        PivotMode::ObjectCenter => {
            log::info!("custom pivot on: click to place the pivot");
            PivotMode::Custom
        }
        PivotMode::Custom => {
            log::info!("custom pivot off: using shape centers");
            PivotMode::ObjectCenter
        }
    };
}

fn set_transform_mode(session: &mut Session, mode: TransformMode) {
    session.interaction.transform_mode = Some(mode);
    log::info!("transform mode: {}", mode.name());
}

fn begin_window_definition(session: &mut Session) {
    let ix = &mut session.interaction;
    ix.window_definition = true;
    ix.window_pending.clear();
    log::info!("window definition: click two corners");
}

fn nudge_window(session: &mut Session, dir_x: f64, dir_y: f64) {
    let step = session.config.window_nudge;
    if !session.window.nudge(dir_x * step, dir_y * step) {
        log::debug!("no active clip window to move");
    }
}

fn resize_window(session: &mut Session, grow: bool) {
    let factor = if grow { session.config.window_grow } else { session.config.window_shrink };
    if !session.window.resize(factor) {
        log::debug!("no active clip window to resize");
    }
}

fn arrow(session: &mut Session, key: Key) {
    let Some(mode) = session.interaction.transform_mode else {
        log::debug!("arrow {key} without a transform mode");
        return;
    };
    let Some(target) = session.interaction.selected else {
        log::info!("no shape selected: click a shape before transforming it");
        return;
    };
    let Some(t) = arrow_transform(mode, key, &session.config) else {
        log::debug!("arrow {key} does nothing in {} mode", mode.name());
        return;
    };

    let pivot = session.interaction.effective_pivot();
    if let Err(e) = transform::apply(&mut session.shapes, target, t, pivot) {
        log::warn!("transform skipped: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_geom::{ClipBounds, ShapeKind};

    const RADIUS: f64 = 5.0;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn press(session: &mut Session, key: Key) -> AppControl {
        key_down(session, key, Modifiers::NONE)
    }

    fn line_session() -> Session {
        let mut s = Session::default();
        press(&mut s, Key::Digit2);
        click(&mut s, p(-100.0, 0.0), RADIUS);
        click(&mut s, p(100.0, 0.0), RADIUS);
        s
    }

    // ── shape creation ────────────────────────────────────────────────────

    #[test]
    fn line_needs_exactly_two_clicks() {
        let mut s = Session::default();
        press(&mut s, Key::Digit2);

        click(&mut s, p(-100.0, -100.0), RADIUS);
        assert!(s.shapes.is_empty());
        assert_eq!(s.interaction.pending_points.len(), 1);

        click(&mut s, p(100.0, 100.0), RADIUS);
        assert_eq!(s.shapes.len(), 1);
        assert_eq!(s.shapes[0].kind(), ShapeKind::Line);
        assert!(s.interaction.pending_points.is_empty());
        assert_eq!(s.interaction.selected, Some(s.shapes[0].id));
    }

    #[test]
    fn point_tool_creates_on_one_click() {
        let mut s = Session::default();
        click(&mut s, p(10.0, 10.0), RADIUS);
        assert_eq!(s.shapes.len(), 1);
        assert_eq!(s.shapes[0].geometry, Geometry::Point { position: p(10.0, 10.0) });
    }

    #[test]
    fn tool_switch_clears_pending_points() {
        let mut s = Session::default();
        press(&mut s, Key::Digit3);
        click(&mut s, p(0.0, 0.0), RADIUS);
        press(&mut s, Key::Digit4);
        assert!(s.interaction.pending_points.is_empty());
        assert_eq!(s.interaction.tool, Tool::Ellipse);
    }

    // ── selection ─────────────────────────────────────────────────────────

    #[test]
    fn click_on_shape_selects_instead_of_drawing() {
        let mut s = line_session();
        s.interaction.selected = None;

        click(&mut s, p(0.0, 3.0), RADIUS);
        assert_eq!(s.interaction.selected, Some(s.shapes[0].id));
        assert!(s.interaction.pending_points.is_empty());
        assert_eq!(s.shapes.len(), 1);
    }

    #[test]
    fn click_on_empty_canvas_deselects_and_starts_shape() {
        let mut s = line_session();
        click(&mut s, p(0.0, 200.0), RADIUS);
        assert_eq!(s.interaction.selected, None);
        assert_eq!(s.interaction.pending_points, vec![p(0.0, 200.0)]);
    }

    #[test]
    fn pick_radius_stays_five_pixels_after_resize() {
        let full = WorldView::new(Session::default().config.ortho, 800.0, 600.0);
        let half = WorldView::new(Session::default().config.ortho, 400.0, 300.0);
        // Eight world units below the line: 8 px at full size, 4 px at half size.
        let below = |view: &WorldView| {
            EditorEvent::Click(view.world_to_screen(p(0.0, -8.0)))
        };

        let mut s = line_session();
        s.interaction.selected = None;
        handle_event(&mut s, &full, below(&full));
        assert_eq!(s.interaction.selected, None);

        let mut s = line_session();
        s.interaction.selected = None;
        handle_event(&mut s, &half, below(&half));
        assert_eq!(s.interaction.selected, Some(s.shapes[0].id));
    }

    #[test]
    fn second_click_of_a_shape_skips_selection() {
        let mut s = line_session();
        click(&mut s, p(0.0, 200.0), RADIUS);
        // Lands on the existing line, but a shape is under construction.
        click(&mut s, p(0.0, 0.0), RADIUS);
        assert_eq!(s.shapes.len(), 2);
    }

    // ── modes ─────────────────────────────────────────────────────────────

    #[test]
    fn window_definition_takes_two_clicks_in_any_order() {
        let mut s = Session::default();
        press(&mut s, Key::Q);
        click(&mut s, p(50.0, 50.0), RADIUS);
        assert!(!s.window.active);
        click(&mut s, p(-50.0, -20.0), RADIUS);

        assert!(s.window.active && s.window.clipping_enabled);
        assert!(!s.interaction.window_definition);
        assert_eq!(s.window.bounds, ClipBounds::new(-50.0, 50.0, -20.0, 50.0));
        assert!(s.shapes.is_empty());
    }

    #[test]
    fn ctrl_w_defines_window_plain_w_sets_white() {
        let mut s = Session::default();
        press(&mut s, Key::R);
        key_down(&mut s, Key::W, Modifiers::CTRL);
        assert!(s.interaction.window_definition);
        assert_eq!(s.interaction.stroke.color, Rgb::RED);

        press(&mut s, Key::W);
        assert_eq!(s.interaction.stroke.color, Rgb::WHITE);
    }

    #[test]
    fn ctrl_guards_cyan_and_scale() {
        let mut s = Session::default();
        key_down(&mut s, Key::C, Modifiers::CTRL);
        key_down(&mut s, Key::S, Modifiers::CTRL);
        assert_eq!(s.interaction.stroke.color, Rgb::WHITE);
        assert_eq!(s.interaction.transform_mode, None);
    }

    #[test]
    fn custom_pivot_click_does_not_draw() {
        let mut s = Session::default();
        press(&mut s, Key::P);
        click(&mut s, p(7.0, 8.0), RADIUS);
        assert_eq!(s.interaction.custom_pivot, Some(p(7.0, 8.0)));
        assert!(s.shapes.is_empty());

        press(&mut s, Key::P);
        assert_eq!(s.interaction.pivot_mode, PivotMode::ObjectCenter);
        assert_eq!(s.interaction.custom_pivot, None);
    }

    #[test]
    fn stroke_width_is_clamped() {
        let mut s = Session::default();
        for _ in 0..20 {
            press(&mut s, Key::Equal);
        }
        assert_eq!(s.interaction.stroke.width, 10.0);
        for _ in 0..20 {
            press(&mut s, Key::Minus);
        }
        assert_eq!(s.interaction.stroke.width, 1.0);
    }

    #[test]
    fn disable_window_resets_definition() {
        let mut s = Session::default();
        press(&mut s, Key::Q);
        click(&mut s, p(0.0, 0.0), RADIUS);
        press(&mut s, Key::N);
        assert!(!s.window.active && !s.interaction.window_definition);
        assert!(s.interaction.window_pending.is_empty());
    }

    #[test]
    fn function_keys_move_active_window_only() {
        let mut s = Session::default();
        press(&mut s, Key::F1);
        assert_eq!(s.window.bounds, s.config.default_window);

        s.window.active = true;
        press(&mut s, Key::F1);
        press(&mut s, Key::F4);
        assert_eq!(s.window.bounds, ClipBounds::new(-180.0, 220.0, -130.0, 170.0));
    }

    #[test]
    fn l_toggles_clip_algorithm() {
        let mut s = Session::default();
        let before = s.window.algorithm;
        press(&mut s, Key::L);
        assert_ne!(s.window.algorithm, before);
    }

    #[test]
    fn escape_and_quit_exit() {
        let mut s = Session::default();
        assert_eq!(press(&mut s, Key::Escape), AppControl::Exit);
        let view = WorldView::new(s.config.ortho, 800.0, 600.0);
        assert_eq!(handle_event(&mut s, &view, EditorEvent::Quit), AppControl::Exit);
    }

    #[test]
    fn clear_keeps_dangling_selection_harmless() {
        let mut s = line_session();
        press(&mut s, Key::Delete);
        assert!(s.shapes.is_empty());
        assert!(s.selected_shape().is_none());

        press(&mut s, Key::T);
        assert_eq!(press(&mut s, Key::ArrowUp), AppControl::Continue);
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn arrows_translate_selected_shape() {
        let mut s = line_session();
        press(&mut s, Key::T);
        press(&mut s, Key::ArrowUp);
        press(&mut s, Key::ArrowRight);
        assert_eq!(
            s.shapes[0].geometry,
            Geometry::Segment { a: p(-90.0, 10.0), b: p(110.0, 10.0) }
        );
    }

    #[test]
    fn rotate_uses_custom_pivot_when_set() {
        let mut s = line_session();
        press(&mut s, Key::P);
        click(&mut s, p(-100.0, 0.0), RADIUS);
        press(&mut s, Key::O);
        for _ in 0..9 {
            press(&mut s, Key::ArrowRight);
        }
        let Geometry::Segment { a, b } = s.shapes[0].geometry else {
            panic!("segment stays a segment");
        };
        assert!(a.approx_eq(p(-100.0, 0.0), 1e-9));
        assert!(b.approx_eq(p(-100.0, 200.0), 1e-9));
    }

    #[test]
    fn arrows_without_selection_do_nothing() {
        let mut s = line_session();
        s.interaction.selected = None;
        let before = s.shapes.clone();
        press(&mut s, Key::S);
        press(&mut s, Key::ArrowUp);
        assert_eq!(s.shapes, before);
    }

    #[test]
    fn arrow_bindings() {
        let cfg = EditorConfig::default();
        assert_eq!(arrow_transform(TransformMode::Rotate, Key::ArrowUp, &cfg), None);
        assert_eq!(
            arrow_transform(TransformMode::Scale, Key::ArrowLeft, &cfg),
            Some(Transform::Scale { sx: 0.9, sy: 1.0 })
        );
        assert_eq!(
            arrow_transform(TransformMode::Rotate, Key::ArrowLeft, &cfg),
            Some(Transform::Rotate { degrees: -10.0 })
        );
    }

    #[test]
    fn screen_click_maps_to_world() {
        let mut s = Session::default();
        let view = WorldView::new(s.config.ortho, 800.0, 600.0);
        handle_event(&mut s, &view, EditorEvent::Click(Vec2::new(400.0, 300.0)));
        assert_eq!(s.shapes[0].geometry, Geometry::Point { position: p(0.0, 0.0) });
    }
}
