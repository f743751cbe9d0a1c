//! Viewer controller: key presses and drags become session changes.

use glam::Vec3;
use planar_engine::coords::Vec2;
use planar_engine::core::AppControl;
use planar_engine::input::{Key, Modifiers};

use crate::object::ObjectKind;
use crate::session::{Drag, DragMode, ViewerSession};

/// Degrees per pixel of rotate drag.
const ROTATE_SPEED: f32 = 0.5;
/// World units per pixel of translate drag.
const PAN_SPEED: f32 = 0.01;
/// World units per pixel of zoom drag.
const ZOOM_SPEED: f32 = 0.05;
const PITCH_LIMIT: f32 = 89.0;
const ARROW_STEP: f32 = 0.2;
const GROW: f32 = 1.1;
const SHRINK: f32 = 0.9;

pub const HELP: &str = "\
planar viewer controls
  1 / 2         show cube / pyramid
  W             wireframe / solid
  A / D / S     toggle ambient / diffuse / specular light
  P             flat / smooth shading
  Tab           camera mode / object mode
  R             reset camera
  + / -         scale the object
  arrows        move the object (or camera in camera mode)
  drag          rotate; shift+drag moves, ctrl+drag zooms
  U             show / hide HUD
  H             help
  Esc           quit";

/// Viewer-level input, already stripped of platform details.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewerEvent {
    KeyPressed(Key),
    /// Left button went down at a screen position (logical pixels).
    DragStart { at: Vec2, modifiers: Modifiers },
    DragMove(Vec2),
    DragEnd,
    Quit,
}

pub fn handle_event(session: &mut ViewerSession, event: ViewerEvent) -> AppControl {
    match event {
        ViewerEvent::KeyPressed(key) => return key_pressed(session, key),
        ViewerEvent::DragStart { at, modifiers } => {
            session.drag = Some(Drag { mode: drag_mode(modifiers), last: (at.x, at.y) });
        }
        ViewerEvent::DragMove(at) => drag_to(session, at),
        ViewerEvent::DragEnd => session.drag = None,
        ViewerEvent::Quit => {
            log::info!("quit requested");
            return AppControl::Exit;
        }
    }
    AppControl::Continue
}

fn drag_mode(modifiers: Modifiers) -> DragMode {
    if modifiers.shift {
        DragMode::Translate
    } else if modifiers.ctrl {
        DragMode::Zoom
    } else {
        DragMode::Rotate
    }
}

fn drag_to(session: &mut ViewerSession, at: Vec2) {
    let Some(drag) = session.drag.as_mut() else { return };
    let (dx, dy) = (at.x - drag.last.0, at.y - drag.last.1);
    drag.last = (at.x, at.y);
    let mode = drag.mode;

    if session.camera_mode {
        let cam = &mut session.camera;
        match mode {
            DragMode::Rotate => {
                cam.yaw += dx * ROTATE_SPEED;
                cam.pitch = (cam.pitch + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
            DragMode::Translate => {
                cam.position.x -= dx * PAN_SPEED;
                cam.position.y += dy * PAN_SPEED;
            }
            DragMode::Zoom => cam.position.z += dy * ZOOM_SPEED,
        }
        return;
    }

    let Some(obj) = session.current_object_mut() else { return };
    match mode {
        DragMode::Rotate => {
            obj.rotation.y += dx * ROTATE_SPEED;
            obj.rotation.x += dy * ROTATE_SPEED;
        }
        DragMode::Translate => {
            obj.position.x += dx * PAN_SPEED;
            obj.position.y -= dy * PAN_SPEED;
        }
        DragMode::Zoom => obj.position.z += dy * ZOOM_SPEED,
    }
}

/// Applies one key press.
pub fn key_pressed(session: &mut ViewerSession, key: Key) -> AppControl {
    match key {
        Key::Escape => {
            log::info!("quit requested");
            return AppControl::Exit;
        }
        Key::R => {
            session.camera.reset();
            session.status.set("camera reset");
        }
        Key::Digit1 => select(session, ObjectKind::Cube),
        Key::Digit2 => select(session, ObjectKind::Pyramid),
        Key::W => {
            for obj in &mut session.objects {
                obj.display = obj.display.toggled();
            }
            let mode = session.current_object().map_or("solid", |o| o.display.name());
            session.status.set(format!("display mode: {mode}"));
        }
        Key::A => {
            let on = toggle(&mut session.lighting.ambient);
            session.status.set(format!("ambient light {}", on_off(on)));
        }
        Key::D => {
            let on = toggle(&mut session.lighting.diffuse);
            session.status.set(format!("diffuse light {}", on_off(on)));
        }
        Key::S => {
            let on = toggle(&mut session.lighting.specular);
            session.status.set(format!("specular light {}", on_off(on)));
        }
        Key::P => {
            session.lighting.shading = session.lighting.shading.toggled();
            session.status.set(format!("{} shading", session.lighting.shading.name()));
        }
        Key::H => {
            log::info!("\n{HELP}");
            session.status.set("controls printed to the log");
        }
        Key::U => {
            session.hud_visible = !session.hud_visible;
            session.status.set(if session.hud_visible { "HUD shown" } else { "HUD hidden" });
        }
        Key::Tab => {
            session.camera_mode = !session.camera_mode;
            session.drag = None;
            session.status.set(if session.camera_mode { "camera mode" } else { "object mode" });
        }
        Key::Plus | Key::Equal => scale_current(session, GROW),
        Key::Minus => scale_current(session, SHRINK),
        Key::ArrowLeft => nudge(session, Vec3::new(-ARROW_STEP, 0.0, 0.0)),
        Key::ArrowRight => nudge(session, Vec3::new(ARROW_STEP, 0.0, 0.0)),
        Key::ArrowUp => nudge(session, Vec3::new(0.0, ARROW_STEP, 0.0)),
        Key::ArrowDown => nudge(session, Vec3::new(0.0, -ARROW_STEP, 0.0)),
        other => log::debug!("unbound key {other:?}"),
    }
    AppControl::Continue
}

fn toggle(flag: &mut bool) -> bool {
    *flag = !*flag;
    *flag
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn select(session: &mut ViewerSession, kind: ObjectKind) {
    session.current = kind;
    session.status.set(format!("showing {}", kind.name()));
}

fn scale_current(session: &mut ViewerSession, factor: f32) {
    let Some(obj) = session.current_object_mut() else { return };
    obj.scale_by(factor);
    let s = obj.scale.x;
    session.status.set(format!("scale {s:.2}"));
}

fn nudge(session: &mut ViewerSession, delta: Vec3) {
    if session.camera_mode {
        session.camera.position += delta;
    } else if let Some(obj) = session.current_object_mut() {
        obj.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::Shading;
    use crate::object::{DisplayMode, MIN_SCALE};

    fn start(session: &mut ViewerSession, x: f32, y: f32, modifiers: Modifiers) {
        handle_event(session, ViewerEvent::DragStart { at: Vec2::new(x, y), modifiers });
    }

    fn move_to(session: &mut ViewerSession, x: f32, y: f32) {
        handle_event(session, ViewerEvent::DragMove(Vec2::new(x, y)));
    }

    fn cube(session: &ViewerSession) -> &crate::object::SceneObject {
        session.current_object().expect("cube is present")
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn escape_and_quit_exit() {
        let mut s = ViewerSession::default();
        assert_eq!(key_pressed(&mut s, Key::Escape), AppControl::Exit);
        assert_eq!(handle_event(&mut s, ViewerEvent::Quit), AppControl::Exit);
        assert_eq!(key_pressed(&mut s, Key::F5), AppControl::Continue);
    }

    #[test]
    fn digits_switch_objects() {
        let mut s = ViewerSession::default();
        key_pressed(&mut s, Key::Digit2);
        assert_eq!(s.current, ObjectKind::Pyramid);
        let mut status = s.status.clone();
        assert_eq!(status.current(std::time::Instant::now()), Some("showing pyramid"));
        key_pressed(&mut s, Key::Digit1);
        assert_eq!(s.current, ObjectKind::Cube);
    }

    #[test]
    fn lighting_and_shading_toggle() {
        let mut s = ViewerSession::default();
        key_pressed(&mut s, Key::A);
        key_pressed(&mut s, Key::D);
        key_pressed(&mut s, Key::S);
        key_pressed(&mut s, Key::P);
        let l = &s.lighting;
        assert!(!l.ambient && !l.diffuse && !l.specular);
        assert_eq!(l.shading, Shading::Flat);
    }

    #[test]
    fn wireframe_applies_to_every_object() {
        let mut s = ViewerSession::default();
        key_pressed(&mut s, Key::W);
        assert!(s.objects.iter().all(|o| o.display == DisplayMode::Wireframe));
    }

    #[test]
    fn scaling_stops_at_the_minimum() {
        let mut s = ViewerSession::default();
        key_pressed(&mut s, Key::Plus);
        assert!((cube(&s).scale.x - 1.1).abs() < 1e-6);
        for _ in 0..100 {
            key_pressed(&mut s, Key::Minus);
        }
        assert_eq!(cube(&s).scale, Vec3::splat(MIN_SCALE));
    }

    #[test]
    fn arrows_move_object_or_camera() {
        let mut s = ViewerSession::default();
        key_pressed(&mut s, Key::ArrowRight);
        assert!((cube(&s).position.x - ARROW_STEP).abs() < 1e-6);

        key_pressed(&mut s, Key::Tab);
        key_pressed(&mut s, Key::ArrowUp);
        assert!((s.camera.position.y - ARROW_STEP).abs() < 1e-6);
        assert!(cube(&s).position.y.abs() < 1e-6);

        key_pressed(&mut s, Key::R);
        assert_eq!(s.camera, crate::camera::Camera::default());
    }

    // ── drags ─────────────────────────────────────────────────────────────

    #[test]
    fn drag_rotates_the_object() {
        let mut s = ViewerSession::default();
        start(&mut s, 100.0, 100.0, Modifiers::NONE);
        move_to(&mut s, 110.0, 104.0);
        let r = cube(&s).rotation;
        assert!((r.y - 5.0).abs() < 1e-5);
        assert!((r.x - 2.0).abs() < 1e-5);

        handle_event(&mut s, ViewerEvent::DragEnd);
        move_to(&mut s, 300.0, 300.0);
        assert_eq!(cube(&s).rotation, r);
    }

    #[test]
    fn modifiers_pick_translate_and_zoom() {
        let mut s = ViewerSession::default();
        let shift = Modifiers { shift: true, ..Modifiers::NONE };
        start(&mut s, 0.0, 0.0, shift);
        move_to(&mut s, 100.0, 50.0);
        let p = cube(&s).position;
        assert!((p.x - 1.0).abs() < 1e-5 && (p.y + 0.5).abs() < 1e-5);

        start(&mut s, 0.0, 0.0, Modifiers::CTRL);
        move_to(&mut s, 0.0, 20.0);
        assert!((cube(&s).position.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn camera_pitch_is_clamped() {
        let mut s = ViewerSession::default();
        key_pressed(&mut s, Key::Tab);
        start(&mut s, 0.0, 0.0, Modifiers::NONE);
        move_to(&mut s, 0.0, 1000.0);
        assert_eq!(s.camera.pitch, PITCH_LIMIT);
        assert_eq!(cube(&s).rotation, Vec3::ZERO);
    }
}
