//! Viewer render pass: grid, axes, sun, the current object and the HUD.
//!
//! Faces are lit on the CPU, projected to logical pixels and painted far to
//! near; there is no depth buffer.

use glam::Vec3;
use planar_engine::coords::{Rect, Vec2};
use planar_engine::paint::Color;
use planar_engine::scene::{DrawList, ZIndex};

use crate::lighting::Shading;
use crate::object::{DisplayMode, SceneObject};
use crate::project::Projector;
use crate::session::ViewerSession;

pub const CLEAR: Color = Color::from_premul(0.92, 0.92, 0.92, 1.0);

const GRID_EXTENT: i32 = 10;
const GRID_COLOR: Vec3 = Vec3::splat(0.8);
const AXIS_LENGTH: f32 = 2.0;
const SUN_RADIUS: f32 = 0.3;
const SUN_COLOR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const WIREFRAME_WIDTH: f32 = 1.5;

const HUD_SWATCH: f32 = 10.0;
const HUD_LINE: f32 = 20.0;
const HUD_PADDING: f32 = 5.0;

#[inline]
fn color(c: Vec3) -> Color {
    Color::opaque(c.x, c.y, c.z)
}

/// Records the whole frame for a `width` x `height` window.
pub fn draw_scene(session: &ViewerSession, list: &mut DrawList, width: f32, height: f32) {
    let proj = Projector::new(&session.camera, width, height);

    draw_grid(&proj, list);
    draw_axes(&proj, list);
    draw_sun(session, &proj, list);
    for obj in session.visible_objects() {
        match obj.display {
            DisplayMode::Solid => draw_solid(session, obj, &proj, list),
            DisplayMode::Wireframe => draw_wireframe(obj, &proj, list),
        }
    }
    if session.hud_visible {
        push_hud(list, &hud_swatches(session), Vec2::new(15.0, 15.0));
    }
}

// ── Environment ───────────────────────────────────────────────────────────

fn draw_grid(proj: &Projector, list: &mut DrawList) {
    let e = GRID_EXTENT as f32;
    for i in -GRID_EXTENT..=GRID_EXTENT {
        let t = i as f32;
        for (a, b) in [
            (Vec3::new(t, 0.0, -e), Vec3::new(t, 0.0, e)),
            (Vec3::new(-e, 0.0, t), Vec3::new(e, 0.0, t)),
        ] {
            if let Some((a, b)) = proj.project_segment(a, b) {
                list.push_line(ZIndex::CANVAS, a, b, 1.0, color(GRID_COLOR));
            }
        }
    }
}

fn draw_axes(proj: &Projector, list: &mut DrawList) {
    for (dir, c) in [(Vec3::X, Vec3::X), (Vec3::Y, Vec3::Y), (Vec3::Z, Vec3::Z)] {
        if let Some((a, b)) = proj.project_segment(Vec3::ZERO, dir * AXIS_LENGTH) {
            list.push_line(ZIndex::CANVAS.above(), a, b, 2.0, color(c));
        }
    }
}

fn draw_sun(session: &ViewerSession, proj: &Projector, list: &mut DrawList) {
    let sun = session.lighting.position;
    if let Some(center) = proj.project(sun) {
        let radius = proj.pixel_radius(SUN_RADIUS, proj.depth(sun)).max(2.0);
        list.push_dot(ZIndex::CANVAS, center, radius, color(SUN_COLOR));
    }
}

// ── Objects ───────────────────────────────────────────────────────────────

/// One projected triangle waiting for the painter's sort.
struct Face {
    depth: f32,
    points: [Vec2; 3],
    colors: [Color; 3],
}

/// Back-facing faces and faces reaching behind the near plane are skipped.
fn draw_solid(session: &ViewerSession, obj: &SceneObject, proj: &Projector, list: &mut DrawList) {
    let model = obj.model_matrix();
    let normals = obj.normal_matrix();
    let eye = session.camera.position;
    let lighting = &session.lighting;
    let mesh = &obj.mesh;

    let world: Vec<Vec3> = mesh.vertices().iter().map(|v| model.transform_point3(*v)).collect();
    let mut faces = Vec::new();

    for (f, corners) in mesh.faces().iter().enumerate() {
        let Some(points) = corners.iter().map(|&v| world.get(v).copied()).collect::<Option<Vec<_>>>() else {
            continue;
        };
        if points.is_empty() {
            continue;
        }
        let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;
        let face_normal = (normals * mesh.face_normals()[f]).normalize_or_zero();
        if face_normal.dot(eye - centroid) <= 0.0 {
            continue;
        }
        let flat = color(lighting.shade(obj.color, centroid, face_normal, eye));

        for tri in mesh.triangles(f) {
            let Some(screen) = project_all(proj, tri.map(|v| world[v])) else { continue };
            let colors = match lighting.shading {
                Shading::Flat => [flat; 3],
                Shading::Smooth => tri.map(|v| {
                    let n = (normals * mesh.vertex_normals()[v]).normalize_or_zero();
                    color(lighting.shade(obj.color, world[v], n, eye))
                }),
            };
            let depth = tri.iter().map(|&v| proj.depth(world[v])).sum::<f32>() / 3.0;
            faces.push(Face { depth, points: screen, colors });
        }
    }

    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    for face in faces {
        list.push_triangle(ZIndex::CANVAS.above().above(), face.points, face.colors);
    }
}

fn project_all(proj: &Projector, points: [Vec3; 3]) -> Option<[Vec2; 3]> {
    let [a, b, c] = points;
    Some([proj.project(a)?, proj.project(b)?, proj.project(c)?])
}

fn draw_wireframe(obj: &SceneObject, proj: &Projector, list: &mut DrawList) {
    let model = obj.model_matrix();
    let world: Vec<Vec3> = obj.mesh.vertices().iter().map(|v| model.transform_point3(*v)).collect();
    for face in obj.mesh.faces() {
        for (i, &v) in face.iter().enumerate() {
            let w = face[(i + 1) % face.len()];
            let (Some(&a), Some(&b)) = (world.get(v), world.get(w)) else { continue };
            if let Some((a, b)) = proj.project_segment(a, b) {
                list.push_line(ZIndex::CANVAS.above().above(), a, b, WIREFRAME_WIDTH, color(obj.color));
            }
        }
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────

/// Swatch colors, top to bottom: object color, then one per enabled light
/// term, then the camera-mode marker.
pub fn hud_swatches(session: &ViewerSession) -> Vec<Vec3> {
    let mut out = Vec::new();
    if let Some(obj) = session.current_object() {
        out.push(obj.color);
    }
    let l = &session.lighting;
    if l.ambient {
        out.push(Vec3::splat(0.5));
    }
    if l.diffuse {
        out.push(Vec3::new(1.0, 1.0, 0.6));
    }
    if l.specular {
        out.push(Vec3::ONE);
    }
    if session.camera_mode {
        out.push(Vec3::new(0.8, 0.2, 0.8));
    }
    out
}

fn push_hud(list: &mut DrawList, swatches: &[Vec3], origin: Vec2) {
    if swatches.is_empty() {
        return;
    }
    let bg = Rect::new(
        origin.x - HUD_PADDING,
        origin.y - HUD_PADDING,
        HUD_SWATCH + HUD_PADDING * 3.0,
        swatches.len() as f32 * HUD_LINE + HUD_PADDING * 2.0,
    );
    list.push_rect(ZIndex::HUD, bg, Color::from_straight(0.0, 0.0, 0.0, 0.5));
    for (i, c) in swatches.iter().enumerate() {
        let cy = origin.y + i as f32 * HUD_LINE + HUD_LINE * 0.5;
        let swatch = Rect::new(origin.x, cy - HUD_SWATCH * 0.5, HUD_SWATCH, HUD_SWATCH);
        list.push_rect(ZIndex::HUD.above(), swatch, color(*c));
    }
}

// ── Title ─────────────────────────────────────────────────────────────────

/// Window title: fixed state summary, plus the status message while fresh.
pub fn title_text(session: &mut ViewerSession, now: std::time::Instant) -> String {
    let display = session.current_object().map_or("solid", |o| o.display.name());
    let mut s = format!(
        "planar viewer | {} | {} | {} | {}",
        session.current.name(),
        display,
        session.lighting.shading.name(),
        if session.camera_mode { "camera mode" } else { "object mode" },
    );
    if let Some(status) = session.status.current(now) {
        s.push_str(" | ");
        s.push_str(status);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use planar_engine::scene::DrawCmd;
    use std::time::{Duration, Instant};

    fn triangles(list: &mut DrawList) -> Vec<planar_engine::scene::shapes::TriangleCmd> {
        list.iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Triangle(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    fn count_lines(list: &mut DrawList) -> usize {
        list.iter_in_paint_order().filter(|item| matches!(item.cmd, DrawCmd::Line(_))).count()
    }

    #[test]
    fn cube_shows_only_front_faces() {
        let session = ViewerSession::default();
        let mut list = DrawList::new();
        draw_scene(&session, &mut list, 800.0, 600.0);

        // Seen head-on only the +Z face (two triangles) is visible.
        let tris = triangles(&mut list);
        assert_eq!(tris.len(), 2);
        assert!(tris.iter().all(|t| !t.is_degenerate()));
    }

    #[test]
    fn rotated_cube_shows_three_faces() {
        let mut session = ViewerSession::default();
        if let Some(obj) = session.current_object_mut() {
            obj.rotation = Vec3::new(30.0, 45.0, 0.0);
        }
        let mut list = DrawList::new();
        draw_scene(&session, &mut list, 800.0, 600.0);
        let tris = triangles(&mut list);
        assert_eq!(tris.len(), 6);
    }

    #[test]
    fn flat_shading_uses_one_color_per_triangle() {
        let mut session = ViewerSession::default();
        session.lighting.shading = Shading::Flat;
        if let Some(obj) = session.current_object_mut() {
            obj.rotation = Vec3::new(20.0, 30.0, 0.0);
        }
        let mut list = DrawList::new();
        draw_scene(&session, &mut list, 800.0, 600.0);
        for t in triangles(&mut list) {
            assert_eq!(t.colors[0], t.colors[1]);
            assert_eq!(t.colors[1], t.colors[2]);
        }
    }

    #[test]
    fn wireframe_draws_edges_instead_of_faces() {
        let mut solid = ViewerSession::default();
        let mut list = DrawList::new();
        draw_scene(&solid, &mut list, 800.0, 600.0);
        let base_lines = count_lines(&mut list);

        for obj in &mut solid.objects {
            obj.display = DisplayMode::Wireframe;
        }
        let mut list = DrawList::new();
        draw_scene(&solid, &mut list, 800.0, 600.0);
        assert!(triangles(&mut list).is_empty());
        // Six quads, four edges each.
        assert_eq!(count_lines(&mut list), base_lines + 24);
    }

    #[test]
    fn object_behind_the_camera_is_skipped() {
        let mut session = ViewerSession::default();
        if let Some(obj) = session.current_object_mut() {
            obj.position = Vec3::new(0.0, 0.0, 10.0);
        }
        let mut list = DrawList::new();
        draw_scene(&session, &mut list, 800.0, 600.0);
        assert!(triangles(&mut list).is_empty());
    }

    #[test]
    fn hud_follows_lighting_and_visibility() {
        let mut session = ViewerSession::default();
        assert_eq!(hud_swatches(&session).len(), 4);
        session.lighting.specular = false;
        session.camera_mode = true;
        assert_eq!(hud_swatches(&session).len(), 4);

        session.hud_visible = false;
        let mut list = DrawList::new();
        draw_scene(&session, &mut list, 800.0, 600.0);
        assert!(list.iter_in_paint_order().all(|item| !matches!(item.cmd, DrawCmd::Rect(_))));
    }

    #[test]
    fn title_drops_the_status_once_it_expires() {
        let mut session = ViewerSession::default();
        let t0 = Instant::now();
        let fresh = title_text(&mut session, t0);
        assert!(fresh.starts_with("planar viewer | cube | solid | smooth | object mode | "));
        let later = title_text(&mut session, t0 + Duration::from_secs(8));
        assert_eq!(later, "planar viewer | cube | solid | smooth | object mode");
    }
}
