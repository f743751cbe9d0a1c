//! Render pass: turns a [`Session`] into world-space primitives.
//!
//! Drawing goes through [`RenderSink`] so the pass can be recorded in tests;
//! [`DrawListSink`] is the engine-backed implementation.

use planar_engine::coords::Vec2;
use planar_engine::paint::Color;
use planar_engine::scene::{DrawList, ZIndex};
use planar_geom::clip::{classify_ellipse, classify_rectangle};
use planar_geom::{ClipAlgorithm, ClipBounds, Ellipse, Geometry, Point2, RegionClass, Rgb, Shape};

use crate::session::{PivotMode, Session};
use crate::view::WorldView;

const INSIDE: Rgb = Rgb::GREEN;
const MARKER: Rgb = Rgb::WHITE;
const PENDING: Rgb = Rgb::new(0.5, 0.5, 0.5);
const GRID: Rgb = Rgb::new(0.2, 0.2, 0.2);

/// Fade applied to geometry wholly outside the clip window.
const FADE_OUTSIDE: f32 = 0.2;
/// Fade applied to the unclipped outline of straddling geometry.
const FADE_STRADDLING: f32 = 0.4;

/// World-space drawing primitives. Sizes and widths are in pixels.
pub trait RenderSink {
    /// Square-ish dot of diameter `size`.
    fn point(&mut self, pos: Point2, color: Rgb, size: f32);

    fn segment(&mut self, a: Point2, b: Point2, color: Rgb, width: f32);

    /// Everything recorded after this call paints above the canvas.
    fn begin_overlay(&mut self) {}

    fn polyline(&mut self, points: &[Point2], color: Rgb, width: f32, closed: bool) {
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], color, width);
        }
        if closed && points.len() > 2 {
            if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
                self.segment(last, first, color, width);
            }
        }
    }
}

/// Sink that maps world coordinates to screen space and records into a [`DrawList`].
pub struct DrawListSink<'a> {
    list: &'a mut DrawList,
    view: &'a WorldView,
    z: ZIndex,
}

impl<'a> DrawListSink<'a> {
    pub fn new(list: &'a mut DrawList, view: &'a WorldView) -> Self {
        Self { list, view, z: ZIndex::CANVAS }
    }
}

#[inline]
pub(crate) fn to_color(c: Rgb) -> Color {
    Color::opaque(c.r, c.g, c.b)
}

impl RenderSink for DrawListSink<'_> {
    fn begin_overlay(&mut self) {
        self.z = ZIndex::OVERLAY;
    }

    fn point(&mut self, pos: Point2, color: Rgb, size: f32) {
        let center = self.view.world_to_screen(pos);
        self.list.push_dot(self.z, center, size * 0.5, to_color(color));
    }

    fn segment(&mut self, a: Point2, b: Point2, color: Rgb, width: f32) {
        let (a, b) = (self.view.world_to_screen(a), self.view.world_to_screen(b));
        self.list.push_line(self.z, a, b, width, to_color(color));
    }

    fn polyline(&mut self, points: &[Point2], color: Rgb, width: f32, closed: bool) {
        let screen: Vec<Vec2> = points.iter().map(|p| self.view.world_to_screen(*p)).collect();
        self.list.push_polyline(self.z, &screen, width, to_color(color), closed);
    }
}

/// Draws the whole session back to front.
pub fn draw_session(session: &Session, sink: &mut impl RenderSink) {
    let cfg = &session.config;
    let ix = &session.interaction;

    draw_axes(sink, &cfg.ortho, cfg.grid_spacing, cfg.tick_spacing);
    draw_clip_window(session, sink);

    let clip = session.window.clip_bounds().map(|b| (b, session.window.algorithm));
    let selected = session.selected_shape().map(|s| s.id);
    for shape in session.shapes.iter().filter(|s| s.visible) {
        let is_selected = selected == Some(shape.id);
        draw_shape(sink, shape, clip, is_selected.then_some(cfg.highlight));
    }

    sink.begin_overlay();
    if ix.pivot_mode == PivotMode::Custom {
        if let Some(pivot) = ix.custom_pivot {
            draw_pivot(sink, pivot);
        }
    }

    for p in &ix.pending_points {
        sink.point(*p, PENDING, 3.0);
    }
}

// ── background ────────────────────────────────────────────────────────────

/// Non-zero multiples of `step` within `[min, max]`.
fn multiples(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let (first, last) = if step > 0.0 {
        ((min / step).ceil() as i64, (max / step).floor() as i64)
    } else {
        (1, 0)
    };
    (first..=last).filter(|k| *k != 0).map(move |k| k as f64 * step)
}

fn draw_axes(sink: &mut impl RenderSink, o: &ClipBounds, grid: f64, tick: f64) {
    for y in multiples(o.ymin, o.ymax, grid) {
        sink.segment(Point2::new(o.xmin, y), Point2::new(o.xmax, y), GRID, 0.5);
    }
    for x in multiples(o.xmin, o.xmax, grid) {
        sink.segment(Point2::new(x, o.ymin), Point2::new(x, o.ymax), GRID, 0.5);
    }

    sink.segment(Point2::new(o.xmin, 0.0), Point2::new(o.xmax, 0.0), Rgb::RED, 1.5);
    sink.segment(Point2::new(0.0, o.ymin), Point2::new(0.0, o.ymax), Rgb::BLUE, 1.5);

    for x in multiples(o.xmin, o.xmax, tick) {
        sink.point(Point2::new(x, 0.0), Rgb::WHITE, 3.0);
    }
    for y in multiples(o.ymin, o.ymax, tick) {
        sink.point(Point2::new(0.0, y), Rgb::WHITE, 3.0);
    }
    sink.point(Point2::zero(), Rgb::YELLOW, 5.0);
}

fn draw_clip_window(session: &Session, sink: &mut impl RenderSink) {
    let w = &session.window;
    if w.active {
        let c = w.bounds.corners();
        sink.polyline(&c, Rgb::RED, 2.0, true);
        sink.segment(c[0], c[2], Rgb::RED, 1.0);
        sink.segment(c[3], c[1], Rgb::RED, 1.0);
    }

    let ix = &session.interaction;
    if !ix.window_definition {
        return;
    }
    for p in &ix.window_pending {
        sink.point(*p, Rgb::YELLOW, 7.0);
    }
    if let [p] = ix.window_pending[..] {
        let preview = ClipBounds::from_corners(p, p + Point2::new(50.0, 50.0));
        sink.polyline(&preview.corners(), Rgb::YELLOW, 1.0, true);
    }
}

fn draw_pivot(sink: &mut impl RenderSink, pivot: Point2) {
    const R: f64 = 10.0;
    let ring = Ellipse::new(pivot, (R, R));
    sink.polyline(ring.boundary(), INSIDE, 2.0, true);
    sink.segment(pivot - Point2::new(R * 1.5, 0.0), pivot + Point2::new(R * 1.5, 0.0), INSIDE, 2.0);
    sink.segment(pivot - Point2::new(0.0, R * 1.5), pivot + Point2::new(0.0, R * 1.5), INSIDE, 2.0);
    sink.point(pivot, INSIDE, 5.0);
}

// ── shapes ────────────────────────────────────────────────────────────────

/// Draws one shape.
///
/// With clipping on, color encodes the shape's relation to the window and
/// the visible part of straddling outlines is drawn again in green.
/// `highlight` is set for the selected shape.
pub fn draw_shape(
    sink: &mut impl RenderSink,
    shape: &Shape,
    clip: Option<(&ClipBounds, ClipAlgorithm)>,
    highlight: Option<Rgb>,
) {
    let base = shape.stroke.color;
    let width = shape.stroke.width as f32;

    match &shape.geometry {
        Geometry::Point { position } => {
            let inside = clip.is_some_and(|(b, _)| b.contains(*position));
            let color = highlight.unwrap_or(if inside { INSIDE } else { base });
            sink.point(*position, color, width);
        }

        Geometry::Segment { a, b } => match clip {
            None => sink.segment(*a, *b, highlight.unwrap_or(base), width),
            Some((bounds, algo)) => match algo.clip(*a, *b, bounds) {
                None => sink.segment(*a, *b, base.scaled(FADE_OUTSIDE), width),
                Some((ca, cb)) => {
                    if !(bounds.contains(*a) && bounds.contains(*b)) {
                        sink.segment(*a, *b, base.scaled(FADE_STRADDLING), width);
                    }
                    sink.segment(ca, cb, INSIDE, width);
                }
            },
        },

        Geometry::Rect(r) => {
            let corners = r.corners();
            let class = clip.map(|(b, algo)| (classify_rectangle(&corners, b), b, algo));
            draw_outline(sink, &corners, base, width, class, highlight);
        }

        Geometry::Ellipse(e) => {
            let class = clip.map(|(b, algo)| (classify_ellipse(e, b), b, algo));
            draw_outline(sink, e.boundary(), base, width, class, highlight);
        }
    }

    if highlight.is_some() {
        draw_selection_markers(sink, shape);
    }
}

fn draw_outline(
    sink: &mut impl RenderSink,
    outline: &[Point2],
    base: Rgb,
    width: f32,
    class: Option<(RegionClass, &ClipBounds, ClipAlgorithm)>,
    highlight: Option<Rgb>,
) {
    let Some((class, bounds, algo)) = class else {
        sink.polyline(outline, highlight.unwrap_or(base), width, true);
        return;
    };

    match class {
        RegionClass::AllInside => sink.polyline(outline, INSIDE, width, true),
        RegionClass::AllOutside => sink.polyline(outline, base.scaled(FADE_OUTSIDE), width, true),
        RegionClass::Straddling => {
            sink.polyline(outline, base.scaled(FADE_STRADDLING), width, true);
            let n = outline.len();
            for i in 0..n {
                if let Some((a, b)) = algo.clip(outline[i], outline[(i + 1) % n], bounds) {
                    sink.segment(a, b, INSIDE, width);
                }
            }
        }
    }
}

fn draw_selection_markers(sink: &mut impl RenderSink, shape: &Shape) {
    match &shape.geometry {
        Geometry::Point { position } => {
            let r = shape.stroke.width + 5.0;
            sink.polyline(Ellipse::new(*position, (r, r)).boundary(), MARKER, 1.0, true);
        }
        Geometry::Segment { a, b } => {
            sink.point(*a, MARKER, 8.0);
            sink.point(*b, MARKER, 8.0);
        }
        Geometry::Rect(r) => {
            for c in r.corners() {
                sink.point(c, MARKER, 8.0);
            }
        }
        Geometry::Ellipse(e) => sink.point(e.center(), MARKER, 8.0),
    }
}
