//! Status display: colored swatches in screen space plus a one-line summary
//! shown in the window title.

use planar_engine::coords::{Rect, Vec2};
use planar_engine::paint::Color;
use planar_engine::scene::{DrawList, ZIndex};
use planar_geom::Rgb;

use crate::render::to_color;
use crate::session::{PivotMode, Session};

const LINE_HEIGHT: f32 = 20.0;
const SWATCH: f32 = LINE_HEIGHT * 0.5;
const PADDING: f32 = 5.0;

/// What a swatch stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HudItem {
    Tool,
    Color,
    Transform,
    Selection,
    Clipping,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HudLine {
    pub item: HudItem,
    pub color: Rgb,
}

/// Swatches for the current state, top to bottom. Transform, selection and
/// clipping only appear while they are active.
pub fn hud_lines(session: &Session) -> Vec<HudLine> {
    let ix = &session.interaction;
    let stroke = ix.stroke.color;

    let mut lines = vec![
        HudLine { item: HudItem::Tool, color: Rgb::new(0.2, 0.8, 0.2) },
        HudLine {
            item: HudItem::Color,
            color: if stroke.palette_name().is_some() { stroke } else { Rgb::gray(0.8) },
        },
    ];
    if ix.transform_mode.is_some() {
        lines.push(HudLine { item: HudItem::Transform, color: Rgb::new(0.8, 0.6, 0.2) });
    }
    if session.selected_shape().is_some() {
        lines.push(HudLine { item: HudItem::Selection, color: session.config.highlight });
    }
    if session.window.active {
        lines.push(HudLine { item: HudItem::Clipping, color: Rgb::new(1.0, 0.4, 0.4) });
    }
    lines
}

/// Records the swatch column with its top-left corner at `origin`.
pub fn push_hud(list: &mut DrawList, lines: &[HudLine], origin: Vec2) {
    if lines.is_empty() {
        return;
    }

    let bg = Rect::new(
        origin.x - PADDING,
        origin.y - PADDING,
        SWATCH + PADDING * 3.0,
        lines.len() as f32 * LINE_HEIGHT + PADDING * 2.0,
    );
    list.push_rect(ZIndex::HUD, bg, Color::from_straight(0.0, 0.0, 0.0, 0.5));

    for (i, line) in lines.iter().enumerate() {
        let cy = origin.y + i as f32 * LINE_HEIGHT + LINE_HEIGHT * 0.5;
        let swatch = Rect::new(origin.x, cy - SWATCH * 0.5, SWATCH, SWATCH);
        list.push_rect(ZIndex::HUD.above(), swatch, to_color(line.color));
    }
}

/// Human-readable summary of the session state.
pub fn status_text(session: &Session) -> String {
    let ix = &session.interaction;
    let mut s = format!(
        "planar | tool: {} | color: {} | width: {}",
        ix.tool.name(),
        ix.stroke.color.palette_name().unwrap_or("custom"),
        ix.stroke.width,
    );

    if let Some(mode) = ix.transform_mode {
        s.push_str(&format!(" | transform: {}", mode.name()));
    }
    if ix.pivot_mode == PivotMode::Custom {
        match ix.custom_pivot {
            Some(p) => s.push_str(&format!(" | pivot: ({:.0}, {:.0})", p.x, p.y)),
            None => s.push_str(" | pivot: click to set"),
        }
    }
    if let Some(shape) = session.selected_shape() {
        s.push_str(&format!(" | selected: {} {}", shape.kind().name(), shape.id));
    }
    if ix.window_definition {
        s.push_str(" | defining window");
    } else if session.window.active {
        let clipping = if session.window.clipping_enabled { "on" } else { "off" };
        s.push_str(&format!(
            " | clipping: {clipping} ({})",
            session.window.algorithm.name()
        ));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TransformMode;
    use planar_geom::{Geometry, Point2};

    #[test]
    fn idle_session_shows_tool_and_color() {
        let s = Session::default();
        let lines = hud_lines(&s);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].color, Rgb::WHITE);
        assert_eq!(status_text(&s), "planar | tool: point | color: white | width: 2");
    }

    #[test]
    fn active_state_adds_swatches() {
        let mut s = Session::default();
        let id = s.add_shape(Geometry::Point { position: Point2::zero() });
        s.interaction.selected = Some(id);
        s.interaction.transform_mode = Some(TransformMode::Rotate);
        s.window.active = true;

        let items: Vec<HudItem> = hud_lines(&s).iter().map(|l| l.item).collect();
        assert_eq!(
            items,
            vec![HudItem::Tool, HudItem::Color, HudItem::Transform, HudItem::Selection, HudItem::Clipping]
        );

        let text = status_text(&s);
        assert!(text.contains("transform: rotate"));
        assert!(text.contains("selected: point #1"));
        assert!(text.contains("clipping: off (Cohen-Sutherland)"));
    }

    #[test]
    fn custom_color_falls_back_to_gray() {
        let mut s = Session::default();
        s.interaction.stroke.color = Rgb::new(0.3, 0.3, 0.9);
        assert_eq!(hud_lines(&s)[1].color, Rgb::gray(0.8));
        assert!(status_text(&s).contains("color: custom"));
    }

    #[test]
    fn push_hud_records_background_and_swatches() {
        let s = Session::default();
        let mut list = DrawList::new();
        push_hud(&mut list, &hud_lines(&s), Vec2::new(10.0, 10.0));
        assert_eq!(list.len(), 3);
    }
}
