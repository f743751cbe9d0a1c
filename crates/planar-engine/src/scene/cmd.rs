use crate::scene::shapes::dot::DotCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// One recorded primitive. Each variant has a matching renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Strokes: shape outlines, axes, the clip window.
    Line(LineCmd),
    /// Points, pivot and selection markers.
    Dot(DotCmd),
    /// HUD panels and swatches.
    Rect(RectCmd),
    /// Projected mesh faces.
    Triangle(TriangleCmd),
}
