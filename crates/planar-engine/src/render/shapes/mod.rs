//! Shape renderers, one per `DrawCmd` variant.

mod common;

pub mod dot;
pub mod line;
pub mod rect;
pub mod triangle;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::DrawList;

use self::dot::DotRenderer;
use self::line::LineRenderer;
use self::rect::RectRenderer;
use self::triangle::TriangleRenderer;

/// All shape renderers, drawn lines first, then triangles, dots and rects.
///
/// Each renderer issues its own pass, so paint order holds within a command
/// kind only.
#[derive(Default)]
pub struct SceneRenderer {
    lines: LineRenderer,
    triangles: TriangleRenderer,
    dots: DotRenderer,
    rects: RectRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.lines.render(ctx, target, draw_list);
        self.triangles.render(ctx, target, draw_list);
        self.dots.render(ctx, target, draw_list);
        self.rects.render(ctx, target, draw_list);
    }
}
