use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{color_array, BatchKind, InstanceBatch};

/// Renderer for `DrawCmd::Rect` (solid fill).
///
/// Geometry is in logical pixels, converted to NDC in the vertex shader.
pub struct RectRenderer {
    batch: InstanceBatch,
    instances: Vec<RectInstance>,
}

impl RectRenderer {
    pub fn new() -> Self {
        Self {
            batch: InstanceBatch::new(BatchKind {
                name: "planar rect",
                shader: include_str!("shaders/rect.wgsl"),
                stride: std::mem::size_of::<RectInstance>() as u64,
                attrs: &RectInstance::ATTRS,
                corners: 4,
            }),
            instances: Vec::new(),
        }
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.instances.clear();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Rect(cmd) = &item.cmd else { continue };
            let r = cmd.rect.normalized();
            if r.is_empty() {
                continue;
            }
            self.instances.push(RectInstance {
                origin: [r.origin.x, r.origin.y],
                size: [r.size.x, r.size.y],
                color: color_array(cmd.color),
            });
        }

        self.batch.draw(ctx, target, &self.instances);
    }
}

impl Default for RectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct RectInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
}

impl RectInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // origin
        1 => Float32x2, // size
        2 => Float32x4  // color
    ];
}
