use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{color_array, BatchKind, InstanceBatch};

/// Renderer for `DrawCmd::Line`.
///
/// Each segment is one instanced quad extruded along its normal; widths under
/// one logical pixel are widened to one so hairlines stay visible.
pub struct LineRenderer {
    batch: InstanceBatch,
    instances: Vec<LineInstance>,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self {
            batch: InstanceBatch::new(BatchKind {
                name: "planar line",
                shader: include_str!("shaders/line.wgsl"),
                stride: std::mem::size_of::<LineInstance>() as u64,
                attrs: &LineInstance::ATTRS,
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
            let DrawCmd::Line(cmd) = &item.cmd else { continue };
            if cmd.is_degenerate() {
                continue;
            }
            self.instances.push(LineInstance {
                a: [cmd.a.x, cmd.a.y],
                b: [cmd.b.x, cmd.b.y],
                width: [cmd.width, 0.0],
                color: color_array(cmd.color),
            });
        }

        self.batch.draw(ctx, target, &self.instances);
    }
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  a      [f32; 2]   loc 0
///  offset  8  b      [f32; 2]   loc 1
///  offset 16  width  [f32; 2]   loc 2  (.x = width, .y unused)
///  offset 24  color  [f32; 4]   loc 3
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineInstance {
    a: [f32; 2],
    b: [f32; 2],
    width: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x2, // a
        1 => Float32x2, // b
        2 => Float32x2, // width
        3 => Float32x4  // color
    ];
}
