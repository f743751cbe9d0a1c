use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{color_array, BatchKind, InstanceBatch};

/// Renderer for `DrawCmd::Triangle`: filled triangles with per-corner color.
///
/// There is no depth buffer; triangles land in paint order.
pub struct TriangleRenderer {
    batch: InstanceBatch,
    instances: Vec<TriangleInstance>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self {
            batch: InstanceBatch::new(BatchKind {
                name: "planar triangle",
                shader: include_str!("shaders/triangle.wgsl"),
                stride: std::mem::size_of::<TriangleInstance>() as u64,
                attrs: &TriangleInstance::ATTRS,
                corners: 3,
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
            let DrawCmd::Triangle(cmd) = &item.cmd else { continue };
            if cmd.is_degenerate() {
                continue;
            }
            let [a, b, c] = cmd.points;
            let [ca, cb, cc] = cmd.colors;
            self.instances.push(TriangleInstance {
                a: [a.x, a.y],
                b: [b.x, b.y],
                c: [c.x, c.y],
                color_a: color_array(ca),
                color_b: color_array(cb),
                color_c: color_array(cc),
            });
        }

        self.batch.draw(ctx, target, &self.instances);
    }
}

impl Default for TriangleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (72 bytes):
///
///  offset  0  a        [f32; 2]   loc 0
///  offset  8  b        [f32; 2]   loc 1
///  offset 16  c        [f32; 2]   loc 2
///  offset 24  color_a  [f32; 4]   loc 3
///  offset 40  color_b  [f32; 4]   loc 4
///  offset 56  color_c  [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct TriangleInstance {
    a: [f32; 2],
    b: [f32; 2],
    c: [f32; 2],
    color_a: [f32; 4],
    color_b: [f32; 4],
    color_c: [f32; 4],
}

impl TriangleInstance {
    const ATTRS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x2, // a
        1 => Float32x2, // b
        2 => Float32x2, // c
        3 => Float32x4, // color_a
        4 => Float32x4, // color_b
        5 => Float32x4  // color_c
    ];
}
