use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{color_array, BatchKind, InstanceBatch};

/// Renderer for `DrawCmd::Dot`: anti-aliased filled discs and rings.
pub struct DotRenderer {
    batch: InstanceBatch,
    instances: Vec<DotInstance>,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self {
            batch: InstanceBatch::new(BatchKind {
                name: "planar dot",
                shader: include_str!("shaders/dot.wgsl"),
                stride: std::mem::size_of::<DotInstance>() as u64,
                attrs: &DotInstance::ATTRS,
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
            let DrawCmd::Dot(cmd) = &item.cmd else { continue };
            if cmd.radius <= 0.0 {
                continue;
            }
            let ring = cmd.ring_width.map_or(0.0, |w| w.clamp(0.0, cmd.radius));
            self.instances.push(DotInstance {
                center: [cmd.center.x, cmd.center.y],
                radius_ring: [cmd.radius, ring],
                color: color_array(cmd.color),
            });
        }

        self.batch.draw(ctx, target, &self.instances);
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (32 bytes):
///
///  offset  0  center       [f32; 2]   loc 0
///  offset  8  radius_ring  [f32; 2]   loc 1  (.x = radius, .y = ring width, 0 = filled)
///  offset 16  color        [f32; 4]   loc 2
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DotInstance {
    center: [f32; 2],
    radius_ring: [f32; 2],
    color: [f32; 4],
}

impl DotInstance {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // center
        1 => Float32x2, // radius_ring
        2 => Float32x4  // color
    ];
}
