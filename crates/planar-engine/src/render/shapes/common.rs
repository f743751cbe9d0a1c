//! Instanced batches shared by the line, dot, rect and triangle renderers.
//!
//! Every instance is expanded by the vertex shader into a short triangle
//! strip (four corners for quads, three for triangles; the corner comes from
//! `vertex_index`), so a batch owns no vertex or index buffer. Its inputs are
//! the instance buffer and a 16-byte viewport uniform at `@group(0) @binding(0)`.

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

/// Smallest instance buffer ever allocated, in instances.
const MIN_INSTANCES: usize = 64;

#[inline]
pub(super) fn color_array(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, c.a]
}

/// Buffer slots for `required` instances: the next power of two, at least [`MIN_INSTANCES`].
#[inline]
fn slots_for(required: usize) -> usize {
    required.next_power_of_two().max(MIN_INSTANCES)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2],
    _pad: [f32; 2],
}

/// Per-renderer constants: label, WGSL source and instance layout.
pub(super) struct BatchKind {
    pub name: &'static str,
    pub shader: &'static str,
    pub stride: u64,
    pub attrs: &'static [wgpu::VertexAttribute],
    /// Strip vertices per instance.
    pub corners: u32,
}

/// Format-dependent GPU state, rebuilt whenever the surface format changes.
struct Compiled {
    format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Compiled {
    fn new(device: &wgpu::Device, format: wgpu::TextureFormat, kind: &BatchKind) -> Self {
        log::debug!("{}: compiling for {format:?}", kind.name);

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(kind.name),
            source: wgpu::ShaderSource::Wgsl(kind.shader.into()),
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(kind.name),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<ViewportUniform>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let uniform = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(kind.name),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(kind.name),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(kind.name),
            bind_group_layouts: &[&layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(kind.name),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: kind.stride,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: kind.attrs,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self { format, pipeline, uniform, bind_group }
    }
}

/// One instanced draw per frame for a single [`BatchKind`].
pub(super) struct InstanceBatch {
    kind: BatchKind,
    compiled: Option<Compiled>,
    instances: Option<wgpu::Buffer>,
    slots: usize,
}

impl InstanceBatch {
    pub(super) fn new(kind: BatchKind) -> Self {
        Self { kind, compiled: None, instances: None, slots: 0 }
    }

    /// Uploads `instances` and draws them over whatever the target holds.
    pub(super) fn draw<I: Pod>(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        instances: &[I],
    ) {
        if instances.is_empty() {
            return;
        }
        debug_assert_eq!(std::mem::size_of::<I>() as u64, self.kind.stride);

        if self.compiled.as_ref().map(|c| c.format) != Some(ctx.surface_format) {
            self.compiled = Some(Compiled::new(ctx.device, ctx.surface_format, &self.kind));
        }
        self.reserve(ctx.device, instances.len());

        let (Some(compiled), Some(buffer)) = (self.compiled.as_ref(), self.instances.as_ref()) else {
            return;
        };

        let uniform = ViewportUniform { size: ctx.viewport.uniform_size(), _pad: [0.0; 2] };
        ctx.queue.write_buffer(&compiled.uniform, 0, bytemuck::bytes_of(&uniform));
        ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(instances));

        let mut pass = target.overlay_pass(self.kind.name);
        pass.set_pipeline(&compiled.pipeline);
        pass.set_bind_group(0, &compiled.bind_group, &[]);
        pass.set_vertex_buffer(0, buffer.slice(..));
        pass.draw(0..self.kind.corners, 0..instances.len() as u32);
    }

    fn reserve(&mut self, device: &wgpu::Device, required: usize) {
        if self.instances.is_some() && required <= self.slots {
            return;
        }
        let slots = slots_for(required);
        self.instances = Some(device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(self.kind.name),
            size: slots as u64 * self.kind.stride,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.slots = slots;
    }
}
