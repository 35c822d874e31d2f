use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{PerspectiveCamera, PlaneGeometry, PlaneVertex};
use crate::viewport::ViewportDimensions;

use super::common::uniform_layout_entry;

/// Number of palette slots the plane shader reads.
pub const PALETTE_LEN: usize = 5;

/// Material inputs fixed at scene creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneMaterial {
    pub palette: [Color; PALETTE_LEN],
    pub uv_rate: [f32; 2],
}

/// Shader plane: subdivided plane geometry + palette shader + uniform set.
///
/// The time uniform is held CPU-side and uploaded with every draw, so the
/// value on the GPU is always the one set before the most recent `render`.
pub struct PlaneRenderer {
    geometry: PlaneGeometry,
    uniforms: PlaneUniforms,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
}

impl PlaneRenderer {
    pub fn new(geometry: PlaneGeometry, material: &PlaneMaterial) -> Self {
        Self {
            geometry,
            uniforms: PlaneUniforms::new(material),
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            uniform_buffer: None,
            vertex_buffer: None,
            index_buffer: None,
        }
    }

    /// Writes the time uniform.
    #[inline]
    pub fn set_time(&mut self, time: f32) {
        self.uniforms.time = time;
    }

    /// Updates the `resolution` uniform as (width, height, 1/width, 1/height).
    pub fn set_resolution(&mut self, dims: ViewportDimensions) {
        if dims.is_empty() {
            return;
        }
        let (w, h) = (dims.width as f32, dims.height as f32);
        self.uniforms.resolution = [w, h, 1.0 / w, 1.0 / h];
    }

    /// Draws the plane through `camera` into `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        camera: &PerspectiveCamera,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        self.uniforms.view_proj = camera.view_projection().to_cols_array_2d();

        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&self.uniforms));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vertex_buffer.as_ref() else { return };
        let Some(ibo) = self.index_buffer.as_ref() else { return };

        let mut rpass = target.begin_load_pass("tincture plane pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.geometry.index_count(), 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tincture plane shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/plane.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("tincture plane bgl"),
                    entries: &[uniform_layout_entry::<PlaneUniforms>(
                        0,
                        wgpu::ShaderStages::VERTEX_FRAGMENT,
                    )],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("tincture plane pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tincture plane pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[plane_vertex_layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            // Double-sided: orbiting behind the plane still shows it.
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("plane pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.uniform_buffer = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tincture plane ubo"),
            size: std::mem::size_of::<PlaneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tincture plane bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.uniform_buffer = Some(uniform_buffer);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_some() && self.index_buffer.is_some() {
            return;
        }

        self.vertex_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tincture plane vbo"),
            contents: bytemuck::cast_slice(&self.geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.index_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tincture plane ibo"),
            contents: bytemuck::cast_slice(&self.geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

fn plane_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];

    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PlaneVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

/// Mirrors `Uniforms` in `shaders/plane.wgsl` (WGSL uniform layout rules).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct PlaneUniforms {
    view_proj: [[f32; 4]; 4],
    resolution: [f32; 4],
    uv_rate: [f32; 2],
    time: f32,
    _pad: f32,
    palette: [[f32; 4]; PALETTE_LEN],
}

impl PlaneUniforms {
    fn new(material: &PlaneMaterial) -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            resolution: [0.0; 4],
            uv_rate: material.uv_rate,
            time: 0.0,
            _pad: 0.0,
            palette: material.palette.map(Color::to_array),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material() -> PlaneMaterial {
        PlaneMaterial {
            palette: [
                Color::from_srgb_hex(0xBEEF9E),
                Color::from_srgb_hex(0x6E8898),
                Color::from_srgb_hex(0xA6C36F),
                Color::from_srgb_hex(0x1E352F),
                Color::from_srgb_hex(0x5A2328),
            ],
            uv_rate: [1.0, 1.0],
        }
    }

    #[test]
    fn uniform_block_matches_wgsl_layout() {
        // mat4 (64) + vec4 (16) + vec2/f32/f32 (16) + 5 x vec4 (80)
        assert_eq!(std::mem::size_of::<PlaneUniforms>(), 176);
        assert_eq!(std::mem::offset_of!(PlaneUniforms, time), 88);
        assert_eq!(std::mem::offset_of!(PlaneUniforms, palette), 96);
    }

    #[test]
    fn set_time_writes_uniform() {
        let mut plane = PlaneRenderer::new(PlaneGeometry::new(1.5, 1.5, 4, 4), &material());
        assert_eq!(plane.uniforms.time, 0.0);
        plane.set_time(0.00027);
        assert_eq!(plane.uniforms.time, 0.00027);
    }

    #[test]
    fn palette_is_uploaded_in_order() {
        let m = material();
        let plane = PlaneRenderer::new(PlaneGeometry::new(1.0, 1.0, 1, 1), &m);
        assert_eq!(plane.uniforms.palette[3], m.palette[3].to_array());
        assert_eq!(plane.uniforms.uv_rate, [1.0, 1.0]);
    }

    #[test]
    fn resolution_ignores_empty_size() {
        let mut plane = PlaneRenderer::new(PlaneGeometry::new(1.0, 1.0, 1, 1), &material());
        plane.set_resolution(ViewportDimensions::new(800, 400));
        assert_eq!(plane.uniforms.resolution, [800.0, 400.0, 1.0 / 800.0, 1.0 / 400.0]);

        plane.set_resolution(ViewportDimensions::new(0, 400));
        assert_eq!(plane.uniforms.resolution[0], 800.0);
    }
}
