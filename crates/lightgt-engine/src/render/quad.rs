use anyhow::Result;
use wgpu::util::DeviceExt;

use crate::coords::{RectF, Viewport};

use super::bind::BindOp;
use super::shader::{ShaderProgram, TEXTURED_QUAD_WGSL};
use super::texture::{SamplerState, TexelImage, Texture2d};
use super::{RenderCtx, RenderTarget, POSITION_SLOT, TEXTURE_UNIT, TEX_COORDS_SLOT};

/// Vertices in the full-screen triangle strip.
pub const QUAD_VERTEX_COUNT: u32 = 4;

/// Opaque black.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::BLACK;

/// Every GPU resource the demo draws with, built once during setup.
pub struct RenderState {
    program: ShaderProgram,
    vertex_buffer: wgpu::Buffer,
    tex_coords_buffer: wgpu::Buffer,
    _texture: Texture2d,
    texture_unit: wgpu::BindGroup,
}

impl RenderState {
    /// Creates buffers, program and texture in setup order.
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self> {
        let quad = RectF::from_coords(-1.0, -1.0, 1.0, 1.0);
        let vertex_buffer =
            create_float2_buffer(ctx.device, "lightgt quad vbo", &quad.triangle_strip_coords());

        let program = ShaderProgram::link(ctx.device, ctx.surface_format, TEXTURED_QUAD_WGSL)?;

        // Image rows run top-down, texture v runs from the first row.
        let texture_rect = RectF::from_coords(0.0, 0.0, 1.0, 1.0).v_flipped();
        let tex_coords_buffer = create_float2_buffer(
            ctx.device,
            "lightgt tex coords vbo",
            &texture_rect.triangle_strip_coords(),
        );

        let texture = Texture2d::from_image(
            ctx.device,
            ctx.queue,
            &TexelImage::demo(),
            SamplerState::default(),
            "lightgt demo texture",
        );

        let info = program.info();
        let texture_unit = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lightgt texture unit 0"),
            layout: program.bind_group_layout(),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: info.texture.binding,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: info.sampler.binding,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        log::debug!("render state ready");

        Ok(Self {
            program,
            vertex_buffer,
            tex_coords_buffer,
            _texture: texture,
            texture_unit,
        })
    }

    /// Bindings replayed before the draw, in order.
    pub fn bind_ops(&self) -> [BindOp<'_>; 4] {
        [
            BindOp::Pipeline(self.program.pipeline()),
            BindOp::VertexBuffer {
                slot: POSITION_SLOT,
                buffer: &self.vertex_buffer,
            },
            BindOp::VertexBuffer {
                slot: TEX_COORDS_SLOT,
                buffer: &self.tex_coords_buffer,
            },
            BindOp::TextureUnit {
                unit: TEXTURE_UNIT,
                bind_group: &self.texture_unit,
            },
        ]
    }

    /// Clears `target` and draws the quad once.
    pub fn draw(&self, target: &mut RenderTarget<'_>, viewport: Viewport) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lightgt quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height, 0.0, 1.0);

        for op in self.bind_ops() {
            op.apply(&mut rpass);
        }

        rpass.draw(0..QUAD_VERTEX_COUNT, 0..1);
    }
}

fn create_float2_buffer(device: &wgpu::Device, label: &str, data: &[[f32; 2]]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX,
    })
}
