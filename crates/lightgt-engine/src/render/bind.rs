/// One state change applied to a render pass before drawing.
///
/// Draw-time bindings are an ordered list built up front and replayed in order
/// immediately before the draw call.
#[derive(Debug, Copy, Clone)]
pub enum BindOp<'a> {
    Pipeline(&'a wgpu::RenderPipeline),
    VertexBuffer { slot: u32, buffer: &'a wgpu::Buffer },
    TextureUnit { unit: u32, bind_group: &'a wgpu::BindGroup },
}

impl BindOp<'_> {
    pub fn apply(&self, rpass: &mut wgpu::RenderPass<'_>) {
        match *self {
            BindOp::Pipeline(pipeline) => rpass.set_pipeline(pipeline),
            BindOp::VertexBuffer { slot, buffer } => rpass.set_vertex_buffer(slot, buffer.slice(..)),
            BindOp::TextureUnit { unit, bind_group } => rpass.set_bind_group(unit, bind_group, &[]),
        }
    }
}
