/// A single acquired swapchain image plus the encoder recording into it.
///
/// Holding the surface texture blocks acquisition of the next image; hand the
/// frame back to [`Gpu::swap_buffers`](super::Gpu::swap_buffers) promptly.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
