/// The demo texture: 2x2 opaque texels, row-major, first row on top.
///
/// Each texel is packed `0xAABBGGRR`, i.e. its little-endian bytes are the
/// RGBA8 bytes: red, yellow / magenta, white.
pub const DEMO_TEXELS: [u32; 4] = [0xFF0000FF, 0xFF00FFFF, 0xFFFF00FF, 0xFFFFFFFF];

pub const DEMO_TEXTURE_WIDTH: u32 = 2;
pub const DEMO_TEXTURE_HEIGHT: u32 = 2;

const BYTES_PER_TEXEL: u32 = 4;

/// CPU-side RGBA8 image in packed-texel form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexelImage {
    width: u32,
    height: u32,
    texels: Vec<u32>,
}

impl TexelImage {
    /// The fixed 2x2 demo image.
    pub fn demo() -> Self {
        Self {
            width: DEMO_TEXTURE_WIDTH,
            height: DEMO_TEXTURE_HEIGHT,
            texels: DEMO_TEXELS.to_vec(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Upload bytes: each texel written little-endian, independent of the host.
    pub fn rgba8_bytes(&self) -> Vec<u8> {
        self.texels.iter().flat_map(|t| t.to_le_bytes()).collect()
    }

    fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }
}

/// Sampling state of a texture unit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SamplerState {
    pub filter: wgpu::FilterMode,
    pub wrap: wgpu::AddressMode,
}

impl Default for SamplerState {
    /// Nearest filtering, clamp-to-edge wrapping.
    fn default() -> Self {
        Self {
            filter: wgpu::FilterMode::Nearest,
            wrap: wgpu::AddressMode::ClampToEdge,
        }
    }
}

/// Immutable GPU texture + view + sampler.
pub struct Texture2d {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture2d {
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &TexelImage,
        sampler_state: SamplerState,
        label: &str,
    ) -> Self {
        let size = image.extent();
        let texture = Self::create_texture(device, label, size);

        Self::write_texture_to_queue(queue, &texture, image, size);

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = Self::create_sampler(device, sampler_state);

        log::debug!("texture {label:?} uploaded: {}x{}", image.width(), image.height());

        Self {
            texture,
            view,
            sampler,
        }
    }

    fn create_texture(device: &wgpu::Device, label: &str, size: wgpu::Extent3d) -> wgpu::Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    fn write_texture_to_queue(
        queue: &wgpu::Queue,
        texture: &wgpu::Texture,
        image: &TexelImage,
        size: wgpu::Extent3d,
    ) {
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &image.rgba8_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(BYTES_PER_TEXEL * image.width()),
                rows_per_image: Some(image.height()),
            },
            size,
        );
    }

    fn create_sampler(device: &wgpu::Device, state: SamplerState) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("lightgt texture sampler"),
            address_mode_u: state.wrap,
            address_mode_v: state.wrap,
            address_mode_w: state.wrap,
            mag_filter: state.filter,
            min_filter: state.filter,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_image_has_exactly_four_texels_in_order() {
        let img = TexelImage::demo();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.texels, [0xFF0000FF, 0xFF00FFFF, 0xFFFF00FF, 0xFFFFFFFF]);
    }

    #[test]
    fn upload_bytes_are_little_endian_rgba() {
        let bytes = TexelImage::demo().rgba8_bytes();
        assert_eq!(bytes.len(), 16);
        // red, yellow / magenta, white
        assert_eq!(&bytes[0..4], &[0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(&bytes[4..8], &[0xFF, 0xFF, 0x00, 0xFF]);
        assert_eq!(&bytes[8..12], &[0xFF, 0x00, 0xFF, 0xFF]);
        assert_eq!(&bytes[12..16], &[0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn every_demo_texel_is_opaque() {
        let bytes = TexelImage::demo().rgba8_bytes();
        assert!(bytes.chunks_exact(4).all(|px| px[3] == 0xFF));
    }

    #[test]
    fn default_sampler_is_nearest_clamped() {
        let s = SamplerState::default();
        assert_eq!(s.filter, wgpu::FilterMode::Nearest);
        assert_eq!(s.wrap, wgpu::AddressMode::ClampToEdge);
    }
}
