//! Static render resources and the one-shot draw.
//!
//! Convention:
//! - quad positions are clip-space, texture coordinates are [0, 1]
//! - vertex buffer slot N feeds the N-th float2 stream of the pipeline
//! - the demo texture is bound on texture unit (bind group) 0

mod bind;
mod ctx;
mod frame;
mod quad;
mod shader;
mod texture;

pub use bind::BindOp;
pub use ctx::{RenderCtx, RenderTarget};
pub use frame::present_once;
pub use quad::{RenderState, CLEAR_COLOR, QUAD_VERTEX_COUNT};
pub use shader::{
    AttributeLocation, ResourceKind, ShaderInfo, ShaderInput, ShaderInterface, ShaderProgram,
    ShaderResource, UniformLocation, TEXTURED_QUAD_WGSL,
};
pub use texture::{
    SamplerState, TexelImage, Texture2d, DEMO_TEXELS, DEMO_TEXTURE_HEIGHT, DEMO_TEXTURE_WIDTH,
};

/// Vertex buffer slot of the `position` stream.
pub const POSITION_SLOT: u32 = 0;
/// Vertex buffer slot of the `texCoords` stream.
pub const TEX_COORDS_SLOT: u32 = 1;
/// Bind group index holding the sampled texture.
pub const TEXTURE_UNIT: u32 = 0;
