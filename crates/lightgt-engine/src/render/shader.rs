use anyhow::{Context, Result};

use super::{POSITION_SLOT, TEXTURE_UNIT, TEX_COORDS_SLOT};

/// WGSL source of the pass-through textured quad program.
pub const TEXTURED_QUAD_WGSL: &str = include_str!("shaders/textured_quad.wgsl");

const VERTEX_ENTRY: &str = "vs_main";
const FRAGMENT_ENTRY: &str = "fs_main";

const FLOAT2_STRIDE: u64 = std::mem::size_of::<[f32; 2]>() as u64;

/// Vertex attribute slot (`@location(N)`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AttributeLocation(pub u32);

/// Resource binding slot (`@group(G) @binding(B)`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct UniformLocation {
    pub group: u32,
    pub binding: u32,
}

/// A vertex entry point input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderInput {
    pub location: AttributeLocation,
    /// `None` for types with no single-attribute vertex format.
    pub format: Option<wgpu::VertexFormat>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceKind {
    Texture,
    Sampler,
    Other,
}

/// A bound module-scope variable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderResource {
    pub location: UniformLocation,
    pub kind: ResourceKind,
}

/// Named attribute and uniform locations of a validated WGSL module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderInterface {
    inputs: Vec<(String, ShaderInput)>,
    resources: Vec<(String, ShaderResource)>,
}

impl ShaderInterface {
    /// Parses and validates `source`, then collects the `@location` inputs of
    /// the vertex entry point `vertex_entry` (struct members included) and
    /// every module-scope variable with a resource binding.
    pub fn reflect(source: &str, vertex_entry: &str) -> Result<Self> {
        let module = naga::front::wgsl::parse_str(source)
            .map_err(|e| anyhow::anyhow!(e.emit_to_string(source)))
            .context("failed to parse WGSL")?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .map_err(|e| anyhow::anyhow!(e.emit_to_string(source)))
        .context("WGSL module failed validation")?;

        let entry = module
            .entry_points
            .iter()
            .find(|ep| ep.stage == naga::ShaderStage::Vertex && ep.name == vertex_entry)
            .with_context(|| format!("shader has no vertex entry point `{vertex_entry}`"))?;

        let mut inputs = Vec::new();
        for arg in &entry.function.arguments {
            match &module.types[arg.ty].inner {
                naga::TypeInner::Struct { members, .. } if arg.binding.is_none() => {
                    for member in members {
                        let name = member.name.as_deref();
                        push_input(&mut inputs, &module, name, member.ty, member.binding.as_ref());
                    }
                }
                _ => {
                    let name = arg.name.as_deref();
                    push_input(&mut inputs, &module, name, arg.ty, arg.binding.as_ref());
                }
            }
        }

        let resources = module
            .global_variables
            .iter()
            .filter_map(|(_, var)| {
                let name = var.name.clone()?;
                let binding = var.binding.as_ref()?;
                let kind = match module.types[var.ty].inner {
                    naga::TypeInner::Image { .. } => ResourceKind::Texture,
                    naga::TypeInner::Sampler { .. } => ResourceKind::Sampler,
                    _ => ResourceKind::Other,
                };
                let location = UniformLocation {
                    group: binding.group,
                    binding: binding.binding,
                };
                Some((name, ShaderResource { location, kind }))
            })
            .collect();

        Ok(Self { inputs, resources })
    }

    pub fn attribute(&self, name: &str) -> Option<ShaderInput> {
        self.inputs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, input)| *input)
    }

    pub fn uniform(&self, name: &str) -> Option<ShaderResource> {
        self.resources
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, res)| *res)
    }
}

fn push_input(
    out: &mut Vec<(String, ShaderInput)>,
    module: &naga::Module,
    name: Option<&str>,
    ty: naga::Handle<naga::Type>,
    binding: Option<&naga::Binding>,
) {
    let (Some(name), Some(naga::Binding::Location { location, .. })) = (name, binding) else {
        return;
    };
    let input = ShaderInput {
        location: AttributeLocation(*location),
        format: vertex_format(&module.types[ty].inner),
    };
    out.push((name.to_string(), input));
}

fn vertex_format(inner: &naga::TypeInner) -> Option<wgpu::VertexFormat> {
    match *inner {
        naga::TypeInner::Scalar(s) if s == naga::Scalar::F32 => Some(wgpu::VertexFormat::Float32),
        naga::TypeInner::Vector { size, scalar } if scalar == naga::Scalar::F32 => Some(match size {
            naga::VectorSize::Bi => wgpu::VertexFormat::Float32x2,
            naga::VectorSize::Tri => wgpu::VertexFormat::Float32x3,
            naga::VectorSize::Quad => wgpu::VertexFormat::Float32x4,
        }),
        _ => None,
    }
}

/// Locations used by the quad program, resolved by name once per link.
///
/// The GL-style `texture` sampler uniform is two WGSL bindings: the image
/// (`u_texture`) and its sampler (`u_sampler`). Both live in the bind group of
/// texture unit 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderInfo {
    pub position: AttributeLocation,
    pub tex_coords: AttributeLocation,
    pub texture: UniformLocation,
    pub sampler: UniformLocation,
}

impl ShaderInfo {
    pub fn resolve(iface: &ShaderInterface) -> Result<Self> {
        let info = Self {
            position: float2_input(iface, "position")?,
            tex_coords: float2_input(iface, "texCoords")?,
            texture: resource(iface, "u_texture", ResourceKind::Texture)?,
            sampler: resource(iface, "u_sampler", ResourceKind::Sampler)?,
        };

        anyhow::ensure!(
            info.position != info.tex_coords,
            "`position` and `texCoords` share location {}",
            info.position.0
        );
        anyhow::ensure!(
            info.texture.group == TEXTURE_UNIT && info.sampler.group == TEXTURE_UNIT,
            "texture and sampler must be bound in group {TEXTURE_UNIT}"
        );
        anyhow::ensure!(
            info.texture.binding != info.sampler.binding,
            "texture and sampler share binding {}",
            info.texture.binding
        );

        Ok(info)
    }

    /// One float2 attribute per vertex buffer, indexed by buffer slot.
    pub fn vertex_attributes(&self) -> [[wgpu::VertexAttribute; 1]; 2] {
        let attr = |loc: AttributeLocation| {
            [wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: loc.0,
            }]
        };

        let mut slots = [attr(self.position); 2];
        slots[TEX_COORDS_SLOT as usize] = attr(self.tex_coords);
        slots[POSITION_SLOT as usize] = attr(self.position);
        slots
    }

    /// Layout of the texture unit bind group.
    pub fn bind_group_layout_entries(&self) -> [wgpu::BindGroupLayoutEntry; 2] {
        [
            wgpu::BindGroupLayoutEntry {
                binding: self.texture.binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: self.sampler.binding,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ]
    }
}

fn float2_input(iface: &ShaderInterface, name: &str) -> Result<AttributeLocation> {
    let input = iface
        .attribute(name)
        .with_context(|| format!("shader has no `{name}` attribute"))?;
    anyhow::ensure!(
        input.format == Some(wgpu::VertexFormat::Float32x2),
        "`{name}` must be vec2<f32>, found {:?}",
        input.format
    );
    Ok(input.location)
}

fn resource(iface: &ShaderInterface, name: &str, kind: ResourceKind) -> Result<UniformLocation> {
    let res = iface
        .uniform(name)
        .with_context(|| format!("shader has no `{name}` uniform"))?;
    anyhow::ensure!(res.kind == kind, "`{name}` must be a {kind:?}, found {:?}", res.kind);
    Ok(res.location)
}

/// Compiled module + pipeline for the textured quad.
pub struct ShaderProgram {
    info: ShaderInfo,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    /// Validates `source`, resolves its locations and builds a triangle-strip
    /// pipeline targeting `surface_format`.
    ///
    /// Parse and validation errors are returned here, before wgpu sees the
    /// module.
    pub fn link(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        source: &str,
    ) -> Result<Self> {
        let iface = ShaderInterface::reflect(source, VERTEX_ENTRY)?;
        let info = ShaderInfo::resolve(&iface)?;
        log::debug!("shader locations resolved: {info:?}");

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lightgt quad shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("lightgt texture unit bgl"),
            entries: &info.bind_group_layout_entries(),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lightgt quad pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let [position_attrs, tex_coords_attrs] = info.vertex_attributes();

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lightgt quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[float2_layout(&position_attrs), float2_layout(&tex_coords_attrs)],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
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

        Ok(Self {
            info,
            bind_group_layout,
            pipeline,
        })
    }

    pub fn info(&self) -> &ShaderInfo {
        &self.info
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

fn float2_layout(attributes: &[wgpu::VertexAttribute]) -> wgpu::VertexBufferLayout<'_> {
    wgpu::VertexBufferLayout {
        array_stride: FLOAT2_STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_interface() -> ShaderInterface {
        ShaderInterface::reflect(TEXTURED_QUAD_WGSL, VERTEX_ENTRY).unwrap()
    }

    /// Minimal valid module: `bindings` at module scope, `inputs` as the
    /// members of the vertex entry point's input struct.
    fn vertex_module(inputs: &str, bindings: &str) -> String {
        format!(
            "{bindings}\n\
             struct VertexInput {{ {inputs} }};\n\
             @vertex\n\
             fn vs_main(in: VertexInput) -> @builtin(position) vec4<f32> {{\n\
                 return vec4<f32>(0.0, 0.0, 0.0, 1.0);\n\
             }}\n"
        )
    }

    const QUAD_INPUTS: &str =
        "@location(0) position: vec2<f32>, @location(1) texCoords: vec2<f32>,";

    const QUAD_BINDINGS: &str = "@group(0) @binding(0) var u_texture: texture_2d<f32>;\n\
                                 @group(0) @binding(1) var u_sampler: sampler;";

    // ── reflection ────────────────────────────────────────────────────────

    #[test]
    fn reflects_vertex_attributes_by_name() {
        let iface = quad_interface();
        let position = iface.attribute("position").unwrap();
        let tex_coords = iface.attribute("texCoords").unwrap();

        assert_eq!(position.location, AttributeLocation(0));
        assert_eq!(tex_coords.location, AttributeLocation(1));
        assert_eq!(position.format, Some(wgpu::VertexFormat::Float32x2));
        assert_eq!(tex_coords.format, Some(wgpu::VertexFormat::Float32x2));
    }

    #[test]
    fn stage_outputs_are_not_attributes() {
        let iface = quad_interface();
        assert_eq!(iface.attribute("tex_coord"), None);
        assert_eq!(iface.attribute("clip_position"), None);
    }

    #[test]
    fn reflects_bindings_by_name() {
        let iface = quad_interface();
        assert_eq!(
            iface.uniform("u_texture"),
            Some(ShaderResource {
                location: UniformLocation { group: 0, binding: 0 },
                kind: ResourceKind::Texture,
            })
        );
        assert_eq!(
            iface.uniform("u_sampler"),
            Some(ShaderResource {
                location: UniformLocation { group: 0, binding: 1 },
                kind: ResourceKind::Sampler,
            })
        );
    }

    #[test]
    fn commented_out_declarations_are_ignored() {
        let bindings = format!(
            "// old: @group(0) @binding(7) var u_texture: texture_2d<f32>;\n\
             /* @location(5) position: vec2<f32>, */\n\
             {QUAD_BINDINGS}"
        );
        let iface = reflect_quad_module(&bindings);

        assert_eq!(
            iface.uniform("u_texture").map(|r| r.location),
            Some(UniformLocation { group: 0, binding: 0 })
        );
        assert_eq!(
            iface.attribute("position").map(|i| i.location),
            Some(AttributeLocation(0))
        );
    }

    #[test]
    fn binding_may_precede_group() {
        let bindings = "@binding(0) @group(0) var u_texture: texture_2d<f32>;\n\
                        @binding(1) @group(0) var u_sampler: sampler;";
        let iface = reflect_quad_module(bindings);

        let info = ShaderInfo::resolve(&iface).unwrap();
        assert_eq!(info.texture, UniformLocation { group: 0, binding: 0 });
        assert_eq!(info.sampler, UniformLocation { group: 0, binding: 1 });
    }

    #[test]
    fn bare_entry_point_arguments_are_attributes() {
        let src = format!(
            "{QUAD_BINDINGS}\n\
             @vertex\n\
             fn vs_main(@location(3) position: vec2<f32>, @location(4) texCoords: vec2<f32>)\n\
                 -> @builtin(position) vec4<f32> {{\n\
                 return vec4<f32>(position + texCoords, 0.0, 1.0);\n\
             }}\n"
        );
        let iface = ShaderInterface::reflect(&src, "vs_main").unwrap();
        let info = ShaderInfo::resolve(&iface).unwrap();
        assert_eq!(info.position, AttributeLocation(3));
        assert_eq!(info.tex_coords, AttributeLocation(4));
    }

    fn reflect_quad_module(bindings: &str) -> ShaderInterface {
        ShaderInterface::reflect(&vertex_module(QUAD_INPUTS, bindings), "vs_main").unwrap()
    }

    #[test]
    fn invalid_wgsl_is_rejected() {
        assert!(ShaderInterface::reflect("fn vs_main( {", "vs_main").is_err());
    }

    #[test]
    fn missing_vertex_entry_point_is_rejected() {
        let err = ShaderInterface::reflect(TEXTURED_QUAD_WGSL, "main").unwrap_err();
        assert!(err.to_string().contains("vertex entry point `main`"));
    }

    // ── resolve ───────────────────────────────────────────────────────────

    #[test]
    fn quad_program_locations_resolve() {
        let info = ShaderInfo::resolve(&quad_interface()).unwrap();
        assert_eq!(info.position, AttributeLocation(0));
        assert_eq!(info.tex_coords, AttributeLocation(1));
        assert_eq!(info.texture.group, TEXTURE_UNIT);
        assert_eq!(info.sampler.group, TEXTURE_UNIT);
        assert_ne!(info.texture.binding, info.sampler.binding);
    }

    #[test]
    fn resolve_fails_without_tex_coords() {
        let src = vertex_module("@location(0) position: vec2<f32>,", QUAD_BINDINGS);
        let iface = ShaderInterface::reflect(&src, "vs_main").unwrap();
        let err = ShaderInfo::resolve(&iface).unwrap_err();
        assert!(err.to_string().contains("texCoords"));
    }

    #[test]
    fn resolve_rejects_non_float2_attribute() {
        let src = vertex_module(
            "@location(0) position: vec4<f32>, @location(1) texCoords: vec2<f32>,",
            QUAD_BINDINGS,
        );
        let iface = ShaderInterface::reflect(&src, "vs_main").unwrap();
        let err = ShaderInfo::resolve(&iface).unwrap_err();
        assert!(err.to_string().contains("position"));
    }

    #[test]
    fn resolve_rejects_swapped_resource_kinds() {
        let bindings = "@group(0) @binding(0) var u_texture: sampler;\n\
                        @group(0) @binding(1) var u_sampler: texture_2d<f32>;";
        let iface = reflect_quad_module(bindings);
        assert!(ShaderInfo::resolve(&iface).is_err());
    }

    #[test]
    fn resolve_rejects_texture_outside_unit_zero() {
        let bindings = "@group(1) @binding(0) var u_texture: texture_2d<f32>;\n\
                        @group(1) @binding(1) var u_sampler: sampler;";
        let iface = reflect_quad_module(bindings);
        assert!(ShaderInfo::resolve(&iface).is_err());
    }

    // ── pipeline layout ───────────────────────────────────────────────────

    #[test]
    fn vertex_buffers_feed_the_compiled_entry_point() {
        let iface = quad_interface();
        let info = ShaderInfo::resolve(&iface).unwrap();
        let slots = info.vertex_attributes();

        for (slot, name) in [(POSITION_SLOT, "position"), (TEX_COORDS_SLOT, "texCoords")] {
            let input = iface.attribute(name).unwrap();
            let layout = float2_layout(&slots[slot as usize]);

            assert_eq!(layout.array_stride, 8);
            assert_eq!(layout.attributes.len(), 1);
            assert_eq!(layout.attributes[0].shader_location, input.location.0);
            assert_eq!(Some(layout.attributes[0].format), input.format);
            assert_eq!(layout.attributes[0].offset, 0);
        }
    }

    #[test]
    fn bind_group_layout_matches_compiled_bindings() {
        let iface = quad_interface();
        let info = ShaderInfo::resolve(&iface).unwrap();
        let [texture, sampler] = info.bind_group_layout_entries();

        let u_texture = iface.uniform("u_texture").unwrap();
        assert_eq!(u_texture.location.group, TEXTURE_UNIT);
        assert_eq!(texture.binding, u_texture.location.binding);
        assert!(matches!(texture.ty, wgpu::BindingType::Texture { .. }));

        let u_sampler = iface.uniform("u_sampler").unwrap();
        assert_eq!(u_sampler.location.group, TEXTURE_UNIT);
        assert_eq!(sampler.binding, u_sampler.location.binding);
        assert!(matches!(sampler.ty, wgpu::BindingType::Sampler(_)));
    }
}
