use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};

use super::geometry::QuadVertex;

/// Vertex and fragment stage sources, read from disk at startup.
#[derive(Debug)]
pub(crate) struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub(crate) fn load(vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        let vertex = std::fs::read_to_string(vertex_path).with_context(|| {
            format!("failed to read vertex shader at {}", vertex_path.display())
        })?;
        let fragment = std::fs::read_to_string(fragment_path).with_context(|| {
            format!(
                "failed to read fragment shader at {}",
                fragment_path.display()
            )
        })?;
        Ok(Self { vertex, fragment })
    }
}

/// The compiled quad pipeline and the bind group feeding its uniforms.
pub(crate) struct QuadPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group: wgpu::BindGroup,
}

impl QuadPipeline {
    /// Compiles both stages and links them against the surface format.
    ///
    /// The pipeline layout is left to shader reflection (`layout: None`), so
    /// the bind group layout below is exactly what the fragment stage
    /// declares: binding 0 the size uniform, binding 1 the time uniform.
    /// Invalid shader source surfaces through wgpu's uncaptured-error path
    /// and aborts startup.
    pub(crate) fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        sources: &ShaderSources,
        size_buffer: &wgpu::Buffer,
        time_buffer: &wgpu::Buffer,
    ) -> Self {
        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quad vertex"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(sources.vertex.as_str())),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quad fragment"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(sources.fragment.as_str())),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quad pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("main"),
                buffers: &[QuadVertex::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
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
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some("main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview: None,
            cache: None,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quad uniforms"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: size_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: time_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            pipeline,
            bind_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    use wgpu::naga;

    fn bundled_shader_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../shaders")
            .join(name)
    }

    fn validated_module(source: &str) -> naga::Module {
        let module = naga::front::wgsl::parse_str(source).expect("shader parses as WGSL");
        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        );
        validator.validate(&module).expect("shader validates");
        module
    }

    #[test]
    fn load_reads_both_stages() {
        let dir = tempfile::tempdir().unwrap();
        let vertex_path = dir.path().join("vertex.wgsl");
        let fragment_path = dir.path().join("fragment.wgsl");
        fs::write(&vertex_path, "// vertex").unwrap();
        fs::write(&fragment_path, "// fragment").unwrap();

        let sources = ShaderSources::load(&vertex_path, &fragment_path).unwrap();
        assert_eq!(sources.vertex, "// vertex");
        assert_eq!(sources.fragment, "// fragment");
    }

    #[test]
    fn load_names_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let vertex_path = dir.path().join("missing.wgsl");
        let fragment_path = dir.path().join("fragment.wgsl");
        fs::write(&fragment_path, "// fragment").unwrap();

        let err = ShaderSources::load(&vertex_path, &fragment_path).unwrap_err();
        let message = format!("{err}");
        assert!(message.contains("failed to read vertex shader"));
        assert!(message.contains("missing.wgsl"));
    }

    #[test]
    fn bundled_vertex_stage_has_main_entry() {
        let source = fs::read_to_string(bundled_shader_path("vertex.wgsl")).unwrap();
        let module = validated_module(&source);

        let entry = module
            .entry_points
            .iter()
            .find(|entry| entry.stage == naga::ShaderStage::Vertex)
            .expect("vertex entry point");
        assert_eq!(entry.name, "main");
    }

    #[test]
    fn bundled_fragment_stage_declares_uniform_contract() {
        let source = fs::read_to_string(bundled_shader_path("fragment.wgsl")).unwrap();
        let module = validated_module(&source);

        let entry = module
            .entry_points
            .iter()
            .find(|entry| entry.stage == naga::ShaderStage::Fragment)
            .expect("fragment entry point");
        assert_eq!(entry.name, "main");

        let mut bindings: Vec<(u32, u32)> = module
            .global_variables
            .iter()
            .filter(|(_, var)| var.space == naga::AddressSpace::Uniform)
            .filter_map(|(_, var)| var.binding.as_ref())
            .map(|binding| (binding.group, binding.binding))
            .collect();
        bindings.sort_unstable();
        assert_eq!(bindings, vec![(0, 0), (0, 1)]);
    }
}
