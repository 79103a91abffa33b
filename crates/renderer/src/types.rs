use std::path::PathBuf;

/// Surface size used when the caller does not override it: 800×600 physical
/// pixels, matching the fixed output area the shaders are written against.
pub const DEFAULT_SURFACE_SIZE: (u32, u32) = (800, 600);

/// Immutable configuration passed to the renderer at start-up.
///
/// `RendererConfig` mirrors CLI flags and tells the renderer which shader
/// stages to compile and how large the target surface is.
#[derive(Clone, Debug)]
pub struct RendererConfig {
    /// Window size in physical pixels.
    pub surface_size: (u32, u32),
    /// Path to the WGSL vertex stage source.
    pub vertex_shader: PathBuf,
    /// Path to the WGSL fragment stage source.
    pub fragment_shader: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            surface_size: DEFAULT_SURFACE_SIZE,
            vertex_shader: PathBuf::from("shaders/vertex.wgsl"),
            fragment_shader: PathBuf::from("shaders/fragment.wgsl"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_fixed_surface() {
        let config = RendererConfig::default();
        assert_eq!(config.surface_size, (800, 600));
        assert_eq!(config.vertex_shader, PathBuf::from("shaders/vertex.wgsl"));
        assert_eq!(
            config.fragment_shader,
            PathBuf::from("shaders/fragment.wgsl")
        );
    }
}
