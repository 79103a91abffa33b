use anyhow::Result;
use renderer::{Renderer, RendererConfig, DEFAULT_SURFACE_SIZE};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let config = RendererConfig {
        surface_size: DEFAULT_SURFACE_SIZE,
        vertex_shader: cli.vertex_shader,
        fragment_shader: cli.fragment_shader,
    };

    tracing::info!(
        width = config.surface_size.0,
        height = config.surface_size.1,
        vertex = %config.vertex_shader.display(),
        fragment = %config.fragment_shader.display(),
        "starting quadwave renderer"
    );

    let mut renderer = Renderer::new(config);
    renderer.run()
}
