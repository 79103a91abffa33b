use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "quadwave",
    author,
    version,
    about = "Animated fullscreen-quad shader viewer"
)]
pub struct Cli {
    /// Path to the WGSL vertex stage source.
    #[arg(long, value_name = "PATH", default_value = "shaders/vertex.wgsl")]
    pub vertex_shader: PathBuf,

    /// Path to the WGSL fragment stage source.
    #[arg(long, value_name = "PATH", default_value = "shaders/fragment.wgsl")]
    pub fragment_shader: PathBuf,
}

pub fn parse() -> Cli {
    Cli::parse()
}
