//! Renderer crate for quadwave.
//!
//! The crate glues a fixed-size preview window, the `wgpu` rendering
//! pipeline, and a pair of WGSL shader stages together. The overall flow is:
//!
//! ```text
//!   CLI / quadwave
//!          │ RendererConfig
//!          ▼
//!   Renderer::run ──▶ WindowState ──▶ winit event loop ──▶ FrameLoop::tick()
//!          ▲                                      │
//!          │                                      └─▶ GpuState::render() ─▶ time UBO + draw
//! ```
//!
//! `GpuState` owns every GPU resource (surface, device, quad geometry,
//! uniform buffers, pipeline), while `Renderer` is the thin entry point that
//! opens the window and hands control to the event loop. The time value fed
//! to the fragment shader is threaded explicitly through [`FrameLoop`] rather
//! than captured in closures, and the loop carries a stop flag so shutdown is
//! a state transition instead of a dropped callback.

mod gpu;
mod runtime;
mod types;
mod window;

pub use runtime::{
    seconds_from_millis, BoxedTimeSource, FixedTimeSource, SystemTimeSource, TimeSample,
    TimeSource,
};
pub use types::{RendererConfig, DEFAULT_SURFACE_SIZE};

use anyhow::Result;

/// Entry point that owns the renderer configuration.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Builds a renderer for the supplied configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Opens the window and drives the frame loop until the window closes.
    ///
    /// Returns an error if any startup step fails: no GPU adapter, no
    /// drawable surface, no device, or unreadable shader sources. Nothing is
    /// retried; the first failure aborts startup.
    pub fn run(&mut self) -> Result<()> {
        window::run(&self.config)
    }
}
