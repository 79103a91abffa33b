use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use tracing::{debug, error};

use crate::gpu::GpuState;
use crate::runtime::{FrameLoop, SystemTimeSource};
use crate::types::RendererConfig;

/// Aggregates the GPU state and frame-loop driver for the window path.
struct WindowState {
    window: Arc<Window>,
    gpu: GpuState,
    frame_loop: FrameLoop,
}

impl WindowState {
    fn new(window: Arc<Window>, config: &RendererConfig) -> Result<Self> {
        let size = window.inner_size();
        let gpu = GpuState::new(window.as_ref(), size, config)?;
        let frame_loop = FrameLoop::new(Box::new(SystemTimeSource::new()));

        Ok(Self {
            window,
            gpu,
            frame_loop,
        })
    }

    fn window(&self) -> &Window {
        self.window.as_ref()
    }

    fn size(&self) -> PhysicalSize<u32> {
        self.gpu.size()
    }

    fn render_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.frame_loop.tick(&mut self.gpu)
    }

    fn request_stop(&mut self) {
        self.frame_loop.request_stop();
    }

    fn should_stop(&self) -> bool {
        self.frame_loop.should_stop()
    }

    fn frames_rendered(&self) -> u64 {
        self.frame_loop.frames_rendered()
    }
}

/// Opens the window and drives the `winit` event loop.
///
/// A `WindowState` is created up-front and stored inside the event loop
/// closure. Each `RedrawRequested` renders exactly one frame; `AboutToWait`
/// re-requests a redraw so the loop runs at the display's refresh cadence
/// until the stop flag is set.
pub(crate) fn run(config: &RendererConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize event loop")?;
    let window_size = PhysicalSize::new(config.surface_size.0, config.surface_size.1);
    let window = WindowBuilder::new()
        .with_title("quadwave")
        .with_inner_size(window_size)
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;
    let window = Arc::new(window);

    let mut state = WindowState::new(window.clone(), config)?;
    state.window().request_redraw();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::WindowEvent { window_id, event } if window_id == state.window().id() => {
                    match event {
                        WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                            debug!(frames = state.frames_rendered(), "window closed; stopping");
                            state.request_stop();
                            elwt.exit();
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            // Hold the surface at its fixed size.
                            let _ = inner_size_writer.request_inner_size(state.size());
                        }
                        WindowEvent::RedrawRequested => {
                            if let Err(err) = state.render_frame() {
                                error!("frame submission failed: {err}");
                                state.request_stop();
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if state.should_stop() {
                        elwt.exit();
                    } else {
                        state.window().request_redraw();
                    }
                }
                _ => {}
            }
        })
        .map_err(|err| anyhow!("event loop error: {err}"))
}
