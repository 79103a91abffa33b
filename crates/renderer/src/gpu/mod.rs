//! GPU orchestration for the fullscreen quad.
//!
//! The modules follow the dependency order of GPU object creation:
//! - `context` owns wgpu instance/adapter/device/surface wiring.
//! - `geometry` holds the static quad vertices and indices.
//! - `uniforms` defines the CPU mirrors of the size and time uniform blocks.
//! - `pipeline` reads the WGSL stages from disk and links them into a render
//!   pipeline plus the single bind group the fragment stage expects.
//! - `state` glues everything together and exposes the `GpuState` API used by
//!   `window`.

mod context;
mod geometry;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use state::GpuState;
