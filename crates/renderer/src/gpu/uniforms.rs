use bytemuck::{Pod, Zeroable};

/// CPU mirror of the size uniform at binding 0: surface width and height in
/// pixels. Written once at startup and never again.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct SizeUniform {
    pub size: [u32; 2],
}

impl SizeUniform {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width, height],
        }
    }
}

/// CPU mirror of the time uniform at binding 1: elapsed seconds. The only
/// mutable GPU state in the renderer; rewritten every frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub(crate) struct TimeUniform {
    pub seconds: f32,
}

impl TimeUniform {
    pub(crate) fn new(seconds: f32) -> Self {
        Self { seconds }
    }
}
