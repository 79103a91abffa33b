use anyhow::Result;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;

use crate::runtime::TimeSample;
use crate::types::RendererConfig;

use super::context::GpuContext;
use super::geometry::{QUAD_INDICES, QUAD_VERTICES};
use super::pipeline::{QuadPipeline, ShaderSources};
use super::uniforms::{SizeUniform, TimeUniform};

/// Owns every GPU resource needed to present a frame.
///
/// The layout mirrors the lifetime relationship between objects:
///
/// ```text
///   Window ─▶ Surface ─▶ Device ─▶ Queue
///                           │
///                           ├─▶ RenderPipeline + bind group
///                           ├─▶ Vertex / index buffers (write-once)
///                           └─▶ Size / time uniform buffers
/// ```
///
/// Everything except the time uniform buffer is write-once: created, filled,
/// and never touched again until the process exits.
pub(crate) struct GpuState {
    context: GpuContext,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    /// Owned so the bind group's size binding stays valid for the program's
    /// lifetime; never written after creation.
    _size_buffer: wgpu::Buffer,
    time_buffer: wgpu::Buffer,
    quad: QuadPipeline,
}

impl GpuState {
    /// Creates the full GPU pipeline targeting the supplied surface.
    ///
    /// Acquisition happens strictly before any buffer or pipeline creation,
    /// so a missing GPU fails startup before a single resource exists.
    pub(crate) fn new<T>(
        target: &T,
        initial_size: PhysicalSize<u32>,
        config: &RendererConfig,
    ) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let context = GpuContext::new(target, initial_size)?;

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad vertices"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad indices"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });

        let size_uniform = SizeUniform::new(context.size.width, context.size.height);
        let size_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("size uniform"),
                contents: bytemuck::bytes_of(&size_uniform),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let time_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("time uniform"),
            size: std::mem::size_of::<TimeUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sources = ShaderSources::load(&config.vertex_shader, &config.fragment_shader)?;
        let quad = QuadPipeline::new(
            &context.device,
            context.surface_format,
            &sources,
            &size_buffer,
            &time_buffer,
        );
        tracing::debug!(
            vertex = %config.vertex_shader.display(),
            fragment = %config.fragment_shader.display(),
            format = ?context.surface_format,
            "quad pipeline ready"
        );

        Ok(Self {
            context,
            vertex_buffer,
            index_buffer,
            _size_buffer: size_buffer,
            time_buffer,
            quad,
        })
    }

    pub(crate) fn size(&self) -> PhysicalSize<u32> {
        self.context.size
    }

    /// Encodes and submits one frame for the supplied time sample.
    ///
    /// One render pass, one indexed draw of 6 indices. The time write is
    /// enqueued before this frame's submit, so the draw always reads this
    /// tick's value.
    pub(crate) fn render(&mut self, sample: TimeSample) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("frame encoder"),
                });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quad pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.quad.pipeline);
            render_pass.set_viewport(
                0.0,
                0.0,
                self.context.size.width as f32,
                self.context.size.height as f32,
                0.0,
                1.0,
            );
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.set_bind_group(0, &self.quad.bind_group, &[]);
            render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
        }

        let time_uniform = TimeUniform::new(sample.seconds);
        self.context
            .queue
            .write_buffer(&self.time_buffer, 0, bytemuck::bytes_of(&time_uniform));
        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
