//! GPU-Export: rendert das verformte Bild in eine eigene Texture und liest sie zurück.
//!
//! Nutzt dasselbe Device wie der Bildschirm-Renderer, aber eigene Pipeline,
//! Buffer und Ziel-Texture. Der Bildschirm-Zustand bleibt unberührt.

use super::mesh_renderer::{
    create_mesh_bind_group, create_mesh_bind_group_layout, create_mesh_pipeline,
};
use super::texture::{create_clamped_sampler, create_texture_from_rgba, padded_bytes_per_row};
use super::types::{build_mesh_vertices, RenderOptions, RenderTarget, Uniforms};
use crate::core::Camera2D;
use crate::shared::{ExportError, ExportJob, OffscreenRasterizer, RasterImage, RowOrder};
use eframe::wgpu;
use wgpu::util::DeviceExt;

/// Zielformat des Exports; sRGB wie die Quell-Texture.
const EXPORT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Offscreen-Rasterisierer auf der GPU.
pub struct GpuExporter {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
}

impl GpuExporter {
    /// Erstellt Pipeline und Sampler für den Export.
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Export Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });
        let bind_group_layout = create_mesh_bind_group_layout(&device);
        // Größe ist für Pipeline-Zustand ohne Belang
        let pipeline = create_mesh_pipeline(
            &device,
            &shader,
            &bind_group_layout,
            EXPORT_FORMAT,
            RenderTarget::Offscreen {
                width: 1,
                height: 1,
            },
        );
        let sampler = create_clamped_sampler(&device, "Export Sampler");

        Self {
            device,
            queue,
            pipeline,
            bind_group_layout,
            sampler,
        }
    }

    fn check_limits(&self, width: u32, height: u32) -> Result<(), ExportError> {
        let limits = self.device.limits();
        let max = limits.max_texture_dimension_2d;
        if width > max || height > max {
            return Err(ExportError::TargetTooLarge { width, height, max });
        }
        let buffer_size = padded_bytes_per_row(width) as u64 * height as u64;
        if buffer_size > limits.max_buffer_size {
            return Err(ExportError::TargetTooLarge { width, height, max });
        }
        Ok(())
    }
}

impl OffscreenRasterizer for GpuExporter {
    fn rasterize(&mut self, job: &ExportJob) -> Result<RasterImage, ExportError> {
        let (width, height) = (job.plan.width, job.plan.height);
        self.check_limits(width, height)?;
        let options = RenderOptions::export(job.plan.projection);
        let view_proj = options.view_projection(&Camera2D::new(), [width as f32, height as f32]);

        log::info!("GPU-Export: {}x{} Pixel", width, height);

        let extent = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let target = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Export Target"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: EXPORT_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let target_view = target.create_view(&wgpu::TextureViewDescriptor::default());

        let (source_texture, _) = create_texture_from_rgba(
            &self.device,
            &self.queue,
            job.image.pixels(),
            "Export Source Texture",
        );
        let uniform_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Export Uniform Buffer"),
                contents: bytemuck::cast_slice(&[Uniforms::new(view_proj)]),
                usage: wgpu::BufferUsages::UNIFORM,
            });
        let bind_group = create_mesh_bind_group(
            &self.device,
            &self.bind_group_layout,
            &uniform_buffer,
            &source_texture,
            &self.sampler,
        );

        let vertices = build_mesh_vertices(&job.deformed, job.mesh.uvs());
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Export Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Export Index Buffer"),
                contents: bytemuck::cast_slice(job.mesh.indices()),
                usage: wgpu::BufferUsages::INDEX,
            });

        let padded_row = padded_bytes_per_row(width);
        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Export Readback Buffer"),
            size: padded_row as u64 * height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Export Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Export Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target_view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: options.clear.load_op(),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &bind_group, &[]);
            pass.set_vertex_buffer(0, vertex_buffer.slice(..));
            pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..job.mesh.indices().len() as u32, 0, 0..1);
        }

        encoder.copy_texture_to_buffer(
            target.as_image_copy(),
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(height),
                },
            },
            extent,
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .map_err(|e| ExportError::Gpu(format!("{e:?}")))?;
        match rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(ExportError::Gpu(format!("Readback fehlgeschlagen: {e:?}")));
            }
            Err(e) => {
                return Err(ExportError::Gpu(format!("Readback-Kanal getrennt: {e}")));
            }
        }

        let pixels = {
            let mapped = slice.get_mapped_range();
            unpad_rows(&mapped, width, height, padded_row)
        };
        readback.unmap();

        RasterImage::new(width, height, pixels, RowOrder::TopDown)
    }
}

/// Entfernt das Zeilen-Padding eines ausgerichteten Readback-Puffers.
pub(crate) fn unpad_rows(padded: &[u8], width: u32, height: u32, padded_row: u32) -> Vec<u8> {
    let row = width as usize * 4;
    let mut pixels = Vec::with_capacity(row * height as usize);
    for y in 0..height as usize {
        let start = y * padded_row as usize;
        pixels.extend_from_slice(&padded[start..start + row]);
    }
    pixels
}
