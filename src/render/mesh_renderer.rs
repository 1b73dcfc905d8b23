//! Mesh-Renderer für das verformte Bildgitter.

use super::texture::{create_clamped_sampler, create_texture_from_rgba};
use super::types::{build_mesh_vertices, MeshVertex, RenderContext, RenderTarget, Uniforms};
use crate::core::SourceImage;
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};
use wgpu::util::DeviceExt;

/// Bind-Group-Layout für Uniforms, Bild-Texture und Sampler (group(0)).
pub(crate) fn create_mesh_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Mesh Bind Group Layout"),
        entries: &[
            // Uniforms
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            // Texture
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            // Sampler
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Bind-Group aus Uniform-Buffer, Texture und Sampler.
pub(crate) fn create_mesh_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    texture: &wgpu::Texture,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Mesh Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(
                    &texture.create_view(&wgpu::TextureViewDescriptor::default()),
                ),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

/// Pipeline für texturierte Dreiecke.
///
/// Bildschirm und Export teilen den Aufbau; Multisampling und Blending
/// kommen aus dem `RenderTarget`.
pub(crate) fn create_mesh_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
    target: RenderTarget,
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Mesh Pipeline Layout"),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Mesh Pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_mesh"),
            buffers: &[MeshVertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_mesh"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(target.blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Bei starker Krümmung kippen Dreiecke; beide Seiten zeichnen
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: target.sample_count(),
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}

/// Renderer für das texturierte, verformte Bildgitter.
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,

    bind_group: Option<wgpu::BindGroup>,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
    mesh_generation: Option<u64>,
    /// Ob `prepare` für den aktuellen Frame ein zeichenbares Gitter hochgeladen hat
    ready: bool,
}

impl MeshRenderer {
    /// Erstellt einen neuen Mesh-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Mesh Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = create_mesh_bind_group_layout(device);
        let pipeline = create_mesh_pipeline(
            device,
            shader,
            &bind_group_layout,
            render_state.target_format,
            RenderTarget::Screen,
        );
        let sampler = create_clamped_sampler(device, "Mesh Sampler");

        Self {
            pipeline,
            bind_group_layout,
            uniform_buffer,
            sampler,
            bind_group: None,
            vertex_buffer: None,
            vertex_capacity: 0,
            index_buffer: None,
            index_count: 0,
            mesh_generation: None,
            ready: false,
        }
    }

    /// Lädt ein neues Bild hoch und ersetzt die bisherige Texture.
    pub fn set_image(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, image: &SourceImage) {
        let (texture, _) =
            create_texture_from_rgba(device, queue, image.pixels(), "Source Image Texture");
        let bind_group = create_mesh_bind_group(
            device,
            &self.bind_group_layout,
            &self.uniform_buffer,
            &texture,
            &self.sampler,
        );
        self.bind_group = Some(bind_group);

        let (width, height) = image.dimensions();
        log::info!("MeshRenderer: Bild-Texture geladen ({}x{})", width, height);
    }

    /// Lädt Uniforms und Vertices der Szene hoch.
    ///
    /// Der Index-Buffer wird nur bei neuer Gitter-Generation hochgeladen,
    /// die Vertices jeden Frame.
    pub fn prepare(&mut self, ctx: &RenderContext, scene: &RenderScene) {
        self.ready = false;
        if !scene.has_mesh() || self.bind_group.is_none() {
            return;
        }
        let Some(mesh) = scene.mesh.as_deref() else {
            return;
        };

        if self.mesh_generation != Some(scene.mesh_generation) || self.index_buffer.is_none() {
            self.index_buffer = Some(ctx.device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("Mesh Index Buffer"),
                    contents: bytemuck::cast_slice(mesh.indices()),
                    usage: wgpu::BufferUsages::INDEX,
                },
            ));
            self.index_count = mesh.indices().len() as u32;
            self.mesh_generation = Some(scene.mesh_generation);
        }

        let vertices = build_mesh_vertices(&scene.deformed_positions, mesh.uvs());
        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            let vertex_size = std::mem::size_of::<MeshVertex>() as u64;
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Mesh Vertex Buffer"),
                size: vertices.len() as u64 * vertex_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        ctx.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms::new(ctx.view_proj)]),
        );
        if let Some(vertex_buffer) = &self.vertex_buffer {
            ctx.queue
                .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));
            self.ready = true;
        }

        log::trace!("MeshRenderer: {} Dreiecke vorbereitet", mesh.triangle_count());
    }

    /// Zeichnet das zuletzt vorbereitete Gitter.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        if !self.ready {
            return;
        }
        let (Some(vertex_buffer), Some(index_buffer), Some(bind_group)) = (
            self.vertex_buffer.as_ref(),
            self.index_buffer.as_ref(),
            self.bind_group.as_ref(),
        ) else {
            return;
        };

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
