//! Overlay-Renderer für Kurvenlinie und Kontrollpunkt-Marker.

use super::types::{OverlayVertex, RenderContext, RenderTarget, Uniforms};
use crate::core::Vector3;
use crate::shared::{EditorOptions, RenderScene};
use eframe::{egui_wgpu, wgpu};
use glam::Vec2;

/// Hängt ein Linien-Quad (zwei Dreiecke) zwischen `start` und `end` an.
pub(crate) fn push_line_quad(
    vertices: &mut Vec<OverlayVertex>,
    start: Vec2,
    end: Vec2,
    thickness: f32,
    color: [f32; 4],
) {
    let delta = end - start;
    let length = delta.length();
    if length < f32::EPSILON {
        return;
    }
    let normal = Vec2::new(-delta.y, delta.x) / length * (thickness * 0.5);

    let a = start + normal;
    let b = start - normal;
    let c = end - normal;
    let d = end + normal;

    vertices.extend_from_slice(&[
        OverlayVertex::new(a, color),
        OverlayVertex::new(b, color),
        OverlayVertex::new(c, color),
        OverlayVertex::new(a, color),
        OverlayVertex::new(c, color),
        OverlayVertex::new(d, color),
    ]);
}

/// Hängt einen gefüllten Kreis als Dreiecksfächer an.
pub(crate) fn push_disc(
    vertices: &mut Vec<OverlayVertex>,
    center: Vec2,
    radius: f32,
    segments: u32,
    color: [f32; 4],
) {
    let segments = segments.max(3);
    let step = std::f32::consts::TAU / segments as f32;
    for i in 0..segments {
        let a0 = i as f32 * step;
        let a1 = (i + 1) as f32 * step;
        vertices.extend_from_slice(&[
            OverlayVertex::new(center, color),
            OverlayVertex::new(center + Vec2::from_angle(a0) * radius, color),
            OverlayVertex::new(center + Vec2::from_angle(a1) * radius, color),
        ]);
    }
}

/// Baut die komplette Overlay-Geometrie: erst die Linie, darüber die Marker.
pub fn build_overlay_vertices(
    polyline: &[Vector3],
    control_points: &[Vector3],
    active: Option<usize>,
    options: &EditorOptions,
) -> Vec<OverlayVertex> {
    let mut vertices = Vec::new();

    for pair in polyline.windows(2) {
        push_line_quad(
            &mut vertices,
            pair[0].truncate(),
            pair[1].truncate(),
            options.curve_thickness_world,
            options.curve_color,
        );
    }

    for (index, point) in control_points.iter().enumerate() {
        let color = if active == Some(index) {
            options.marker_color_active
        } else {
            options.marker_color
        };
        push_disc(
            &mut vertices,
            point.truncate(),
            options.marker_radius_world,
            options.marker_segments,
            color,
        );
    }

    vertices
}

/// Renderer für Kurvenlinie und Marker.
pub struct OverlayRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    /// Anzahl der im aktuellen Frame hochgeladenen Vertices
    vertex_count: u32,
}

impl OverlayRenderer {
    /// Erstellt einen neuen Overlay-Renderer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Overlay Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Overlay Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Overlay Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Overlay Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Overlay Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_overlay"),
                buffers: &[OverlayVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_overlay"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(RenderTarget::Screen.blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: RenderTarget::Screen.sample_count(),
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_count: 0,
        }
    }

    /// Baut Kurvenlinie und Kontrollpunkte und lädt sie hoch.
    pub fn prepare(&mut self, ctx: &RenderContext, scene: &RenderScene) {
        let vertices = build_overlay_vertices(
            &scene.curve_polyline,
            &scene.control_points,
            scene.active_control_point,
            ctx.options,
        );
        self.vertex_count = 0;
        if vertices.is_empty() {
            return;
        }

        ctx.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[Uniforms::new(ctx.view_proj)]),
        );

        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            let vertex_size = std::mem::size_of::<OverlayVertex>() as u64;
            self.vertex_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Overlay Vertex Buffer"),
                size: vertices.len() as u64 * vertex_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        if let Some(vertex_buffer) = &self.vertex_buffer {
            ctx.queue
                .write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));
            self.vertex_count = vertices.len() as u32;
        }
    }

    /// Zeichnet die zuletzt vorbereiteten Overlays.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        let Some(vertex_buffer) = &self.vertex_buffer else {
            return;
        };
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
