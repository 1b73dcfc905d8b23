//! Rendering-Typen und Konfiguration.

use crate::core::Camera2D;
use crate::shared::EditorOptions;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// View-Projection des aktuellen Frames
    pub view_proj: Mat4,
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

/// Vertex des Bildgitters: verformte Position + Texturkoordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position im 2D-Raum (Weltkoordinaten, z entfällt)
    pub position: [f32; 2],
    /// Texturkoordinate, v = 0 oben
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Vertex für Overlay-Geometrie (Kurvenlinie + Kontrollpunkte).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct OverlayVertex {
    /// Position im 2D-Raum
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl OverlayVertex {
    /// Erstellt einen neuen OverlayVertex.
    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// x = Deckkraft des Bildes, Rest reserviert
    pub params: [f32; 4],
}

impl Uniforms {
    /// Uniforms mit voller Deckkraft.
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            params: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Berechnet die View-Projection-Matrix für den 2D-Viewport.
pub(crate) fn build_view_projection(camera: &Camera2D, viewport_size: [f32; 2]) -> Mat4 {
    camera.projection(Vec2::from_array(viewport_size))
}

/// Herkunft der Projektionsmatrix eines Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Kamera-Projektion passend zur Viewport-Größe
    Viewport,
    /// Fest vorgegebene Matrix (Export-Ausschnitt)
    Override(Mat4),
}

/// Verhalten des Farbziels zu Beginn eines Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearMode {
    /// Inhalt behalten (egui hat den Pass bereits geöffnet)
    Keep,
    /// Mit Farbe (RGBA, linear) löschen
    Color([f32; 4]),
    /// Vollständig transparent löschen
    Transparent,
}

impl ClearMode {
    /// Load-Operation für eine Color-Attachment.
    pub fn load_op(self) -> eframe::wgpu::LoadOp<eframe::wgpu::Color> {
        use eframe::wgpu::{Color, LoadOp};
        match self {
            ClearMode::Keep => LoadOp::Load,
            ClearMode::Color([r, g, b, a]) => LoadOp::Clear(Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            }),
            ClearMode::Transparent => LoadOp::Clear(Color::TRANSPARENT),
        }
    }
}

/// Einstellungen eines einzelnen Render-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub projection: Projection,
    pub clear: ClearMode,
    /// Kurvenlinie und Kontrollpunkte zeichnen
    pub show_overlays: bool,
}

impl RenderOptions {
    /// Bildschirm: Kamera-Projektion, Overlays an.
    pub fn screen() -> Self {
        Self {
            projection: Projection::Viewport,
            clear: ClearMode::Keep,
            show_overlays: true,
        }
    }

    /// Export: feste Projektion, transparenter Hintergrund, keine Overlays.
    pub fn export(projection: Mat4) -> Self {
        Self {
            projection: Projection::Override(projection),
            clear: ClearMode::Transparent,
            show_overlays: false,
        }
    }

    /// Löst die Projektion für Kamera und Viewport auf.
    pub fn view_projection(&self, camera: &Camera2D, viewport_size: [f32; 2]) -> Mat4 {
        match self.projection {
            Projection::Viewport => build_view_projection(camera, viewport_size),
            Projection::Override(matrix) => matrix,
        }
    }
}

/// Ziel eines Render-Durchlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Render-Pass des egui-Paint-Callbacks
    Screen,
    /// Eigene RGBA8-Texture
    Offscreen { width: u32, height: u32 },
}

impl RenderTarget {
    /// Multisampling muss zum egui-Pass passen; offscreen wird einfach abgetastet.
    pub fn sample_count(self) -> u32 {
        match self {
            RenderTarget::Screen => 4,
            RenderTarget::Offscreen { .. } => 1,
        }
    }

    /// Bildschirm blendet über den Hintergrund, Export übernimmt Alpha unverändert.
    pub fn blend(self) -> eframe::wgpu::BlendState {
        match self {
            RenderTarget::Screen => eframe::wgpu::BlendState::ALPHA_BLENDING,
            RenderTarget::Offscreen { .. } => eframe::wgpu::BlendState::REPLACE,
        }
    }
}

/// Baut die Gitter-Vertices aus verformten Positionen und UVs.
///
/// Beide Slices müssen gleich lang sein; überzählige Einträge werden ignoriert.
pub fn build_mesh_vertices(
    positions: &[crate::core::Vector3],
    uvs: &[[f32; 2]],
) -> Vec<MeshVertex> {
    positions
        .iter()
        .zip(uvs)
        .map(|(position, uv)| MeshVertex {
            position: [position.x, position.y],
            uv: *uv,
        })
        .collect()
}
