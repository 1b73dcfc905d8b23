//! GPU-Rendering mit wgpu.

mod callback;
mod fallback;
mod mesh_renderer;
mod offscreen;
mod overlay_renderer;
mod software;
mod texture;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub use fallback::FallbackRasterizer;
pub(crate) use mesh_renderer::MeshRenderer;
pub use offscreen::GpuExporter;
pub(crate) use overlay_renderer::OverlayRenderer;
pub use overlay_renderer::build_overlay_vertices;
pub use software::SoftwareRasterizer;
pub use types::{
    build_mesh_vertices, ClearMode, MeshVertex, OverlayVertex, Projection, RenderOptions,
    RenderTarget,
};
use types::RenderContext;

use crate::core::SourceImage;
use eframe::egui_wgpu;

/// Haupt-Renderer für Bildgitter und Overlays.
///
/// Verwaltet GPU-Buffer und Pipelines selbst und bietet
/// `new()`, `prepare_scene()` + `paint()` und `set_image()`.
pub struct Renderer {
    mesh_renderer: MeshRenderer,
    overlay_renderer: OverlayRenderer,
    frame_ready: bool,
    show_overlays: bool,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden, beide Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Curve Warp Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            mesh_renderer: MeshRenderer::new(render_state, &shader),
            overlay_renderer: OverlayRenderer::new(render_state, &shader),
            frame_ready: false,
            show_overlays: true,
        }
    }

    /// Lädt die Frame-Daten der Szene hoch (vor dem Render-Pass).
    pub fn prepare_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &RenderScene,
    ) {
        let [width, height] = scene.viewport_size;
        self.frame_ready =
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !self.frame_ready {
            return;
        }

        let render_options = RenderOptions::screen();
        let ctx = RenderContext {
            device,
            queue,
            view_proj: render_options.view_projection(&scene.camera, scene.viewport_size),
            options: &scene.options,
        };

        self.mesh_renderer.prepare(&ctx, scene);
        self.show_overlays = render_options.show_overlays;
        if self.show_overlays {
            self.overlay_renderer.prepare(&ctx, scene);
        }
    }

    /// Zeichnet erst das Bild, darüber Kurve und Marker.
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        if !self.frame_ready {
            return;
        }
        self.mesh_renderer.draw(render_pass);
        if self.show_overlays {
            self.overlay_renderer.draw(render_pass);
        }
    }

    /// Ersetzt die Bild-Texture.
    pub fn set_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &SourceImage,
    ) {
        self.mesh_renderer.set_image(device, queue, image);
    }
}
