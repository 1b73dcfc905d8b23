//! egui-Paint-Callback: Upload in `prepare`, Zeichnen in `paint`.

use super::Renderer;
use crate::shared::RenderScene;
use eframe::egui_wgpu;
use std::sync::{Arc, Mutex};

/// Render-Daten für den wgpu Callback
pub struct WgpuRenderData {
    /// Die Render-Szene für diesen Frame
    pub scene: RenderScene,
}

/// Verbindet den geteilten Renderer mit einem egui-Frame.
pub struct WgpuRenderCallback {
    pub renderer: Arc<Mutex<Renderer>>,
    pub render_data: WgpuRenderData,
}

impl egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        match self.renderer.lock() {
            Ok(mut renderer) => renderer.prepare_scene(device, queue, &self.render_data.scene),
            Err(_) => log::error!("Renderer-Lock vergiftet, Upload übersprungen"),
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &egui_wgpu::CallbackResources,
    ) {
        match self.renderer.lock() {
            Ok(renderer) => renderer.paint(render_pass),
            Err(_) => log::error!("Renderer-Lock vergiftet, Frame übersprungen"),
        }
    }
}
