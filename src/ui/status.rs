//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.image_dimensions() {
                Some((w, h)) => ui.label(format!("Image: {}x{}", w, h)),
                None => ui.label("No image loaded"),
            };

            ui.separator();

            ui.label(format!(
                "Resolution: {} | Intensity: {:.2} | Height: {:.2}",
                state.config.resolution(),
                state.config.warp_intensity(),
                state.config.height_scale()
            ));

            ui.separator();

            ui.label(format!(
                "Offset: {:.2} | Length: {:.2}",
                state.config.path_offset(),
                state.config.image_length_ratio()
            ));

            if let Some(source) = &state.ui.loading_source {
                ui.separator();
                ui.label(format!("Lade {}...", source.display_name()));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
