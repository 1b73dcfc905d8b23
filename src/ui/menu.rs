//! Top-Menü (File, Edit).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Image...").clicked() {
                    events.push(AppIntent::OpenImageRequested);
                    ui.close();
                }
                if ui.button("Load Random Image").clicked() {
                    events.push(AppIntent::RandomImageRequested);
                    ui.close();
                }

                // Ohne Bild bleibt der Eintrag aktiv; der Export meldet dann den Hinweis
                if ui.button("Save as PNG...").clicked() {
                    events.push(AppIntent::ExportRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Add Control Point").clicked() {
                    events.push(AppIntent::AddControlPointRequested);
                    ui.close();
                }

                let can_remove =
                    state.config.control_points().len() > crate::core::MIN_CONTROL_POINTS;
                if ui
                    .add_enabled(can_remove, egui::Button::new("Remove Last Control Point"))
                    .clicked()
                {
                    events.push(AppIntent::RemoveControlPointRequested);
                    ui.close();
                }

                if ui.button("Reset Curve").clicked() {
                    events.push(AppIntent::ResetControlPointsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Options...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
