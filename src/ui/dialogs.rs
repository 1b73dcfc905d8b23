//! Datei-Dialoge und modale Fenster.

use crate::app::{AppIntent, UiState};
use crate::shared::EXPORT_DEFAULT_FILE_NAME;

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Bild-Öffnen-Dialog
    if ui_state.show_image_dialog {
        ui_state.show_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            events.push(AppIntent::ImageFileSelected { path });
        }
    }

    // PNG-Speichern-Dialog
    if ui_state.show_export_dialog {
        ui_state.show_export_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(EXPORT_DEFAULT_FILE_NAME)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected { path });
        }
    }

    events
}

/// Zeigt eine blockierende Meldung als modales Fenster.
pub fn show_notice(ctx: &egui::Context, notice: Option<&str>) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = notice else {
        return events;
    };

    egui::Window::new("Hinweis")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    events.push(AppIntent::NoticeDismissed);
                }
            });
        });

    events
}
