//! Optionen-Dialog für Ansicht, Hit-Tests, Overlays und Export.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Ansicht ─────────────────────────────────────
                    ui.collapsing("Ansicht", |ui| {
                        changed |= drag_value(
                            ui,
                            "Sichtbare Höhe:",
                            &mut opts.view_height,
                            0.5..=20.0,
                            0.05,
                        );
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.viewport_clear_color);
                    });

                    // ── Gitter ──────────────────────────────────────
                    ui.collapsing("Gitter", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Zeilen:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.mesh_height_segments)
                                        .range(1..=64),
                                )
                                .changed();
                        });
                    });

                    // ── Hit-Tests ───────────────────────────────────
                    ui.collapsing("Hit-Tests", |ui| {
                        changed |= drag_value(
                            ui,
                            "Punkt-Radius:",
                            &mut opts.control_point_hit_radius,
                            0.01..=1.0,
                            0.005,
                        );
                        changed |= drag_value(
                            ui,
                            "Band-Faktor:",
                            &mut opts.band_threshold_factor,
                            0.1..=5.0,
                            0.05,
                        );
                        changed |= drag_value(
                            ui,
                            "Band-Zuschlag:",
                            &mut opts.band_threshold_slack,
                            0.0..=1.0,
                            0.01,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Band-Abtastung:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.band_samples).range(10..=1000))
                                .changed();
                        });
                    });

                    // ── Overlays ────────────────────────────────────
                    ui.collapsing("Overlays", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Kurven-Segmente:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.curve_divisions)
                                        .range(10..=1000),
                                )
                                .changed();
                        });
                        changed |= drag_value(
                            ui,
                            "Linienstärke:",
                            &mut opts.curve_thickness_world,
                            0.001..=0.2,
                            0.001,
                        );
                        changed |= color_edit(ui, "Kurvenfarbe:", &mut opts.curve_color);
                        changed |= drag_value(
                            ui,
                            "Marker-Radius:",
                            &mut opts.marker_radius_world,
                            0.01..=0.5,
                            0.005,
                        );
                        changed |= color_edit(ui, "Marker:", &mut opts.marker_color);
                        changed |= color_edit(ui, "Marker (aktiv):", &mut opts.marker_color_active);
                    });

                    // ── Export ──────────────────────────────────────
                    ui.collapsing("Export", |ui| {
                        changed |= drag_value(
                            ui,
                            "Rand (Anteil):",
                            &mut opts.export_padding_fraction,
                            0.0..=0.5,
                            0.005,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Min. lange Seite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.export_min_long_side)
                                        .range(256..=16384)
                                        .speed(16.0),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Max. Seite (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.export_max_dimension)
                                        .range(256..=65536)
                                        .speed(64.0),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Beschriftetes DragValue für f32-Optionen.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
