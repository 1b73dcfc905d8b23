//! Steuer-Panel (rechte Seitenleiste) für Bild, Warp-Parameter und Export.

use crate::app::{AppIntent, AppState};

/// Slider-Bereiche der Oberfläche (enger als die Klemmgrenzen der Konfiguration).
const RESOLUTION_RANGE: std::ops::RangeInclusive<u32> = 10..=150;
const WARP_INTENSITY_RANGE: std::ops::RangeInclusive<f32> = 0.0..=3.0;
const HEIGHT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.2..=2.0;
const IMAGE_LENGTH_RANGE: std::ops::RangeInclusive<f32> = 0.1..=1.0;

/// Rendert das Steuer-Panel und gibt erzeugte Events zurück.
pub fn render_controls_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("controls_panel")
        .default_width(260.0)
        .min_width(200.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Curve Warp");
            ui.separator();

            render_image_section(ui, state, &mut events);
            ui.separator();
            render_warp_sliders(ui, state, &mut events);
            ui.separator();
            render_curve_section(ui, state, &mut events);
            ui.separator();

            let save = egui::Button::new(egui::RichText::new("Save as PNG").strong())
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(save).clicked() {
                events.push(AppIntent::ExportRequested);
            }
        });

    events
}

fn render_image_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Image");
    match state.config.image_source() {
        Some(source) => {
            ui.label(source.display_name());
        }
        None => {
            ui.label(egui::RichText::new("No image loaded").weak());
        }
    }
    if let Some((w, h)) = state.image_dimensions() {
        ui.label(format!("{} x {} px", w, h));
    }

    ui.horizontal(|ui| {
        if ui.button("Choose File...").clicked() {
            events.push(AppIntent::OpenImageRequested);
        }
        if ui
            .button("Load Random Image")
            .on_hover_text(&state.options.random_image_url)
            .clicked()
        {
            events.push(AppIntent::RandomImageRequested);
        }
        if state.image_loader.is_pending() {
            ui.spinner();
        }
    });
}

fn render_warp_sliders(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let config = &state.config;

    let mut resolution = config.resolution();
    if ui
        .add(egui::Slider::new(&mut resolution, RESOLUTION_RANGE).text("Mesh Resolution"))
        .changed()
    {
        events.push(AppIntent::ResolutionChanged { value: resolution });
    }

    let mut warp_intensity = config.warp_intensity();
    if ui
        .add(
            egui::Slider::new(&mut warp_intensity, WARP_INTENSITY_RANGE)
                .step_by(0.05)
                .text("Warp Intensity"),
        )
        .changed()
    {
        events.push(AppIntent::WarpIntensityChanged {
            value: warp_intensity,
        });
    }

    let mut height_scale = config.height_scale();
    if ui
        .add(
            egui::Slider::new(&mut height_scale, HEIGHT_SCALE_RANGE)
                .step_by(0.05)
                .text("Height Scale"),
        )
        .changed()
    {
        events.push(AppIntent::HeightScaleChanged {
            value: height_scale,
        });
    }

    let mut image_length = config.image_length_ratio();
    if ui
        .add(
            egui::Slider::new(&mut image_length, IMAGE_LENGTH_RANGE)
                .step_by(0.01)
                .text("Image Length"),
        )
        .changed()
    {
        events.push(AppIntent::ImageLengthRatioChanged {
            value: image_length,
        });
    }

    // Obergrenze hängt vom Längenanteil ab
    let mut path_offset = config.path_offset();
    let max_offset = config.max_path_offset();
    let slider = egui::Slider::new(&mut path_offset, 0.0..=max_offset)
        .step_by(0.01)
        .text("Image Shift");
    if ui.add_enabled(max_offset > 0.0, slider).changed() {
        events.push(AppIntent::PathOffsetChanged { value: path_offset });
    }
}

fn render_curve_section(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let count = state.config.control_points().len();
    ui.label(format!("Control Points: {}", count));
    ui.horizontal(|ui| {
        if ui.button("+").on_hover_text("Add control point").clicked() {
            events.push(AppIntent::AddControlPointRequested);
        }
        if ui
            .add_enabled(count > crate::core::MIN_CONTROL_POINTS, egui::Button::new("−"))
            .on_hover_text("Remove last control point")
            .clicked()
        {
            events.push(AppIntent::RemoveControlPointRequested);
        }
        if ui.button("Reset").clicked() {
            events.push(AppIntent::ResetControlPointsRequested);
        }
    });
}
