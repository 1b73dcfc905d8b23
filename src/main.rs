//! Curve Warp Editor.
//!
//! Legt ein Bild entlang einer frei editierbaren Kurve und exportiert
//! das verformte Ergebnis als PNG. egui + wgpu.

use curve_warp_editor::app::use_cases;
use curve_warp_editor::app::RenderEvent;
use curve_warp_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use eframe::egui_wgpu;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

type ExportRasterizer = render::FallbackRasterizer<render::GpuExporter, render::SoftwareRasterizer>;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Curve Warp Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionales Startbild (Pfad oder URL) als erstes Argument
        let startup_arg = std::env::args_os().nth(1);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Curve Warp Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Warp Editor",
            options,
            Box::new(move |cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state, startup_arg)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: Arc<std::sync::Mutex<render::Renderer>>,
    exporter: ExportRasterizer,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
    pending_intents: Vec<AppIntent>,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState, startup_arg: Option<OsString>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let startup_intent = startup_intent(startup_arg, &editor_options);
        let mut state = AppState::new();
        state.view.camera.view_height = editor_options.view_height;
        state.options = editor_options;

        let device = render_state.device.clone();
        let queue = render_state.queue.clone();

        Self {
            state,
            controller: AppController::new(),
            renderer: Arc::new(std::sync::Mutex::new(render::Renderer::new(render_state))),
            exporter: render::FallbackRasterizer::new(
                render::GpuExporter::new(device.clone(), queue.clone()),
                render::SoftwareRasterizer::new(),
            ),
            device,
            queue,
            input: ui::InputState::new(),
            pending_intents: startup_intent.into_iter().collect(),
        }
    }
}

/// Erstes Bild: Argument als URL oder Pfad, sonst optional ein Zufallsbild.
fn startup_intent(arg: Option<OsString>, options: &EditorOptions) -> Option<AppIntent> {
    let Some(arg) = arg else {
        return options
            .load_random_image_on_start
            .then_some(AppIntent::RandomImageRequested);
    };
    match arg.to_str() {
        Some(text) if is_url(text) => Some(AppIntent::ImageUrlSelected {
            url: text.to_string(),
        }),
        _ => Some(AppIntent::ImageFileSelected {
            path: PathBuf::from(arg),
        }),
    }
}

fn is_url(text: &str) -> bool {
    ["http://", "https://", "file://"]
        .iter()
        .any(|scheme| text.starts_with(scheme))
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = std::mem::take(&mut self.pending_intents);
        events.extend(self.poll_image_loader());
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        // Texture-Tausch vor dem Zeichnen dieses Frames
        self.sync_render_events();

        if let Some(intent) = self.run_pending_export() {
            self.process_events(vec![intent]);
        }

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn poll_image_loader(&mut self) -> Option<AppIntent> {
        let result = self.state.image_loader.poll()?;
        Some(match result {
            Ok(image) => AppIntent::ImageLoaded {
                image: Arc::new(image),
            },
            Err(e) => AppIntent::ImageLoadFailed {
                message: e.to_string(),
            },
        })
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_controls_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_notice(ctx, self.state.ui.notice.as_deref()));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let [r, g, b, a] = self.state.options.viewport_clear_color;
        let background = egui::Color32::from_rgba_unmultiplied(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
            (a * 255.0) as u8,
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    &self.state.interaction,
                ));

                let render_data = render::WgpuRenderData {
                    scene: self
                        .controller
                        .build_render_scene(&mut self.state, viewport_size),
                };

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                    },
                );

                ui.painter().add(callback);

                if !self.state.has_image() {
                    let hint = if self.state.image_loader.is_pending() {
                        "Loading image..."
                    } else {
                        "No image loaded. Use File → Open Image"
                    };
                    ui.painter().text(
                        rect.center_top() + egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        hint,
                        egui::FontId::proportional(18.0),
                        egui::Color32::WHITE,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn sync_render_events(&mut self) {
        let events = self.state.take_render_events();
        if events.is_empty() {
            return;
        }

        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        for event in events {
            match event {
                RenderEvent::ImageChanged(image) => {
                    renderer.set_image(&self.device, &self.queue, &image);
                    log::info!("Bild-Texture in Renderer hochgeladen");
                }
            }
        }
    }

    fn run_pending_export(&mut self) -> Option<AppIntent> {
        let result = use_cases::export::run_pending_export(&mut self.state, &mut self.exporter)?;
        Some(match result {
            Ok(path) => AppIntent::ExportFinished { path },
            Err(e) => {
                log::error!("Export fehlgeschlagen: {}", e);
                AppIntent::ExportFailed {
                    message: e.to_string(),
                }
            }
        })
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.interaction.is_dragging()
            || self.state.ui.notice.is_some()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
        // Ladeergebnis abholen, auch ohne Eingaben
        if self.state.image_loader.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
