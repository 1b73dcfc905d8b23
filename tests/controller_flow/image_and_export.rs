use super::{state_with_image, write_temp_png};
use curve_warp_editor::app::{use_cases, RenderEvent};
use curve_warp_editor::core::ImageSource;
use curve_warp_editor::render::SoftwareRasterizer;
use curve_warp_editor::{AppController, AppIntent, AppState, SourceImage};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Wartet auf den Hintergrund-Lader und reicht das Ergebnis als Intent weiter.
fn finish_loading(controller: &mut AppController, state: &mut AppState) {
    let result = state
        .image_loader
        .wait(Duration::from_secs(40))
        .expect("Lader sollte ein Ergebnis liefern");
    let intent = match result {
        Ok(image) => AppIntent::ImageLoaded {
            image: Arc::new(image),
        },
        Err(e) => AppIntent::ImageLoadFailed {
            message: e.to_string(),
        },
    };
    controller
        .handle_intent(state, intent)
        .expect("Lade-Ergebnis sollte verarbeitet werden");
}

#[test]
fn test_image_file_selected_loads_and_queues_texture_swap() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = write_temp_png("flow_load.png", 24, 12);

    controller
        .handle_intent(&mut state, AppIntent::ImageFileSelected { path: path.clone() })
        .expect("ImageFileSelected sollte funktionieren");
    assert!(state.image_loader.is_pending());
    assert_eq!(
        state.ui.loading_source.as_ref(),
        Some(&ImageSource::File(path.clone()))
    );

    finish_loading(&mut controller, &mut state);

    assert_eq!(state.image_dimensions(), Some((24, 12)));
    assert!(state.ui.loading_source.is_none());
    let events = state.take_render_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        RenderEvent::ImageChanged(image) if image.dimensions() == (24, 12)
    ));
}

#[test]
fn test_unreachable_url_reports_failure_and_keeps_image() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    let url = "http://127.0.0.1:9/zufall.jpg".to_string();

    controller
        .handle_intent(&mut state, AppIntent::ImageUrlSelected { url: url.clone() })
        .expect("ImageUrlSelected sollte funktionieren");
    assert_eq!(state.ui.loading_source, Some(ImageSource::Url(url)));
    finish_loading(&mut controller, &mut state);

    assert_eq!(state.image_dimensions(), Some((32, 16)));
    assert!(state.ui.loading_source.is_none());
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("Download fehlgeschlagen")));
}

#[test]
fn test_random_image_request_starts_url_load() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.random_image_url = "http://127.0.0.1:9/1024/1024".into();

    controller
        .handle_intent(&mut state, AppIntent::RandomImageRequested)
        .expect("RandomImageRequested sollte funktionieren");

    assert!(state.image_loader.is_pending());
    assert_eq!(
        state.ui.loading_source,
        Some(ImageSource::Url("http://127.0.0.1:9/1024/1024".into()))
    );
    finish_loading(&mut controller, &mut state);
    assert!(!state.has_image());
}

#[test]
fn test_failed_load_keeps_previous_image() {
    let mut controller = AppController::new();
    let mut state = state_with_image();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageFileSelected {
                path: PathBuf::from("/nicht/vorhanden/bild.png"),
            },
        )
        .expect("ImageFileSelected sollte funktionieren");
    finish_loading(&mut controller, &mut state);

    assert_eq!(state.image_dimensions(), Some((32, 16)));
    assert!(state.take_render_events().is_empty());
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("nicht geladen")));
}

#[test]
fn test_new_image_resets_export_counter() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    state.config.trigger_save();
    state.config.trigger_save();

    let path = write_temp_png("flow_reset.png", 8, 8);
    controller
        .handle_intent(&mut state, AppIntent::ImageFileSelected { path })
        .expect("ImageFileSelected sollte funktionieren");
    finish_loading(&mut controller, &mut state);

    assert_eq!(state.config.save_trigger(), 0);
    assert!(state.config.image_source().is_some());
}

#[test]
fn test_export_flow_writes_png_with_software_rasterizer() {
    let mut controller = AppController::new();
    let mut state = state_with_image();
    state.options.export_min_long_side = 256;
    let target = std::env::temp_dir()
        .join("curve_warp_editor_flow_tests")
        .join("flow_export.png");
    std::fs::create_dir_all(target.parent().unwrap()).unwrap();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte funktionieren");
    assert!(state.ui.show_export_dialog);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: target.clone(),
            },
        )
        .expect("ExportPathSelected sollte funktionieren");
    assert_eq!(state.config.save_trigger(), 1);

    let mut rasterizer = SoftwareRasterizer::new();
    let written = use_cases::export::run_pending_export(&mut state, &mut rasterizer)
        .expect("Export sollte angefordert sein")
        .expect("Export sollte gelingen");
    assert_eq!(written, target);

    // Flankengesteuert: kein zweiter Durchlauf ohne neue Anforderung
    assert!(use_cases::export::run_pending_export(&mut state, &mut rasterizer).is_none());

    controller
        .handle_intent(&mut state, AppIntent::ExportFinished { path: written })
        .expect("ExportFinished sollte funktionieren");
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("flow_export.png")));

    let decoded = image::open(&target).expect("PNG sollte lesbar sein");
    assert_eq!(decoded.width().max(decoded.height()), 256);
    std::fs::remove_file(&target).ok();
}

#[test]
fn test_reload_and_export_in_same_frame_exports_twice() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.export_min_long_side = 64;
    let dir = std::env::temp_dir().join("curve_warp_editor_flow_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let first = dir.join("flow_reload_a.png");
    let second = dir.join("flow_reload_b.png");
    let mut rasterizer = SoftwareRasterizer::new();

    let solid = |name: &str| {
        let pixels = image::RgbaImage::from_pixel(16, 16, image::Rgba([90, 90, 200, 255]));
        Arc::new(SourceImage::from_rgba(
            ImageSource::File(PathBuf::from(name)),
            pixels,
        ))
    };

    // Frame 1: Bild a, Export a
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageLoaded {
                image: solid("a.png"),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: first.clone(),
            },
        )
        .unwrap();
    let written = use_cases::export::run_pending_export(&mut state, &mut rasterizer)
        .expect("erster Export sollte angefordert sein")
        .expect("erster Export sollte gelingen");
    assert_eq!(written, first);

    // Frame 2: Bild b fertig geladen und Export bestätigt, Zähler wieder bei 1
    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageLoaded {
                image: solid("b.png"),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportPathSelected {
                path: second.clone(),
            },
        )
        .unwrap();
    assert_eq!(state.config.save_trigger(), 1);

    let written = use_cases::export::run_pending_export(&mut state, &mut rasterizer)
        .expect("zweiter Export darf nicht verloren gehen")
        .expect("zweiter Export sollte gelingen");
    assert_eq!(written, second);
    assert!(image::open(&second).is_ok());

    std::fs::remove_file(&first).ok();
    std::fs::remove_file(&second).ok();
}
