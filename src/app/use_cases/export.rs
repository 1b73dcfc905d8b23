//! Use-Case-Funktionen für den PNG-Export.
//!
//! Ablauf: Dialog → `schedule_export` erhöht den Export-Zähler → der Host
//! prüft pro Frame `take_export_request` (flankengesteuert) → `prepare_job`
//! verformt das aktuelle Gitter → ein `OffscreenRasterizer` rendert →
//! `write_export` kodiert und schreibt die Datei.

use crate::app::intent_mapping::NO_IMAGE_NOTICE;
use crate::app::AppState;
use crate::core::{deform_positions, DeformParams, ExportPlan};
use crate::shared::{ExportError, ExportJob, OffscreenRasterizer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Öffnet den Speichern-Dialog.
pub fn request_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Merkt den Zielpfad vor und erhöht den Export-Zähler.
///
/// Ohne Bild wird stattdessen die blockierende Meldung gesetzt.
pub fn schedule_export(state: &mut AppState, path: PathBuf) {
    if !state.has_image() {
        state.ui.notice = Some(NO_IMAGE_NOTICE.to_string());
        return;
    }
    log::info!("Export angefordert: {}", path.display());
    state.ui.pending_export_path = Some(path);
    state.config.trigger_save();
}

/// Liefert den Zielpfad, wenn der Export-Zähler seit dem letzten Frame gestiegen ist.
pub fn take_export_request(state: &mut AppState) -> Option<PathBuf> {
    if !state.export_watch.poll(state.config.save_trigger()) {
        return None;
    }
    let path = state.ui.pending_export_path.take();
    if path.is_none() {
        log::warn!("Export-Zähler gestiegen, aber kein Zielpfad vorgemerkt");
    }
    path
}

/// Stellt den Export-Job aus Gitter, Kurve und Bild zusammen.
pub fn prepare_job(state: &mut AppState) -> Result<ExportJob, ExportError> {
    let image = state.image.clone().ok_or(ExportError::NoImage)?;

    state.mesh_cache.ensure(
        state.config.resolution(),
        state.config.height_scale(),
        state.options.mesh_height_segments,
    );
    let mesh = state
        .mesh_cache
        .mesh()
        .cloned()
        .ok_or(ExportError::MeshNotReady)?;

    let curve = state.config.curve()?;
    let deformed = deform_positions(
        &curve,
        mesh.positions(),
        &DeformParams::from_config(&state.config),
    );
    let plan = ExportPlan::compute(
        &deformed,
        image.dimensions(),
        &state.options.export_settings(),
    )?;

    Ok(ExportJob {
        plan,
        mesh: Arc::clone(&mesh),
        deformed,
        image,
    })
}

/// Rendert den Job und schreibt das Ergebnis als PNG.
pub fn write_export(
    job: &ExportJob,
    rasterizer: &mut dyn OffscreenRasterizer,
    path: &Path,
) -> Result<(), ExportError> {
    let raster = rasterizer.rasterize(job)?;
    raster.into_top_down().write_png(path)
}

/// Kompletter Export-Durchlauf, falls einer angefordert ist.
///
/// `None`, wenn in diesem Frame nichts zu tun ist.
pub fn run_pending_export(
    state: &mut AppState,
    rasterizer: &mut dyn OffscreenRasterizer,
) -> Option<Result<PathBuf, ExportError>> {
    let path = take_export_request(state)?;
    let result = prepare_job(state).and_then(|job| write_export(&job, rasterizer, &path));
    Some(result.map(|()| path))
}

/// Schreibt das Ergebnis eines Exports in die Statuszeile.
pub fn report_result(state: &mut AppState, message: String) {
    state.ui.status_message = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::source_image::apply_loaded_image;
    use crate::core::{ImageSource, SourceImage, Vector3, WarpConfig};
    use crate::shared::{RasterImage, RowOrder};

    /// Zählt Aufrufe und liefert ein einfarbiges Bild.
    struct CountingRasterizer {
        calls: usize,
    }

    impl OffscreenRasterizer for CountingRasterizer {
        fn rasterize(&mut self, job: &ExportJob) -> Result<RasterImage, ExportError> {
            self.calls += 1;
            let (w, h) = (job.plan.width, job.plan.height);
            RasterImage::new(w, h, vec![255; (w * h * 4) as usize], RowOrder::TopDown)
        }
    }

    fn state_with_image() -> AppState {
        let mut state = AppState::new();
        let pixels = image::RgbaImage::from_pixel(16, 8, image::Rgba([0, 0, 255, 255]));
        state.image = Some(Arc::new(SourceImage::from_rgba(
            ImageSource::File(PathBuf::from("blau.png")),
            pixels,
        )));
        state
    }

    #[test]
    fn schedule_without_image_sets_notice_and_keeps_counter() {
        let mut state = AppState::new();

        schedule_export(&mut state, PathBuf::from("egal.png"));

        assert_eq!(state.ui.notice.as_deref(), Some(NO_IMAGE_NOTICE));
        assert_eq!(state.config.save_trigger(), 0);
        assert!(take_export_request(&mut state).is_none());
    }

    #[test]
    fn export_request_fires_once_per_increment() {
        let mut state = state_with_image();

        schedule_export(&mut state, PathBuf::from("a.png"));

        assert_eq!(take_export_request(&mut state), Some(PathBuf::from("a.png")));
        assert_eq!(take_export_request(&mut state), None);
    }

    #[test]
    fn prepare_job_uses_current_resolution() {
        let mut state = state_with_image();
        state.config.set_resolution(12);

        let job = prepare_job(&mut state).unwrap();

        assert_eq!(job.mesh.width_segments(), 12);
        assert_eq!(job.deformed.len(), job.mesh.vertex_count());
        assert_eq!(job.plan.width.max(job.plan.height), 2048);
    }

    #[test]
    fn prepare_job_without_image_fails() {
        let mut state = AppState::new();
        assert!(matches!(prepare_job(&mut state), Err(ExportError::NoImage)));
    }

    #[test]
    fn run_pending_export_writes_png_once() {
        let mut state = state_with_image();
        state.config.set_resolution(10);
        let path = std::env::temp_dir().join("curve_warp_editor_use_case_export.png");
        let mut rasterizer = CountingRasterizer { calls: 0 };

        assert!(run_pending_export(&mut state, &mut rasterizer).is_none());
        schedule_export(&mut state, path.clone());
        let written = run_pending_export(&mut state, &mut rasterizer)
            .unwrap()
            .unwrap();
        assert!(run_pending_export(&mut state, &mut rasterizer).is_none());

        assert_eq!(written, path);
        assert_eq!(rasterizer.calls, 1);
        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width().max(decoded.height()), 2048);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn reload_between_exports_in_one_frame_still_exports() {
        let mut state = state_with_image();
        state.config.set_resolution(10);
        let dir = std::env::temp_dir();
        let first = dir.join("curve_warp_editor_reload_first.png");
        let second = dir.join("curve_warp_editor_reload_second.png");
        let mut rasterizer = CountingRasterizer { calls: 0 };

        schedule_export(&mut state, first.clone());
        assert!(matches!(
            run_pending_export(&mut state, &mut rasterizer),
            Some(Ok(_))
        ));

        // Neues Bild und neuer Export, bevor der nächste Frame den Zähler sieht
        let pixels = image::RgbaImage::from_pixel(4, 4, image::Rgba([9, 9, 9, 255]));
        apply_loaded_image(
            &mut state,
            Arc::new(SourceImage::from_rgba(
                ImageSource::File(PathBuf::from("neu.png")),
                pixels,
            )),
        );
        schedule_export(&mut state, second.clone());
        assert_eq!(state.config.save_trigger(), 1);

        let written = run_pending_export(&mut state, &mut rasterizer)
            .expect("zweiter Export darf nicht verloren gehen")
            .unwrap();
        assert_eq!(written, second);
        assert_eq!(rasterizer.calls, 2);
        std::fs::remove_file(&first).ok();
        std::fs::remove_file(&second).ok();
    }

    #[test]
    fn straight_curve_without_warp_still_plans_export() {
        let mut state = state_with_image();
        state.config = WarpConfig::with_control_points(vec![
            Vector3::new(-2.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
        ])
        .unwrap();
        state.config.set_warp_intensity(0.0);

        let job = prepare_job(&mut state).unwrap();

        assert_eq!(job.plan.width, 2048);
        assert!(job.plan.height >= 1 && job.plan.height < job.plan.width / 4);
    }
}
