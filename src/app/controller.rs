//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Bild ===
            AppCommand::RequestImageDialog => handlers::image::request_dialog(state),
            AppCommand::LoadImage { source } => handlers::image::load(state, source)?,
            AppCommand::ApplyLoadedImage { image } => handlers::image::apply_loaded(state, image),
            AppCommand::ReportImageLoadFailure { message } => {
                handlers::image::report_failure(state, message)
            }

            // === Export ===
            AppCommand::RequestExportDialog => handlers::export::request_dialog(state),
            AppCommand::ScheduleExport { path } => handlers::export::schedule(state, path),
            AppCommand::ReportExportResult { message } => handlers::export::report(state, message),

            // === Viewport & Zeiger ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::BeginDrag { world_pos } => {
                handlers::interaction::begin_drag(state, world_pos)?
            }
            AppCommand::DragTo { world_pos } => handlers::interaction::drag_to(state, world_pos)?,
            AppCommand::EndDrag => handlers::interaction::end_drag(state),
            AppCommand::UpdateHover { world_pos } => {
                handlers::interaction::update_hover(state, world_pos)?
            }

            // === Warp-Parameter ===
            AppCommand::SetResolution { value } => handlers::warp::set_resolution(state, value),
            AppCommand::SetWarpIntensity { value } => {
                handlers::warp::set_warp_intensity(state, value)
            }
            AppCommand::SetHeightScale { value } => handlers::warp::set_height_scale(state, value),
            AppCommand::SetPathOffset { value } => handlers::warp::set_path_offset(state, value),
            AppCommand::SetImageLengthRatio { value } => {
                handlers::warp::set_image_length_ratio(state, value)
            }

            // === Kontrollpunkte ===
            AppCommand::AppendControlPoint => handlers::warp::append_control_point(state)?,
            AppCommand::RemoveLastControlPoint => {
                handlers::warp::remove_last_control_point(state)?
            }
            AppCommand::ResetControlPoints => handlers::warp::reset_control_points(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ShowNotice { message } => handlers::dialog::show_notice(state, message),
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    ///
    /// Braucht `&mut`, weil das Gitter bei Parameteränderung neu aufgebaut wird.
    pub fn build_render_scene(
        &self,
        state: &mut AppState,
        viewport_size: [f32; 2],
    ) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
