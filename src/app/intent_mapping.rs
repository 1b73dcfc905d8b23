//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::ImageSource;

/// Meldung, wenn ohne geladenes Bild gespeichert werden soll.
pub const NO_IMAGE_NOTICE: &str = "Please load an image before attempting to save.";

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::OpenImageRequested => vec![AppCommand::RequestImageDialog],
        AppIntent::ImageFileSelected { path } => vec![AppCommand::LoadImage {
            source: ImageSource::File(path),
        }],
        AppIntent::ImageUrlSelected { url } => vec![AppCommand::LoadImage {
            source: ImageSource::Url(url),
        }],
        AppIntent::RandomImageRequested => vec![AppCommand::LoadImage {
            source: ImageSource::Url(state.options.random_image_url.clone()),
        }],
        AppIntent::ImageLoaded { image } => vec![AppCommand::ApplyLoadedImage { image }],
        AppIntent::ImageLoadFailed { message } => {
            vec![AppCommand::ReportImageLoadFailure { message }]
        }
        AppIntent::ExportRequested => {
            if state.has_image() {
                vec![AppCommand::RequestExportDialog]
            } else {
                vec![AppCommand::ShowNotice {
                    message: NO_IMAGE_NOTICE.to_string(),
                }]
            }
        }
        AppIntent::ExportPathSelected { path } => vec![AppCommand::ScheduleExport { path }],
        AppIntent::ExportFinished { path } => vec![AppCommand::ReportExportResult {
            message: format!("Gespeichert: {}", path.display()),
        }],
        AppIntent::ExportFailed { message } => vec![AppCommand::ReportExportResult {
            message: format!("Export fehlgeschlagen: {}", message),
        }],
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { world_pos } => vec![AppCommand::BeginDrag { world_pos }],
        AppIntent::PointerMoved { world_pos } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::DragTo { world_pos }]
            } else {
                vec![AppCommand::UpdateHover { world_pos }]
            }
        }
        AppIntent::PointerReleased => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }

        AppIntent::ResolutionChanged { value } => vec![AppCommand::SetResolution { value }],
        AppIntent::WarpIntensityChanged { value } => {
            vec![AppCommand::SetWarpIntensity { value }]
        }
        AppIntent::HeightScaleChanged { value } => vec![AppCommand::SetHeightScale { value }],
        AppIntent::PathOffsetChanged { value } => vec![AppCommand::SetPathOffset { value }],
        AppIntent::ImageLengthRatioChanged { value } => {
            vec![AppCommand::SetImageLengthRatio { value }]
        }

        AppIntent::AddControlPointRequested => vec![AppCommand::AppendControlPoint],
        AppIntent::RemoveControlPointRequested => vec![AppCommand::RemoveLastControlPoint],
        AppIntent::ResetControlPointsRequested => vec![AppCommand::ResetControlPoints],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
