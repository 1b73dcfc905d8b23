//! Application State: zentrale Datenhaltung.

use super::image_loader::ImageLoader;
use super::mesh_cache::MeshCache;
use super::render_events::RenderEvent;
use super::CommandLog;
use crate::core::{
    Camera2D, CatmullRomCurve, ImageSource, SaveTriggerWatch, SourceImage, Vector3, WarpConfig,
};
use crate::shared::EditorOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Laufender Zeiger-Drag. Existiert nur zwischen Drücken und Loslassen.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Kontrollpunkt wird gezogen; Position = Zeiger + `grab_offset`
    ControlPoint { index: usize, grab_offset: Vector3 },
    /// Bild wird entlang der Kurve verschoben
    Path(PathDrag),
}

/// Startzustand eines Band-Drags.
#[derive(Debug, Clone)]
pub struct PathDrag {
    /// Zeigerposition beim Drücken (Welt)
    pub start_point: Vector3,
    /// Pfad-Offset beim Drücken
    pub start_offset: f32,
    /// Normierter Kurvenparameter unter dem Zeiger beim Drücken
    pub start_u: f32,
    /// Kurve zum Zeitpunkt des Drückens
    pub curve: CatmullRomCurve,
    /// Kurvenlänge zum Zeitpunkt des Drückens
    pub curve_length: f32,
}

/// Zeiger-bezogener Zustand (Drag + Hover).
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub drag: DragState,
    /// Kontrollpunkt unter dem Zeiger (für Cursor-Feedback)
    pub hovered_point: Option<usize>,
    /// Zeiger liegt über dem Bildband
    pub hovering_band: bool,
}

impl InteractionState {
    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    /// Index des gezogenen Kontrollpunkts.
    pub fn active_control_point(&self) -> Option<usize> {
        match self.drag {
            DragState::ControlPoint { index, .. } => Some(index),
            _ => None,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Ob der Bild-Öffnen-Dialog geöffnet werden soll
    pub show_image_dialog: bool,
    /// Ob der PNG-Speichern-Dialog geöffnet werden soll
    pub show_export_dialog: bool,
    /// Zielpfad des angeforderten Exports (wartet auf den Export-Zähler)
    pub pending_export_path: Option<PathBuf>,
    /// Quelle des gerade ladenden Bildes
    pub loading_source: Option<ImageSource>,
    /// Blockierende Meldung (modal)
    pub notice: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct ViewState {
    /// Feste 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Warp-Parameter und Kontrollpunkte
    pub config: WarpConfig,
    /// Aktuell geladenes Bild (None = noch kein Bild)
    pub image: Option<Arc<SourceImage>>,
    /// View-State
    pub view: ViewState,
    /// Zeiger-State
    pub interaction: InteractionState,
    /// Gitter der aktuellen Auflösung
    pub mesh_cache: MeshCache,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Export)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Hintergrund-Lader für Bilddateien
    pub image_loader: ImageLoader,
    /// Beobachter des Export-Zählers
    pub export_watch: SaveTriggerWatch,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    render_events: Vec<RenderEvent>,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardkonfiguration
    pub fn new() -> Self {
        Self {
            config: WarpConfig::new(),
            image: None,
            view: ViewState::new(),
            interaction: InteractionState::default(),
            mesh_cache: MeshCache::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            show_options_dialog: false,
            image_loader: ImageLoader::new(),
            export_watch: SaveTriggerWatch::default(),
            should_exit: false,
            render_events: Vec::new(),
        }
    }

    /// Ob ein Bild geladen ist (für UI-Anzeige und Export)
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Bildgröße in Pixeln, falls ein Bild geladen ist
    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|image| image.dimensions())
    }

    /// Reiht ein Ereignis für den Renderer ein.
    pub fn push_render_event(&mut self, event: RenderEvent) {
        self.render_events.push(event);
    }

    /// Entnimmt alle offenen Renderer-Ereignisse in Eingangsreihenfolge.
    pub fn take_render_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.render_events)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
