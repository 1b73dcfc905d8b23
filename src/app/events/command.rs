use crate::core::{ImageSource, SourceImage, Vector3};
use crate::shared::EditorOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Bild ===
    /// Bild-Öffnen-Dialog anfordern
    RequestImageDialog,
    /// Bild im Hintergrund laden
    LoadImage { source: ImageSource },
    /// Fertig geladenes Bild übernehmen
    ApplyLoadedImage { image: Arc<SourceImage> },
    /// Ladefehler anzeigen
    ReportImageLoadFailure { message: String },

    // === Export ===
    /// PNG-Speichern-Dialog anfordern
    RequestExportDialog,
    /// Export für Pfad vormerken und Export-Zähler erhöhen
    ScheduleExport { path: PathBuf },
    /// Ergebnis eines Exports in der Statuszeile melden
    ReportExportResult { message: String },

    // === Meldungen & Anwendung ===
    /// Blockierende Meldung anzeigen
    ShowNotice { message: String },
    /// Blockierende Meldung schließen
    DismissNotice,
    /// Anwendung beenden
    RequestExit,

    // === Viewport & Zeiger ===
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Hit-Test beim Drücken und ggf. Drag starten
    BeginDrag { world_pos: Vector3 },
    /// Laufenden Drag auf neue Zeigerposition anwenden
    DragTo { world_pos: Vector3 },
    /// Drag beenden
    EndDrag,
    /// Hover-Zustand ohne Drag aktualisieren
    UpdateHover { world_pos: Vector3 },

    // === Warp-Parameter ===
    SetResolution { value: u32 },
    SetWarpIntensity { value: f32 },
    SetHeightScale { value: f32 },
    SetPathOffset { value: f32 },
    SetImageLengthRatio { value: f32 },

    // === Kontrollpunkte ===
    /// Punkt am Kurvenende anhängen (Verlängerung des letzten Segments)
    AppendControlPoint,
    /// Letzten Punkt entfernen (mindestens zwei bleiben)
    RemoveLastControlPoint,
    /// Startkurve wiederherstellen
    ResetControlPoints,

    // === Optionen ===
    OpenOptionsDialog,
    CloseOptionsDialog,
    ApplyOptions { options: Box<EditorOptions> },
    ResetOptions,
}
