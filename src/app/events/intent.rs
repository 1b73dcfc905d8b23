use crate::core::{SourceImage, Vector3};
use crate::shared::EditorOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Bild öffnen (zeigt Dateidialog)
    OpenImageRequested,
    /// Bilddatei wurde im Dialog oder per Kommandozeile gewählt
    ImageFileSelected { path: PathBuf },
    /// Bild-URL per Kommandozeile angegeben
    ImageUrlSelected { url: String },
    /// "Load Random Image" gedrückt
    RandomImageRequested,
    /// Hintergrund-Lader hat ein Bild fertig dekodiert
    ImageLoaded { image: Arc<SourceImage> },
    /// Hintergrund-Lader meldet einen Fehler
    ImageLoadFailed { message: String },
    /// "Als PNG speichern" gedrückt
    ExportRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    ExportPathSelected { path: PathBuf },
    /// Export-Durchlauf abgeschlossen
    ExportFinished { path: PathBuf },
    /// Export-Durchlauf fehlgeschlagen
    ExportFailed { message: String },
    /// Blockierende Meldung bestätigt
    NoticeDismissed,
    /// Anwendung beenden
    ExitRequested,

    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Primäre Maustaste im Viewport gedrückt (Weltposition)
    PointerPressed { world_pos: Vector3 },
    /// Zeiger im Viewport bewegt (Weltposition)
    PointerMoved { world_pos: Vector3 },
    /// Maustaste losgelassen oder Zeiger hat den Viewport verlassen
    PointerReleased,

    /// Slider: Gitterauflösung
    ResolutionChanged { value: u32 },
    /// Slider: Warp-Intensität
    WarpIntensityChanged { value: f32 },
    /// Slider: Höhenskalierung
    HeightScaleChanged { value: f32 },
    /// Slider: Bildverschiebung entlang der Kurve
    PathOffsetChanged { value: f32 },
    /// Slider: Bildlänge als Anteil der Kurve
    ImageLengthRatioChanged { value: f32 },

    /// Kontrollpunkt am Kurvenende anhängen
    AddControlPointRequested,
    /// Letzten Kontrollpunkt entfernen
    RemoveControlPointRequested,
    /// Startkurve wiederherstellen
    ResetControlPointsRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofort anwenden)
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
