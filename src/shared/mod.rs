//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod export;
pub mod options;
mod render_scene;

pub use export::{ExportError, ExportJob, OffscreenRasterizer, RasterImage, RowOrder};
pub use options::EditorOptions;
pub use options::EXPORT_DEFAULT_FILE_NAME;
pub use render_scene::RenderScene;
