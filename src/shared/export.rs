//! Export-Vertrag zwischen App und Rasterisierern.
//!
//! `app` stellt einen `ExportJob` zusammen, ein `OffscreenRasterizer` aus
//! `render` erzeugt daraus ein `RasterImage`, das als PNG geschrieben wird.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::core::{CurveError, ExportPlan, ExportPlanError, PlaneMesh, SourceImage, Vector3};

/// Zeilenreihenfolge eines Pixelpuffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Erste Zeile = obere Bildkante
    TopDown,
    /// Erste Zeile = untere Bildkante (Rasterisierungs-Ursprung unten)
    BottomUp,
}

/// Fehler im Export-Ablauf.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Kein Bild geladen")]
    NoImage,
    #[error("Bildgitter noch nicht erzeugt")]
    MeshNotReady,
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Plan(#[from] ExportPlanError),
    #[error("Ausgabe {width}x{height} überschreitet das Geräte-Limit von {max} Pixeln")]
    TargetTooLarge { width: u32, height: u32, max: u32 },
    #[error("GPU-Fehler beim Export: {0}")]
    Gpu(String),
    #[error("Pixelpuffer passt nicht zur Größe {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("PNG-Kodierung fehlgeschlagen")]
    Encode(#[from] image::ImageError),
    #[error("Datei konnte nicht geschrieben werden: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alles, was ein Rasterisierer für einen Export-Durchlauf braucht.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub plan: ExportPlan,
    /// Gitter der aktuellen Auflösung (UVs + Indizes)
    pub mesh: Arc<PlaneMesh>,
    /// Verformte Positionen, parallel zu `mesh.positions()`
    pub deformed: Vec<Vector3>,
    pub image: Arc<SourceImage>,
}

/// Rendert einen Export-Job in einen eigenen Pixelpuffer.
///
/// Implementierungen dürfen den Bildschirm-Renderer nicht verändern.
pub trait OffscreenRasterizer {
    fn rasterize(&mut self, job: &ExportJob) -> Result<RasterImage, ExportError>;
}

/// RGBA8-Pixel mit bekannter Zeilenreihenfolge (nicht vormultipliziertes Alpha).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    row_order: RowOrder,
}

impl RasterImage {
    /// Prüft, dass `pixels` genau `width · height · 4` Bytes hat.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        row_order: RowOrder,
    ) -> Result<Self, ExportError> {
        if pixels.len() != width as usize * height as usize * 4 {
            return Err(ExportError::BufferSize { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels,
            row_order,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA eines Pixels in Bildkoordinaten (y = 0 oben), unabhängig von der Pufferreihenfolge.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let row = match self.row_order {
            RowOrder::TopDown => y,
            RowOrder::BottomUp => self.height - 1 - y,
        };
        let offset = (row as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(rgba)
    }

    /// Spiegelt bei Bedarf vertikal, sodass die erste Zeile oben liegt.
    pub fn into_top_down(mut self) -> Self {
        if self.row_order == RowOrder::BottomUp {
            let stride = self.width as usize * 4;
            let rows = self.height as usize;
            for top in 0..rows / 2 {
                let bottom = rows - 1 - top;
                let (upper, lower) = self.pixels.split_at_mut(bottom * stride);
                upper[top * stride..(top + 1) * stride].swap_with_slice(&mut lower[..stride]);
            }
            self.row_order = RowOrder::TopDown;
        }
        self
    }

    /// Kodiert das Bild als PNG (RGBA8).
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let top_down = self.clone().into_top_down();
        let buffer = image::RgbaImage::from_raw(top_down.width, top_down.height, top_down.pixels)
            .ok_or(ExportError::BufferSize {
                width: self.width,
                height: self.height,
            })?;
        let mut bytes = Vec::new();
        buffer.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Schreibt das Bild als PNG-Datei.
    pub fn write_png(&self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "PNG exportiert: {} ({}x{})",
            path.display(),
            self.width,
            self.height
        );
        Ok(())
    }
}
