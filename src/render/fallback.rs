//! Rasterisierer mit Ausweichpfad bei GPU-Fehlern.

use crate::shared::{ExportError, ExportJob, OffscreenRasterizer, RasterImage};

/// Versucht zuerst `primary`; schlägt dieser mit einem GPU-Fehler fehl,
/// übernimmt `fallback`. Andere Fehler werden unverändert weitergereicht.
pub struct FallbackRasterizer<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackRasterizer<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: OffscreenRasterizer, F: OffscreenRasterizer> OffscreenRasterizer
    for FallbackRasterizer<P, F>
{
    fn rasterize(&mut self, job: &ExportJob) -> Result<RasterImage, ExportError> {
        match self.primary.rasterize(job) {
            Err(ExportError::Gpu(message)) => {
                log::warn!(
                    "GPU-Export fehlgeschlagen ({}), weiche auf CPU-Rasterisierung aus",
                    message
                );
                self.fallback.rasterize(job)
            }
            other => other,
        }
    }
}
