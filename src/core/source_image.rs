//! Dekodiertes Quellbild, das auf das Gitter gelegt wird.

use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{DynamicImage, ImageReader, RgbaImage};
use thiserror::Error;

use super::ImageSource;

/// Zeitlimit für das Herunterladen entfernter Bilder.
pub const URL_TIMEOUT: Duration = Duration::from_secs(30);

/// Fehler beim Laden eines Quellbildes.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Bilddatei nicht lesbar: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Bild konnte nicht dekodiert werden: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Ungültige Bild-URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Download fehlgeschlagen: {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Server antwortete mit HTTP {status}: {url}")]
    Http { url: String, status: u16 },
    #[error("Heruntergeladenes Bild konnte nicht dekodiert werden: {url}")]
    DecodeBytes {
        url: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Bild hat keine Pixel: {origin}")]
    Empty { origin: String },
}

/// RGBA8-Pixel plus Herkunft.
#[derive(Debug, Clone)]
pub struct SourceImage {
    source: ImageSource,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Lädt ein Bild aus der angegebenen Quelle.
    pub fn load(source: &ImageSource) -> Result<Self, ImageLoadError> {
        match source {
            ImageSource::File(path) => Self::load_from_file(path),
            ImageSource::Url(url) => Self::load_from_url(url),
        }
    }

    /// Lädt ein Bild von der Platte.
    ///
    /// Das Format wird zuerst über die Dateiendung bestimmt, bei Fehlschlag
    /// über die Magic Bytes im Dateiinhalt.
    pub fn load_from_file(path: &Path) -> Result<Self, ImageLoadError> {
        let decoded = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::warn!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}. \
                     Versuche Erkennung via Dateiinhalt...",
                    path.display(),
                    ext_err
                );
                let file = std::fs::File::open(path).map_err(|source| ImageLoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                let reader = ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .map_err(|source| ImageLoadError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                reader.decode().map_err(|source| ImageLoadError::Decode {
                    path: path.to_path_buf(),
                    source,
                })?
            }
        };

        Self::from_decoded(ImageSource::File(path.to_path_buf()), decoded)
    }

    /// Lädt ein Bild über eine URL.
    ///
    /// `http`/`https` werden blockierend heruntergeladen, `file://` wird auf
    /// [`Self::load_from_file`] abgebildet. Das Format bestimmen die Magic Bytes.
    pub fn load_from_url(url: &str) -> Result<Self, ImageLoadError> {
        let invalid = |reason: String| ImageLoadError::InvalidUrl {
            url: url.to_string(),
            reason,
        };
        let parsed = reqwest::Url::parse(url).map_err(|e| invalid(e.to_string()))?;

        match parsed.scheme() {
            "http" | "https" => {}
            "file" => {
                let path = parsed
                    .to_file_path()
                    .map_err(|()| invalid("kein lokaler Dateipfad".into()))?;
                let loaded = Self::load_from_file(&path)?;
                return Ok(Self {
                    source: ImageSource::Url(url.to_string()),
                    pixels: loaded.pixels,
                });
            }
            other => return Err(invalid(format!("Schema '{other}' wird nicht unterstützt"))),
        }

        let network = |source: reqwest::Error| ImageLoadError::Network {
            url: url.to_string(),
            source,
        };
        let client = reqwest::blocking::Client::builder()
            .timeout(URL_TIMEOUT)
            .build()
            .map_err(network)?;
        let response = client.get(parsed).send().map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().map_err(network)?;
        log::debug!("{} Bytes von {} empfangen", bytes.len(), url);

        let decoded =
            image::load_from_memory(&bytes).map_err(|source| ImageLoadError::DecodeBytes {
                url: url.to_string(),
                source,
            })?;
        Self::from_decoded(ImageSource::Url(url.to_string()), decoded)
    }

    fn from_decoded(source: ImageSource, decoded: DynamicImage) -> Result<Self, ImageLoadError> {
        let pixels = decoded.to_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(ImageLoadError::Empty {
                origin: source.display_name(),
            });
        }

        log::info!(
            "Bild geladen: {} ({}x{})",
            source.display_name(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self { source, pixels })
    }

    /// Erzeugt ein Quellbild aus bereits dekodierten Pixeln.
    pub fn from_rgba(source: ImageSource, pixels: RgbaImage) -> Self {
        Self { source, pixels }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Breite und Höhe in Pixeln.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
