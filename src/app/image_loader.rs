//! Asynchrones Laden von Bilddateien und URLs auf einem Worker-Thread.
//!
//! Jede Anfrage bekommt eine fortlaufende Generation. Ergebnisse älterer
//! Anfragen werden beim Abholen verworfen. Wird der Lader (und damit der
//! Empfänger) verworfen, läuft das Senden des Workers still ins Leere.

use crate::core::{ImageLoadError, ImageSource, SourceImage};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

struct LoadMessage {
    generation: u64,
    result: Result<SourceImage, ImageLoadError>,
}

/// Startet Ladevorgänge und liefert nur das Ergebnis der jüngsten Anfrage.
pub struct ImageLoader {
    generation: u64,
    pending: bool,
    sender: Sender<LoadMessage>,
    receiver: Receiver<LoadMessage>,
}

impl ImageLoader {
    /// Erstellt einen Lader ohne laufende Anfrage.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            generation: 0,
            pending: false,
            sender,
            receiver,
        }
    }

    /// Startet das Laden von `source`. Ältere, noch laufende Anfragen werden ungültig.
    ///
    /// Gibt die Generation der neuen Anfrage zurück.
    pub fn request(&mut self, source: ImageSource) -> std::io::Result<u64> {
        self.generation += 1;
        let generation = self.generation;
        let sender = self.sender.clone();

        std::thread::Builder::new()
            .name(format!("image-loader-{generation}"))
            .spawn(move || {
                let result = SourceImage::load(&source);
                if sender.send(LoadMessage { generation, result }).is_err() {
                    log::debug!(
                        "Ladeergebnis für '{}' verworfen: Empfänger existiert nicht mehr",
                        source.display_name()
                    );
                }
            })?;

        self.pending = true;
        Ok(generation)
    }

    /// Ob auf ein Ergebnis der jüngsten Anfrage gewartet wird.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Holt ein fertiges Ergebnis der jüngsten Anfrage ab, ohne zu blockieren.
    pub fn poll(&mut self) -> Option<Result<SourceImage, ImageLoadError>> {
        while let Ok(message) = self.receiver.try_recv() {
            if let Some(result) = self.accept(message) {
                return Some(result);
            }
        }
        None
    }

    /// Wartet höchstens `timeout` auf das Ergebnis der jüngsten Anfrage.
    pub fn wait(&mut self, timeout: Duration) -> Option<Result<SourceImage, ImageLoadError>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(message) => {
                    if let Some(result) = self.accept(message) {
                        return Some(result);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None
                }
            }
        }
    }

    fn accept(
        &mut self,
        message: LoadMessage,
    ) -> Option<Result<SourceImage, ImageLoadError>> {
        if message.generation != self.generation {
            log::debug!(
                "Veraltetes Ladeergebnis verworfen (Generation {}, aktuell {})",
                message.generation,
                self.generation
            );
            return None;
        }
        self.pending = false;
        Some(message.result)
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}
