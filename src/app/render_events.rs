//! Ereignisse vom App-Layer an den GPU-Renderer.
//!
//! Der Renderer wird nicht über Beobachter am State benachrichtigt, sondern
//! `main` leert die Warteschlange einmal pro Frame vor dem Zeichnen.

use crate::core::SourceImage;
use std::sync::Arc;

/// Änderungen, die GPU-Ressourcen betreffen.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    /// Neues Bild fertig dekodiert; Textur austauschen
    ImageChanged(Arc<SourceImage>),
}
