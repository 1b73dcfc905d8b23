//! Verlauf ausgeführter Commands (Diagnose und Tests).

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    /// Obergrenze; ältere Einträge fallen vorne heraus.
    pub const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Kopie des Commands an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert vom ältesten zum jüngsten Eintrag.
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Jüngster Eintrag.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }
}
