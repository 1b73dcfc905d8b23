//! Viewport-Input-Handling: Zeiger-Events → AppIntent, Cursor-Feedback.

use crate::app::{AppIntent, Camera2D, InteractionState};
use crate::core::Vector3;

/// Verwaltet den Zeiger-Zustand für das Viewport
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde im Viewport gedrückt und noch nicht losgelassen
    pointer_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Drücken, Bewegen und Loslassen werden in Weltkoordinaten übersetzt.
    /// Verlässt der Zeiger das Fenster während eines Drags, endet der Drag.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        interaction: &InteractionState,
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        let (pressed, released, moved, has_pointer, press_origin, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.has_pointer(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });
        let to_world =
            |pos: egui::Pos2| pointer_to_world(pos, response.rect.min, viewport_size, camera);

        // press_origin() ist die exakte Klickposition, vor jeder Drag-Schwelle
        if pressed && response.hovered() {
            if let Some(pos) = press_origin.or(latest_pos) {
                events.push(AppIntent::PointerPressed {
                    world_pos: to_world(pos),
                });
                self.pointer_down = true;
            }
        }

        if moved && (self.pointer_down || response.hovered()) {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    world_pos: to_world(pos),
                });
            }
        }

        if self.pointer_down && (released || !has_pointer) {
            events.push(AppIntent::PointerReleased);
            self.pointer_down = false;
        }

        if response.hovered() || self.pointer_down {
            ui.ctx().set_cursor_icon(cursor_for(interaction));
        }

        events
    }
}

/// Bildschirmposition (egui-Punkte) → Weltkoordinate relativ zum Viewport.
pub fn pointer_to_world(
    pointer_pos: egui::Pos2,
    viewport_min: egui::Pos2,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> Vector3 {
    let local = pointer_pos - viewport_min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::from_array(viewport_size),
    )
}

/// Cursor-Feedback: `Grabbing` während eines Drags, `Grab` über einem Kontrollpunkt.
pub fn cursor_for(interaction: &InteractionState) -> egui::CursorIcon {
    if interaction.is_dragging() {
        egui::CursorIcon::Grabbing
    } else if interaction.hovered_point.is_some() {
        egui::CursorIcon::Grab
    } else {
        egui::CursorIcon::Default
    }
}
