//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod image_loader;
mod intent_mapping;
pub mod mesh_cache;
pub mod render_events;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Warp-Konfiguration, Bild, View, Zeiger).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use image_loader::ImageLoader;
pub use intent_mapping::NO_IMAGE_NOTICE;
pub use mesh_cache::MeshCache;
pub use render_events::RenderEvent;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragState, InteractionState, PathDrag, UiState, ViewState};
