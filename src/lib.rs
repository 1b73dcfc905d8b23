//! Curve Warp Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    CatmullRomCurve, ExportPlan, PlaneMesh, SourceImage, Vector3, WarpConfig,
};
pub use core::{Bounds2D, Camera2D};
pub use shared::{EditorOptions, OffscreenRasterizer, RasterImage, RenderScene};
