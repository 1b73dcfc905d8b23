//! Core-Domänentypen: Kurve, Gitter, Verformung, Hit-Tests, Konfiguration, Kamera.

pub mod bounds;
pub mod camera;
/// Catmull-Rom-Kurve mit Bogenlängen-Tabelle
pub mod curve;
pub mod deform;
pub mod export_plan;
pub mod hit_test;
pub mod mesh;
pub mod source_image;
pub mod vector;
pub mod warp_config;

pub use bounds::Bounds2D;
pub use camera::Camera2D;
pub use curve::{CatmullRomCurve, CurveError, CurveSample, ARC_LENGTH_DIVISIONS};
pub use deform::{
    deform_positions, deform_positions_into, deform_vertex, path_parameter, DeformParams,
};
pub use export_plan::{output_size, ExportPlan, ExportPlanError, ExportSettings};
pub use hit_test::{hit_test, path_drag_offset, pick_control_point, HitTestParams, PointerHit};
pub use mesh::PlaneMesh;
pub use source_image::{ImageLoadError, SourceImage};
pub use vector::{in_plane_normal, Vector3};
pub use warp_config::{
    ConfigError, ImageSource, SaveTriggerWatch, WarpConfig, HEIGHT_SCALE_MIN,
    IMAGE_LENGTH_RATIO_MIN, MIN_CONTROL_POINTS, RESOLUTION_MAX, RESOLUTION_MIN,
};
