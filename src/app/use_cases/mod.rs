//! Use-Cases der Application-Layer-Orchestrierung.

pub mod export;
pub mod interaction;
pub mod source_image;
pub mod viewport;
pub mod warp;
