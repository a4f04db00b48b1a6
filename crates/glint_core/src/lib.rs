//! Glint Core - renderer-agnostic scene data.
//!
//! This crate provides:
//!
//! - **Lighting and shading data**: `Light`, `PhongMaterial`
//! - **Configuration**: `CameraSettings`, `RenderSettings`
//! - **Scene descriptions**: JSON scene files and their loader
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene_description;
//!
//! let description = load_scene_description("assets/two_spheres.json")?;
//! println!("Loaded {} objects", description.objects.len());
//! ```

pub mod config;
pub mod description;
pub mod light;
pub mod material;

// Re-export commonly used types
pub use config::{CameraSettings, ConfigError, RenderSettings};
pub use description::{
    load_scene_description, parse_scene_description, CameraDescription, LoadError, LoadResult,
    ObjectDescription, SceneDescription,
};
pub use light::Light;
pub use material::{Color, PhongMaterial};
