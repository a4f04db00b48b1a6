//! JSON scene descriptions.
//!
//! A description is plain data: camera placement and settings, the light,
//! the objects with their materials, and the scene-wide ambient and
//! background colors. The renderer turns it into a live scene.
//!
//! ```json
//! {
//!   "camera": { "position": [0, 0, -3], "look_at": [0, 0, 0], "pixel_width": 320 },
//!   "light": { "position": [2, 2, -2] },
//!   "objects": [ { "type": "sphere", "center": [0, 0, 0], "radius": 1 } ]
//! }
//! ```

use std::path::Path;

use glint_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{CameraSettings, ConfigError, RenderSettings};
use crate::light::Light;
use crate::material::{Color, PhongMaterial};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Camera placement plus its configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub position: Vec3,
    pub look_at: Vec3,

    #[serde(flatten)]
    pub settings: CameraSettings,
}

/// A sphere and its shading attributes.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f32,

    #[serde(flatten)]
    pub material: PhongMaterial,
}

/// One scene object, tagged by `"type"`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere(SphereDescription),
}

/// A complete scene as read from disk.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub light: Light,

    #[serde(default)]
    pub objects: Vec<ObjectDescription>,

    /// Scene-wide ambient light
    #[serde(default = "default_ambient")]
    pub ambient: Color,

    /// Color of pixels whose ray hits nothing
    #[serde(default)]
    pub background: Color,

    #[serde(default)]
    pub render: RenderSettings,
}

fn default_ambient() -> Color {
    Color::splat(0.1)
}

impl SceneDescription {
    /// Check the description for values the renderer cannot use.
    ///
    /// Degenerate but renderable input (a camera looking straight along the
    /// world up axis, a non-positive sphere radius) is only logged.
    pub fn validate(&self) -> LoadResult<()> {
        self.camera.settings.validate()?;
        self.render.validate()?;

        let view = self.camera.look_at - self.camera.position;
        if view.length_squared() == 0.0 {
            log::warn!("Camera position equals look_at; every pixel will be NaN");
        } else if view.cross(Vec3::Y).length_squared() == 0.0 {
            log::warn!("Camera looks along the world up axis; its up vector is undefined");
        }

        for (i, object) in self.objects.iter().enumerate() {
            match object {
                ObjectDescription::Sphere(sphere) if sphere.radius <= 0.0 => {
                    log::warn!("Sphere {} has non-positive radius {}", i, sphere.radius);
                }
                ObjectDescription::Sphere(_) => {}
            }
        }

        Ok(())
    }
}

/// Parse and validate a scene description from a JSON string.
pub fn parse_scene_description(json: &str) -> LoadResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(json)?;
    description.validate()?;
    Ok(description)
}

/// Load a scene description from a JSON file.
pub fn load_scene_description<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let description = parse_scene_description(&json)?;

    log::info!(
        "Loaded scene {} with {} objects at {}x{}",
        path.display(),
        description.objects.len(),
        description.camera.settings.pixel_width,
        description.camera.settings.pixel_height
    );

    Ok(description)
}
