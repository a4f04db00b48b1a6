//! Render configuration.
//!
//! Camera resolution and lens values plus the parallel renderer's tiling
//! parameters. Both structs deserialize with per-field defaults so scene
//! descriptions only spell out what they override.

use serde::Deserialize;
use thiserror::Error;

/// Errors for configuration values the renderer cannot work with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image resolution must be non-zero, got {width}x{height}")]
    EmptyResolution { width: u32, height: u32 },

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("Near plane must be positive, got {0}")]
    NearPlane(f32),

    #[error("Bucket size must be non-zero")]
    BucketSize,

    #[error("Thread count must be non-zero")]
    Threads,
}

/// Camera configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Image width in pixels
    pub pixel_width: u32,

    /// Image height in pixels
    pub pixel_height: u32,

    /// Vertical field of view in degrees
    pub field_of_view: f32,

    /// Distance from the camera to the view plane
    pub near_plane: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            pixel_width: 700,
            pixel_height: 500,
            field_of_view: 45.0,
            near_plane: 1.0,
        }
    }
}

impl CameraSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.pixel_width = width;
        self.pixel_height = height;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, field_of_view: f32, near_plane: f32) -> Self {
        self.field_of_view = field_of_view;
        self.near_plane = near_plane;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.pixel_width as f32 / self.pixel_height as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(ConfigError::EmptyResolution {
                width: self.pixel_width,
                height: self.pixel_height,
            });
        }
        if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
            return Err(ConfigError::FieldOfView(self.field_of_view));
        }
        if !(self.near_plane > 0.0) {
            return Err(ConfigError::NearPlane(self.near_plane));
        }
        Ok(())
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Settings for the parallel bucket renderer.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Edge length of a square bucket in pixels
    pub bucket_size: u32,

    /// Worker thread count; `None` uses the global rayon pool
    pub threads: Option<usize>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_size == 0 {
            return Err(ConfigError::BucketSize);
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Threads);
        }
        Ok(())
    }
}
