//! Phong shading attributes shared by every scene object.

use glint_math::Vec3;
use serde::Deserialize;

/// RGB color. Channels are nominally in [0, 1] but never clamped.
pub type Color = Vec3;

/// Per-object coefficients of the Phong illumination model.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhongMaterial {
    /// Ambient reflectance (RGB)
    pub ambient: Color,

    /// Diffuse reflectance (RGB)
    pub diffuse: Color,

    /// Specular reflectance (RGB)
    pub specular: Color,

    /// Specular exponent
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse: Color::new(0.6, 0.7, 0.8),
            specular: Color::new(0.8, 0.8, 0.8),
            shininess: 25.0,
        }
    }
}

impl PhongMaterial {
    /// Create a material from explicit coefficients.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Create the default material with a different diffuse color.
    pub fn with_diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }
}
