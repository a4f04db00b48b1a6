//! Point light source.

use glint_math::Vec3;
use serde::Deserialize;

use crate::material::Color;

/// An immutable point light with Phong color terms.
///
/// A scene has exactly one light. Colors are RGB and are not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "LightFields")]
pub struct Light {
    position: Vec3,
    ambient: Color,
    diffuse: Color,
    specular: Color,
}

impl Light {
    /// Create a light at `position` with the default color terms:
    /// no ambient, cyan diffuse and yellow specular.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ambient: Color::ZERO,
            diffuse: Color::new(0.0, 1.0, 1.0),
            specular: Color::new(1.0, 1.0, 0.0),
        }
    }

    /// Replace all three color terms.
    pub fn with_colors(self, ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            ..self
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn ambient(&self) -> Color {
        self.ambient
    }

    #[inline]
    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    #[inline]
    pub fn specular(&self) -> Color {
        self.specular
    }
}

/// Serialized form of a light; omitted colors fall back to `Light::new`.
#[derive(Deserialize)]
struct LightFields {
    position: Vec3,
    ambient: Option<Color>,
    diffuse: Option<Color>,
    specular: Option<Color>,
}

impl From<LightFields> for Light {
    fn from(fields: LightFields) -> Self {
        let base = Light::new(fields.position);
        base.with_colors(
            fields.ambient.unwrap_or(base.ambient),
            fields.diffuse.unwrap_or(base.diffuse),
            fields.specular.unwrap_or(base.specular),
        )
    }
}
