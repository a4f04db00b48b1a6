//! Scene container: objects, the light and the camera.

use glint_core::description::{ObjectDescription, SceneDescription};
use glint_core::{Color, Light};

use crate::{Camera, SceneObject, Sphere};

/// Everything the ray tracer needs to render an image.
///
/// The scene owns its objects, light and camera. It is built once before
/// rendering and is only read while rendering.
pub struct Scene {
    objects: Vec<Box<dyn SceneObject>>,
    light: Light,
    camera: Camera,
    ambient: Color,
    background: Color,
}

impl Scene {
    /// Create a scene with the default ambient (0.1 grey) and black background.
    pub fn new(objects: Vec<Box<dyn SceneObject>>, light: Light, camera: Camera) -> Self {
        Self {
            objects,
            light,
            camera,
            ambient: Color::splat(0.1),
            background: Color::ZERO,
        }
    }

    /// Build a scene from a loaded description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let camera = Camera::with_settings(
            description.camera.position,
            description.camera.look_at,
            description.camera.settings,
        );

        let objects = description
            .objects
            .iter()
            .map(|object| -> Box<dyn SceneObject> {
                match object {
                    ObjectDescription::Sphere(sphere) => Box::new(Sphere::with_material(
                        sphere.center,
                        sphere.radius,
                        sphere.material,
                    )),
                }
            })
            .collect();

        Self::new(objects, description.light, camera)
            .with_ambient(description.ambient)
            .with_background(description.background)
    }

    /// Set the scene-wide ambient light.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Set the color returned for rays that hit nothing.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Append an object. Objects are scanned in insertion order.
    pub fn add_object(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
