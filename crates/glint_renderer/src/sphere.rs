//! Sphere primitive for ray tracing.

use glint_core::PhongMaterial;
use glint_math::{normalize, Ray, Vec3, EPSILON};

use crate::scene_object::{Intersection, SceneObject};

/// A sphere primitive.
///
/// The radius is not validated; a zero or negative radius goes through the
/// same quadratic solve as any other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    position: Vec3,
    radius: f32,
    material: PhongMaterial,
}

impl Sphere {
    /// Create a new sphere with the default material.
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self::with_material(position, radius, PhongMaterial::default())
    }

    /// Create a new sphere with explicit shading attributes.
    pub fn with_material(position: Vec3, radius: f32, material: PhongMaterial) -> Self {
        Self {
            position,
            radius,
            material,
        }
    }

    /// Center of the sphere.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl SceneObject for Sphere {
    fn trace(&self, ray: &Ray) -> Option<Intersection> {
        let offset = ray.origin() - self.position;

        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(offset);
        let c = offset.dot(offset) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let denominator = 1.0 / (2.0 * a);

        let root = if discriminant > 0.0 {
            let sqrtd = discriminant.sqrt();
            let near = (-b - sqrtd) * denominator;
            let far = (-b + sqrtd) * denominator;

            // Fall back to the far root when the near one is behind the origin
            if near >= EPSILON {
                near
            } else if far >= EPSILON {
                far
            } else {
                return None;
            }
        } else {
            let root = -b * denominator;
            if root < EPSILON {
                return None;
            }
            root
        };

        Some(Intersection {
            cross_point: ray.at(root),
            distance: root,
        })
    }

    fn get_normal(&self, cross_point: Vec3) -> Vec3 {
        normalize(cross_point - self.position)
    }

    fn material(&self) -> &PhongMaterial {
        &self.material
    }
}
