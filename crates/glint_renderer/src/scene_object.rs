//! The scene object contract and the shared Phong shading model.

use glint_core::{Color, PhongMaterial};
use glint_math::{normalize, reflect, Ray, Vec3};

use crate::Scene;

/// A ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point on the surface hit by the ray
    pub cross_point: Vec3,
    /// Ray parameter of the hit, measured from the ray origin
    pub distance: f32,
}

/// A geometric surface that can be placed in a scene.
pub trait SceneObject: Send + Sync {
    /// Test the ray against this surface.
    ///
    /// Returns the nearest hit at least `EPSILON` along the ray, or `None`.
    fn trace(&self, ray: &Ray) -> Option<Intersection>;

    /// Unit outward normal at a point known to lie on the surface.
    fn get_normal(&self, cross_point: Vec3) -> Vec3;

    /// Shading attributes of this surface.
    fn material(&self) -> &PhongMaterial;
}

/// Phong color evaluation, shared by every `SceneObject`.
///
/// Implemented once for all objects so that individual surfaces cannot
/// change how they are lit.
pub trait PhongShading {
    /// Color at `cross_point` seen along `obs_vector`, lit by the scene light.
    ///
    /// The ambient term is always applied. Diffuse, specular and the light's
    /// own ambient contribution are added only when the light is in front of
    /// the surface. No occlusion test is made and the result is not clamped.
    fn get_color(&self, cross_point: Vec3, obs_vector: Vec3, scene: &Scene) -> Color;
}

impl<T: SceneObject + ?Sized> PhongShading for T {
    fn get_color(&self, cross_point: Vec3, obs_vector: Vec3, scene: &Scene) -> Color {
        let material = self.material();
        let light = scene.light();

        let mut color = material.ambient * scene.ambient();

        let normal = self.get_normal(cross_point);
        let light_vector = normalize(light.position() - cross_point);
        let n_dot_l = light_vector.dot(normal);

        let reflection_vector = normalize(reflect(-light_vector, normal));
        let v_dot_r = reflection_vector.dot(-obs_vector).max(0.0);

        if n_dot_l > 0.0 {
            color += material.diffuse * light.diffuse() * n_dot_l
                + material.specular * light.specular() * v_dot_r.powf(material.shininess)
                + material.ambient * light.ambient();
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Sphere};
    use glint_core::Light;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    fn scene_with_light(light: Vec3, material: PhongMaterial) -> Scene {
        let sphere = Sphere::with_material(Vec3::ZERO, 1.0, material);
        Scene::new(
            vec![Box::new(sphere)],
            Light::new(light),
            Camera::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO),
        )
    }

    #[test]
    fn test_light_behind_surface_is_ambient_only() {
        let material = PhongMaterial {
            ambient: Color::new(0.5, 0.25, 1.0),
            ..Default::default()
        };
        // Light on the far side of the sphere from the hit point
        let scene = scene_with_light(Vec3::new(0.0, 0.0, 5.0), material);
        let object = &scene.objects()[0];

        let color = object.get_color(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, &scene);
        assert_eq!(color, material.ambient * scene.ambient());
    }

    #[test]
    fn test_light_grazing_surface_is_ambient_only() {
        let material = PhongMaterial {
            ambient: Color::ONE,
            ..Default::default()
        };
        // Light lies in the tangent plane at the hit point: n_dot_l == 0
        let scene = scene_with_light(Vec3::new(5.0, 0.0, -1.0), material);
        let object = &scene.objects()[0];

        let color = object.get_color(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, &scene);
        assert_eq!(color, Color::splat(0.1));
    }

    #[test]
    fn test_head_on_light() {
        // Light, eye and normal all aligned: n_dot_l = v_dot_r = 1
        let scene = scene_with_light(Vec3::new(0.0, 0.0, -5.0), PhongMaterial::default());
        let object = &scene.objects()[0];

        let color = object.get_color(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, &scene);

        // diffuse (0.6,0.7,0.8)*(0,1,1) + specular (0.8,0.8,0.8)*(1,1,0)
        assert!(approx_eq(color, Color::new(0.8, 1.5, 0.8)), "{:?}", color);
    }

    #[test]
    fn test_specular_vanishes_when_reflection_points_away() {
        let material = PhongMaterial::with_diffuse(Color::ZERO);
        // Light to the side; the eye looks back along the reflected direction
        // rather than into it, so v_dot_r clamps to zero
        let scene = scene_with_light(Vec3::new(0.0, 5.0, -5.0), material);
        let object = &scene.objects()[0];

        let hit = Vec3::new(0.0, 0.0, -1.0);
        let light_vector = normalize(Vec3::new(0.0, 5.0, -4.0));
        let reflected = normalize(reflect(-light_vector, Vec3::NEG_Z));

        let color = object.get_color(hit, reflected, &scene);
        assert!(approx_eq(color, Color::ZERO), "{:?}", color);
    }

    #[test]
    fn test_light_ambient_added_when_lit() {
        let material = PhongMaterial::new(Color::ONE, Color::ZERO, Color::ZERO, 25.0);
        let sphere = Sphere::with_material(Vec3::ZERO, 1.0, material);
        let light = Light::new(Vec3::new(0.0, 0.0, -5.0)).with_colors(
            Color::splat(0.3),
            Color::ZERO,
            Color::ZERO,
        );
        let scene = Scene::new(
            vec![Box::new(sphere)],
            light,
            Camera::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO),
        );

        let color = scene.objects()[0].get_color(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, &scene);
        assert!(approx_eq(color, Color::splat(0.4)), "{:?}", color);
    }
}
