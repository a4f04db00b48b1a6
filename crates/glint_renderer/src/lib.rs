//! Glint Renderer - CPU Phong ray tracing.
//!
//! Casts one ray per pixel from a pinhole camera, resolves the nearest hit
//! among the scene objects and shades it with the Phong model. There are no
//! shadow or secondary rays.

mod bucket;
mod camera;
mod image_buffer;
mod scene;
mod scene_object;
mod sphere;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult};
pub use camera::Camera;
pub use image_buffer::{color_to_rgb8, ImageBuffer};
pub use scene::Scene;
pub use scene_object::{Intersection, PhongShading, SceneObject};
pub use sphere::Sphere;
pub use tracer::{Hit, RayTracer, RenderError, RenderResult};

/// Re-export math and scene data types
pub use glint_core::{CameraSettings, Color, Light, PhongMaterial, RenderSettings};
pub use glint_math::{Ray, Vec3, EPSILON};
