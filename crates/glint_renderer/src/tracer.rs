//! Ray tracer: one primary ray per pixel, nearest hit, Phong shading.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use glint_core::{Color, ConfigError, RenderSettings};
use glint_math::{normalize, Ray, Vec3};
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::{ImageBuffer, PhongShading, Scene, SceneObject};

/// Errors that can stop a parallel render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Render cancelled")]
    Cancelled,

    #[error("Invalid render settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// The nearest object along a ray.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a dyn SceneObject,
    pub distance: f32,
    pub cross_point: Vec3,
}

/// Renders a scene it borrows but never modifies.
#[derive(Clone, Copy)]
pub struct RayTracer<'a> {
    scene: &'a Scene,
}

impl<'a> RayTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Render the whole image on the calling thread.
    pub fn generate_image(&self) -> ImageBuffer {
        let camera = self.scene.camera();
        let (width, height) = (camera.pixel_width(), camera.pixel_height());
        let mut image = ImageBuffer::new(width, height);

        let start = Instant::now();
        for y in 0..height {
            for x in 0..width {
                image.set(x, y, self.render_pixel(x, y));
            }
        }
        log::info!("Rendered {}x{} in {:?}", width, height, start.elapsed());

        image
    }

    /// Render the image in parallel buckets.
    ///
    /// The result is identical to `generate_image`.
    pub fn generate_image_parallel(&self, settings: &RenderSettings) -> RenderResult<ImageBuffer> {
        self.generate_image_cancellable(settings, &AtomicBool::new(false))
    }

    /// Render in parallel buckets, stopping early once `cancel` is set.
    ///
    /// The flag is checked before each bucket starts; buckets already in
    /// flight finish. A cancelled render returns no partial image.
    pub fn generate_image_cancellable(
        &self,
        settings: &RenderSettings,
        cancel: &AtomicBool,
    ) -> RenderResult<ImageBuffer> {
        settings.validate()?;

        let camera = self.scene.camera();
        let (width, height) = (camera.pixel_width(), camera.pixel_height());
        let buckets = generate_buckets(width, height, settings.bucket_size);

        log::info!(
            "Rendering {}x{} ({} objects) in {} buckets",
            width,
            height,
            self.scene.len(),
            buckets.len()
        );
        let start = Instant::now();

        let render_all = || -> RenderResult<Vec<BucketResult>> {
            buckets
                .par_iter()
                .map(|bucket| {
                    if cancel.load(Ordering::Relaxed) {
                        return Err(RenderError::Cancelled);
                    }
                    let pixels = render_bucket(self, bucket);
                    log::debug!("Bucket {} done ({} px)", bucket.index, pixels.len());
                    Ok(BucketResult::new(*bucket, pixels))
                })
                .collect()
        };

        let results = match settings.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(render_all)?,
            None => render_all()?,
        };

        let mut image = ImageBuffer::new(width, height);
        for result in results {
            let bucket = result.bucket;
            let mut pixels = result.pixels.into_iter();
            for y in bucket.y..bucket.y + bucket.height {
                for x in bucket.x..bucket.x + bucket.width {
                    if let Some(color) = pixels.next() {
                        image.set(x, y, color);
                    }
                }
            }
        }

        log::info!("Rendered {}x{} in {:?}", width, height, start.elapsed());
        Ok(image)
    }

    /// Color of pixel (x, y): the shaded nearest hit, or the background.
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let camera = self.scene.camera();
        let world_point = camera.get_world_pixel(x, y);
        let ray = Ray::new(world_point, normalize(world_point - camera.position()));

        match self.closest_hit(&ray) {
            Some(hit) => hit.object.get_color(hit.cross_point, ray.direction(), self.scene),
            None => self.scene.background(),
        }
    }

    /// Find the nearest object along `ray`.
    ///
    /// Only a strictly smaller distance replaces the current best, so on an
    /// exact tie the object listed first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit<'a>> {
        let mut closest: Option<Hit<'a>> = None;

        for object in self.scene.objects() {
            let Some(intersection) = object.trace(ray) else {
                continue;
            };
            let nearer = closest.map_or(true, |best| intersection.distance < best.distance);
            if nearer {
                closest = Some(Hit {
                    object: object.as_ref(),
                    distance: intersection.distance,
                    cross_point: intersection.cross_point,
                });
            }
        }

        closest
    }
}
