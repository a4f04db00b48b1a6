//! Pinhole camera mapping pixel indices to points on the view plane.

use glint_core::CameraSettings;
use glint_math::{normalize, Vec3};

/// World up axis used to orient the camera.
const WORLD_UP: Vec3 = Vec3::Y;

/// Camera for generating rays into the scene.
///
/// Everything except the two placement points is derived once in the
/// constructor and never changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
    settings: CameraSettings,

    // Derived at construction
    direction: Vec3,
    up: Vec3,
    world_width: f32,
    world_height: f32,
    starting_point: Vec3,
    translation_x: Vec3,
    translation_y: Vec3,
}

impl Camera {
    /// Create a camera with the default 700x500, 45 degree settings.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self::with_settings(position, look_at, CameraSettings::default())
    }

    /// Create a camera with explicit resolution and lens settings.
    ///
    /// A camera whose view direction is zero or parallel to the world up
    /// axis has an undefined orientation; its derived vectors are NaN.
    pub fn with_settings(position: Vec3, look_at: Vec3, settings: CameraSettings) -> Self {
        let direction = normalize(look_at - position);
        // Orthogonalize world up against the view direction
        let up = normalize(direction.cross(WORLD_UP).cross(direction));

        let pixel_width = settings.pixel_width as f32;
        let pixel_height = settings.pixel_height as f32;
        let fov = settings.field_of_view.to_radians();
        let world_height = 2.0 * (fov / 2.0).tan() * settings.near_plane;
        let world_width = settings.aspect_ratio() * world_height;

        let center = position + direction * settings.near_plane;
        let right = normalize(up.cross(direction));

        let translation_x = right * -(world_width / pixel_width);
        let translation_y = up * -(world_height / pixel_height);
        let starting_point = center + right * (world_width / 2.0) + up * (world_height / 2.0);

        Self {
            position,
            look_at,
            settings,
            direction,
            up,
            world_width,
            world_height,
            starting_point,
            translation_x,
            translation_y,
        }
    }

    /// World-space point on the view plane for pixel column `x`, row `y`.
    ///
    /// Pixel (0, 0) is the top-left corner of the view plane.
    #[inline]
    pub fn get_world_pixel(&self, x: u32, y: u32) -> Vec3 {
        self.starting_point + self.translation_x * x as f32 + self.translation_y * y as f32
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn pixel_width(&self) -> u32 {
        self.settings.pixel_width
    }

    pub fn pixel_height(&self) -> u32 {
        self.settings.pixel_height
    }

    /// Unit view direction.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Unit up vector, orthogonal to the view direction.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View plane size in world units as (width, height).
    pub fn world_size(&self) -> (f32, f32) {
        (self.world_width, self.world_height)
    }

    /// World position of pixel (0, 0).
    pub fn starting_point(&self) -> Vec3 {
        self.starting_point
    }

    /// Per-pixel step vectors along a row and down a column.
    pub fn translation(&self) -> (Vec3, Vec3) {
        (self.translation_x, self.translation_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn demo_camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO)
    }

    #[test]
    fn test_camera_basis() {
        let camera = demo_camera();

        assert_eq!(camera.direction(), Vec3::Z);
        assert!(approx_eq(camera.up(), Vec3::Y));
        assert!(camera.up().dot(camera.direction()).abs() < 1e-6);
        assert_eq!(camera.pixel_width(), 700);
        assert_eq!(camera.pixel_height(), 500);
    }

    #[test]
    fn test_up_is_orthogonalized() {
        // Looking down at an angle: up must tilt to stay perpendicular
        let camera = Camera::new(Vec3::new(0.0, 3.0, -3.0), Vec3::ZERO);
        let up = camera.up();

        assert!(up.dot(camera.direction()).abs() < 1e-6);
        assert!((up.length() - 1.0).abs() < 1e-6);
        assert!(up.y > 0.0);
    }

    #[test]
    fn test_view_plane_size() {
        let camera = demo_camera();
        let (width, height) = camera.world_size();

        let expected_height = 2.0 * (22.5_f32).to_radians().tan();
        assert!((height - expected_height).abs() < 1e-6);
        assert!((width - 1.4 * expected_height).abs() < 1e-5);
    }

    #[test]
    fn test_starting_point_is_top_left() {
        let camera = demo_camera();
        let (width, height) = camera.world_size();

        assert_eq!(camera.get_world_pixel(0, 0), camera.starting_point());

        // Right vector is +X for a camera looking down +Z with +Y up
        let expected = Vec3::new(width / 2.0, height / 2.0, -2.0);
        assert!(approx_eq(camera.starting_point(), expected));
    }

    #[test]
    fn test_world_pixel_spans_view_plane() {
        let camera = demo_camera();
        let (width, height) = camera.world_size();

        // Center pixel lands on the view plane center
        let center = camera.get_world_pixel(350, 250);
        assert!(approx_eq(center, Vec3::new(0.0, 0.0, -2.0)));

        // One past the last pixel is the opposite corner
        let corner = camera.get_world_pixel(700, 500);
        assert!(approx_eq(corner, Vec3::new(-width / 2.0, -height / 2.0, -2.0)));
    }

    #[test]
    fn test_world_pixel_steps() {
        let camera = demo_camera();
        let (tx, ty) = camera.translation();

        let a = camera.get_world_pixel(10, 20);
        assert!(approx_eq(camera.get_world_pixel(11, 20) - a, tx));
        assert!(approx_eq(camera.get_world_pixel(10, 21) - a, ty));
    }

    #[test]
    fn test_custom_settings() {
        let settings = CameraSettings::default()
            .with_resolution(64, 64)
            .with_lens(90.0, 2.0);
        let camera = Camera::with_settings(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), settings);
        let (width, height) = camera.world_size();

        // tan(45) * 2 * near
        assert!((height - 4.0).abs() < 1e-5);
        assert!((width - 4.0).abs() < 1e-5);
        assert!(approx_eq(camera.get_world_pixel(32, 32), Vec3::new(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_degenerate_orientation_is_nan() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0));
        assert!(camera.up().is_nan());
        assert!(camera.get_world_pixel(0, 0).is_nan());
    }
}
