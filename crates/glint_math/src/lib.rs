//! Glint math - vector helpers and rays for the Phong ray tracer.

// Re-export glam for convenience
pub use glam::*;

mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{normalize, reflect, EPSILON};
