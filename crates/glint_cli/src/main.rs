// Render a scene description to PNG.
// Run with: cargo run --release --bin glint -- [scene.json] [output.png]

use anyhow::{Context, Result};
use glint_core::{load_scene_description, RenderSettings};
use glint_renderer::{Camera, Color, Light, PhongMaterial, RayTracer, Scene, Sphere, Vec3};
use std::env;
use std::path::PathBuf;
use std::time::Instant;

const DEFAULT_OUTPUT: &str = "render.png";

/// Built-in scene used when no description is given.
fn demo_scene() -> Scene {
    let main = Sphere::new(Vec3::ZERO, 1.0);
    let side = Sphere::with_material(
        Vec3::new(1.5, -0.5, 1.0),
        0.5,
        PhongMaterial::new(
            Color::new(0.3, 0.1, 0.1),
            Color::new(0.9, 0.2, 0.2),
            Color::splat(0.5),
            10.0,
        ),
    );

    Scene::new(
        vec![Box::new(main), Box::new(side)],
        Light::new(Vec3::new(2.0, 2.0, -2.0)),
        Camera::new(Vec3::new(0.0, 0.0, -3.0), Vec3::ZERO),
    )
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("Usage: {} [scene.json] [output.png]", args[0]);
        println!("Without a scene file the built-in demo scene is rendered.");
        return Ok(());
    }

    let (scene, settings) = match args.get(1) {
        Some(path) => {
            let description = load_scene_description(path)
                .with_context(|| format!("Failed to load scene {}", path))?;
            (Scene::from_description(&description), description.render)
        }
        None => {
            log::info!("No scene given, rendering the demo scene");
            (demo_scene(), RenderSettings::default())
        }
    };

    let output = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let start = Instant::now();
    let image = RayTracer::new(&scene)
        .generate_image_parallel(&settings)
        .context("Render failed")?;
    log::info!("Total render time {:?}", start.elapsed());

    image
        .save_png(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
