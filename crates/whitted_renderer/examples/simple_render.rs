//! Simple ray tracer example.
//!
//! Builds a small scene in code and saves it to PPM format.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use whitted_renderer::{
    render, Color, Light, Material, OutputConfig, Rectangle, RenderConfig, Scene, Sphere, Vec3,
};

fn main() {
    env_logger::init();

    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!(
        "Scene built in {:?}: {} primitives, {} lights",
        start.elapsed(),
        scene.geometry_count(),
        scene.light_count()
    );

    let output = &scene.outputs[0];
    println!("Rendering {}x{}...", output.width, output.height);

    let start = std::time::Instant::now();
    let image = render(&scene, output, &RenderConfig::default());
    println!("Rendered in {:?}", start.elapsed());

    if let Err(e) = image.save(&output.filename) {
        eprintln!("Failed to save {}: {}", output.filename.display(), e);
        std::process::exit(1);
    }
    println!("Saved to {}", output.filename.display());
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Floor
    scene.add_geometry(Rectangle::new(
        Vec3::new(-6.0, -1.0, 2.0),
        Vec3::new(6.0, -1.0, 2.0),
        Vec3::new(6.0, -1.0, -14.0),
        Vec3::new(-6.0, -1.0, -14.0),
        Arc::new(Material::diffuse(Color::splat(0.6)).with_ambient(Color::splat(0.6), 0.3)),
    ));

    // Back wall
    scene.add_geometry(Rectangle::new(
        Vec3::new(-6.0, -1.0, -14.0),
        Vec3::new(6.0, -1.0, -14.0),
        Vec3::new(6.0, 7.0, -14.0),
        Vec3::new(-6.0, 7.0, -14.0),
        Arc::new(Material::diffuse(Color::new(0.3, 0.4, 0.7)).with_kd(0.8)),
    ));

    // Three main spheres
    scene.add_geometry(Sphere::new(
        Vec3::new(0.0, 0.0, -6.0),
        1.0,
        Arc::new(
            Material::diffuse(Color::new(0.8, 0.2, 0.2))
                .with_ambient(Color::new(0.8, 0.2, 0.2), 0.2)
                .with_specular(Color::ONE, 0.6, 40.0),
        ),
    ));
    scene.add_geometry(Sphere::new(
        Vec3::new(-2.5, 0.0, -7.0),
        1.0,
        Arc::new(Material::diffuse(Color::new(0.2, 0.7, 0.3)).with_specular(Color::ONE, 0.3, 10.0)),
    ));
    scene.add_geometry(Sphere::new(
        Vec3::new(2.5, 0.0, -7.0),
        1.0,
        Arc::new(Material::diffuse(Color::new(0.9, 0.8, 0.3)).with_specular(Color::ONE, 0.9, 200.0)),
    ));

    // Small spheres scattered on the floor
    let mut rng = StdRng::seed_from_u64(7);
    for a in -3..3 {
        let center = Vec3::new(
            a as f64 * 1.5 + 0.6 * rng.gen::<f64>(),
            -0.75,
            -3.5 - 2.0 * rng.gen::<f64>(),
        );
        let albedo = Color::new(rng.gen(), rng.gen(), rng.gen());
        scene.add_geometry(Sphere::new(center, 0.25, Arc::new(Material::diffuse(albedo))));
    }

    scene.add_light(Light::point(Vec3::new(4.0, 6.0, 0.0), Color::splat(0.8), Color::ONE));
    scene.add_light(Light::point(Vec3::new(-5.0, 3.0, -2.0), Color::splat(0.3), Color::splat(0.3)));

    scene.add_output(
        OutputConfig::new("output.ppm", 800, 450)
            .with_camera(Vec3::new(0.0, 1.0, 2.0), Vec3::new(0.0, -0.15, -1.0), Vec3::Y)
            .with_fov(60.0)
            .with_background(Color::new(0.5, 0.7, 1.0))
            .with_ambient(Color::ONE),
    );

    scene
}
