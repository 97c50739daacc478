//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/demo.json

use std::env;

use whitted_core::{load_scene, Geometry};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/demo.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let (spheres, rectangles) = scene.geometry_breakdown();
            println!("\n=== Scene: {} ===", path);
            println!("Spheres: {}", spheres);
            println!("Rectangles: {}", rectangles);
            println!("Lights: {}", scene.light_count());

            println!("\n--- Geometry ---");
            for (i, geometry) in scene.geometry.iter().enumerate() {
                match geometry {
                    Geometry::Sphere(s) => println!(
                        "  [{}] sphere at ({:.2}, {:.2}, {:.2}) r={:.2}",
                        i, s.center.x, s.center.y, s.center.z, s.radius
                    ),
                    Geometry::Rectangle(r) => println!(
                        "  [{}] rectangle p1=({:.2}, {:.2}, {:.2}) p3=({:.2}, {:.2}, {:.2})",
                        i, r.p1.x, r.p1.y, r.p1.z, r.p3.x, r.p3.y, r.p3.z
                    ),
                }
                let m = geometry.material();
                println!(
                    "       ka={:.2} kd={:.2} ks={:.2} pc={:.1}",
                    m.ka, m.kd, m.ks, m.phong_exponent
                );
            }

            println!("\n--- Outputs ---");
            for output in &scene.outputs {
                println!(
                    "  {:?} {}x{} fov={:.1} two-sided={}",
                    output.filename, output.width, output.height, output.fov, output.two_sided
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
