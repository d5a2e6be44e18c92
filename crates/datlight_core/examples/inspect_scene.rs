//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/default.json

use std::env;

use datlight_core::{load_scene, Primitive};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example inspect_scene -- scenes/default.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!(
                "Camera: {:?} -> {:?} (up {:?})",
                scene.camera.position, scene.camera.look_at, scene.camera.up
            );

            println!("\n--- Lights ({}) ---", scene.light_count());
            for (i, light) in scene.lights.iter().enumerate() {
                println!("  [{}] {:?}", i, light.position);
            }

            println!("\n--- Objects ({}) ---", scene.object_count());
            for (i, object) in scene.objects.iter().enumerate() {
                match object {
                    Primitive::Sphere {
                        center,
                        radius,
                        color,
                    } => println!(
                        "  [{}] sphere at {:?}, radius {:.2}, color {:?}",
                        i, center, radius, color
                    ),
                    Primitive::Surface { points } => {
                        println!("  [{}] surface through {:?}", i, points)
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
