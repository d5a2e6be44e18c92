//! Datlight Core - Scene description for the Datlight ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `SceneCamera`, `Light`, `Primitive`
//! - **Scene loading**: JSON scene files, validated on load
//!
//! # Example
//!
//! ```ignore
//! use datlight_core::{load_scene, Scene};
//!
//! // Load a scene, or fall back to the built-in one
//! let scene = load_scene("scenes/default.json").unwrap_or_else(|_| Scene::default_scene());
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use scene::{Light, Primitive, Scene, SceneCamera, DEFAULT_SPHERE_COLOR};
