//! Scene file loading.
//!
//! Scenes are stored as JSON. Primitives are tagged by `"type"`:
//!
//! ```json
//! {
//!   "camera": { "position": [0, 5, 20], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 30 },
//!   "lights": [{ "position": [20, 20, 20] }],
//!   "objects": [
//!     { "type": "sphere", "center": [-2, 4, -10], "radius": 3 },
//!     { "type": "surface", "points": [[1, 0, 1], [1, 0, 0], [0, 0, 1]] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::Scene;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {index}: sphere radius must be positive, got {radius}")]
    InvalidSphere { index: usize, radius: f32 },

    #[error("Object {index}: surface points are collinear")]
    DegenerateSurface { index: usize },

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene from a JSON file.
///
/// If the file doesn't name the scene, the file stem is used.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::debug!("Loading scene from {:?}", path);

    let text = fs::read_to_string(path)?;
    let mut scene = load_scene_from_str(&text)?;

    if scene.name.is_empty() {
        scene.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
    }

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let scene: Scene = serde_json::from_str(text)?;
    scene.validate()?;

    log::debug!(
        "Parsed scene '{}': {} objects, {} lights",
        scene.name,
        scene.object_count(),
        scene.light_count()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Primitive, DEFAULT_SPHERE_COLOR};
    use datlight_math::Vec3;

    const DEFAULT_JSON: &str = r#"{
        "camera": { "position": [0, 5, 20], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 30 },
        "lights": [{ "position": [20, 20, 20] }],
        "objects": [
            { "type": "sphere", "center": [-2, 4, -10], "radius": 3 },
            { "type": "surface", "points": [[1, 0, 1], [1, 0, 0], [0, 0, 1]] }
        ]
    }"#;

    #[test]
    fn test_load_from_str_matches_default_scene() {
        let scene = load_scene_from_str(DEFAULT_JSON).unwrap();
        let expected = Scene::default_scene();

        assert_eq!(scene.camera, expected.camera);
        assert_eq!(scene.lights, expected.lights);
        assert_eq!(scene.objects, expected.objects);
    }

    #[test]
    fn test_sphere_color_override() {
        let scene = load_scene_from_str(
            r#"{ "objects": [{ "type": "sphere", "center": [0, 0, 0], "radius": 1, "color": [1, 0, 0] }] }"#,
        )
        .unwrap();

        assert_eq!(
            scene.objects[0],
            Primitive::Sphere {
                center: Vec3::ZERO,
                radius: 1.0,
                color: Vec3::X,
            }
        );
        assert_ne!(Vec3::X, DEFAULT_SPHERE_COLOR);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let scene = load_scene_from_str("{}").unwrap();

        assert_eq!(scene.object_count(), 0);
        assert_eq!(scene.light_count(), 0);
        assert_eq!(scene.camera.fov, 30.0);
    }

    #[test]
    fn test_unknown_primitive_type() {
        let result = load_scene_from_str(r#"{ "objects": [{ "type": "cube" }] }"#);
        assert!(matches!(result, Err(SceneError::Json(_))));
    }

    #[test]
    fn test_validation_runs_on_load() {
        let result = load_scene_from_str(
            r#"{ "objects": [{ "type": "sphere", "center": [0, 0, 0], "radius": -1 }] }"#,
        );
        assert!(matches!(result, Err(SceneError::InvalidSphere { index: 0, .. })));
    }

    #[test]
    fn test_top_down_camera_rejected_on_load() {
        let result = load_scene_from_str(
            r#"{ "camera": { "position": [0, 5, 0], "look_at": [0, 0, 0], "up": [0, 1, 0] } }"#,
        );
        assert!(matches!(result, Err(SceneError::DegenerateCamera(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_scene("does/not/exist.json");
        assert!(matches!(result, Err(SceneError::Io(_))));
    }

    #[test]
    fn test_load_scene_file_names_scene() {
        let path = std::env::temp_dir().join("datlight_loader_test_scene.json");
        fs::write(&path, DEFAULT_JSON).unwrap();

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.name, "datlight_loader_test_scene");
        assert_eq!(scene.object_count(), 2);

        fs::remove_file(&path).ok();
    }
}
