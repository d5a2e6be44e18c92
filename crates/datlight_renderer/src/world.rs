//! The renderable world: camera, lights and scene objects.

use datlight_core::{Light, Primitive, Scene, SceneCamera, SceneError, SceneResult};
use datlight_math::Vec3;

use crate::{SceneObject, Sphere, Surface};

/// Everything a tracer reads while rendering. Built once, never mutated
/// while workers are running.
pub struct World {
    camera: SceneCamera,
    lights: Vec<Light>,
    objects: Vec<Box<dyn SceneObject>>,
}

impl World {
    /// Create an empty world viewed through `camera`.
    pub fn new(camera: SceneCamera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Build a world from a scene description.
    pub fn from_scene(scene: &Scene) -> SceneResult<Self> {
        scene.validate()?;

        let mut world = Self::new(scene.camera.clone());
        for light in &scene.lights {
            world.add_light(*light);
        }

        for (index, primitive) in scene.objects.iter().enumerate() {
            match *primitive {
                Primitive::Sphere {
                    center,
                    radius,
                    color,
                } => world.add(Box::new(Sphere::new(center, radius, color))),
                Primitive::Surface { points: [a, b, c] } => {
                    let surface = Surface::from_points(a, b, c)
                        .ok_or(SceneError::DegenerateSurface { index })?;
                    world.add(Box::new(surface));
                }
            }
        }

        log::debug!(
            "Built world '{}' with {} objects and {} lights",
            scene.name,
            world.objects.len(),
            world.lights.len()
        );

        Ok(world)
    }

    /// Add a light. Lights are evaluated in insertion order.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add an object.
    pub fn add(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    pub fn camera(&self) -> &SceneCamera {
        &self.camera
    }

    /// The eye position, which the resolver measures hit distances from.
    pub fn camera_position(&self) -> Vec3 {
        self.camera.position
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn objects(&self) -> &[Box<dyn SceneObject>] {
        &self.objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_from_default_scene() {
        let world = World::from_scene(&Scene::default_scene()).unwrap();

        assert_eq!(world.objects().len(), 2);
        assert_eq!(world.lights().len(), 1);
        assert_eq!(world.camera_position(), Vec3::new(0.0, 5.0, 20.0));
        assert_eq!(world.objects()[1].normal(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_world_rejects_invalid_scene() {
        let scene = Scene::new("bad").with_object(Primitive::sphere(Vec3::ZERO, -2.0));
        assert!(World::from_scene(&scene).is_err());
    }

    #[test]
    fn test_world_rejects_degenerate_camera() {
        let scene = Scene::new("top_down")
            .with_camera(SceneCamera {
                position: Vec3::new(0.0, 5.0, 0.0),
                look_at: Vec3::ZERO,
                ..Default::default()
            })
            .with_object(Primitive::surface(
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ));

        assert!(matches!(
            World::from_scene(&scene),
            Err(SceneError::DegenerateCamera(_))
        ));
    }
}
