//! Scene description types for Datlight.
//!
//! This module defines the renderer-agnostic scene: a camera, an ordered
//! list of point lights and an ordered list of primitives. A scene is
//! assembled once and stays read-only while it is rendered.

use datlight_math::{Plane, Vec3};
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};

/// Surface color used for spheres that don't specify one.
pub const DEFAULT_SPHERE_COLOR: Vec3 = Vec3::new(0.8, 0.5, 0.7);

fn default_sphere_color() -> Vec3 {
    DEFAULT_SPHERE_COLOR
}

/// Pinhole camera placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneCamera {
    /// Eye position
    pub position: Vec3,

    /// Point the camera looks at
    pub look_at: Vec3,

    /// Approximate up direction (re-orthogonalized by the renderer)
    pub up: Vec3,

    /// Field of view in degrees. Carried for scene files, not used for ray generation.
    pub fov: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 20.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov: 30.0,
        }
    }
}

impl SceneCamera {
    /// Check that the camera spans a usable view basis.
    pub fn validate(&self) -> SceneResult<()> {
        let forward = (self.look_at - self.position)
            .try_normalize()
            .ok_or(SceneError::DegenerateCamera("look_at coincides with position"))?;
        forward
            .cross(self.up)
            .try_normalize()
            .ok_or(SceneError::DegenerateCamera("up is parallel to the view direction"))?;
        Ok(())
    }
}

/// A point light. It has no intensity or color, only a position to
/// cast shadow rays toward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// A renderable primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// A sphere with a constant surface color.
    Sphere {
        center: Vec3,
        radius: f32,
        #[serde(default = "default_sphere_color")]
        color: Vec3,
    },

    /// An infinite checkerboard plane through three points.
    Surface { points: [Vec3; 3] },
}

impl Primitive {
    /// Sphere with the default surface color.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere {
            center,
            radius,
            color: DEFAULT_SPHERE_COLOR,
        }
    }

    /// Checkerboard plane through `a`, `b` and `c`.
    pub fn surface(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::Surface { points: [a, b, c] }
    }

    /// Check that the primitive describes real geometry.
    ///
    /// `index` is the primitive's position in the scene, used for error reporting.
    pub fn validate(&self, index: usize) -> SceneResult<()> {
        match *self {
            Primitive::Sphere { radius, .. } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(SceneError::InvalidSphere { index, radius });
                }
            }
            Primitive::Surface { points: [a, b, c] } => {
                if Plane::from_points(a, b, c).is_none() {
                    return Err(SceneError::DegenerateSurface { index });
                }
            }
        }
        Ok(())
    }
}

/// A complete scene: camera, lights and primitives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub camera: SceneCamera,

    /// Lights in evaluation order
    #[serde(default)]
    pub lights: Vec<Light>,

    /// Primitives in intersection order
    #[serde(default)]
    pub objects: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene with the default camera.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The built-in scene: a sphere floating above a checkerboard ground,
    /// lit from the upper right.
    pub fn default_scene() -> Self {
        Self::new("default")
            .with_light(Light::new(Vec3::new(20.0, 20.0, 20.0)))
            .with_object(Primitive::sphere(Vec3::new(-2.0, 4.0, -10.0), 3.0))
            .with_object(Primitive::surface(
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ))
    }

    /// Replace the camera.
    pub fn with_camera(mut self, camera: SceneCamera) -> Self {
        self.camera = camera;
        self
    }

    /// Append a light.
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Append a primitive.
    pub fn with_object(mut self, object: Primitive) -> Self {
        self.objects.push(object);
        self
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Validate the camera and every primitive, failing on the first
    /// malformed one.
    pub fn validate(&self) -> SceneResult<()> {
        self.camera.validate()?;
        self.objects
            .iter()
            .enumerate()
            .try_for_each(|(index, object)| object.validate(index))
    }
}
