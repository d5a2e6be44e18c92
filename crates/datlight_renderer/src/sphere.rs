//! Sphere primitive for ray tracing.

use crate::{object::SceneObject, Color, Ray};
use datlight_math::Vec3;

/// A solid-colored sphere.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
}

impl Sphere {
    pub const TRANSMITTIVITY: f32 = 0.1;
    pub const REFLECTIVITY: f32 = 0.1;

    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color,
        }
    }
}

impl SceneObject for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let (p1, p2) = ray.intersect_sphere(self.center, self.radius)?;

        if ray.origin().distance(p1) < ray.origin().distance(p2) {
            Some(p1)
        } else {
            Some(p2)
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        point - self.center
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn transmittivity(&self) -> f32 {
        Self::TRANSMITTIVITY
    }

    fn reflectivity(&self) -> f32 {
        Self::REFLECTIVITY
    }
}
