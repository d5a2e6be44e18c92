//! SceneObject trait for ray-surface queries.

use crate::{Color, Ray};
use datlight_math::Vec3;

/// Trait for surfaces that can be placed in a [`World`](crate::World).
pub trait SceneObject: Send + Sync {
    /// Intersect a ray with this object.
    ///
    /// Returns the hit point nearest to the ray's origin, or `None`.
    fn intersect(&self, ray: &Ray) -> Option<Vec3>;

    /// Surface normal at a point on the object (not necessarily unit length).
    fn normal(&self, point: Vec3) -> Vec3;

    /// Surface color at a point on the object.
    fn color_at(&self, point: Vec3) -> Color;

    /// How much this object lets through when it casts a shadow.
    fn transmittivity(&self) -> f32;

    /// Weight of the reflected bounce in this object's final color.
    fn reflectivity(&self) -> f32;
}
