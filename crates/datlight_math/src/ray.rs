use crate::{Interval, Plane, Vec3};

/// Hits closer than this to a ray's origin (in world units) are ignored.
///
/// Keeps shadow and reflection rays from re-hitting the surface they start on.
pub const SELF_HIT_EPSILON: f32 = 1e-3;

/// A half-line in 3D space with origin and direction.
///
/// The direction is not required to be normalized. Intersection tests
/// report world-space hit points rather than ray parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `origin` and passing through `target`.
    pub fn through(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, target - origin)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Range of ray parameters that count as a hit.
    fn hit_range(&self) -> Interval {
        let length = self.direction.length();
        if length <= f32::EPSILON || !length.is_finite() {
            return Interval::EMPTY;
        }
        Interval::new(SELF_HIT_EPSILON / length, f32::INFINITY)
    }

    /// Intersect the ray with a sphere.
    ///
    /// Returns both intersection points in ray order. When only the far
    /// root lies in front of the origin (the origin is inside the sphere)
    /// both entries are that point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<(Vec3, Vec3)> {
        let range = self.hit_range();
        let oc = center - self.origin;
        let a = self.direction.length_squared();
        let h = self.direction.dot(oc);
        let c = oc.length_squared() - radius * radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (h - sqrtd) / a;
        let far = (h + sqrtd) / a;

        match (range.surrounds(near), range.surrounds(far)) {
            (true, true) => Some((self.at(near), self.at(far))),
            (false, true) => {
                let p = self.at(far);
                Some((p, p))
            }
            _ => None,
        }
    }

    /// Intersect the ray with an infinite plane.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() <= f32::EPSILON {
            return None;
        }

        let t = (plane.k - plane.normal.dot(self.origin)) / denom;
        self.hit_range().surrounds(t).then(|| self.at(t))
    }
}
