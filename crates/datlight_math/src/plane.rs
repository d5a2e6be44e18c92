use crate::Vec3;

/// An infinite plane `normal · p = k`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed offset along the normal
    pub k: f32,
}

impl Plane {
    /// Build the plane through three points.
    ///
    /// The normal is `(b - a) × (c - a)`, normalized. Returns `None` if the
    /// points are collinear.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            k: normal.dot(a),
        })
    }
}
