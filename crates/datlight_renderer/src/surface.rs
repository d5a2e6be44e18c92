//! Infinite checkerboard plane.

use crate::{object::SceneObject, Color, Ray, BLACK, WHITE};
use datlight_math::{Plane, Vec3};

/// An infinite plane with a unit checkerboard pattern.
pub struct Surface {
    plane: Plane,
    base_color: Color,
    other_color: Color,
}

impl Surface {
    pub const TRANSMITTIVITY: f32 = 0.2;
    pub const REFLECTIVITY: f32 = 0.2;

    /// Create the plane through three points. Returns `None` if they are collinear.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        Some(Self {
            plane: Plane::from_points(a, b, c)?,
            base_color: WHITE,
            other_color: BLACK,
        })
    }
}

/// Parity of the unit cell containing `p`, measured on absolute coordinates.
fn checker_parity(p: Vec3) -> u32 {
    let cell = |v: f32| (v.abs() + 0.5).floor() as u32;
    (cell(p.x) + cell(p.y) + cell(p.z)) % 2
}

impl SceneObject for Surface {
    fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        ray.intersect_plane(&self.plane)
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.plane.normal
    }

    fn color_at(&self, point: Vec3) -> Color {
        if checker_parity(point) == 1 {
            self.base_color
        } else {
            self.other_color
        }
    }

    fn transmittivity(&self) -> f32 {
        Self::TRANSMITTIVITY
    }

    fn reflectivity(&self) -> f32 {
        Self::REFLECTIVITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Surface {
        Surface::from_points(
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn test_checkerboard_cells() {
        let surface = ground();

        // 0 + 0 + 0 is even
        assert_eq!(surface.color_at(Vec3::ZERO), BLACK);
        // 1 + 0 + 0 is odd
        assert_eq!(surface.color_at(Vec3::new(1.0, 0.0, 0.0)), WHITE);
        assert_eq!(surface.color_at(Vec3::new(1.0, 0.0, 1.0)), BLACK);
        assert_eq!(surface.color_at(Vec3::new(0.2, 0.0, 2.7)), WHITE);
    }

    #[test]
    fn test_checkerboard_mirrors_across_axes() {
        let surface = ground();

        assert_eq!(
            surface.color_at(Vec3::new(-1.2, 0.0, 3.1)),
            surface.color_at(Vec3::new(1.2, 0.0, 3.1))
        );
        assert_eq!(
            surface.color_at(Vec3::new(2.2, 0.0, -4.4)),
            surface.color_at(Vec3::new(2.2, 0.0, 4.4))
        );
    }

    #[test]
    fn test_surface_normal_is_constant() {
        let surface = ground();

        assert_eq!(surface.normal(Vec3::ZERO), Vec3::Y);
        assert_eq!(surface.normal(Vec3::new(40.0, 0.0, -3.0)), Vec3::Y);
    }

    #[test]
    fn test_surface_hit() {
        let surface = ground();
        let ray = Ray::new(Vec3::new(3.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = surface.intersect(&ray).unwrap();
        assert!((hit - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(surface.transmittivity(), 0.2);
        assert_eq!(surface.reflectivity(), 0.2);
    }

    #[test]
    fn test_collinear_points_rejected() {
        assert!(Surface::from_points(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 3.0)).is_none());
    }
}
