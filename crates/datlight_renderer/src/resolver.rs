//! Nearest-hit resolution over all objects in a world.
//!
//! Every object is tested (no acceleration structure). Candidates are
//! ranked by their distance to the camera position, for shadow and
//! reflection rays as well as primary rays.

use datlight_math::{Ray, Vec3};

use crate::{SceneObject, World};

/// Two points closer than this are treated as the same point.
pub const POINT_EPSILON: f32 = 1e-4;

/// The object a ray hit and where.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a dyn SceneObject,
    pub point: Vec3,
}

#[inline]
fn coincident(a: Vec3, b: Vec3) -> bool {
    a.distance_squared(b) <= POINT_EPSILON * POINT_EPSILON
}

/// Find the hit closest to the camera along `ray`.
///
/// Candidates at `exclude` (the origin surface point of a shadow ray) or at
/// the camera position are skipped, as are candidates with a degenerate
/// distance to the camera.
pub fn resolve<'a>(world: &'a World, ray: &Ray, exclude: Option<Vec3>) -> Option<Hit<'a>> {
    let eye = world.camera_position();
    let mut closest: Option<(f32, Hit<'a>)> = None;

    for object in world.objects() {
        let Some(point) = object.intersect(ray) else {
            continue;
        };

        if exclude.is_some_and(|p| coincident(p, point)) {
            continue;
        }

        if coincident(point, eye) {
            continue;
        }

        let distance = eye.distance(point);
        if !distance.is_finite() || distance == 0.0 {
            continue;
        }

        if closest.map_or(true, |(best, _)| distance < best) {
            closest = Some((
                distance,
                Hit {
                    object: object.as_ref(),
                    point,
                },
            ));
        }
    }

    closest.map(|(_, hit)| hit)
}
