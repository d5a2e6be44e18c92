//! Shading: direct light with hard shadows plus a bounded reflective bounce.

use datlight_math::Ray;

use crate::{blend, resolve, scale_lightness, Color, Hit, World, BLACK};

/// Computes the color seen along rays in a world.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    world: &'a World,
    max_depth: u32,
}

impl<'a> Tracer<'a> {
    /// Create a tracer that follows at most `max_depth` reflective bounces.
    pub fn new(world: &'a World, max_depth: u32) -> Self {
        Self { world, max_depth }
    }

    /// Compute the color seen along `ray` at recursion level `depth`.
    ///
    /// Rays that hit nothing are black. While `depth < max_depth` a
    /// reflection ray is cast from the hit point along the surface normal
    /// and its color, dimmed by the surface's reflectivity, is blended on top.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = resolve(self.world, ray, None) else {
            return BLACK;
        };

        let mut color = self.direct_light(&hit);

        if depth < self.max_depth {
            let reflected_ray = Ray::new(hit.point, hit.object.normal(hit.point));
            let reflected = self.trace(&reflected_ray, depth + 1);
            color = blend(
                scale_lightness(reflected, hit.object.reflectivity()),
                color,
            );
        }

        color
    }

    /// Light arriving at a hit point, with hard shadows.
    ///
    /// Only the first light in the world contributes. A shadowed point takes
    /// the blocker's color, dimmed by the blocker's transmittivity.
    fn direct_light(&self, hit: &Hit<'_>) -> Color {
        let Some(light) = self.world.lights().first() else {
            return BLACK;
        };

        let shadow_ray = Ray::through(hit.point, light.position);
        match resolve(self.world, &shadow_ray, Some(hit.point)) {
            None => hit.object.color_at(hit.point),
            Some(blocker) => scale_lightness(
                blocker.object.color_at(hit.point),
                blocker.object.transmittivity(),
            ),
        }
    }
}
