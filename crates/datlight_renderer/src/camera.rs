//! Camera for primary ray generation.

use crate::Ray;
use datlight_core::SceneCamera;
use datlight_math::Vec3;

/// Pinhole camera that maps pixels to world-space rays.
///
/// Pixels are spaced `pixel_scale` apart on an image plane one unit in
/// front of the eye. Row indices grow downward, matching the framebuffer.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    position: Vec3,
    pixel_scale: f32,

    // Orthonormal basis
    forward: Vec3,
    right: Vec3,
    down: Vec3,
}

impl Camera {
    /// Build the camera basis for an image of `width` x `height` pixels.
    pub fn new(camera: &SceneCamera, width: u32, height: u32, pixel_scale: f32) -> Self {
        let forward = (camera.look_at - camera.position).normalize();
        let right = forward.cross(camera.up).normalize();
        let down = -right.cross(forward).normalize();

        Self {
            image_width: width,
            image_height: height,
            position: camera.position,
            pixel_scale,
            forward,
            right,
            down,
        }
    }

    /// Generate the ray through pixel column `x`, row `y`.
    ///
    /// The direction is not normalized.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let half_width = (self.image_width / 2) as f32;
        let half_height = (self.image_height / 2) as f32;

        let x_offset = self.right * ((x as f32 - half_width) * self.pixel_scale);
        let y_offset = self.down * ((y as f32 - half_height) * self.pixel_scale);

        Ray::new(self.position, self.forward + x_offset + y_offset)
    }
}
