//! Datlight Renderer - recursive CPU ray tracing.
//!
//! Traces one ray per pixel through a scene of spheres and checkerboard
//! planes with hard shadows and a bounded reflective bounce. Columns of
//! the image are split across a fixed pool of worker threads that write
//! straight into a shared framebuffer.

mod camera;
mod color;
mod dispatcher;
mod framebuffer;
mod object;
mod renderer;
mod resolver;
mod shading;
mod sphere;
mod surface;
mod world;

pub use camera::Camera;
pub use color::{
    blend, hsl_to_rgb, pack_rgb, rgb_to_hsl, scale_lightness, unpack_rgb, Color, BLACK, WHITE,
};
pub use dispatcher::{dispatch, partition_columns, worker_columns, Progress};
pub use framebuffer::{Column, Framebuffer};
pub use object::SceneObject;
pub use renderer::{render, RenderConfig, RenderError};
pub use resolver::{resolve, Hit, POINT_EPSILON};
pub use shading::Tracer;
pub use sphere::Sphere;
pub use surface::Surface;
pub use world::World;

/// Re-export Vec3 and common math types from datlight_math
pub use datlight_math::{Interval, Plane, Ray, Vec3};
