//! Render configuration and entry point.
//!
//! Ties the pieces together:
//! - One primary ray per pixel, no anti-aliasing
//! - Hard shadows from the first light
//! - Bounded reflective recursion
//! - Strided column dispatch over a fixed thread pool

use datlight_core::SceneError;
use thiserror::Error;

use crate::{dispatch, Camera, Framebuffer, Tracer, World};

/// Errors that can abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to start tracer workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of tracer threads
    pub workers: usize,
    /// Maximum number of reflective bounces
    pub max_depth: u32,
    /// Image-plane distance between adjacent pixels. Derived from the
    /// width when unset.
    pub pixel_scale: Option<f32>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            workers: num_cpus::get(),
            max_depth: 1,
            pixel_scale: None,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the number of tracer threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the reflection depth limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set an explicit pixel spacing on the image plane.
    pub fn with_pixel_scale(mut self, pixel_scale: f32) -> Self {
        self.pixel_scale = Some(pixel_scale);
        self
    }

    /// Pixel spacing on the image plane.
    pub fn pixel_scale(&self) -> f32 {
        self.pixel_scale
            .unwrap_or(0.02 / 1024.0 * self.width as f32)
    }

    /// Check the configuration before any work starts.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.workers == 0 {
            return Err(RenderError::InvalidConfig(
                "at least one worker is required".to_string(),
            ));
        }
        let scale = self.pixel_scale();
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "pixel scale must be positive, got {}",
                scale
            )));
        }
        Ok(())
    }
}

/// Render the world into a new framebuffer.
///
/// Returns only once every worker has finished; no partial image is
/// produced on error.
pub fn render(world: &World, config: &RenderConfig) -> Result<Framebuffer, RenderError> {
    config.validate()?;
    world.camera().validate()?;

    let camera = Camera::new(
        world.camera(),
        config.width,
        config.height,
        config.pixel_scale(),
    );
    let tracer = Tracer::new(world, config.max_depth);
    let mut framebuffer = Framebuffer::new(config.width, config.height);

    log::info!(
        "Starting {} tracer workers for {}x{} (max depth {})",
        config.workers,
        config.width,
        config.height,
        config.max_depth
    );

    dispatch(&camera, &tracer, &mut framebuffer, config.workers)?;

    Ok(framebuffer)
}
