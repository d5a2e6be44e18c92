//! PNG output for rendered framebuffers.

use std::path::Path;

use anyhow::{Context, Result};
use datlight_renderer::{unpack_rgb, Framebuffer};
use image::{ImageFormat, Rgb, RgbImage};

/// Convert packed framebuffer cells to an 8-bit RGB image.
pub fn to_image(framebuffer: &Framebuffer) -> RgbImage {
    RgbImage::from_fn(framebuffer.width(), framebuffer.height(), |x, y| {
        Rgb(unpack_rgb(framebuffer.get(x, y)))
    })
}

/// Encode the framebuffer as a PNG at `path`.
pub fn write_png(framebuffer: &Framebuffer, path: &Path) -> Result<()> {
    to_image(framebuffer)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}
