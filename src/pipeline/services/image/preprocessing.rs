use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;

use crate::pipeline::types::PixelGrid;

/// Grayscale reduction followed by a small Gaussian blur.
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor {
    blur_sigma: f32,
}

impl Preprocessor {
    pub fn new(blur_sigma: f32) -> Self {
        Self { blur_sigma }
    }

    pub fn smooth(&self, grid: &PixelGrid) -> GrayImage {
        let gray = grid.to_grayscale();
        gaussian_blur_f32(&gray, self.blur_sigma)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(1.1)
    }
}
