use image::GrayImage;
use imageproc::edges::canny;

use crate::pipeline::types::EdgeMask;

/// Canny edge detection with fixed hysteresis thresholds.
#[derive(Debug, Clone, Copy)]
pub struct EdgeExtractor {
    low_threshold: f32,
    high_threshold: f32,
}

impl EdgeExtractor {
    pub fn new(low_threshold: f32, high_threshold: f32) -> Self {
        Self {
            low_threshold,
            high_threshold,
        }
    }

    pub fn extract(&self, smoothed: &GrayImage) -> EdgeMask {
        EdgeMask::new(canny(smoothed, self.low_threshold, self.high_threshold))
    }
}

impl Default for EdgeExtractor {
    fn default() -> Self {
        Self::new(100.0, 200.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn flat_image_has_no_edges() {
        let flat = GrayImage::from_pixel(40, 30, Luma([255]));
        let mask = EdgeExtractor::default().extract(&flat);
        assert_eq!(mask.dimensions(), (40, 30));
        assert_eq!(mask.edge_pixel_count(), 0);
    }

    #[test]
    fn hard_step_produces_binary_edges() {
        let step = GrayImage::from_fn(40, 30, |x, _| if x < 20 { Luma([0]) } else { Luma([255]) });
        let mask = EdgeExtractor::default().extract(&step);
        assert!(mask.edge_pixel_count() > 0);
        assert!(mask.as_image().pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
