use image::GrayImage;

/// Binary edge map: 255 on edge pixels, 0 elsewhere.
#[derive(Debug, Clone)]
pub struct EdgeMask {
    mask: GrayImage,
}

/// Pixel statistics of an edge mask on the raw 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStatistics {
    pub mean: f64,
    pub std_dev: f64,
    pub max: u8,
}

impl EdgeMask {
    pub fn new(mask: GrayImage) -> Self {
        Self { mask }
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.mask
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.mask.dimensions()
    }

    pub fn edge_pixel_count(&self) -> usize {
        self.mask.as_raw().iter().filter(|&&v| v > 0).count()
    }

    /// Mean, population standard deviation and maximum over every pixel.
    pub fn statistics(&self) -> EdgeStatistics {
        let raw = self.mask.as_raw();
        if raw.is_empty() {
            return EdgeStatistics {
                mean: 0.0,
                std_dev: 0.0,
                max: 0,
            };
        }

        let count = raw.len() as f64;
        let mean = raw.iter().map(|&v| v as f64).sum::<f64>() / count;
        let variance = raw
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / count;
        let max = raw.iter().copied().max().unwrap_or(0);

        EdgeStatistics {
            mean,
            std_dev: variance.sqrt(),
            max,
        }
    }
}
