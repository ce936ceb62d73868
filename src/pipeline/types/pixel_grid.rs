use image::{DynamicImage, GrayImage};

use crate::error::DecodeError;

/// Decoded panel pixels. Never empty: zero-area images are rejected on construction.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    image: DynamicImage,
}

impl PixelGrid {
    pub fn new(image: DynamicImage) -> Result<Self, DecodeError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyImage(width, height));
        }
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn is_color(&self) -> bool {
        self.image.color().has_color()
    }

    /// Luminance-weighted grayscale copy.
    pub fn to_grayscale(&self) -> GrayImage {
        self.image.to_luma8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn rejects_zero_area_image() {
        let empty = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::new(0, 10));
        let err = PixelGrid::new(empty).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyImage(0, 10)));
    }

    #[test]
    fn grayscale_keeps_dimensions() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(16, 9, Rgb([200, 10, 10])));
        let grid = PixelGrid::new(img).unwrap();
        assert!(grid.is_color());
        assert_eq!(grid.to_grayscale().dimensions(), (16, 9));
    }
}
