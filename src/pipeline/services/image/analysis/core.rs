use crate::pipeline::types::{Contour, EdgeMask, EdgeStatistics};
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use std::time::Instant;

/// Per-panel state shared by every detector: the smoothed grayscale and its edge mask.
#[derive(Debug, Clone)]
pub struct DetectionContext {
    pub smoothed: GrayImage,
    pub edges: EdgeMask,
    pub edge_stats: EdgeStatistics,
    pub dimensions: (u32, u32),
}

impl DetectionContext {
    pub fn new(smoothed: GrayImage, edges: EdgeMask) -> Self {
        let dimensions = smoothed.dimensions();
        let edge_stats = edges.statistics();

        Self {
            smoothed,
            edges,
            edge_stats,
            dimensions,
        }
    }
}

/// Result of a detection operation with reasoning and timing
#[derive(Debug, Clone)]
pub struct DetectionResult<T> {
    pub result: T,
    pub reasoning: String,
    pub processing_time_us: u64,
}

impl<T> DetectionResult<T> {
    pub fn new(result: T, reasoning: String) -> Self {
        Self {
            result,
            reasoning,
            processing_time_us: 0,
        }
    }

    pub fn with_timing(mut self, start_time: Instant) -> Self {
        self.processing_time_us = start_time.elapsed().as_micros() as u64;
        self
    }
}

/// A stage that reads the shared context and produces one part of the panel analysis.
pub trait PanelDetector: Send + Sync {
    type Output;

    fn detect(&self, context: &DetectionContext) -> DetectionResult<Self::Output>;
    fn name(&self) -> &'static str;
}

/// Boundary tracing over a binary mask. Only outermost boundaries are returned;
/// holes and shapes nested inside holes are skipped.
pub trait BoundaryExtractor: Send + Sync {
    fn extract_boundaries(&self, mask: &GrayImage) -> Vec<Contour>;
}

/// Suzuki-Abe border following from `imageproc`, in raster discovery order.
#[derive(Debug, Clone, Copy, Default)]
pub struct OuterBoundaryExtractor;

impl BoundaryExtractor for OuterBoundaryExtractor {
    fn extract_boundaries(&self, mask: &GrayImage) -> Vec<Contour> {
        find_contours::<i32>(mask)
            .into_iter()
            .filter(|c| matches!(c.border_type, BorderType::Outer) && c.parent.is_none())
            .map(|c| Contour::new(c.points))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use imageproc::drawing::draw_filled_rect_mut;
    use imageproc::rect::Rect;

    #[test]
    fn extracts_only_outer_boundaries() {
        let mut mask = GrayImage::new(60, 60);
        // Ring: outer square with a hole, plus a solid square inside the hole
        draw_filled_rect_mut(&mut mask, Rect::at(5, 5).of_size(50, 50), Luma([255]));
        draw_filled_rect_mut(&mut mask, Rect::at(15, 15).of_size(30, 30), Luma([0]));
        draw_filled_rect_mut(&mut mask, Rect::at(25, 25).of_size(10, 10), Luma([255]));

        let contours = OuterBoundaryExtractor.extract_boundaries(&mask);
        assert_eq!(contours.len(), 1);
        let bbox = contours[0].bounding_box().unwrap();
        assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (5, 5, 50, 50));
    }

    #[test]
    fn separate_shapes_are_separate_boundaries() {
        let mut mask = GrayImage::new(40, 20);
        draw_filled_rect_mut(&mut mask, Rect::at(2, 2).of_size(8, 8), Luma([255]));
        draw_filled_rect_mut(&mut mask, Rect::at(25, 5).of_size(10, 10), Luma([255]));

        let contours = OuterBoundaryExtractor.extract_boundaries(&mask);
        assert_eq!(contours.len(), 2);
    }

    #[test]
    fn context_caches_edge_statistics() {
        let edges = EdgeMask::new(GrayImage::from_pixel(4, 4, Luma([255])));
        let context = DetectionContext::new(GrayImage::new(4, 4), edges);
        assert_eq!(context.dimensions, (4, 4));
        assert_eq!(context.edge_stats.max, 255);
        assert_eq!(context.edge_stats.std_dev, 0.0);
    }
}
