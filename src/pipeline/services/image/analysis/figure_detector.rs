//! Character-scale shape detection over the edge mask.
//!
//! Contours are traced on the Canny mask, so a drawn character shows up as the
//! outer boundary of its outline. Three geometric filters separate figures from
//! line-art texture:
//! - enclosed area above `min_area` rejects hatching, lettering and small props
//! - aspect ratio inside `(min_aspect_ratio, max_aspect_ratio)` rejects slivers
//!   such as panel borders and speed lines
//! - solidity above `min_solidity` rejects scribble-like fragmented outlines
//!
//! Survivors are ordered by descending area, then top-most, then left-most, and
//! numbered from 0 in that order. The order is independent of how the boundary
//! tracer happens to discover contours, which keeps ids and relationship pairs
//! stable.
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use super::config::FigureFilter;
use super::core::{BoundaryExtractor, DetectionContext, DetectionResult, PanelDetector};
use crate::pipeline::types::{BoundingBox, Contour, EdgeMask, Figure};

pub struct FigureDetector {
    filter: FigureFilter,
    extractor: Arc<dyn BoundaryExtractor>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    bbox: BoundingBox,
    area: f64,
}

impl FigureDetector {
    pub fn new(filter: FigureFilter, extractor: Arc<dyn BoundaryExtractor>) -> Self {
        Self { filter, extractor }
    }

    /// Never returns an empty list: with no survivors a full-frame figure stands in.
    pub fn detect_figures(&self, edges: &EdgeMask) -> Vec<Figure> {
        let (width, height) = edges.dimensions();
        let contours = self.extractor.extract_boundaries(edges.as_image());
        let total_contours = contours.len();

        let mut candidates: Vec<Candidate> = contours
            .iter()
            .filter_map(|c| self.as_candidate(c))
            .collect();

        debug!(
            "{} of {} contours passed figure filters",
            candidates.len(),
            total_contours
        );

        if candidates.is_empty() {
            debug!("No figure candidates, substituting full-frame figure");
            return vec![Figure::full_frame(width, height)];
        }

        candidates.sort_by(compare_candidates);

        if candidates.len() > self.filter.max_figures {
            warn!(
                "Detected unusually high figure count ({}), capping at {}",
                candidates.len(),
                self.filter.max_figures
            );
            candidates.truncate(self.filter.max_figures);
        }

        candidates
            .into_iter()
            .enumerate()
            .map(|(id, c)| Figure::character(id as u32, c.bbox, c.area))
            .collect()
    }

    fn as_candidate(&self, contour: &Contour) -> Option<Candidate> {
        let area = contour.area();
        if area <= self.filter.min_area {
            return None;
        }

        let bbox = contour.bounding_box()?;
        let aspect_ratio = bbox.aspect_ratio();
        if aspect_ratio <= self.filter.min_aspect_ratio
            || aspect_ratio >= self.filter.max_aspect_ratio
        {
            return None;
        }

        if contour.solidity() <= self.filter.min_solidity {
            return None;
        }

        Some(Candidate { bbox, area })
    }
}

fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.area
        .total_cmp(&a.area)
        .then(a.bbox.y.cmp(&b.bbox.y))
        .then(a.bbox.x.cmp(&b.bbox.x))
}

impl PanelDetector for FigureDetector {
    type Output = Vec<Figure>;

    fn detect(&self, context: &DetectionContext) -> DetectionResult<Vec<Figure>> {
        let start_time = Instant::now();
        let figures = self.detect_figures(&context.edges);

        DetectionResult::new(
            figures.clone(),
            format!("Figure detection kept {} figures", figures.len()),
        )
        .with_timing(start_time)
    }

    fn name(&self) -> &'static str {
        "FigureDetector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::services::image::analysis::core::OuterBoundaryExtractor;
    use image::{GrayImage, Luma};
    use imageproc::drawing::draw_hollow_rect_mut;
    use imageproc::rect::Rect;

    fn detector() -> FigureDetector {
        FigureDetector::new(FigureFilter::default(), Arc::new(OuterBoundaryExtractor))
    }

    fn outline(mask: &mut GrayImage, x: i32, y: i32, w: u32, h: u32) {
        draw_hollow_rect_mut(mask, Rect::at(x, y).of_size(w, h), Luma([255]));
    }

    #[test]
    fn empty_mask_yields_full_frame_figure() {
        let edges = EdgeMask::new(GrayImage::new(600, 400));
        let figures = detector().detect_figures(&edges);
        assert_eq!(figures, vec![Figure::full_frame(600, 400)]);
    }

    #[test]
    fn keeps_large_outlines_and_drops_small_ones() {
        let mut mask = GrayImage::new(300, 200);
        outline(&mut mask, 10, 10, 80, 100);
        outline(&mut mask, 200, 20, 20, 20);
        let figures = detector().detect_figures(&EdgeMask::new(mask));

        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].bbox, BoundingBox::new(10, 10, 80, 100));
        assert_eq!(figures[0].center, (50, 60));
        assert!(figures[0].area > 2000.0);
    }

    #[test]
    fn rejects_sliver_outlines() {
        let mut mask = GrayImage::new(400, 100);
        // 300x12: area passes, aspect ratio 25 does not
        outline(&mut mask, 10, 10, 300, 12);
        let figures = detector().detect_figures(&EdgeMask::new(mask));
        assert_eq!(figures, vec![Figure::full_frame(400, 100)]);
    }

    #[test]
    fn ids_follow_descending_area() {
        let mut mask = GrayImage::new(400, 200);
        outline(&mut mask, 10, 10, 60, 60);
        outline(&mut mask, 200, 10, 120, 120);
        let figures = detector().detect_figures(&EdgeMask::new(mask));

        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].id, 0);
        assert_eq!(figures[0].bbox.x, 200);
        assert_eq!(figures[1].id, 1);
        assert_eq!(figures[1].bbox.x, 10);
    }

    #[test]
    fn excess_figures_are_truncated() {
        let mut mask = GrayImage::new(700, 300);
        for i in 0..7 {
            outline(&mut mask, 10 + i * 95, 10, 60 + i as u32, 60);
        }
        let figures = detector().detect_figures(&EdgeMask::new(mask));

        assert_eq!(figures.len(), 5);
        let ids: Vec<u32> = figures.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        // Largest outlines are kept
        assert!(figures.iter().all(|f| f.bbox.width >= 62));
    }

    #[test]
    fn equal_areas_order_top_left_first() {
        let mut mask = GrayImage::new(400, 300);
        outline(&mut mask, 250, 150, 60, 60);
        outline(&mut mask, 250, 10, 60, 60);
        outline(&mut mask, 10, 150, 60, 60);
        let figures = detector().detect_figures(&EdgeMask::new(mask));

        let origins: Vec<(u32, u32)> = figures.iter().map(|f| (f.bbox.x, f.bbox.y)).collect();
        assert_eq!(origins, vec![(250, 10), (10, 150), (250, 150)]);
    }
}
