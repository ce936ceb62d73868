use std::time::Instant;

use super::config::MotionThresholds;
use super::core::{DetectionContext, DetectionResult, PanelDetector};
use crate::pipeline::types::{EdgeStatistics, MotionResult, MotionType};

/// Action vs. static verdict from edge density and spread.
///
/// Density alone is not enough: line art is edge-heavy even in quiet panels, and a
/// uniform cross-hatch fill drives density up while flattening the spread.
pub struct MotionClassifier {
    thresholds: MotionThresholds,
}

impl MotionClassifier {
    pub fn new(thresholds: MotionThresholds) -> Self {
        Self { thresholds }
    }

    pub fn classify(&self, stats: &EdgeStatistics) -> MotionResult {
        let edge_density = stats.mean / 255.0;
        let edge_spread = stats.std_dev / 255.0;

        let is_action = edge_density > self.thresholds.min_edge_density
            && edge_spread > self.thresholds.min_edge_spread;

        MotionResult {
            classification: if is_action {
                MotionType::Action
            } else {
                MotionType::Static
            },
            edge_density,
            edge_spread,
        }
    }
}

impl Default for MotionClassifier {
    fn default() -> Self {
        Self::new(MotionThresholds::default())
    }
}

impl PanelDetector for MotionClassifier {
    type Output = MotionResult;

    fn detect(&self, context: &DetectionContext) -> DetectionResult<MotionResult> {
        let start_time = Instant::now();
        let motion = self.classify(&context.edge_stats);

        DetectionResult::new(
            motion,
            format!(
                "Edge density: {:.4}, edge spread: {:.4}, motion: {:?}",
                motion.edge_density, motion.edge_spread, motion.classification
            ),
        )
        .with_timing(start_time)
    }

    fn name(&self) -> &'static str {
        "MotionClassifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::EdgeMask;
    use image::{GrayImage, Luma};

    fn classify_mask(mask: GrayImage) -> MotionResult {
        MotionClassifier::default().classify(&EdgeMask::new(mask).statistics())
    }

    #[test]
    fn blank_mask_is_static() {
        let motion = classify_mask(GrayImage::new(50, 50));
        assert_eq!(motion.classification, MotionType::Static);
        assert_eq!(motion.edge_density, 0.0);
        assert_eq!(motion.edge_spread, 0.0);
    }

    #[test]
    fn dense_uniform_edges_stay_static() {
        // Every pixel is an edge: maximal density, zero spread
        let motion = classify_mask(GrayImage::from_pixel(50, 50, Luma([255])));
        assert_eq!(motion.edge_density, 1.0);
        assert_eq!(motion.edge_spread, 0.0);
        assert_eq!(motion.classification, MotionType::Static);
    }

    #[test]
    fn dense_varied_edges_are_action() {
        // One row in four is an edge: density 0.25, spread ~0.43
        let mask = GrayImage::from_fn(40, 40, |_, y| {
            if y % 4 == 0 {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        let motion = classify_mask(mask);
        assert!((motion.edge_density - 0.25).abs() < 1e-9);
        assert!(motion.edge_spread > 0.4);
        assert_eq!(motion.classification, MotionType::Action);
    }

    #[test]
    fn sparse_edges_are_static() {
        // One row in twenty: spread passes, density 0.05 does not
        let mask = GrayImage::from_fn(40, 40, |_, y| {
            if y % 20 == 0 {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        let motion = classify_mask(mask);
        assert!(motion.edge_spread > 0.2);
        assert_eq!(motion.classification, MotionType::Static);
    }
}
