//! Detector for spark-like effect marks.
use image::GrayImage;
use imageproc::contrast::{threshold, ThresholdType};
use std::sync::Arc;
use std::time::Instant;

use super::config::EffectThresholds;
use super::core::{BoundaryExtractor, DetectionContext, DetectionResult, PanelDetector};
use crate::pipeline::types::{EdgeStatistics, EffectResult, EffectType};

/// Sparks need strong edges, high edge contrast and several small bright blobs at once.
/// Any one signal alone fires on busy artwork with no effects drawn.
pub struct EffectDetector {
    thresholds: EffectThresholds,
    extractor: Arc<dyn BoundaryExtractor>,
}

impl EffectDetector {
    pub fn new(thresholds: EffectThresholds, extractor: Arc<dyn BoundaryExtractor>) -> Self {
        Self {
            thresholds,
            extractor,
        }
    }

    /// Bright regions whose enclosed area is strictly inside the blob window.
    pub fn count_bright_blobs(&self, smoothed: &GrayImage) -> usize {
        let bright = threshold(
            smoothed,
            self.thresholds.brightness_cutoff,
            ThresholdType::Binary,
        );

        self.extractor
            .extract_boundaries(&bright)
            .iter()
            .map(|c| c.area())
            .filter(|&area| {
                area > self.thresholds.min_blob_area && area < self.thresholds.max_blob_area
            })
            .count()
    }

    /// The reported count is zero unless the verdict is sparks.
    pub fn classify(&self, stats: &EdgeStatistics, blob_count: usize) -> EffectResult {
        let has_sparks = stats.max > self.thresholds.min_edge_max
            && stats.std_dev > self.thresholds.min_edge_std_dev
            && blob_count >= self.thresholds.min_blob_count;

        if has_sparks {
            EffectResult {
                classification: EffectType::Sparks,
                blob_count,
            }
        } else {
            EffectResult::absent()
        }
    }
}

impl PanelDetector for EffectDetector {
    type Output = EffectResult;

    fn detect(&self, context: &DetectionContext) -> DetectionResult<EffectResult> {
        let start_time = Instant::now();
        let blob_count = self.count_bright_blobs(&context.smoothed);
        let effects = self.classify(&context.edge_stats, blob_count);

        DetectionResult::new(
            effects,
            format!(
                "Edge max: {}, edge std: {:.2}, small bright regions: {}, objects: {:?}",
                context.edge_stats.max,
                context.edge_stats.std_dev,
                blob_count,
                effects.classification
            ),
        )
        .with_timing(start_time)
    }

    fn name(&self) -> &'static str {
        "EffectDetector"
    }
}
