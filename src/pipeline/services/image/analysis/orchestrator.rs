//! Panel analysis orchestrator: decode, preprocess, detect, relate.
use super::{
    config::AnalysisConfig,
    core::{BoundaryExtractor, DetectionContext, OuterBoundaryExtractor, PanelDetector},
    effect_detector::EffectDetector,
    figure_detector::FigureDetector,
    motion_classifier::MotionClassifier,
    relationships::RelationshipAnalyzer,
};
use crate::{
    error::{DecodeError, VisionError},
    pipeline::services::image::{
        decoding::{ImageDecoder, ImageSource},
        edges::EdgeExtractor,
        preprocessing::Preprocessor,
    },
    pipeline::types::{PanelAnalysis, PixelGrid},
};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Runs the whole pipeline for one panel. Holds only immutable configuration, so a
/// single instance can serve any number of concurrent callers.
pub struct PanelAnalyzer {
    config: AnalysisConfig,
    decoder: ImageDecoder,
    preprocessor: Preprocessor,
    edge_extractor: EdgeExtractor,
    figure_detector: FigureDetector,
    motion_classifier: MotionClassifier,
    effect_detector: EffectDetector,
    relationship_analyzer: RelationshipAnalyzer,
}

impl PanelAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, VisionError> {
        Self::with_boundary_extractor(config, Arc::new(OuterBoundaryExtractor))
    }

    /// Build with a different contour tracer behind the figure and effect detectors.
    pub fn with_boundary_extractor(
        config: AnalysisConfig,
        extractor: Arc<dyn BoundaryExtractor>,
    ) -> Result<Self, VisionError> {
        config.validate()?;
        Ok(Self::build(config, extractor))
    }

    fn build(config: AnalysisConfig, extractor: Arc<dyn BoundaryExtractor>) -> Self {
        let edges = config.edge_thresholds;
        Self {
            decoder: ImageDecoder::new(),
            preprocessor: Preprocessor::new(config.blur_sigma),
            edge_extractor: EdgeExtractor::new(edges.low, edges.high),
            figure_detector: FigureDetector::new(config.figure_filter, Arc::clone(&extractor)),
            motion_classifier: MotionClassifier::new(config.motion_thresholds),
            effect_detector: EffectDetector::new(config.effect_thresholds, extractor),
            relationship_analyzer: RelationshipAnalyzer::new(config.near_distance),
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a panel. Decode failures are logged and answered with
    /// [`PanelAnalysis::degraded`]; this call never fails.
    pub fn analyze(&self, source: &ImageSource) -> PanelAnalysis {
        match self.try_analyze(source) {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Failed to load image from {}: {}", source.describe(), e);
                PanelAnalysis::degraded()
            }
        }
    }

    /// Same as [`analyze`](Self::analyze) but surfaces the decode error.
    pub fn try_analyze(&self, source: &ImageSource) -> Result<PanelAnalysis, DecodeError> {
        let grid = self.decoder.decode(source)?;
        Ok(self.analyze_grid(&grid))
    }

    pub fn analyze_grid(&self, grid: &PixelGrid) -> PanelAnalysis {
        let analysis_start = Instant::now();
        let (width, height) = grid.dimensions();

        let smoothed = self.preprocessor.smooth(grid);
        let edges = self.edge_extractor.extract(&smoothed);
        debug!(
            "Analyzing {}x{} {} panel with {} edge pixels",
            width,
            height,
            if grid.is_color() { "color" } else { "grayscale" },
            edges.edge_pixel_count()
        );

        let context = DetectionContext::new(smoothed, edges);

        let figures = self.run_detector(&self.figure_detector, &context);
        let motion = self.run_detector(&self.motion_classifier, &context);
        let effects = self.run_detector(&self.effect_detector, &context);
        let relationships = self.relationship_analyzer.analyze(&figures, (width, height));

        info!(
            "Panel analysis completed in {}us: {} figures, {:?} motion, {:?} effects, {} relationships",
            analysis_start.elapsed().as_micros(),
            figures.len(),
            motion.classification,
            effects.classification,
            relationships.len()
        );

        PanelAnalysis {
            image_dimensions: (width, height),
            figures,
            motion,
            effects,
            relationships,
        }
    }

    fn run_detector<D: PanelDetector>(&self, detector: &D, context: &DetectionContext) -> D::Output {
        let result = detector.detect(context);
        debug!(
            "{}: {} in {}us",
            detector.name(),
            result.reasoning,
            result.processing_time_us
        );
        result.result
    }

    /// Run [`analyze`](Self::analyze) on the blocking pool so async callers keep
    /// their reactor free.
    pub async fn analyze_async(self: &Arc<Self>, source: ImageSource) -> PanelAnalysis {
        let analyzer = Arc::clone(self);
        match tokio::task::spawn_blocking(move || analyzer.analyze(&source)).await {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Panel analysis task failed: {}", e);
                PanelAnalysis::degraded()
            }
        }
    }

    /// Analyze several panels concurrently. Results keep the input order.
    pub async fn analyze_many(self: &Arc<Self>, sources: Vec<ImageSource>) -> Vec<PanelAnalysis> {
        join_all(sources.into_iter().map(|source| self.analyze_async(source))).await
    }
}

impl Default for PanelAnalyzer {
    fn default() -> Self {
        Self::build(AnalysisConfig::default(), Arc::new(OuterBoundaryExtractor))
    }
}
