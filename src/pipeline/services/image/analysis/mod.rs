pub mod config;
pub mod core;
pub mod effect_detector;
pub mod figure_detector;
pub mod motion_classifier;
pub mod orchestrator;
pub mod relationships;

pub use self::config::{
    AnalysisConfig, EdgeThresholds, EffectThresholds, FigureFilter, MotionThresholds,
};
pub use self::core::{
    BoundaryExtractor, DetectionContext, DetectionResult, OuterBoundaryExtractor, PanelDetector,
};
pub use effect_detector::EffectDetector;
pub use figure_detector::FigureDetector;
pub use motion_classifier::MotionClassifier;
pub use orchestrator::PanelAnalyzer;
pub use relationships::RelationshipAnalyzer;
