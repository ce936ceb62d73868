pub mod error;
pub mod pipeline;
pub mod settings;

pub use error::{ConfigError, DecodeError, VisionError};

pub use pipeline::services::image::analysis::{BoundaryExtractor, PanelAnalyzer};
pub use pipeline::{AnalysisConfig, ImageSource, PanelAnalysis};
pub use settings::Settings;
