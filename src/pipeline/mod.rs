pub mod services;
pub mod types;

pub use services::{AnalysisConfig, ImageSource, PanelAnalyzer};
pub use types::{Figure, PanelAnalysis, PanelSummary, Relationship, SceneClassification};
