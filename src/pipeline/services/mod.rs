pub mod image;

pub use image::{AnalysisConfig, ImageSource, PanelAnalyzer};
