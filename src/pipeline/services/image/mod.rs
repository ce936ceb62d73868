pub mod analysis;
pub mod decoding;
pub mod edges;
pub mod preprocessing;

pub use analysis::{AnalysisConfig, PanelAnalyzer};
pub use decoding::{ImageDecoder, ImageSource};
pub use edges::EdgeExtractor;
pub use preprocessing::Preprocessor;
