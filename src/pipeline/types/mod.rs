mod contour;
mod edge_mask;
mod figure;
mod panel_analysis;
mod pixel_grid;
mod relationship;
mod scene;

pub use contour::Contour;
pub use edge_mask::{EdgeMask, EdgeStatistics};
pub use figure::{BoundingBox, Figure, FigureKind};
pub use panel_analysis::{PanelAnalysis, PanelSummary};
pub use pixel_grid::PixelGrid;
pub use relationship::{Direction, Proximity, Relationship};
pub use scene::{
    EffectResult, EffectType, MotionResult, MotionType, SceneAttribute, SceneClassification,
};
