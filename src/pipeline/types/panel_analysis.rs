use serde::{Deserialize, Serialize};

use super::{
    EffectResult, EffectType, Figure, MotionResult, MotionType, Relationship, SceneClassification,
};

/// Everything the pipeline reports about one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelAnalysis {
    pub image_dimensions: (u32, u32),
    pub figures: Vec<Figure>,
    pub motion: MotionResult,
    #[serde(rename = "objects", alias = "effects")]
    pub effects: EffectResult,
    pub relationships: Vec<Relationship>,
}

impl PanelAnalysis {
    /// Fixed result returned when the image could not be decoded.
    pub fn degraded() -> Self {
        Self {
            image_dimensions: (0, 0),
            figures: vec![Figure::full_frame(0, 0)],
            motion: MotionResult::still(),
            effects: EffectResult::absent(),
            relationships: Vec::new(),
        }
    }

    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    pub fn summary(&self) -> PanelSummary {
        PanelSummary {
            figures: self.figure_count(),
            motion: self.motion.classification,
            objects: self.effects.classification,
        }
    }

    pub fn scene(&self) -> SceneClassification {
        SceneClassification::from(self.motion)
    }
}

/// Count-only view for callers that do not need geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSummary {
    pub figures: usize,
    pub motion: MotionType,
    pub objects: EffectType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::{BoundingBox, Direction, Proximity};

    fn two_figure_analysis() -> PanelAnalysis {
        PanelAnalysis {
            image_dimensions: (600, 400),
            figures: vec![
                Figure::character(0, BoundingBox::new(10, 10, 100, 100), 7000.0),
                Figure::character(1, BoundingBox::new(400, 10, 100, 100), 6500.0),
            ],
            motion: MotionResult {
                classification: MotionType::Action,
                edge_density: 0.1,
                edge_spread: 0.3,
            },
            effects: EffectResult::absent(),
            relationships: vec![Relationship {
                figure1_id: 0,
                figure2_id: 1,
                proximity: Proximity::FarFrom,
                direction: Direction::RightOf,
                normalized_distance: 0.54,
            }],
        }
    }

    #[test]
    fn degraded_analysis_has_one_figure_and_no_relationships() {
        let analysis = PanelAnalysis::degraded();
        assert_eq!(analysis.figure_count(), 1);
        assert_eq!(analysis.motion.classification, MotionType::Static);
        assert_eq!(analysis.effects.classification, EffectType::None);
        assert!(analysis.relationships.is_empty());
    }

    #[test]
    fn summary_is_derived_without_reanalysis() {
        let summary = two_figure_analysis().summary();
        assert_eq!(
            summary,
            PanelSummary {
                figures: 2,
                motion: MotionType::Action,
                objects: EffectType::None,
            }
        );
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"figures": 2, "motion": "action", "objects": "none"})
        );
    }

    #[test]
    fn serialized_analysis_exposes_objects_key() {
        let json = serde_json::to_value(two_figure_analysis()).unwrap();
        assert_eq!(json["objects"]["type"], "none");
        assert_eq!(json["motion"]["type"], "action");
        assert_eq!(json["image_dimensions"], serde_json::json!([600, 400]));
        assert_eq!(json["relationships"][0]["position"], "right_of");
    }

    #[test]
    fn effects_alias_is_accepted_on_input() {
        let mut json = serde_json::to_value(two_figure_analysis()).unwrap();
        let objects = json
            .as_object_mut()
            .and_then(|map| map.remove("objects"))
            .unwrap();
        json["effects"] = objects;

        let parsed: PanelAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, two_figure_analysis());
    }
}
