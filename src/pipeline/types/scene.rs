use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionType {
    Action,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionResult {
    #[serde(rename = "type")]
    pub classification: MotionType,
    /// Mean of the edge mask normalized to [0, 1].
    pub edge_density: f64,
    /// Standard deviation of the edge mask normalized to [0, 1].
    pub edge_spread: f64,
}

impl MotionResult {
    pub fn still() -> Self {
        Self {
            classification: MotionType::Static,
            edge_density: 0.0,
            edge_spread: 0.0,
        }
    }

    pub fn is_action(&self) -> bool {
        self.classification == MotionType::Action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    Sparks,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResult {
    #[serde(rename = "type")]
    pub classification: EffectType,
    /// Small bright blobs behind a `sparks` verdict; always 0 for `none`.
    #[serde(rename = "count")]
    pub blob_count: usize,
}

impl EffectResult {
    pub fn absent() -> Self {
        Self {
            classification: EffectType::None,
            blob_count: 0,
        }
    }

    pub fn has_sparks(&self) -> bool {
        self.classification == EffectType::Sparks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneAttribute {
    Dynamic,
    Calm,
}

/// Scene-level reading of a panel, derived from its motion verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneClassification {
    pub scene_type: MotionType,
    pub attributes: Vec<SceneAttribute>,
    pub motion: MotionResult,
}

impl From<MotionResult> for SceneClassification {
    fn from(motion: MotionResult) -> Self {
        let attribute = match motion.classification {
            MotionType::Action => SceneAttribute::Dynamic,
            MotionType::Static => SceneAttribute::Calm,
        };
        Self {
            scene_type: motion.classification,
            attributes: vec![attribute],
            motion,
        }
    }
}
