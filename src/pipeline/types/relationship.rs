use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proximity {
    Near,
    FarFrom,
}

/// Where the second figure of a pair sits relative to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LeftOf,
    RightOf,
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub figure1_id: u32,
    pub figure2_id: u32,
    #[serde(rename = "type")]
    pub proximity: Proximity,
    #[serde(rename = "position")]
    pub direction: Direction,
    #[serde(rename = "distance")]
    pub normalized_distance: f64,
}
