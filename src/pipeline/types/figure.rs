use serde::{Deserialize, Serialize};

/// Axis-aligned box in image pixels. Serialized as `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn full_image(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Integer midpoint, matching how figure centers are reported.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }
}

impl From<[u32; 4]> for BoundingBox {
    fn from([x, y, width, height]: [u32; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl From<BoundingBox> for [u32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x, bbox.y, bbox.width, bbox.height]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    Character,
}

/// A character-like shape detected in a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: FigureKind,
    pub bbox: BoundingBox,
    pub area: f64,
    pub center: (u32, u32),
}

impl Figure {
    pub fn character(id: u32, bbox: BoundingBox, area: f64) -> Self {
        Self {
            id,
            kind: FigureKind::Character,
            bbox,
            area,
            center: bbox.center(),
        }
    }

    /// Stand-in figure covering the whole frame, used when nothing survives filtering.
    pub fn full_frame(width: u32, height: u32) -> Self {
        Self::character(
            0,
            BoundingBox::full_image(width, height),
            width as f64 * height as f64,
        )
    }
}
