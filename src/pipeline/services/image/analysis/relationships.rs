use tracing::debug;

use crate::pipeline::types::{Direction, Figure, Proximity, Relationship};

/// Pairwise spatial relationships between detected figures.
#[derive(Debug, Clone, Copy)]
pub struct RelationshipAnalyzer {
    near_distance: f64,
}

impl RelationshipAnalyzer {
    pub fn new(near_distance: f64) -> Self {
        Self { near_distance }
    }

    /// One relationship per unordered pair `(i, j)`, `i < j` in figure order.
    pub fn analyze(&self, figures: &[Figure], dimensions: (u32, u32)) -> Vec<Relationship> {
        let (width, height) = dimensions;
        let diagonal = (width as f64).hypot(height as f64);
        if figures.len() < 2 || diagonal == 0.0 {
            return Vec::new();
        }

        let mut relationships = Vec::with_capacity(figures.len() * (figures.len() - 1) / 2);
        for (i, first) in figures.iter().enumerate() {
            for second in &figures[i + 1..] {
                relationships.push(self.relate(first, second, diagonal));
            }
        }

        debug!(
            "Computed {} relationships between {} figures",
            relationships.len(),
            figures.len()
        );
        relationships
    }

    fn relate(&self, first: &Figure, second: &Figure, diagonal: f64) -> Relationship {
        let dx = second.center.0 as f64 - first.center.0 as f64;
        let dy = second.center.1 as f64 - first.center.1 as f64;
        let normalized_distance = dx.hypot(dy) / diagonal;

        let proximity = if normalized_distance < self.near_distance {
            Proximity::Near
        } else {
            Proximity::FarFrom
        };

        // y grows downward; equal offsets resolve vertically
        let direction = if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::RightOf
            } else {
                Direction::LeftOf
            }
        } else if dy > 0.0 {
            Direction::Below
        } else {
            Direction::Above
        };

        Relationship {
            figure1_id: first.id,
            figure2_id: second.id,
            proximity,
            direction,
            normalized_distance,
        }
    }
}

impl Default for RelationshipAnalyzer {
    fn default() -> Self {
        Self::new(0.2)
    }
}
