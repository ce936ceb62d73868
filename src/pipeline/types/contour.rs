use imageproc::geometry::{contour_area, convex_hull};
use imageproc::point::Point;

use super::BoundingBox;

/// Closed outer boundary traced in a binary mask.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    /// Polygon area enclosed by the boundary (shoelace).
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        contour_area(&self.points).abs()
    }

    /// Inclusive pixel bounds of the boundary points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(BoundingBox::new(
            min_x.max(0) as u32,
            min_y.max(0) as u32,
            (max_x - min_x + 1) as u32,
            (max_y - min_y + 1) as u32,
        ))
    }

    pub fn convex_hull_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let hull = convex_hull(self.points.as_slice());
        if hull.len() < 3 {
            return 0.0;
        }
        contour_area(&hull).abs()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.bounding_box()
            .map(|bbox| bbox.aspect_ratio())
            .unwrap_or(0.0)
    }

    /// Area over convex-hull area; 0 for degenerate hulls.
    pub fn solidity(&self) -> f64 {
        let hull_area = self.convex_hull_area();
        if hull_area > 0.0 {
            self.area() / hull_area
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i32, y: i32, side: i32) -> Contour {
        Contour::new(vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
        ])
    }

    #[test]
    fn square_metrics() {
        let contour = square(10, 20, 50);
        assert_eq!(contour.area(), 2500.0);
        assert_eq!(contour.convex_hull_area(), 2500.0);
        assert_eq!(contour.solidity(), 1.0);
        assert_eq!(contour.bounding_box(), Some(BoundingBox::new(10, 20, 51, 51)));
        assert_eq!(contour.aspect_ratio(), 1.0);
    }

    #[test]
    fn concave_shape_has_lower_solidity() {
        // 20x20 square with its top-right quadrant cut away
        let contour = Contour::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(20, 10),
            Point::new(20, 20),
            Point::new(0, 20),
        ]);
        assert_eq!(contour.area(), 300.0);
        assert!(contour.solidity() < 1.0);
        assert!(contour.solidity() > 0.8);
    }

    #[test]
    fn degenerate_contours_are_zero() {
        let line = Contour::new(vec![Point::new(0, 0), Point::new(5, 0)]);
        assert_eq!(line.area(), 0.0);
        assert_eq!(line.solidity(), 0.0);
        assert_eq!(Contour::new(Vec::new()).bounding_box(), None);
    }
}
