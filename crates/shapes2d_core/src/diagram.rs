//! Diagram container for placed shapes
//!
//! A Diagram maps positions to shapes and aggregates their measurements.

use std::collections::HashMap;

use shapes2d_math::{Point, Shape};

use crate::ShapeKind;

/// A canvas holding shapes at positions
///
/// `height` and `width` describe the canvas but are not enforced: shapes may
/// be placed anywhere. Each position holds at most one shape; positions are
/// compared exactly (see [`Point`]). Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    height: f64,
    width: f64,
    shape_positions: HashMap<Point, ShapeKind>,
}

impl Diagram {
    /// Create a new empty diagram
    pub fn new(height: f64, width: f64) -> Self {
        Self {
            height,
            width,
            shape_positions: HashMap::new(),
        }
    }

    /// Create a diagram from an existing position map
    pub fn from_positions(height: f64, width: f64, shape_positions: HashMap<Point, ShapeKind>) -> Self {
        Self {
            height,
            width,
            shape_positions,
        }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Place a shape, returning the shape it replaced at that position
    pub fn insert(&mut self, position: Point, shape: ShapeKind) -> Option<ShapeKind> {
        let previous = self.shape_positions.insert(position, shape);
        if let Some(old) = &previous {
            log::warn!("Replaced {} at ({}) with {}", old.name(), position, shape.name());
        }
        previous
    }

    /// Remove the shape at a position
    pub fn remove(&mut self, position: &Point) -> Option<ShapeKind> {
        self.shape_positions.remove(position)
    }

    /// Get the shape at an exact position
    pub fn shape_at(&self, position: &Point) -> Option<&ShapeKind> {
        self.shape_positions.get(position)
    }

    /// Iterate over all shapes
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeKind> {
        self.shape_positions.values()
    }

    /// Iterate over `(position, shape)` pairs
    pub fn positions(&self) -> impl Iterator<Item = (&Point, &ShapeKind)> {
        self.shape_positions.iter()
    }

    /// Get the number of shapes
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shape_positions.len()
    }

    /// Check if the diagram has no shapes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape_positions.is_empty()
    }

    /// Sum of the areas of all shapes (0 when empty)
    pub fn total_area(&self) -> f64 {
        self.shapes().map(Shape::area).sum()
    }

    /// Sum of the perimeters of all shapes (0 when empty)
    pub fn total_perimeter(&self) -> f64 {
        self.shapes().map(Shape::perimeter).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_diagram() {
        let d = Diagram::new(100.0, 100.0);
        assert!(d.is_empty());
        assert_eq!(d.shape_count(), 0);
        assert_eq!(d.total_area(), 0.0);
        assert_eq!(d.total_perimeter(), 0.0);
    }

    #[test]
    fn test_dimensions() {
        let d = Diagram::new(40.0, 60.0);
        assert_eq!(d.height(), 40.0);
        assert_eq!(d.width(), 60.0);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut d = Diagram::new(100.0, 100.0);
        assert!(d.insert(Point::new(50.0, 70.0), ShapeKind::square(5.0)).is_none());
        assert_eq!(d.shape_at(&Point::new(50.0, 70.0)), Some(&ShapeKind::square(5.0)));
        assert!(d.shape_at(&Point::new(50.0, 70.000001)).is_none());
    }

    #[test]
    fn test_insert_replaces_same_position() {
        let mut d = Diagram::new(100.0, 100.0);
        d.insert(Point::ORIGIN, ShapeKind::square(1.0));
        let old = d.insert(Point::ORIGIN, ShapeKind::square(2.0));
        assert_eq!(old, Some(ShapeKind::square(1.0)));
        assert_eq!(d.shape_count(), 1);
        assert_eq!(d.total_area(), 4.0);
    }

    #[test]
    fn test_shapes_outside_bounds_are_counted() {
        let mut d = Diagram::new(10.0, 10.0);
        d.insert(Point::new(500.0, -500.0), ShapeKind::square(3.0));
        assert_eq!(d.total_area(), 9.0);
    }

    #[test]
    fn test_remove() {
        let mut d = Diagram::new(10.0, 10.0);
        d.insert(Point::ORIGIN, ShapeKind::square(3.0));
        assert_eq!(d.remove(&Point::ORIGIN), Some(ShapeKind::square(3.0)));
        assert!(d.is_empty());
        assert!(d.remove(&Point::ORIGIN).is_none());
    }

    #[test]
    fn test_totals() {
        let mut positions = HashMap::new();
        positions.insert(Point::new(0.0, 0.0), ShapeKind::right_angle_triangle(5.0, 5.0));
        positions.insert(Point::new(50.0, 70.0), ShapeKind::square(5.0));
        let d = Diagram::from_positions(100.0, 100.0, positions);

        assert_eq!(d.shape_count(), 2);
        assert!((d.total_area() - 37.5).abs() < 1e-9);
        assert!((d.total_perimeter() - 37.0711).abs() < 1e-4);
    }

    #[test]
    fn test_positions_iterates_all_pairs() {
        let mut d = Diagram::new(10.0, 10.0);
        d.insert(Point::new(1.0, 1.0), ShapeKind::square(1.0));
        d.insert(Point::new(2.0, 2.0), ShapeKind::square(2.0));
        let mut sides: Vec<(f64, f64)> = d
            .positions()
            .map(|(p, s)| (p.x, s.area()))
            .collect();
        sides.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert_eq!(sides, vec![(1.0, 1.0), (2.0, 4.0)]);
    }
}
