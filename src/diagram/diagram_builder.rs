//! DiagramBuilder - Declarative diagram construction
//!
//! Provides a fluent API for placing shapes on a canvas.

use shapes2d_core::{Diagram, Point, ShapeKind};

/// Builder for constructing diagrams
///
/// # Example
/// ```
/// use shapes2d::diagram::DiagramBuilder;
/// use shapes2d_core::Point;
///
/// let diagram = DiagramBuilder::new(100.0, 100.0)
///     .add_right_angle_triangle(Point::new(0.0, 0.0), 5.0, 5.0)
///     .add_square(Point::new(50.0, 70.0), 5.0)
///     .build();
/// assert_eq!(diagram.total_area(), 37.5);
/// ```
pub struct DiagramBuilder {
    diagram: Diagram,
}

impl DiagramBuilder {
    /// Create a new builder for a canvas of the given size
    pub fn new(height: f64, width: f64) -> Self {
        Self {
            diagram: Diagram::new(height, width),
        }
    }

    /// Place any shape
    ///
    /// Placing a shape where one already sits replaces it.
    pub fn add_shape(mut self, position: Point, shape: ShapeKind) -> Self {
        self.diagram.insert(position, shape);
        self
    }

    /// Place a square with its bottom-left corner at `position`
    pub fn add_square(self, position: Point, side_length: f64) -> Self {
        self.add_shape(position, ShapeKind::square(side_length))
    }

    /// Place a right-angle triangle with its right-angle corner at `position`
    pub fn add_right_angle_triangle(self, position: Point, side_length_a: f64, side_length_b: f64) -> Self {
        self.add_shape(position, ShapeKind::right_angle_triangle(side_length_a, side_length_b))
    }

    /// Number of shapes placed so far
    pub fn shape_count(&self) -> usize {
        self.diagram.shape_count()
    }

    /// Finish building
    pub fn build(self) -> Diagram {
        log::debug!(
            "Built {}x{} diagram with {} shapes",
            self.diagram.width(),
            self.diagram.height(),
            self.diagram.shape_count()
        );
        self.diagram
    }
}
