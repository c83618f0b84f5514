//! Shape traits for 2D geometry
//!
//! Shapes are pure geometric data: no position, color, or rendering info.
//! Placement lives in the diagram that owns them.

use crate::{InternalAngle, Point};

/// Anything with a measurable area and perimeter
pub trait Shape {
    /// Enclosed area
    fn area(&self) -> f64;

    /// Total edge length
    fn perimeter(&self) -> f64;
}

/// A shape whose outline is a vertex path
///
/// `vertices()` starts at the origin in local space and is open: the edge
/// from the last vertex back to the first is implied, not repeated.
pub trait Polygon: Shape {
    /// Outline vertices in path order
    fn vertices(&self) -> Vec<Point>;

    /// Edge directions used to build the outline
    fn angles(&self) -> Vec<InternalAngle>;

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}
