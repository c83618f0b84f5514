//! Core types for shapes2d
//!
//! This crate builds on `shapes2d_math` to place shapes on a canvas:
//!
//! - [`ShapeKind`] - The closed set of placeable shapes
//! - [`Diagram`] - Position-to-shape map with area/perimeter totals

mod shapes;
mod diagram;

pub use shapes::ShapeKind;
pub use diagram::Diagram;

// Re-export commonly used types from shapes2d_math for convenience
pub use shapes2d_math::{InternalAngle, Point, Polygon, RightAngleTriangle, Shape, Square};
