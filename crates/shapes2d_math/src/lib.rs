//! 2D Geometry Library
//!
//! This crate provides the point, angle, and shape types for shapes2d.
//!
//! ## Core Types
//!
//! - [`Point`] - 2D point, usable as a hash map key
//! - [`InternalAngle`] - Degree value bounded above by 180°
//! - [`sin_cos_deg`] - Degree trig, exact at quarter turns
//!
//! ## Shape Types
//!
//! - [`Shape`] - Area and perimeter
//! - [`Polygon`] - Shapes with a vertex outline
//! - [`Square`] - Square anchored at the origin
//! - [`RightAngleTriangle`] - Right triangle from two legs
//! - [`PathBuilder`] - Builds vertex outlines from (length, angle) segments

mod point;
mod angle;
pub mod path;
pub mod shape;
pub mod square;
pub mod triangle;

pub use point::Point;
pub use angle::{InternalAngle, sin_cos_deg, sin_deg, cos_deg};
pub use path::{PathBuilder, Segment, trace_path};
pub use shape::{Polygon, Shape};
pub use square::Square;
pub use triangle::RightAngleTriangle;
