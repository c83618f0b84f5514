//! Rendering hooks for shapes2d
//!
//! - [`Renderer`] - Draws a shape at a position
//! - [`NullRenderer`] - Discards everything
//! - [`LogRenderer`] - Logs each shape through the `log` facade
//! - [`render_diagram`] - Feeds a whole diagram to a renderer

mod renderer;

pub use renderer::{LogRenderer, NullRenderer, Renderer, render_diagram};

// Re-export core types for convenience
pub use shapes2d_core::{Diagram, ShapeKind};
pub use shapes2d_math::{Point, Shape};
