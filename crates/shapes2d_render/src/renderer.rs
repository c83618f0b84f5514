//! Renderer trait and the built-in renderers
//!
//! Renderers receive each shape together with the position it was placed at.
//! Drawing is left to the implementation; nothing is returned.

use shapes2d_core::Diagram;
use shapes2d_math::{Point, Shape};

/// Something that can draw a shape at a position
pub trait Renderer {
    /// Draw `shape` with its local origin at `at`
    fn render(&mut self, shape: &dyn Shape, at: Point);
}

/// Renderer that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _shape: &dyn Shape, _at: Point) {}
}

/// Renderer that writes one log record per shape
#[derive(Clone, Copy, Debug)]
pub struct LogRenderer {
    level: log::Level,
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LogRenderer {
    /// Create a renderer logging at `Debug`
    pub fn new() -> Self {
        Self { level: log::Level::Debug }
    }

    /// Set the log level used for each record
    pub fn with_level(mut self, level: log::Level) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, shape: &dyn Shape, at: Point) {
        log::log!(
            self.level,
            "shape at ({}): area {}, perimeter {}",
            at,
            shape.area(),
            shape.perimeter()
        );
    }
}

/// Render every shape in `diagram` at its position
///
/// Returns the number of shapes rendered.
pub fn render_diagram(diagram: &Diagram, renderer: &mut dyn Renderer) -> usize {
    let mut count = 0;
    for (position, shape) in diagram.positions() {
        renderer.render(shape, *position);
        count += 1;
    }
    count
}
