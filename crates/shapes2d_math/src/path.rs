//! Vertex paths built from (length, angle) segments
//!
//! A path starts at a point and appends one vertex per segment. Each segment's
//! angle is an absolute direction measured from the +x axis, not a turn
//! relative to the previous segment, so a segment's displacement depends only
//! on its own length and angle:
//!
//! ```text
//! points[0]   = start
//! points[i+1] = points[i] + (len_i * cos(angle_i), len_i * sin(angle_i))
//! ```
//!
//! The path is left open: no closing edge back to the start is appended.

use crate::{InternalAngle, Point};

/// One edge of a vertex path
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Edge length
    pub length: f64,
    /// Absolute edge direction
    pub angle: InternalAngle,
}

impl Segment {
    /// Create a new segment
    #[inline]
    pub fn new(length: f64, angle: InternalAngle) -> Self {
        Self { length, angle }
    }

    /// Displacement `(dx, dy)` covered by this segment
    #[inline]
    pub fn displacement(&self) -> (f64, f64) {
        let (sin, cos) = self.angle.sin_cos();
        (self.length * cos, self.length * sin)
    }
}

/// Walk `segments` from `start`, returning `segments.len() + 1` points
pub fn trace_path(start: Point, segments: &[Segment]) -> Vec<Point> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(start);

    let mut current = start;
    for segment in segments {
        let (dx, dy) = segment.displacement();
        log::trace!(target: "shapes2d_math::path", "({}, {})", dx, dy);
        current = current.translate(dx, dy);
        points.push(current);
    }

    points
}

/// Fluent builder for vertex paths
///
/// # Example
/// ```
/// use shapes2d_math::{InternalAngle, PathBuilder, Point};
///
/// let up = InternalAngle::new(90.0).unwrap();
/// let right = InternalAngle::new(0.0).unwrap();
/// let points = PathBuilder::new()
///     .segment(2.0, up)
///     .segment(3.0, right)
///     .build();
/// assert_eq!(points, vec![Point::ORIGIN, Point::new(0.0, 2.0), Point::new(3.0, 2.0)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    start: Point,
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Create a builder for a path starting at the origin
    pub fn new() -> Self {
        Self::starting_at(Point::ORIGIN)
    }

    /// Create a builder for a path starting at `start`
    pub fn starting_at(start: Point) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Append a segment
    pub fn segment(mut self, length: f64, angle: InternalAngle) -> Self {
        self.segments.push(Segment::new(length, angle));
        self
    }

    /// Append several segments in order
    pub fn segments<I>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        self.segments.extend(segments);
        self
    }

    /// Number of segments added so far
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Compute the vertices
    pub fn build(&self) -> Vec<Point> {
        trace_path(self.start, &self.segments)
    }
}
