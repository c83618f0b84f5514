//! Right-angle triangle geometry

use serde::{Serialize, Deserialize};

use crate::path::{trace_path, Segment};
use crate::shape::{Polygon, Shape};
use crate::{InternalAngle, Point};

/// Edge directions: leg A straight up, then the hypotenuse down-right.
/// The closing leg's 180° entry is listed but never walked.
const TRIANGLE_ANGLES: [f64; 3] = [90.0, -45.0, 180.0];

/// A right-angle triangle described by its two legs
///
/// The hypotenuse is derived. The outline starts at the origin, runs up leg A
/// and then along the hypotenuse; it is only a closed right triangle when
/// the legs are equal, since the hypotenuse direction is fixed at -45°.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RightAngleTriangle {
    side_length_a: f64,
    side_length_b: f64,
}

impl RightAngleTriangle {
    /// Create a new triangle from its legs
    pub fn new(side_length_a: f64, side_length_b: f64) -> Self {
        Self {
            side_length_a,
            side_length_b,
        }
    }

    #[inline]
    pub fn side_length_a(&self) -> f64 {
        self.side_length_a
    }

    #[inline]
    pub fn side_length_b(&self) -> f64 {
        self.side_length_b
    }

    /// Hypotenuse length, `sqrt(a² + b²)`
    #[inline]
    pub fn side_length_c(&self) -> f64 {
        (self.side_length_a * self.side_length_a + self.side_length_b * self.side_length_b).sqrt()
    }
}

impl Shape for RightAngleTriangle {
    fn area(&self) -> f64 {
        0.5 * (self.side_length_a * self.side_length_b)
    }

    fn perimeter(&self) -> f64 {
        self.side_length_a + self.side_length_b + self.side_length_c()
    }
}

impl Polygon for RightAngleTriangle {
    fn angles(&self) -> Vec<InternalAngle> {
        InternalAngle::from_literals(&TRIANGLE_ANGLES)
    }

    fn vertices(&self) -> Vec<Point> {
        let segments: Vec<Segment> = [self.side_length_a, self.side_length_c()]
            .into_iter()
            .zip(self.angles())
            .map(|(length, angle)| Segment::new(length, angle))
            .collect();
        trace_path(Point::ORIGIN, &segments)
    }
}
