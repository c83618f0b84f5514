//! Square geometry

use serde::{Serialize, Deserialize};

use crate::path::PathBuilder;
use crate::shape::{Polygon, Shape};
use crate::{InternalAngle, Point};

/// Edge directions walked from the origin: up, right, down
const SQUARE_ANGLES: [f64; 3] = [90.0, 0.0, -90.0];

/// An axis-aligned square with its bottom-left corner at the origin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Square {
    side_length: f64,
}

impl Square {
    /// Create a new square
    ///
    /// # Arguments
    /// * `side_length` - Length of each side; zero gives a degenerate square
    pub fn new(side_length: f64) -> Self {
        Self { side_length }
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side_length * self.side_length
    }

    fn perimeter(&self) -> f64 {
        self.side_length * 4.0
    }
}

impl Polygon for Square {
    fn angles(&self) -> Vec<InternalAngle> {
        InternalAngle::from_literals(&SQUARE_ANGLES)
    }

    /// `[(0,0), (0,s), (s,s), (s,0)]`
    fn vertices(&self) -> Vec<Point> {
        self.angles()
            .into_iter()
            .fold(PathBuilder::new(), |path, angle| path.segment(self.side_length, angle))
            .build()
    }
}
