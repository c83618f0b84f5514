//! Closed set of shape variants
//!
//! [`ShapeKind`] is what a [`Diagram`](crate::Diagram) stores. It is a plain
//! enum rather than a trait object so diagrams own their shapes by value and
//! can be described in config files. Each variant wraps the math-crate type
//! and stores only its construction parameters.

use serde::{Serialize, Deserialize};
use shapes2d_math::{InternalAngle, Point, Polygon, RightAngleTriangle, Shape, Square};

/// Any shape that can be placed in a diagram
///
/// Serialized with an inline `type` tag, e.g.
/// `{ type = "Square", side_length = 5.0 }` in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    /// A square anchored at its bottom-left corner
    Square(Square),
    /// A right-angle triangle described by its legs
    RightAngleTriangle(RightAngleTriangle),
}

impl ShapeKind {
    /// Create a square
    pub fn square(side_length: f64) -> Self {
        ShapeKind::Square(Square::new(side_length))
    }

    /// Create a right-angle triangle
    pub fn right_angle_triangle(side_length_a: f64, side_length_b: f64) -> Self {
        ShapeKind::RightAngleTriangle(RightAngleTriangle::new(side_length_a, side_length_b))
    }

    /// Variant name, matching the serialized `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square(_) => "Square",
            ShapeKind::RightAngleTriangle(_) => "RightAngleTriangle",
        }
    }

    /// Borrow the shape as a polygon trait object
    pub fn as_polygon(&self) -> &dyn Polygon {
        match self {
            ShapeKind::Square(s) => s,
            ShapeKind::RightAngleTriangle(t) => t,
        }
    }
}

impl Shape for ShapeKind {
    fn area(&self) -> f64 {
        self.as_polygon().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_polygon().perimeter()
    }
}

impl Polygon for ShapeKind {
    fn vertices(&self) -> Vec<Point> {
        self.as_polygon().vertices()
    }

    fn angles(&self) -> Vec<InternalAngle> {
        self.as_polygon().angles()
    }
}

impl From<Square> for ShapeKind {
    fn from(square: Square) -> Self {
        ShapeKind::Square(square)
    }
}

impl From<RightAngleTriangle> for ShapeKind {
    fn from(triangle: RightAngleTriangle) -> Self {
        ShapeKind::RightAngleTriangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_delegates() {
        let shape = ShapeKind::square(5.0);
        assert_eq!(shape.name(), "Square");
        assert_eq!(shape.area(), 25.0);
        assert_eq!(shape.perimeter(), 20.0);
        assert_eq!(shape.vertex_count(), 4);
    }

    #[test]
    fn test_triangle_delegates() {
        let shape = ShapeKind::right_angle_triangle(5.0, 5.0);
        assert_eq!(shape.name(), "RightAngleTriangle");
        assert_eq!(shape.area(), 12.5);
        assert!((shape.perimeter() - 17.0711).abs() < 1e-4);
        assert_eq!(shape.angles().len(), 3);
        assert_eq!(shape.vertices().len(), 3);
    }

    #[test]
    fn test_from_math_types() {
        let s: ShapeKind = Square::new(2.0).into();
        assert_eq!(s, ShapeKind::square(2.0));
        let t: ShapeKind = RightAngleTriangle::new(1.0, 2.0).into();
        assert_eq!(t, ShapeKind::right_angle_triangle(1.0, 2.0));
    }

    #[test]
    fn test_toml_tagged_form() {
        #[derive(Deserialize)]
        struct Wrapper {
            shape: ShapeKind,
        }

        let w: Wrapper = toml::from_str(
            r#"shape = { type = "RightAngleTriangle", side_length_a = 3.0, side_length_b = 4.0 }"#,
        )
        .unwrap();
        assert_eq!(w.shape, ShapeKind::right_angle_triangle(3.0, 4.0));

        let w: Wrapper = toml::from_str(r#"shape = { type = "Square", side_length = 2.0 }"#).unwrap();
        assert_eq!(w.shape, ShapeKind::square(2.0));
    }

    #[test]
    fn test_unknown_type_rejected() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            shape: ShapeKind,
        }

        let result: Result<Wrapper, _> = toml::from_str(r#"shape = { type = "Circle", radius = 1.0 }"#);
        assert!(result.is_err());
    }
}
