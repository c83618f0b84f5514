//! Integration tests for shapes placed in a diagram
//!
//! Mirrors the demo setup: a 5/5 right triangle at the origin and a 5x5
//! square at (50, 70) on a 100x100 canvas.

use std::collections::HashMap;

use shapes2d_core::{Diagram, Point, Polygon, RightAngleTriangle, Shape, ShapeKind, Square};

const EPSILON: f64 = 1e-9;

fn demo_diagram() -> Diagram {
    let mut positions = HashMap::new();
    positions.insert(Point::new(0.0, 0.0), ShapeKind::right_angle_triangle(5.0, 5.0));
    positions.insert(Point::new(50.0, 70.0), ShapeKind::square(5.0));
    Diagram::from_positions(100.0, 100.0, positions)
}

#[test]
fn test_square_scenario() {
    let s1 = Square::new(5.0);
    assert_eq!(s1.area(), 25.0);
    assert_eq!(s1.perimeter(), 20.0);
    assert_eq!(
        s1.vertices(),
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 0.0),
        ]
    );
}

#[test]
fn test_triangle_scenario() {
    let t1 = RightAngleTriangle::new(5.0, 5.0);
    assert!((t1.side_length_c() - 7.0711).abs() < 1e-4);
    assert_eq!(t1.area(), 12.5);
    assert!((t1.perimeter() - 17.0711).abs() < 1e-4);

    let v = t1.vertices();
    assert_eq!(v.len(), 3);
    assert_eq!(v[0], Point::ORIGIN);
    assert_eq!(v[1], Point::new(0.0, 5.0));
    // (0, 5) plus the hypotenuse walked at -45°
    assert!((v[2].x - 5.0).abs() < EPSILON);
    assert!(v[2].y.abs() < EPSILON);
}

#[test]
fn test_diagram_totals() {
    let d = demo_diagram();
    assert!((d.total_area() - 37.5).abs() < EPSILON);
    assert!((d.total_perimeter() - (20.0 + 10.0 + 50.0_f64.sqrt())).abs() < EPSILON);
}

#[test]
fn test_totals_ignore_insertion_order() {
    let mut a = Diagram::new(100.0, 100.0);
    a.insert(Point::new(0.0, 0.0), ShapeKind::right_angle_triangle(5.0, 5.0));
    a.insert(Point::new(50.0, 70.0), ShapeKind::square(5.0));

    let mut b = Diagram::new(100.0, 100.0);
    b.insert(Point::new(50.0, 70.0), ShapeKind::square(5.0));
    b.insert(Point::new(0.0, 0.0), ShapeKind::right_angle_triangle(5.0, 5.0));

    assert_eq!(a, b);
    assert!((a.total_area() - b.total_area()).abs() < EPSILON);
    assert!((a.total_perimeter() - b.total_perimeter()).abs() < EPSILON);
}

#[test]
fn test_empty_diagram_totals() {
    let d = Diagram::from_positions(100.0, 100.0, HashMap::new());
    assert_eq!(d.total_area(), 0.0);
    assert_eq!(d.total_perimeter(), 0.0);
    assert_eq!(d.shapes().count(), 0);
}

#[test]
fn test_degenerate_square_in_diagram() {
    let mut d = Diagram::new(1.0, 1.0);
    d.insert(Point::ORIGIN, ShapeKind::square(0.0));
    assert_eq!(d.total_area(), 0.0);
    assert_eq!(d.total_perimeter(), 0.0);

    let shape = d.shape_at(&Point::ORIGIN).unwrap();
    assert!(shape.vertices().iter().all(|v| *v == Point::ORIGIN));
}

#[test]
fn test_reconstructed_key_finds_shape() {
    let d = demo_diagram();
    let key = Point::new(25.0 * 2.0, 35.0 * 2.0);
    assert_eq!(d.shape_at(&key), Some(&ShapeKind::square(5.0)));
}
