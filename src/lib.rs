//! shapes2d - Shapes, diagrams, and their measurements
//!
//! The library side of the `shapes2d` binary: configuration loading and
//! diagram construction. Geometry lives in `shapes2d_math`, the diagram
//! container in `shapes2d_core`, and renderers in `shapes2d_render`.

pub mod config;
pub mod diagram;
