//! Diagram construction utilities
//!
//! This module provides a declarative API for building diagrams.

mod diagram_builder;

pub use diagram_builder::DiagramBuilder;
