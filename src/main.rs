//! shapes2d - demo driver
//!
//! Builds the configured diagram, prints each shape's measurements and
//! outline, then the diagram totals, and finally renders it to the log.

use shapes2d::config::AppConfig;
use shapes2d_core::{Diagram, Point, Polygon, Shape, ShapeKind};
use shapes2d_render::{LogRenderer, render_diagram};

fn format_vertices(vertices: &[Point]) -> String {
    let parts: Vec<String> = vertices.iter().map(Point::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Placed shapes ordered by position so output is stable
fn sorted_positions(diagram: &Diagram) -> Vec<(Point, ShapeKind)> {
    let mut placed: Vec<(Point, ShapeKind)> = diagram.positions().map(|(p, s)| (*p, *s)).collect();
    placed.sort_by(|a, b| a.0.x.total_cmp(&b.0.x).then(a.0.y.total_cmp(&b.0.y)));
    placed
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting shapes2d");
    let diagram = config.diagram.to_diagram();
    log::info!(
        "Loaded {}x{} diagram with {} shapes",
        diagram.width(),
        diagram.height(),
        diagram.shape_count()
    );

    for (position, shape) in sorted_positions(&diagram) {
        println!("{} at ({})", shape.name(), position);
        println!("  area: {:?}", shape.area());
        println!("  perimeter: {:?}", shape.perimeter());
        println!("  vertices: {}", format_vertices(&shape.vertices()));
    }

    println!("total area: {:?}", diagram.total_area());
    println!("total perimeter: {:?}", diagram.total_perimeter());

    let mut renderer = LogRenderer::new().with_level(log::Level::Info);
    let rendered = render_diagram(&diagram, &mut renderer);
    log::info!("Rendered {} shapes", rendered);
}
