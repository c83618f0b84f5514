//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`S2D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use shapes2d_core::{Diagram, Point, ShapeKind};
use std::path::Path;

use crate::diagram::DiagramBuilder;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Diagram to build
    #[serde(default)]
    pub diagram: DiagramConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`S2D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // S2D_DIAGRAM__HEIGHT=200 -> diagram.height = 200
        figment = figment.merge(Env::prefixed("S2D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Diagram configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Canvas height (descriptive only)
    pub height: f64,
    /// Canvas width (descriptive only)
    pub width: f64,
    /// Shapes and where to put them
    pub shapes: Vec<PlacedShape>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            height: 100.0,
            width: 100.0,
            shapes: vec![
                PlacedShape::new([0.0, 0.0], ShapeKind::right_angle_triangle(5.0, 5.0)),
                PlacedShape::new([50.0, 70.0], ShapeKind::square(5.0)),
            ],
        }
    }
}

impl DiagramConfig {
    /// Build the configured diagram
    ///
    /// A later entry at the same position replaces an earlier one.
    pub fn to_diagram(&self) -> Diagram {
        self.shapes
            .iter()
            .fold(
                DiagramBuilder::new(self.height, self.width),
                |builder, placed| builder.add_shape(placed.position(), placed.shape),
            )
            .build()
    }
}

/// A shape placed at a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedShape {
    /// Position [x, y]
    pub position: [f64; 2],
    /// The shape, tagged by `type`
    pub shape: ShapeKind,
}

impl PlacedShape {
    pub fn new(position: [f64; 2], shape: ShapeKind) -> Self {
        Self { position, shape }
    }

    #[inline]
    pub fn position(&self) -> Point {
        Point::from(self.position)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
