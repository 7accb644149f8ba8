//! Arrowpath - connector routing between anchored regions
//!
//! This library computes the SVG path geometry of connectors (arrows) drawn
//! between rectangular elements: marker-adjusted endpoints, control points,
//! batch-wide rounded-corner classification and label boxes. Scenes are
//! described in TOML and rendered to SVG.
//!
//! # Example
//!
//! ```rust
//! use arrowpath::render;
//!
//! let svg = render(r#"
//! [[elements]]
//! id = "a"
//! x = 0
//! y = 0
//! width = 50
//! height = 50
//! relations = [{ target_id = "b", source_anchor = "right", target_anchor = "left" }]
//!
//! [[elements]]
//! id = "b"
//! x = 150
//! y = 0
//! width = 50
//! height = 50
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod routing;
pub mod scene;

pub use error::SceneError;
pub use geometry::{BoundingBox, LineStyle, Orientation, Point};
pub use renderer::{render_svg, SvgConfig};
pub use routing::{route_connector, Anchor, ConnectorGeometry, ConnectorSpec, LineGroup, PathOutcome};
pub use scene::{AnchorResolver, ContainerConfig, RoutedArrow, Scene};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug overlays
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.svg.debug = debug;
        self
    }
}

/// Render a TOML scene to SVG with default configuration
pub fn render(source: &str) -> Result<String, SceneError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML scene to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use arrowpath::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_svg(SvgConfig::default().with_viewbox_padding(50.0));
///
/// let svg = render_with_config("", config).unwrap();
/// assert!(svg.contains(r#"viewBox="-50 -50 100 100""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, SceneError> {
    let scene = Scene::from_str(source)?;
    let arrows = scene.route();

    if config.svg.debug {
        for element in &scene.elements {
            let b = element.bounds();
            tracing::debug!(
                id = element.id.as_str(),
                x = b.x,
                y = b.y,
                width = b.width,
                height = b.height,
                "element"
            );
        }
    }

    Ok(render_svg(&scene, &arrows, &config.svg))
}

/// Route a TOML scene and list each connector's path data
///
/// One `source -> target: d` line per routed connector, in drawing order.
/// Suppressed connectors list an empty path.
pub fn render_paths(source: &str) -> Result<String, SceneError> {
    let scene = Scene::from_str(source)?;
    Ok(scene
        .route()
        .iter()
        .map(|arrow| {
            format!(
                "{} -> {}: {}",
                arrow.source_id,
                arrow.target_id,
                arrow.geometry.path.to_svg_d()
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
