//! Marker shapes drawn at connector ends

use serde::Deserialize;

use crate::geometry::Orientation;

/// Shape of the marker drawn at a connector end
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndShape {
    Arrow(ArrowShape),
    Circle(CircleShape),
}

impl Default for EndShape {
    fn default() -> Self {
        EndShape::Arrow(ArrowShape::default())
    }
}

impl EndShape {
    /// Marker length the endpoint adjustment makes room for
    pub fn marker_length(&self) -> f64 {
        match self {
            EndShape::Arrow(arrow) => arrow.arrow_length * 2.0,
            EndShape::Circle(circle) => circle.radius * 2.0,
        }
    }
}

/// Triangular arrowhead, sized in stroke-width units
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrowShape {
    pub arrow_length: f64,
    pub arrow_thickness: f64,
}

impl Default for ArrowShape {
    fn default() -> Self {
        Self {
            arrow_length: 10.0,
            arrow_thickness: 6.0,
        }
    }
}

/// Round marker, sized in stroke-width units
///
/// Colors fall back to the connector's stroke color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CircleShape {
    pub radius: f64,
    pub fill_color: Option<String>,
    pub stroke_color: Option<String>,
    pub stroke_width: f64,
}

impl Default for CircleShape {
    fn default() -> Self {
        Self {
            radius: 2.0,
            fill_color: None,
            stroke_color: None,
            stroke_width: 1.0,
        }
    }
}

/// Id of the marker definition shared by one connector's two ends
pub fn marker_id(
    unique_id: &str,
    source_id: &str,
    source_anchor: Orientation,
    target_id: &str,
    target_anchor: Orientation,
) -> String {
    format!(
        "{}{}{}{}{}",
        unique_id,
        source_id,
        source_anchor.as_str(),
        target_id,
        target_anchor.as_str()
    )
}
