//! Container defaults and per-relation style overrides

use serde::Deserialize;

use crate::error::SceneError;
use crate::geometry::LineStyle;

use super::marker::EndShape;

/// Defaults shared by every connector in a container
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Prefix that keeps marker ids unique within a document
    pub unique_id: String,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    pub start_marker: bool,
    pub end_marker: bool,
    pub end_shape: EndShape,
    /// Shorthand for `line_style = "angle"` when no line style is given
    pub no_curves: bool,
    pub line_style: Option<LineStyle>,
    pub offset: f64,
    pub round_corner: Option<f64>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            unique_id: "arrowpath".to_string(),
            stroke_color: "#f00".to_string(),
            stroke_width: 2.0,
            stroke_dasharray: None,
            start_marker: false,
            end_marker: true,
            end_shape: EndShape::default(),
            no_curves: false,
            line_style: None,
            offset: 0.0,
            round_corner: None,
        }
    }
}

impl ContainerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    pub fn with_round_corner(mut self, radius: f64) -> Self {
        self.round_corner = Some(radius);
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_end_shape(mut self, shape: EndShape) -> Self {
        self.end_shape = shape;
        self
    }

    /// Line style of connectors that do not override it
    pub fn line_style(&self) -> LineStyle {
        self.line_style.unwrap_or(if self.no_curves {
            LineStyle::Angle
        } else {
            LineStyle::Curve
        })
    }

    /// Whether this container's angled connectors form a rounded-corner batch
    pub fn batches_corners(&self) -> bool {
        self.line_style() == LineStyle::Angle && matches!(self.round_corner, Some(r) if r > 0.0)
    }

    /// Apply a relation's overrides on top of these defaults
    pub fn resolve(&self, style: &RelationStyle) -> ArrowStyle {
        let no_curves = style.no_curves.unwrap_or(false) || self.no_curves;
        let line_style = style.line_style.or(self.line_style).unwrap_or(if no_curves {
            LineStyle::Angle
        } else {
            LineStyle::Curve
        });

        ArrowStyle {
            stroke_color: style
                .stroke_color
                .clone()
                .unwrap_or_else(|| self.stroke_color.clone()),
            stroke_width: style.stroke_width.unwrap_or(self.stroke_width),
            stroke_dasharray: style
                .stroke_dasharray
                .clone()
                .or_else(|| self.stroke_dasharray.clone()),
            start_marker: style.start_marker.unwrap_or(false) || self.start_marker,
            end_marker: style.end_marker.unwrap_or(self.end_marker),
            end_shape: style
                .end_shape
                .clone()
                .unwrap_or_else(|| self.end_shape.clone()),
            line_style,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), SceneError> {
        check_stroke_width("container", self.stroke_width)?;
        if let Some(radius) = self.round_corner {
            if radius < 0.0 || radius.is_nan() {
                return Err(SceneError::invalid_style(
                    "container",
                    format!("round_corner must be non-negative, got {}", radius),
                ));
            }
        }
        if !self.offset.is_finite() {
            return Err(SceneError::invalid_style("container", "offset must be finite"));
        }
        check_end_shape("container", &self.end_shape)
    }
}

/// Per-relation overrides; unset fields inherit from the container
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RelationStyle {
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub start_marker: Option<bool>,
    pub end_marker: Option<bool>,
    pub end_shape: Option<EndShape>,
    pub no_curves: Option<bool>,
    pub line_style: Option<LineStyle>,
}

impl RelationStyle {
    pub(crate) fn validate(&self, owner: &str) -> Result<(), SceneError> {
        if let Some(width) = self.stroke_width {
            check_stroke_width(owner, width)?;
        }
        if let Some(shape) = &self.end_shape {
            check_end_shape(owner, shape)?;
        }
        Ok(())
    }
}

/// Fully resolved drawing style of one connector
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    pub stroke_dasharray: Option<String>,
    pub start_marker: bool,
    pub end_marker: bool,
    pub end_shape: EndShape,
    pub line_style: LineStyle,
}

fn check_stroke_width(owner: &str, width: f64) -> Result<(), SceneError> {
    if width > 0.0 && width.is_finite() {
        Ok(())
    } else {
        Err(SceneError::invalid_style(
            owner,
            format!("stroke_width must be positive, got {}", width),
        ))
    }
}

fn check_end_shape(owner: &str, shape: &EndShape) -> Result<(), SceneError> {
    let length = shape.marker_length();
    if length >= 0.0 && length.is_finite() {
        Ok(())
    } else {
        Err(SceneError::invalid_style(
            owner,
            format!("marker size must be non-negative, got {}", length / 2.0),
        ))
    }
}
