//! Connector geometry between two anchored regions
//!
//! The engine is pure: a [`ConnectorSpec`] plus the batch's [`LineGroup`]
//! produce a [`ConnectorGeometry`]. Data flows endpoint adjustment →
//! control points → (batch classification) → path building, with the label
//! box derived from the same drawn endpoints.

pub mod control;
pub mod endpoint;
pub mod group;
pub mod label;
pub mod path;

pub use control::{
    end_control_point, end_corner_tangents, start_control_point, start_corner_tangents,
    ControlPoints, CornerTangents, Tangents,
};
pub use endpoint::resolve_endpoint;
pub use group::LineGroup;
pub use label::label_box;
pub use path::{apply_offset, build_path, PathOutcome, PathSegment, ResolvedPath};

use crate::geometry::{BoundingBox, LineStyle, Orientation, Point};

/// A concrete attachment point and the side it leaves from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub point: Point,
    pub orientation: Orientation,
}

impl Anchor {
    pub fn new(point: Point, orientation: Orientation) -> Self {
        Self { point, orientation }
    }
}

/// The two ends of a connector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
    pub start: Point,
    pub end: Point,
}

/// Everything needed to compute one connector's geometry
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorSpec {
    pub start: Anchor,
    pub end: Anchor,
    pub stroke_width: f64,
    pub start_marker: bool,
    pub end_marker: bool,
    /// Full length of the marker drawn at either end
    pub arrow_length: f64,
    pub line_style: LineStyle,
    /// Distance both drawn ends are pulled in by (end only for straight lines)
    pub offset: f64,
    /// Corner radius for angled connectors
    pub round_corner: Option<f64>,
}

impl ConnectorSpec {
    /// A curved connector with no markers, offset or rounding
    pub fn new(start: Anchor, end: Anchor) -> Self {
        Self {
            start,
            end,
            stroke_width: 2.0,
            start_marker: false,
            end_marker: false,
            arrow_length: 0.0,
            line_style: LineStyle::default(),
            offset: 0.0,
            round_corner: None,
        }
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Enable markers at either end, each `length` long
    pub fn with_markers(mut self, start: bool, end: bool, length: f64) -> Self {
        self.start_marker = start;
        self.end_marker = end;
        self.arrow_length = length;
        self
    }

    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_round_corner(mut self, radius: Option<f64>) -> Self {
        self.round_corner = radius;
        self
    }

    /// Whether an angled connector asked for rounded corners
    ///
    /// A zero or negative radius means sharp corners.
    pub fn rounds_corners(&self) -> bool {
        matches!(self.round_corner, Some(r) if r > 0.0)
    }

    /// Marker-adjusted endpoints, before any offset
    pub fn endpoints(&self) -> Endpoints {
        let marker = |enabled: bool| if enabled { self.arrow_length } else { 0.0 };
        Endpoints {
            start: resolve_endpoint(
                self.start.point,
                self.start.orientation,
                marker(self.start_marker),
                self.stroke_width,
                self.line_style,
                self.end.point,
            ),
            end: resolve_endpoint(
                self.end.point,
                self.end.orientation,
                marker(self.end_marker),
                self.stroke_width,
                self.line_style,
                self.start.point,
            ),
        }
    }
}

/// The computed geometry of one connector
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorGeometry {
    /// Marker-adjusted endpoints
    pub endpoints: Endpoints,
    /// Endpoints after offset; where the path actually starts and stops
    pub drawn: Endpoints,
    pub controls: ControlPoints,
    pub tangents: Option<Tangents>,
    pub path: PathOutcome,
    /// Box the label is centered in
    pub label: BoundingBox,
}

/// Compute the full geometry of one connector within its batch
pub fn route_connector(spec: &ConnectorSpec, group: LineGroup) -> ConnectorGeometry {
    let endpoints = spec.endpoints();
    let controls = ControlPoints::compute(
        endpoints.start,
        endpoints.end,
        spec.start.orientation,
        spec.end.orientation,
    );
    let tangents = match spec.round_corner {
        Some(radius) if spec.line_style == LineStyle::Angle && spec.rounds_corners() => {
            Some(Tangents::compute(
                endpoints.start,
                endpoints.end,
                radius,
                spec.start.orientation,
                spec.end.orientation,
            ))
        }
        _ => None,
    };

    let drawn = apply_offset(endpoints, controls.start, spec.line_style, spec.offset);
    let path = build_path(spec, endpoints, controls, tangents, group);

    ConnectorGeometry {
        endpoints,
        drawn,
        controls,
        tangents,
        path,
        label: label_box(drawn.start, drawn.end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_straight_without_markers() {
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::None),
            Anchor::new(Point::new(100.0, 0.0), Orientation::None),
        )
        .with_line_style(LineStyle::Straight);
        let geometry = route_connector(&spec, LineGroup::None);
        assert_eq!(geometry.path.to_svg_d(), "M0,0 100,0");
        assert_eq!(geometry.label, BoundingBox::new(0.0, 0.0, 100.0, 1.0));
    }

    #[test]
    fn test_vertical_curve() {
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::Bottom),
            Anchor::new(Point::new(0.0, 100.0), Orientation::Top),
        )
        .with_line_style(LineStyle::Curve);
        let geometry = route_connector(&spec, LineGroup::None);
        assert_eq!(geometry.controls.start, Point::new(0.0, 50.0));
        assert_eq!(geometry.controls.end, Point::new(0.0, 50.0));
        assert_eq!(geometry.path.to_svg_d(), "M0,0 C0,50 0,50 0,100");
    }

    #[test]
    fn test_end_marker_shortens_curve() {
        // length 10 * stroke 2 / 2 = 10 units back out of the top side
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::Bottom),
            Anchor::new(Point::new(0.0, 100.0), Orientation::Top),
        )
        .with_markers(false, true, 10.0);
        let geometry = route_connector(&spec, LineGroup::None);
        assert_eq!(geometry.endpoints.end, Point::new(0.0, 90.0));
        assert_eq!(geometry.path.to_svg_d(), "M0,0 C0,45 0,45 0,90");
    }

    #[test]
    fn test_tangents_only_for_rounded_angle() {
        let base = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::Right),
            Anchor::new(Point::new(100.0, 100.0), Orientation::Left),
        )
        .with_round_corner(Some(5.0));
        assert!(route_connector(&base, LineGroup::Drop).tangents.is_none());

        let angled = base.clone().with_line_style(LineStyle::Angle);
        assert!(route_connector(&angled, LineGroup::Drop).tangents.is_some());

        let sharp = angled.with_round_corner(Some(0.0));
        assert!(route_connector(&sharp, LineGroup::Drop).tangents.is_none());
    }

    #[test]
    fn test_label_follows_offset_ends() {
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::Right),
            Anchor::new(Point::new(100.0, 50.0), Orientation::Left),
        )
        .with_line_style(LineStyle::Angle)
        .with_offset(10.0);
        let geometry = route_connector(&spec, LineGroup::None);
        assert_eq!(geometry.drawn.start, Point::new(10.0, 0.0));
        assert_eq!(geometry.drawn.end, Point::new(90.0, 50.0));
        assert_eq!(geometry.label, BoundingBox::new(10.0, 0.0, 80.0, 50.0));
    }
}
