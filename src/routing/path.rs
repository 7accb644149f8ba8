//! Path assembly for the three line styles
//!
//! Produces SVG path data using absolute `M`, `C`, `A` and `L` commands.
//! Straight runs directly after a move-to are written as implicit line-to
//! coordinate pairs.

use crate::geometry::{LineStyle, Point};

use super::control::{ControlPoints, Tangents};
use super::group::LineGroup;
use super::{ConnectorSpec, Endpoints};

/// Radius written into every corner arc command
pub const ARC_RADIUS: f64 = 5.0;

/// A segment in a resolved path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Cubic Bezier through two control points
    CurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Quarter-circle corner
    ArcTo {
        end: Point,
        radius: f64,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
}

/// A resolved path ready for SVG rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub segments: Vec<PathSegment>,
}

impl ResolvedPath {
    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.segments.len());
        let mut implicit_line = false;

        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => {
                    parts.push(format!("M{}", fmt_point(*p)));
                    implicit_line = true;
                }
                PathSegment::LineTo(p) => {
                    if implicit_line {
                        parts.push(fmt_point(*p));
                    } else {
                        parts.push(format!("L{}", fmt_point(*p)));
                        implicit_line = true;
                    }
                }
                PathSegment::CurveTo {
                    control1,
                    control2,
                    end,
                } => {
                    parts.push(format!(
                        "C{} {} {}",
                        fmt_point(*control1),
                        fmt_point(*control2),
                        fmt_point(*end)
                    ));
                    implicit_line = false;
                }
                PathSegment::ArcTo { end, radius, sweep } => {
                    // A rx,ry x-axis-rotation large-arc-flag,sweep-flag x,y
                    parts.push(format!(
                        "A{r},{r} 0 0,{} {}",
                        u8::from(*sweep),
                        fmt_point(*end),
                        r = fmt_num(*radius)
                    ));
                    implicit_line = false;
                }
            }
        }

        parts.join(" ")
    }
}

/// Result of path building
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// Geometry to draw
    Path(ResolvedPath),
    /// The connector must not be drawn on this pass
    Suppressed,
}

impl PathOutcome {
    pub fn path(&self) -> Option<&ResolvedPath> {
        match self {
            PathOutcome::Path(path) => Some(path),
            PathOutcome::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, PathOutcome::Suppressed)
    }

    /// SVG path data; empty for a suppressed connector
    pub fn to_svg_d(&self) -> String {
        self.path().map(ResolvedPath::to_svg_d).unwrap_or_default()
    }
}

/// Pull the drawn endpoints in by `offset` to separate overlapping connectors
///
/// Straight lines move only their end, along the line of sight. Other
/// styles move both ends along the start's first leg (start towards its
/// control point).
pub fn apply_offset(
    endpoints: Endpoints,
    start_control: Point,
    line_style: LineStyle,
    offset: f64,
) -> Endpoints {
    if offset == 0.0 {
        return endpoints;
    }

    let Endpoints { start, end } = endpoints;
    let angle = if line_style == LineStyle::Straight {
        (end.y - start.y).atan2(end.x - start.x)
    } else {
        (start_control.y - start.y).atan2(start_control.x - start.x)
    };
    let dx = offset * angle.cos();
    let dy = offset * angle.sin();

    Endpoints {
        start: if line_style == LineStyle::Straight {
            start
        } else {
            start.translate(dx, dy)
        },
        end: end.translate(-dx, -dy),
    }
}

/// How the corners of a rounded dogleg are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CornerTurns {
    /// Start and end share a y-coordinate; no turn to round
    Sharp,
    /// This member runs against the batch arrangement
    Contradicts,
    /// Sweep flags for the start and end arcs
    Round { first: bool, second: bool },
}

fn corner_turns(endpoints: Endpoints, group: LineGroup) -> CornerTurns {
    let Endpoints { start, end } = endpoints;
    if start.y == end.y {
        return CornerTurns::Sharp;
    }

    let to_right = start.x < end.x;
    match group {
        LineGroup::Rise if start.y < end.y => CornerTurns::Contradicts,
        LineGroup::Rise => CornerTurns::Round {
            first: !to_right,
            second: to_right,
        },
        LineGroup::Drop if start.y > end.y => CornerTurns::Contradicts,
        LineGroup::Drop => CornerTurns::Round {
            first: to_right,
            second: !to_right,
        },
        LineGroup::Shrink | LineGroup::Expand | LineGroup::None => CornerTurns::Sharp,
    }
}

/// Assemble the path for one connector
///
/// `endpoints` are the marker-adjusted endpoints before any offset;
/// `tangents` are present only when corner rounding was requested for an
/// angled connector.
pub fn build_path(
    spec: &ConnectorSpec,
    endpoints: Endpoints,
    controls: ControlPoints,
    tangents: Option<Tangents>,
    group: LineGroup,
) -> PathOutcome {
    let drawn = apply_offset(endpoints, controls.start, spec.line_style, spec.offset);
    let mut segments = vec![PathSegment::MoveTo(drawn.start)];

    match spec.line_style {
        LineStyle::Straight => {}
        LineStyle::Curve => {
            segments.push(PathSegment::CurveTo {
                control1: controls.start,
                control2: controls.end,
                end: drawn.end,
            });
            return PathOutcome::Path(ResolvedPath { segments });
        }
        LineStyle::Angle => {
            let turns = match tangents {
                Some(t) if spec.rounds_corners() => Some((t, corner_turns(endpoints, group))),
                _ => None,
            };
            match turns {
                Some((_, CornerTurns::Contradicts)) => {
                    tracing::debug!(
                        ?group,
                        start_y = endpoints.start.y,
                        end_y = endpoints.end.y,
                        "connector runs against its batch, suppressing"
                    );
                    return PathOutcome::Suppressed;
                }
                Some((t, CornerTurns::Round { first, second })) => {
                    segments.push(PathSegment::LineTo(t.start.entry));
                    segments.push(PathSegment::ArcTo {
                        end: t.start.exit,
                        radius: ARC_RADIUS,
                        sweep: first,
                    });
                    segments.push(PathSegment::LineTo(t.end.entry));
                    segments.push(PathSegment::ArcTo {
                        end: t.end.exit,
                        radius: ARC_RADIUS,
                        sweep: second,
                    });
                }
                Some((_, CornerTurns::Sharp)) | None => {
                    segments.push(PathSegment::LineTo(controls.start));
                    segments.push(PathSegment::LineTo(controls.end));
                }
            }
        }
    }

    segments.push(PathSegment::LineTo(drawn.end));
    PathOutcome::Path(ResolvedPath { segments })
}

/// Format a coordinate in its shortest round-trip form, without `-0`
pub fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;
    use crate::routing::Anchor;
    use pretty_assertions::assert_eq;

    fn angled(start: Point, end: Point, radius: Option<f64>) -> ConnectorSpec {
        ConnectorSpec::new(
            Anchor::new(start, Orientation::Right),
            Anchor::new(end, Orientation::Left),
        )
        .with_line_style(LineStyle::Angle)
        .with_round_corner(radius)
    }

    fn build(spec: &ConnectorSpec, group: LineGroup) -> PathOutcome {
        let endpoints = spec.endpoints();
        let controls = ControlPoints::compute(
            endpoints.start,
            endpoints.end,
            spec.start.orientation,
            spec.end.orientation,
        );
        let tangents = spec.round_corner.map(|r| {
            Tangents::compute(
                endpoints.start,
                endpoints.end,
                r,
                spec.start.orientation,
                spec.end.orientation,
            )
        });
        build_path(spec, endpoints, controls, tangents, group)
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-12.25), "-12.25");
    }

    #[test]
    fn test_segments_to_d() {
        let path = ResolvedPath {
            segments: vec![
                PathSegment::MoveTo(Point::new(0.0, 0.0)),
                PathSegment::LineTo(Point::new(10.0, 0.0)),
                PathSegment::ArcTo {
                    end: Point::new(15.0, 5.0),
                    radius: 5.0,
                    sweep: true,
                },
                PathSegment::LineTo(Point::new(15.0, 20.0)),
                PathSegment::LineTo(Point::new(15.0, 30.0)),
            ],
        };
        assert_eq!(path.to_svg_d(), "M0,0 10,0 A5,5 0 0,1 15,5 L15,20 15,30");
    }

    #[test]
    fn test_suppressed_renders_empty() {
        assert_eq!(PathOutcome::Suppressed.to_svg_d(), "");
        assert!(PathOutcome::Suppressed.path().is_none());
    }

    #[test]
    fn test_plain_dogleg() {
        let spec = angled(Point::new(0.0, 0.0), Point::new(100.0, 100.0), None);
        let d = build(&spec, LineGroup::None).to_svg_d();
        assert_eq!(d, "M0,0 50,0 50,100 100,100");
    }

    #[test]
    fn test_rounded_drop_rightward() {
        let spec = angled(Point::new(0.0, 0.0), Point::new(100.0, 100.0), Some(5.0));
        let d = build(&spec, LineGroup::Drop).to_svg_d();
        assert_eq!(
            d,
            "M0,0 45,0 A5,5 0 0,1 50,5 L50,95 A5,5 0 0,0 55,100 L100,100"
        );
    }

    #[test]
    fn test_rounded_drop_leftward_mirrors_sweeps() {
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(100.0, 0.0), Orientation::Left),
            Anchor::new(Point::new(0.0, 100.0), Orientation::Right),
        )
        .with_line_style(LineStyle::Angle)
        .with_round_corner(Some(5.0));
        let d = build(&spec, LineGroup::Drop).to_svg_d();
        assert_eq!(
            d,
            "M100,0 55,0 A5,5 0 0,0 50,5 L50,95 A5,5 0 0,1 45,100 L0,100"
        );
    }

    #[test]
    fn test_rounded_rise_rightward() {
        let spec = angled(Point::new(0.0, 100.0), Point::new(100.0, 0.0), Some(5.0));
        let d = build(&spec, LineGroup::Rise).to_svg_d();
        assert_eq!(
            d,
            "M0,100 45,100 A5,5 0 0,0 50,95 L50,5 A5,5 0 0,1 55,0 L100,0"
        );
    }

    #[test]
    fn test_rounded_drop_between_vertical_anchors() {
        // sweeps follow only the horizontal direction and the group, even
        // when the first leg runs vertically
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::Bottom),
            Anchor::new(Point::new(100.0, 100.0), Orientation::Top),
        )
        .with_line_style(LineStyle::Angle)
        .with_round_corner(Some(5.0));
        let d = build(&spec, LineGroup::Drop).to_svg_d();
        assert_eq!(
            d,
            "M0,0 0,45 A5,5 0 0,1 5,50 L95,50 A5,5 0 0,0 100,55 L100,100"
        );
    }

    #[test]
    fn test_rise_member_running_downward_is_suppressed() {
        let spec = angled(Point::new(0.0, 0.0), Point::new(100.0, 100.0), Some(5.0));
        assert_eq!(build(&spec, LineGroup::Rise), PathOutcome::Suppressed);
    }

    #[test]
    fn test_drop_member_running_upward_is_suppressed() {
        let spec = angled(Point::new(0.0, 100.0), Point::new(100.0, 0.0), Some(5.0));
        assert_eq!(build(&spec, LineGroup::Drop), PathOutcome::Suppressed);
    }

    #[test]
    fn test_level_member_falls_back_to_dogleg() {
        let spec = angled(Point::new(0.0, 40.0), Point::new(100.0, 40.0), Some(5.0));
        for group in [LineGroup::Rise, LineGroup::Drop] {
            let d = build(&spec, group).to_svg_d();
            assert_eq!(d, "M0,40 50,40 50,40 100,40");
        }
    }

    #[test]
    fn test_shrink_and_expand_stay_sharp() {
        let spec = angled(Point::new(0.0, 0.0), Point::new(100.0, 100.0), Some(5.0));
        for group in [LineGroup::Shrink, LineGroup::Expand, LineGroup::None] {
            let d = build(&spec, group).to_svg_d();
            assert_eq!(d, "M0,0 50,0 50,100 100,100");
        }
    }

    #[test]
    fn test_zero_radius_is_not_rounded() {
        let spec = angled(Point::new(0.0, 0.0), Point::new(100.0, 100.0), Some(0.0));
        let d = build(&spec, LineGroup::Drop).to_svg_d();
        assert_eq!(d, "M0,0 50,0 50,100 100,100");
    }

    #[test]
    fn test_offset_on_straight_moves_only_the_end() {
        let spec = ConnectorSpec::new(
            Anchor::new(Point::new(0.0, 0.0), Orientation::None),
            Anchor::new(Point::new(100.0, 0.0), Orientation::None),
        )
        .with_line_style(LineStyle::Straight)
        .with_offset(10.0);
        assert_eq!(build(&spec, LineGroup::None).to_svg_d(), "M0,0 90,0");
    }

    #[test]
    fn test_offset_on_angle_moves_both_ends() {
        let spec = angled(Point::new(0.0, 0.0), Point::new(100.0, 100.0), None).with_offset(10.0);
        assert_eq!(
            build(&spec, LineGroup::None).to_svg_d(),
            "M10,0 50,0 50,100 90,100"
        );
    }

    #[test]
    fn test_zero_offset_matches_no_offset() {
        for style in [LineStyle::Straight, LineStyle::Curve, LineStyle::Angle] {
            let spec = ConnectorSpec::new(
                Anchor::new(Point::new(3.0, 7.0), Orientation::Bottom),
                Anchor::new(Point::new(-40.0, 90.5), Orientation::Top),
            )
            .with_line_style(style);
            let plain = build(&spec, LineGroup::None).to_svg_d();
            let zero = build(&spec.clone().with_offset(0.0), LineGroup::None).to_svg_d();
            assert_eq!(plain, zero);
        }
    }
}
