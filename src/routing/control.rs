//! Control points and rounded-corner tangent points
//!
//! Every function here dispatches on [`Orientation::axis`]: the anchor's own
//! axis carries the midpoint, the cross axis carries the turn. Unconstrained
//! anchors pass their endpoint through.

use crate::geometry::{sign, Orientation, Point};

/// The single control point per end used by curved and right-angled routing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints {
    pub start: Point,
    pub end: Point,
}

impl ControlPoints {
    pub fn compute(
        start: Point,
        end: Point,
        start_orientation: Orientation,
        end_orientation: Orientation,
    ) -> Self {
        Self {
            start: start_control_point(start, end, start_orientation),
            end: end_control_point(start, end, end_orientation),
        }
    }
}

/// Two points bracketing a quarter turn: `entry` on the incoming segment,
/// `exit` on the outgoing one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerTangents {
    pub entry: Point,
    pub exit: Point,
}

/// Tangent points for both corners of a rounded dogleg
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangents {
    pub start: CornerTangents,
    pub end: CornerTangents,
}

impl Tangents {
    pub fn compute(
        start: Point,
        end: Point,
        radius: f64,
        start_orientation: Orientation,
        end_orientation: Orientation,
    ) -> Self {
        Self {
            start: start_corner_tangents(start, end, radius, start_orientation),
            end: end_corner_tangents(start, end, radius, end_orientation),
        }
    }
}

/// Halfway from `start` towards `end` along the start anchor's axis
pub fn start_control_point(start: Point, end: Point, orientation: Orientation) -> Point {
    match orientation.axis() {
        Some(axis) => axis.shift(start, axis.delta(start, end) / 2.0),
        None => start,
    }
}

/// Halfway back from `end` towards `start` along the end anchor's axis
pub fn end_control_point(start: Point, end: Point, orientation: Orientation) -> Point {
    match orientation.axis() {
        Some(axis) => axis.shift(end, -axis.delta(start, end) / 2.0),
        None => end,
    }
}

/// Tangent points around the corner next to the start anchor
///
/// Each turn side follows the direction of travel on its axis. A radius of
/// 0 collapses both points onto the control point.
pub fn start_corner_tangents(
    start: Point,
    end: Point,
    radius: f64,
    orientation: Orientation,
) -> CornerTangents {
    let Some(axis) = orientation.axis() else {
        return CornerTangents {
            entry: start,
            exit: start,
        };
    };
    let cross = axis.cross();
    let corner = start_control_point(start, end, orientation);

    CornerTangents {
        entry: axis.shift(corner, -sign(axis.delta(start, end)) * radius),
        exit: cross.shift(corner, sign(cross.delta(start, end)) * radius),
    }
}

/// Tangent points around the corner next to the end anchor
pub fn end_corner_tangents(
    start: Point,
    end: Point,
    radius: f64,
    orientation: Orientation,
) -> CornerTangents {
    let Some(axis) = orientation.axis() else {
        return CornerTangents {
            entry: end,
            exit: end,
        };
    };
    let cross = axis.cross();
    let corner = end_control_point(start, end, orientation);

    CornerTangents {
        entry: cross.shift(corner, -sign(cross.delta(start, end)) * radius),
        exit: axis.shift(corner, sign(axis.delta(start, end)) * radius),
    }
}
