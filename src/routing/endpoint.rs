//! Endpoint adjustment for arrowhead markers

use crate::geometry::{LineStyle, Orientation, Point};

/// Unit vector along which an endpoint is displaced to make room for its marker
///
/// Straight lines aim along the true line of sight towards `opposing`; all
/// other styles leave through the anchor's side.
pub fn marker_direction(
    anchor: Point,
    orientation: Orientation,
    line_style: LineStyle,
    opposing: Point,
) -> (f64, f64) {
    if line_style == LineStyle::Straight {
        let angle = (opposing.y - anchor.y).atan2(opposing.x - anchor.x);
        return (angle.cos(), angle.sin());
    }
    orientation.direction()
}

/// Move an anchor point so the drawn line stops where its marker begins
///
/// `arrow_length` is the full marker length at this end (0 when the end has
/// no marker). The displacement is `arrow_length * stroke_width / 2`, so
/// markers on thicker strokes claim proportionally more of the line.
pub fn resolve_endpoint(
    anchor: Point,
    orientation: Orientation,
    arrow_length: f64,
    stroke_width: f64,
    line_style: LineStyle,
    opposing: Point,
) -> Point {
    if arrow_length == 0.0 {
        return anchor;
    }

    let (dx, dy) = marker_direction(anchor, orientation, line_style, opposing);
    let distance = arrow_length * stroke_width / 2.0;
    anchor.translate(dx * distance, dy * distance)
}
