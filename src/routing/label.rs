//! Label placement box

use crate::geometry::{BoundingBox, Point};

/// Axis-aligned box spanning a connector's drawn endpoints
///
/// Labels are centered inside this box. Each side is at least 1 so a
/// horizontal or vertical connector still yields a box with area.
pub fn label_box(start: Point, end: Point) -> BoundingBox {
    BoundingBox::new(
        start.x.min(end.x),
        start.y.min(end.y),
        (end.x - start.x).abs().max(1.0),
        (end.y - start.y).abs().max(1.0),
    )
}
