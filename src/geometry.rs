//! Core geometric types shared by the routing engine and the renderer

use serde::Deserialize;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displace this point by `(dx, dy)`
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }

    /// Point on the boundary where an anchor of the given orientation attaches
    pub fn anchor_point(&self, orientation: Orientation) -> Point {
        match orientation {
            Orientation::Top => Point::new(self.x + self.width / 2.0, self.y),
            Orientation::Bottom => Point::new(self.x + self.width / 2.0, self.bottom()),
            Orientation::Left => Point::new(self.x, self.y + self.height / 2.0),
            Orientation::Right => Point::new(self.right(), self.y + self.height / 2.0),
            Orientation::None => self.center(),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Side of a region an anchor is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Top,
    Bottom,
    Left,
    Right,
    /// Unconstrained; every offset and midpoint calculation passes the point through
    #[default]
    #[serde(alias = "middle")]
    None,
}

impl Orientation {
    /// The axis the anchor's midpoint math runs along, `None` for unconstrained anchors
    pub fn axis(self) -> Option<Axis> {
        match self {
            Orientation::Top | Orientation::Bottom => Some(Axis::Y),
            Orientation::Left | Orientation::Right => Some(Axis::X),
            Orientation::None => None,
        }
    }

    /// Unit vector pointing away from the region through this side
    pub fn direction(self) -> (f64, f64) {
        match self {
            Orientation::Top => (0.0, -1.0),
            Orientation::Bottom => (0.0, 1.0),
            Orientation::Left => (-1.0, 0.0),
            Orientation::Right => (1.0, 0.0),
            Orientation::None => (0.0, 0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::None => "middle",
        }
    }
}

/// Coordinate axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Component of `p` along this axis
    pub fn of(self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// `to - from` measured along this axis
    pub fn delta(self, from: Point, to: Point) -> f64 {
        self.of(to) - self.of(from)
    }

    /// Move `p` by `amount` along this axis
    pub fn shift(self, p: Point, amount: f64) -> Point {
        match self {
            Axis::X => Point::new(p.x + amount, p.y),
            Axis::Y => Point::new(p.x, p.y + amount),
        }
    }
}

/// How a connector travels between its two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Direct segment
    Straight,
    /// Cubic curve through both control points
    #[default]
    Curve,
    /// Right-angled dogleg through both control points
    Angle,
}

/// Sign of `v` as -1, 0 or 1
///
/// Unlike [`f64::signum`], zero maps to zero so coincident coordinates
/// produce no displacement.
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
