use crate::consts::EPSILON;
use crate::geometry::Point;

use super::rules::RouteRule;

/// Direction of a single route segment, in screen orientation (y grows down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Zero-length segment; rendered as a dot.
    Point,
    /// Neither horizontal nor vertical. The planner never emits these.
    Diagonal,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Point => write!(f, "point"),
            Self::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// One straight piece of a route.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    pub fn is_degenerate(&self) -> bool {
        self.from.approx_eq(self.to)
    }

    pub fn direction(&self) -> Direction {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let horizontal = dx.abs() > EPSILON;
        let vertical = dy.abs() > EPSILON;
        match (horizontal, vertical) {
            (false, false) => Direction::Point,
            (false, true) if dy < 0.0 => Direction::Up,
            (false, true) => Direction::Down,
            (true, false) if dx < 0.0 => Direction::Left,
            (true, false) => Direction::Right,
            (true, true) => Direction::Diagonal,
        }
    }
}

/// Polyline from the origin to a resolved destination.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub destination_key: String,
    pub target: Point,
    pub rule: RouteRule,
    pub segments: Vec<Segment>,
}

impl Route {
    pub fn origin(&self) -> Point {
        self.segments
            .first()
            .map(|s| s.from)
            .unwrap_or(self.target)
    }

    /// Vertices of the polyline, origin first.
    pub fn points(&self) -> Vec<Point> {
        let mut pts = Vec::with_capacity(self.segments.len() + 1);
        pts.push(self.origin());
        pts.extend(self.segments.iter().map(|s| s.to));
        pts
    }

    pub fn length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.segments.iter().map(Segment::direction).collect()
    }

    /// SVG path data using absolute `V`/`H` commands, e.g. `M150 580 V340 H232 V240`.
    pub fn to_path_data(&self) -> String {
        let origin = self.origin();
        let mut d = format!("M{} {}", origin.x, origin.y);
        for seg in &self.segments {
            match seg.direction() {
                Direction::Up | Direction::Down | Direction::Point => {
                    d.push_str(&format!(" V{}", seg.to.y))
                }
                Direction::Left | Direction::Right => d.push_str(&format!(" H{}", seg.to.x)),
                Direction::Diagonal => d.push_str(&format!(" L{} {}", seg.to.x, seg.to.y)),
            }
        }
        d
    }
}
