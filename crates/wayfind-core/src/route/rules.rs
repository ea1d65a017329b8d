//! Per-destination routing rules.
//!
//! Corridors on this floor are strictly axis-aligned, so every route is built
//! from vertical and horizontal moves. A few rooms can only be entered from the
//! secondary corridor; those are listed explicitly rather than derived from
//! the floor geometry.

use crate::consts::{EPSILON, SECONDARY_CORRIDOR_Y};
use crate::geometry::Point;

/// How a route to a given destination is shaped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RouteRule {
    /// Up to the corridor line, across to the target column, then to the target.
    SecondaryCorridor { corridor_y: f32 },
    /// Target sits directly above or below the origin.
    Straight,
    /// Vertical to the target row, then horizontal to the target.
    Dogleg,
}

impl std::fmt::Display for RouteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SecondaryCorridor { corridor_y } => {
                write!(f, "Secondary corridor (y={corridor_y})")
            }
            Self::Straight => write!(f, "Straight"),
            Self::Dogleg => write!(f, "Dogleg"),
        }
    }
}

/// Destinations reachable only through the secondary corridor.
pub const SPECIAL_RULES: &[(&str, RouteRule)] = &[
    (
        "elevator",
        RouteRule::SecondaryCorridor {
            corridor_y: SECONDARY_CORRIDOR_Y,
        },
    ),
    (
        "water",
        RouteRule::SecondaryCorridor {
            corridor_y: SECONDARY_CORRIDOR_Y,
        },
    ),
];

/// Pick the rule for `key`, evaluated in order: per-key override, straight, dogleg.
pub fn select_rule(origin: Point, key: &str, target: Point) -> RouteRule {
    if let Some((_, rule)) = SPECIAL_RULES.iter().find(|(k, _)| *k == key) {
        return *rule;
    }
    if (target.x - origin.x).abs() <= EPSILON {
        RouteRule::Straight
    } else {
        RouteRule::Dogleg
    }
}
