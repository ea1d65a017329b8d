use tracing::debug;

use crate::geometry::Point;
use crate::topology::Topology;

use super::rules::{select_rule, RouteRule};
use super::types::{Route, Segment};

/// Compute the route from `origin` to `destination_key` on the built-in floor.
pub fn compute_route(origin: Point, destination_key: &str) -> Route {
    RoutePlanner::new(Topology::standard()).route_from(origin, destination_key)
}

/// Route planner bound to a floor topology.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoutePlanner {
    topology: Topology,
}

impl RoutePlanner {
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Route from the floor's fixed origin.
    pub fn route(&self, destination_key: &str) -> Route {
        self.route_from(self.topology.origin(), destination_key)
    }

    pub fn route_from(&self, origin: Point, destination_key: &str) -> Route {
        let target = self.topology.resolve_target(destination_key);
        let rule = select_rule(origin, destination_key, target);

        let segments = match rule {
            RouteRule::SecondaryCorridor { corridor_y } => {
                let enter = Point::new(origin.x, corridor_y);
                let across = Point::new(target.x, corridor_y);
                vec![
                    Segment::new(origin, enter),
                    Segment::new(enter, across),
                    Segment::new(across, target),
                ]
            }
            RouteRule::Straight => {
                vec![Segment::new(origin, Point::new(origin.x, target.y))]
            }
            RouteRule::Dogleg => {
                let corner = Point::new(origin.x, target.y);
                vec![Segment::new(origin, corner), Segment::new(corner, target)]
            }
        };

        debug!(
            destination = destination_key,
            %rule,
            segments = segments.len(),
            "route computed"
        );

        Route {
            destination_key: destination_key.to_string(),
            target,
            rule,
            segments,
        }
    }
}
