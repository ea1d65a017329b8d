mod planner;
pub mod rules;
mod types;

pub use planner::{compute_route, RoutePlanner};
pub use rules::RouteRule;
pub use types::{Direction, Route, Segment};
