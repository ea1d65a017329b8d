/// Width of the schematic floor map in map units.
pub const MAP_WIDTH: f32 = 375.0;

/// Height of the schematic floor map in map units.
pub const MAP_HEIGHT: f32 = 600.0;

/// Fixed entry point every route starts from.
pub const ORIGIN_X: f32 = 150.0;
pub const ORIGIN_Y: f32 = 580.0;

/// The "you are here" marker sits slightly above the route origin.
pub const START_MARKER_Y: f32 = 560.0;

/// Horizontal line of the secondary corridor used by elevator/water routes.
pub const SECONDARY_CORRIDOR_Y: f32 = 340.0;

/// Drawn corridor width in map units.
pub const CORRIDOR_WIDTH: f32 = 40.0;

/// Zoom bounds and step for the discrete zoom buttons.
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 4.0;
pub const ZOOM_STEP: f32 = 0.5;

/// Duration of the eased transform transition after a discrete action.
pub const VIEWPORT_TRANSITION_MS: u64 = 300;

/// Number of flowing arrows in the AR floor path.
pub const AR_ARROW_COUNT: usize = 5;

/// Period of one arrow's flow cycle.
pub const AR_ARROW_PERIOD_MS: u64 = 2_000;

/// Start offset between consecutive arrows.
pub const AR_ARROW_STAGGER_MS: u64 = 400;

/// Period of the pulsing path glow.
pub const AR_PATH_PULSE_PERIOD_MS: u64 = 3_000;

/// Period of the floor grid scroll, and the grid spacing it scrolls by.
pub const AR_FLOOR_GRID_PERIOD_MS: u64 = 1_500;
pub const AR_FLOOR_GRID_SPACING: f32 = 40.0;

/// Period of the dashed route line on the 2D map.
pub const ROUTE_DASH_PERIOD_MS: u64 = 1_000;

/// Dash pattern of the route line (dash, gap).
pub const ROUTE_DASH: [f32; 2] = [12.0, 8.0];

/// Tolerance for treating two map coordinates as equal.
pub const EPSILON: f32 = 1e-4;
