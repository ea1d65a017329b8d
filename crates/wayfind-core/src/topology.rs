//! Static floor topology: named locations, drawable rooms and corridors.

use tracing::debug;

use crate::consts::{CORRIDOR_WIDTH, ORIGIN_X, ORIGIN_Y, SECONDARY_CORRIDOR_Y, START_MARKER_Y};
use crate::error::{Result, WayfindError};
use crate::geometry::{Point, Rect};

/// Key every unknown destination falls back to.
pub const DEFAULT_KEY: &str = "default";

/// Destination shown when none is selected.
pub const DEFAULT_DESTINATION: &str = "clinic_heart";

/// A named point of interest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub key: &'static str,
    pub coordinate: Point,
}

const fn loc(key: &'static str, x: f32, y: f32) -> Location {
    Location {
        key,
        coordinate: Point::new(x, y),
    }
}

/// `radiology`, `clinic_heart` and `clinic_302` are aliases of one room;
/// `registration` and `cashier` share a counter.
const LOCATIONS: &[Location] = &[
    loc("restroom", 90.0, 450.0),
    loc("pharmacy", 90.0, 250.0),
    loc("registration", 90.0, 140.0),
    loc("cashier", 90.0, 140.0),
    loc("info_desk", 90.0, 72.0),
    loc("clinic_heart", 267.0, 135.0),
    loc("clinic_302", 267.0, 135.0),
    loc("radiology", 267.0, 135.0),
    loc("exit", 150.0, 50.0),
    loc("emergency", 267.0, 450.0),
    loc("elevator", 232.0, 240.0),
    loc("water", 302.0, 240.0),
    loc(DEFAULT_KEY, 267.0, 135.0),
];

/// Destinations offered by the quick-navigation picker, in display order.
pub const QUICK_NAV_KEYS: &[&str] = &[
    "registration",
    "cashier",
    "pharmacy",
    "restroom",
    "emergency",
    "info_desk",
    "exit",
    "water",
    "elevator",
];

/// A drawable room on the floor plan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub rect: Rect,
    pub corner_radius: f32,
    /// Translation key of the label drawn inside the room.
    pub label_key: &'static str,
    pub label_anchor: Point,
    /// Destination keys that highlight this room.
    pub keys: &'static [&'static str],
    /// Drawn with the emphasised label style regardless of selection.
    pub emphasised: bool,
}

const ROOMS: &[Room] = &[
    Room {
        rect: Rect::new(40.0, 55.0, 100.0, 35.0),
        corner_radius: 6.0,
        label_key: "info_desk",
        label_anchor: Point::new(90.0, 77.0),
        keys: &["info_desk"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(40.0, 100.0, 100.0, 80.0),
        corner_radius: 8.0,
        label_key: "registration",
        label_anchor: Point::new(90.0, 145.0),
        keys: &["registration", "cashier"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(40.0, 200.0, 100.0, 100.0),
        corner_radius: 8.0,
        label_key: "pharmacy",
        label_anchor: Point::new(90.0, 255.0),
        keys: &["pharmacy"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(40.0, 380.0, 100.0, 140.0),
        corner_radius: 8.0,
        label_key: "restroom",
        label_anchor: Point::new(90.0, 455.0),
        keys: &["restroom"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(200.0, 100.0, 135.0, 70.0),
        corner_radius: 8.0,
        label_key: "radiology",
        label_anchor: Point::new(267.0, 140.0),
        keys: &["radiology", "clinic_heart", "clinic_302"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(200.0, 190.0, 65.0, 100.0),
        corner_radius: 8.0,
        label_key: "elevator",
        label_anchor: Point::new(232.0, 245.0),
        keys: &["elevator"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(270.0, 190.0, 65.0, 100.0),
        corner_radius: 8.0,
        label_key: "water",
        label_anchor: Point::new(302.0, 245.0),
        keys: &["water"],
        emphasised: false,
    },
    Room {
        rect: Rect::new(200.0, 380.0, 135.0, 140.0),
        corner_radius: 8.0,
        label_key: "emergency",
        label_anchor: Point::new(267.0, 445.0),
        keys: &["emergency"],
        emphasised: true,
    },
];

/// A straight walkable corridor, drawn as a thick rounded stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corridor {
    pub from: Point,
    pub to: Point,
    pub width: f32,
}

const CORRIDORS: &[Corridor] = &[
    Corridor {
        from: Point::new(ORIGIN_X, 50.0),
        to: Point::new(ORIGIN_X, 550.0),
        width: CORRIDOR_WIDTH,
    },
    Corridor {
        from: Point::new(40.0, SECONDARY_CORRIDOR_Y),
        to: Point::new(335.0, SECONDARY_CORRIDOR_Y),
        width: CORRIDOR_WIDTH,
    },
];

/// The current floor: location table, rooms and corridors.
#[derive(Clone, Copy, Debug)]
pub struct Topology {
    locations: &'static [Location],
    rooms: &'static [Room],
    corridors: &'static [Corridor],
    origin: Point,
}

impl Default for Topology {
    fn default() -> Self {
        Self::standard()
    }
}

impl Topology {
    /// The built-in floor shipped with the screen.
    pub const fn standard() -> Self {
        Self {
            locations: LOCATIONS,
            rooms: ROOMS,
            corridors: CORRIDORS,
            origin: Point::new(ORIGIN_X, ORIGIN_Y),
        }
    }

    /// Fixed starting point of every route.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Where the "you are here" marker is drawn.
    pub fn start_marker(&self) -> Point {
        Point::new(self.origin.x, START_MARKER_Y)
    }

    pub fn locations(&self) -> &'static [Location] {
        self.locations
    }

    pub fn rooms(&self) -> &'static [Room] {
        self.rooms
    }

    pub fn corridors(&self) -> &'static [Corridor] {
        self.corridors
    }

    /// All keys of the table, including the `default` fallback.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let locations = self.locations;
        locations.iter().map(|l| l.key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.locations.iter().any(|l| l.key == key)
    }

    /// Strict lookup.
    pub fn lookup(&self, key: &str) -> Result<Point> {
        self.locations
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.coordinate)
            .ok_or_else(|| WayfindError::UnknownLocation(key.to_string()))
    }

    /// Coordinate for `key`, falling back to the `default` entry.
    pub fn resolve_target(&self, key: &str) -> Point {
        match self.lookup(key) {
            Ok(p) => p,
            Err(err) => {
                debug!(%err, "falling back to default location");
                self.default_coordinate()
            }
        }
    }

    fn default_coordinate(&self) -> Point {
        self.locations
            .iter()
            .find(|l| l.key == DEFAULT_KEY)
            .map(|l| l.coordinate)
            .unwrap_or(self.origin)
    }

    /// The room highlighted when `key` is the destination, if any.
    pub fn room_for(&self, key: &str) -> Option<&'static Room> {
        self.rooms.iter().find(|r| r.keys.contains(&key))
    }
}

/// Resolve a destination against the built-in floor.
pub fn resolve_target(key: &str) -> Point {
    Topology::standard().resolve_target(key)
}
