//! Pan/zoom state of the 2D floor map.

use std::time::Duration;

use tracing::trace;

use crate::animation::{Easing, Lerp, Tween};
use crate::config::ViewportConfig;
use crate::consts::{MAP_HEIGHT, MAP_WIDTH};
use crate::geometry::{Affine, Point};

/// What pointer input on the map currently means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapInteractionMode {
    Idle,
    /// `grab` is the pointer position minus the pan at drag start.
    Dragging { grab: Point },
    /// The map is hidden behind the AR view; all gestures are ignored.
    ArActive,
}

/// Snapshot of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub zoom: f32,
    pub pan: Point,
    pub is_dragging: bool,
}

/// Zoom + pan pair the transition interpolates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPose {
    pub zoom: f32,
    pub pan: Point,
}

impl Lerp for ViewPose {
    fn lerp(self, other: ViewPose, t: f32) -> ViewPose {
        ViewPose {
            zoom: self.zoom.lerp(other.zoom, t),
            pan: self.pan.lerp(other.pan, t),
        }
    }
}

impl ViewPose {
    /// Map-space transform: scale about the map centre, then translate by `pan`.
    pub fn affine(&self) -> Affine {
        let center = Point::new(MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0);
        Affine::translate(self.pan).then_apply(Affine::scale_about(self.zoom, center))
    }
}

pub struct ViewportController {
    config: ViewportConfig,
    zoom: f32,
    pan: Point,
    mode: MapInteractionMode,
    transition: Option<Tween<ViewPose>>,
    /// Time of the most recent frame; discrete transitions start here.
    clock: Duration,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            zoom: 1.0,
            pan: Point::ZERO,
            mode: MapInteractionMode::Idle,
            transition: None,
            clock: Duration::ZERO,
        }
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            zoom: self.zoom,
            pan: self.pan,
            is_dragging: self.is_dragging(),
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn mode(&self) -> MapInteractionMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, MapInteractionMode::Dragging { .. })
    }

    pub fn is_inert(&self) -> bool {
        self.mode == MapInteractionMode::ArActive
    }

    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(-self.config.zoom_step)
    }

    fn step_zoom(&mut self, delta: f32) -> bool {
        if self.is_inert() {
            return false;
        }
        let next = (self.zoom + delta).clamp(self.config.min_zoom, self.config.max_zoom);
        if (next - self.zoom).abs() <= f32::EPSILON {
            return false;
        }
        let from = self.displayed_pose(self.clock);
        self.zoom = next;
        self.start_transition(from);
        trace!(zoom = self.zoom, "zoom changed");
        true
    }

    fn start_transition(&mut self, from: ViewPose) {
        if self.is_dragging() {
            self.transition = None;
            return;
        }
        self.transition = Some(Tween::new(
            from,
            self.pose(),
            self.clock,
            Duration::from_millis(self.config.transition_ms),
            Easing::VIEWPORT,
        ));
    }

    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if self.is_inert() {
            return false;
        }
        // Dragging shows the logical pose directly.
        self.transition = None;
        self.mode = MapInteractionMode::Dragging {
            grab: pointer - self.pan,
        };
        true
    }

    pub fn update_drag(&mut self, pointer: Point) -> bool {
        match self.mode {
            MapInteractionMode::Dragging { grab } => {
                self.pan = pointer - grab;
                true
            }
            _ => false,
        }
    }

    pub fn end_drag(&mut self) -> bool {
        if self.is_dragging() {
            self.mode = MapInteractionMode::Idle;
            true
        } else {
            false
        }
    }

    /// Switch between the map and the AR view. Entering AR abandons any drag.
    pub fn set_ar_active(&mut self, active: bool) {
        self.mode = if active {
            MapInteractionMode::ArActive
        } else {
            MapInteractionMode::Idle
        };
    }

    /// Record the current frame time and drop a finished transition.
    pub fn advance(&mut self, now: Duration) {
        self.clock = now;
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Logical pose, the value the view settles on.
    pub fn pose(&self) -> ViewPose {
        ViewPose {
            zoom: self.zoom,
            pan: self.pan,
        }
    }

    /// Pose as drawn at `now`, including any running transition.
    pub fn displayed_pose(&self, now: Duration) -> ViewPose {
        match self.transition {
            Some(ref tween) if !self.is_dragging() => tween.value_at(now),
            _ => self.pose(),
        }
    }

    /// Settled map-space transform: translate by `pan`, scale by `zoom` about the map centre.
    pub fn transform(&self) -> Affine {
        self.pose().affine()
    }

    pub fn transform_at(&self, now: Duration) -> Affine {
        self.displayed_pose(now).affine()
    }

    pub fn map_to_screen(&self, p: Point, now: Duration) -> Point {
        self.transform_at(now).apply(p)
    }

    /// Inverse of [`ViewportController::map_to_screen`]; `None` for a degenerate zoom.
    pub fn screen_to_map(&self, p: Point, now: Duration) -> Option<Point> {
        self.transform_at(now).inverse().map(|inv| inv.apply(p))
    }

    /// Map space to screen space for a viewport of `size`, with the map centred in it.
    pub fn screen_transform(&self, size: Point, now: Duration) -> Affine {
        let offset = Point::new(
            (size.x - MAP_WIDTH) / 2.0,
            (size.y - MAP_HEIGHT) / 2.0,
        );
        Affine::translate(offset).then_apply(self.transform_at(now))
    }
}
