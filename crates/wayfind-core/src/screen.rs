//! The map screen: route, viewport, AR session and bottom sheet together.

use std::sync::mpsc;
use std::time::Duration;

use tracing::debug;

use crate::animation::Cycle;
use crate::ar::camera::{CameraFailure, StreamHandle};
use crate::ar::{
    overlay_frame, AcquisitionRequest, ArSession, ArSessionState, CameraResult, Completion,
    OverlayFrame,
};
use crate::config::WayfindConfig;
use crate::consts::{ROUTE_DASH, ROUTE_DASH_PERIOD_MS};
use crate::geometry::{Affine, Point};
use crate::i18n::{translate, Language};
use crate::nav::NavigationState;
use crate::route::{Route, RoutePlanner};
use crate::topology::{Room, Topology};
use crate::viewport::ViewportController;

/// Collapsible instruction sheet at the bottom of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BottomSheet {
    pub collapsed: bool,
}

impl BottomSheet {
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

/// Render model of the 2D map for one frame.
#[derive(Clone, Debug)]
pub struct MapScene<'a> {
    pub route: &'a Route,
    pub start_marker: Point,
    pub target: Point,
    pub highlighted_room: Option<&'static Room>,
    pub destination_label: &'a str,
    pub transform: Affine,
    /// Offset of the dashed route pattern; cycles from 0 to minus one dash period.
    pub dash_offset: f32,
}

/// Dismissible error shown in place of the AR overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CameraErrorView {
    pub title: String,
    pub message: String,
    pub action: String,
}

/// Render model of the AR layer.
#[derive(Clone, Debug)]
pub struct ArView {
    pub state: ArSessionState,
    pub overlay: Option<OverlayFrame>,
    pub error: Option<CameraErrorView>,
}

pub struct MapScreen {
    planner: RoutePlanner,
    route: Route,
    destination_label: String,
    language: Language,
    color_blind_mode: bool,
    viewport: ViewportController,
    ar: ArSession,
    ar_active_since: Option<Duration>,
    sheet: BottomSheet,
    clock: Duration,
}

impl MapScreen {
    pub fn new(config: &WayfindConfig, nav: &NavigationState) -> Self {
        let planner = RoutePlanner::new(Topology::standard());
        let route = planner.route(nav.destination());
        Self {
            planner,
            destination_label: translate(nav.destination(), nav.language),
            route,
            language: nav.language,
            color_blind_mode: nav.color_blind_mode,
            viewport: ViewportController::new(config.viewport.clone()),
            ar: ArSession::new(config.camera.facing),
            ar_active_since: None,
            sheet: BottomSheet::default(),
            clock: Duration::ZERO,
        }
    }

    pub fn topology(&self) -> &Topology {
        self.planner.topology()
    }

    /// Pick up changes from the shared state. Route and label change together.
    pub fn sync(&mut self, nav: &NavigationState) -> bool {
        let mut changed = false;
        let destination = nav.destination();
        if destination != self.route.destination_key || nav.language != self.language {
            let route = self.planner.route(destination);
            let label = translate(destination, nav.language);
            debug!(destination, language = %nav.language, "map screen resynced");
            self.route = route;
            self.destination_label = label;
            self.language = nav.language;
            changed = true;
        }
        if nav.color_blind_mode != self.color_blind_mode {
            self.color_blind_mode = nav.color_blind_mode;
            changed = true;
        }
        changed
    }

    /// Advance the screen clock to `now` (time since mount).
    pub fn advance(&mut self, now: Duration) {
        self.clock = now;
        self.viewport.advance(now);
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn destination_label(&self) -> &str {
        &self.destination_label
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn ar(&self) -> &ArSession {
        &self.ar
    }

    pub fn sheet(&self) -> BottomSheet {
        self.sheet
    }

    pub fn toggle_sheet(&mut self) {
        self.sheet.toggle();
    }

    pub fn is_ar(&self) -> bool {
        self.ar.is_engaged()
    }

    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out()
    }

    pub fn pointer_down(&mut self, pos: Point) -> bool {
        self.viewport.begin_drag(pos)
    }

    pub fn pointer_move(&mut self, pos: Point) -> bool {
        self.viewport.update_drag(pos)
    }

    /// Pointer released or left the map.
    pub fn pointer_up(&mut self) -> bool {
        self.viewport.end_drag()
    }

    /// Flip between map and AR mode. A returned request must be performed off
    /// the UI thread and its result passed to [`MapScreen::on_camera_result`].
    pub fn toggle_ar(&mut self) -> Option<AcquisitionRequest> {
        let request = self.ar.toggle();
        self.after_ar_change();
        request
    }

    pub fn dismiss_camera_error(&mut self) {
        self.ar.dismiss_error();
        self.after_ar_change();
    }

    pub fn on_camera_result(
        &mut self,
        request_id: u64,
        outcome: Result<StreamHandle, CameraFailure>,
    ) -> Completion {
        let completion = self.ar.complete(request_id, outcome);
        self.after_ar_change();
        completion
    }

    /// Feed every result already queued by the camera thread through
    /// [`MapScreen::on_camera_result`], so none is dropped unhandled.
    pub fn drain_camera_results(
        &mut self,
        results: &mpsc::Receiver<CameraResult>,
    ) -> Vec<(u64, Completion)> {
        results
            .try_iter()
            .map(|result| {
                let id = result.request_id;
                (id, self.on_camera_result(id, result.outcome))
            })
            .collect()
    }

    /// Release the camera; the screen is going away.
    pub fn unmount(&mut self) {
        self.ar.shutdown();
        self.after_ar_change();
    }

    fn after_ar_change(&mut self) {
        self.viewport.set_ar_active(self.ar.is_engaged());
        match (self.ar.is_active(), self.ar_active_since) {
            (true, None) => self.ar_active_since = Some(self.clock),
            (false, Some(_)) => self.ar_active_since = None,
            _ => {}
        }
    }

    /// Label of the mode-toggle button: names the mode it switches to.
    pub fn mode_toggle_label(&self) -> String {
        let key = if self.is_ar() { "map_mode" } else { "ar_mode" };
        translate(key, self.language)
    }

    pub fn text(&self, key: &str) -> String {
        translate(key, self.language)
    }

    pub fn scene(&self) -> MapScene<'_> {
        let dash_period: f32 = ROUTE_DASH.iter().sum();
        let phase = Cycle::new(Duration::from_millis(ROUTE_DASH_PERIOD_MS))
            .phase_at(self.clock)
            .unwrap_or(0.0);
        MapScene {
            route: &self.route,
            start_marker: self.topology().start_marker(),
            target: self.route.target,
            highlighted_room: self.topology().room_for(&self.route.destination_key),
            destination_label: &self.destination_label,
            transform: self.viewport.transform_at(self.clock),
            dash_offset: -dash_period * phase,
        }
    }

    /// AR layer model, or `None` while the map is showing.
    pub fn ar_view(&self) -> Option<ArView> {
        let state = self.ar.state();
        if state == ArSessionState::Inactive {
            return None;
        }
        let overlay = self.ar_active_since.map(|since| {
            overlay_frame(self.clock.saturating_sub(since), self.color_blind_mode)
        });
        let error = self.ar.failure().map(|reason| CameraErrorView {
            title: self.text("camera_error"),
            message: self.text(reason.message_key()),
            action: self.text("close_ar"),
        });
        Some(ArView {
            state,
            overlay,
            error,
        })
    }
}
