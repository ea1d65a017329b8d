use std::sync::mpsc;
use std::time::Duration;

use wayfind_core::ar::camera::{CameraBackend, SimulatedCamera, SimulatedOutcome};
use wayfind_core::ar::{
    spawn_camera_worker, ArSessionState, CameraCommand, CameraFailure, CameraResult, Completion,
    PaletteKind,
};
use wayfind_core::config::WayfindConfig;
use wayfind_core::geometry::Point;
use wayfind_core::i18n::Language;
use wayfind_core::nav::{NavAction, NavStore};
use wayfind_core::route::RouteRule;
use wayfind_core::screen::MapScreen;
use wayfind_core::topology::QUICK_NAV_KEYS;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn setup() -> (NavStore, MapScreen) {
    let store = NavStore::default();
    let screen = MapScreen::new(&WayfindConfig::default(), store.state());
    (store, screen)
}

fn english() -> (NavStore, MapScreen) {
    let mut store = NavStore::default();
    store.dispatch(NavAction::SetLanguage(Language::En));
    let screen = MapScreen::new(&WayfindConfig::default(), store.state());
    (store, screen)
}

// ---------------------------------------------------------------------------
// Route and label
// ---------------------------------------------------------------------------

#[test]
fn test_mount_shows_default_destination() {
    let (_, screen) = english();
    let scene = screen.scene();
    assert_eq!(scene.route.destination_key, "clinic_heart");
    assert_eq!(scene.destination_label, "Radiology");
    assert_eq!(scene.target, Point::new(267.0, 135.0));
    assert_eq!(scene.start_marker, Point::new(150.0, 560.0));
    assert_eq!(scene.highlighted_room.unwrap().label_key, "radiology");
}

#[test]
fn test_destination_change_updates_route_and_label_together() {
    let (mut store, mut screen) = english();
    store.dispatch(NavAction::SelectDestination("elevator".into()));
    assert!(screen.sync(store.state()));

    let scene = screen.scene();
    assert_eq!(scene.destination_label, "Elevator");
    assert_eq!(scene.route.destination_key, "elevator");
    assert!(matches!(scene.route.rule, RouteRule::SecondaryCorridor { .. }));
}

#[test]
fn test_sync_without_changes_is_a_no_op() {
    let (store, mut screen) = setup();
    assert!(!screen.sync(store.state()));
}

#[test]
fn test_language_change_relabels() {
    let (mut store, mut screen) = setup();
    assert_eq!(screen.destination_label(), "放射科");
    store.dispatch(NavAction::SetLanguage(Language::Ja));
    screen.sync(store.state());
    assert_eq!(screen.destination_label(), "放射線科");
}

#[test]
fn test_round_trip_through_all_destinations() {
    let (mut store, mut screen) = setup();
    let original = screen.route().clone();
    for key in QUICK_NAV_KEYS {
        store.dispatch(NavAction::SelectDestination((*key).to_string()));
        screen.sync(store.state());
        assert_eq!(screen.route().destination_key, *key);
    }
    store.dispatch(NavAction::SelectDestination("clinic_heart".into()));
    screen.sync(store.state());
    assert_eq!(screen.route(), &original);
}

#[test]
fn test_empty_destination_shows_default_room() {
    let (mut store, mut screen) = english();
    store.dispatch(NavAction::SelectDestination("elevator".into()));
    screen.sync(store.state());
    store.dispatch(NavAction::SelectDestination(String::new()));
    assert!(screen.sync(store.state()));

    let scene = screen.scene();
    assert_eq!(scene.route.destination_key, "clinic_heart");
    assert_eq!(scene.destination_label, "Radiology");
    assert_eq!(scene.highlighted_room.unwrap().label_key, "radiology");
    assert!(!screen.sync(store.state()), "empty key settles on the default");
}

#[test]
fn test_mount_with_empty_destination() {
    let mut config = WayfindConfig::default();
    config.navigation.destination = String::new();
    let store = NavStore::new((&config.navigation).into());
    let screen = MapScreen::new(&config, store.state());
    assert_eq!(screen.route().destination_key, "clinic_heart");
    assert_eq!(screen.destination_label(), "放射科");
}

#[test]
fn test_unknown_destination_still_renders() {
    let (mut store, mut screen) = setup();
    store.dispatch(NavAction::SelectDestination("cafeteria".into()));
    screen.sync(store.state());
    assert_eq!(screen.destination_label(), "cafeteria");
    assert_eq!(screen.scene().target, Point::new(267.0, 135.0));
    assert!(screen.scene().highlighted_room.is_none());
}

// ---------------------------------------------------------------------------
// Map / AR interplay
// ---------------------------------------------------------------------------

#[test]
fn test_ar_mode_suspends_map_gestures() {
    let (_, mut screen) = setup();
    let req = screen.toggle_ar().expect("camera request");
    assert!(screen.is_ar());
    assert!(!screen.zoom_in());
    assert!(!screen.pointer_down(Point::new(10.0, 10.0)));
    assert_eq!(screen.viewport().zoom(), 1.0);

    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    screen.on_camera_result(req.id, cam.acquire(req.facing));
    assert!(!screen.pointer_down(Point::new(10.0, 10.0)));

    screen.toggle_ar();
    assert!(!screen.is_ar());
    assert!(screen.zoom_in());
    assert_eq!(cam.released(), 1);
}

#[test]
fn test_toggle_label_names_other_mode() {
    let (_, mut screen) = english();
    assert_eq!(screen.mode_toggle_label(), "AR Mode");
    screen.toggle_ar();
    assert_eq!(screen.mode_toggle_label(), "Map Mode");
}

#[test]
fn test_overlay_only_while_active() {
    let (_, mut screen) = setup();
    assert!(screen.ar_view().is_none());

    let req = screen.toggle_ar().unwrap();
    let view = screen.ar_view().unwrap();
    assert!(matches!(view.state, ArSessionState::Acquiring { .. }));
    assert!(view.overlay.is_none());

    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    screen.advance(ms(500));
    screen.on_camera_result(req.id, cam.acquire(req.facing));
    screen.advance(ms(500));
    let overlay = screen.ar_view().unwrap().overlay.expect("overlay");
    // Animation clock starts when the session becomes active.
    assert_eq!(overlay.arrows[0].opacity, 0.0);
    assert_eq!(overlay.arrows[0].offset_y, 100.0);
}

#[test]
fn test_color_blind_toggle_restyles_live_overlay() {
    let (mut store, mut screen) = setup();
    let req = screen.toggle_ar().unwrap();
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    screen.on_camera_result(req.id, cam.acquire(req.facing));
    screen.advance(ms(900));

    let frame = screen.ar_view().unwrap().overlay.unwrap();
    assert_eq!(frame.palette, PaletteKind::Default);

    store.dispatch(NavAction::SetColorBlindMode(true));
    screen.sync(store.state());
    let frame = screen.ar_view().unwrap().overlay.unwrap();
    assert_eq!(frame.palette, PaletteKind::HighContrast);
    assert!(frame.is_uniform());

    store.dispatch(NavAction::SetColorBlindMode(false));
    screen.sync(store.state());
    let frame = screen.ar_view().unwrap().overlay.unwrap();
    assert_eq!(frame.palette, PaletteKind::Default);
    assert!(frame.is_uniform());
}

#[test]
fn test_camera_error_overlay_and_dismiss() {
    let (_, mut screen) = english();
    let req = screen.toggle_ar().unwrap();
    let completion = screen.on_camera_result(req.id, Err(CameraFailure::PermissionDenied));
    assert!(matches!(completion, Completion::Failed(_)));

    let view = screen.ar_view().unwrap();
    let error = view.error.expect("error overlay");
    assert_eq!(error.title, "Camera Error");
    assert!(error.message.starts_with("Camera permission denied"));
    assert_eq!(error.action, "Close AR");
    assert!(view.overlay.is_none());
    assert!(!screen.zoom_in(), "map stays inert behind the error");

    screen.dismiss_camera_error();
    assert!(!screen.is_ar());
    assert!(screen.zoom_in());
}

#[test]
fn test_backing_out_before_camera_answers() {
    let (_, mut screen) = setup();
    let req = screen.toggle_ar().unwrap();
    screen.toggle_ar();
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    let completion = screen.on_camera_result(req.id, cam.acquire(req.facing));
    assert_eq!(completion, Completion::Discarded);
    assert!(!screen.is_ar());
    assert!(screen.ar_view().is_none());
    assert_eq!(cam.released(), 1);
}

#[test]
fn test_unmount_releases_camera() {
    let (_, mut screen) = setup();
    let req = screen.toggle_ar().unwrap();
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    screen.on_camera_result(req.id, cam.acquire(req.facing));
    screen.unmount();
    assert_eq!(cam.released(), 1);
    assert_eq!(screen.ar().state(), ArSessionState::Inactive);
}

#[test]
fn test_dropping_screen_releases_camera() {
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    {
        let (_, mut screen) = setup();
        let req = screen.toggle_ar().unwrap();
        screen.on_camera_result(req.id, cam.acquire(req.facing));
    }
    assert_eq!(cam.released(), 1);
}

// ---------------------------------------------------------------------------
// Bottom sheet
// ---------------------------------------------------------------------------

#[test]
fn test_sheet_toggles_independently_of_ar() {
    let (_, mut screen) = setup();
    assert!(!screen.sheet().collapsed);
    screen.toggle_sheet();
    assert!(screen.sheet().collapsed);
    screen.toggle_ar();
    assert!(screen.sheet().collapsed);
    screen.toggle_sheet();
    assert!(!screen.sheet().collapsed);
}

#[test]
fn test_dash_offset_cycles() {
    let (_, mut screen) = setup();
    screen.advance(ms(0));
    assert_eq!(screen.scene().dash_offset, 0.0);
    screen.advance(ms(500));
    assert!((screen.scene().dash_offset + 10.0).abs() < 1e-4);
}

// ---------------------------------------------------------------------------
// Camera thread
// ---------------------------------------------------------------------------

/// Start an acquisition on a real worker and wait until its answer is queued.
fn spawn_queued_acquisition(
    cam: &SimulatedCamera,
    screen: &mut MapScreen,
) -> (u64, mpsc::Receiver<CameraResult>) {
    let (queued_tx, queued_rx) = mpsc::channel();
    let (cmd_tx, result_rx) = spawn_camera_worker(Box::new(cam.clone()), move || {
        let _ = queued_tx.send(());
    })
    .unwrap();
    let req = screen.toggle_ar().unwrap();
    cmd_tx.send(CameraCommand::Acquire(req)).unwrap();
    queued_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    (req.id, result_rx)
}

#[test]
fn test_unmount_releases_result_already_queued() {
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    let (_, mut screen) = setup();
    let (id, result_rx) = spawn_queued_acquisition(&cam, &mut screen);

    // Window closes while the answer sits unpolled in the channel.
    let drained = screen.drain_camera_results(&result_rx);
    screen.unmount();
    drop(result_rx);

    assert_eq!(drained, vec![(id, Completion::Bound)]);
    assert_eq!(cam.opened(), 1);
    assert_eq!(cam.released(), 1);
    assert_eq!(screen.ar().state(), ArSessionState::Inactive);
}

#[test]
fn test_drain_after_toggle_off_discards_queued_stream() {
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO);
    let (_, mut screen) = setup();
    let (id, result_rx) = spawn_queued_acquisition(&cam, &mut screen);

    screen.toggle_ar();
    assert_eq!(screen.drain_camera_results(&result_rx), vec![(id, Completion::Discarded)]);
    assert!(screen.drain_camera_results(&result_rx).is_empty());
    assert_eq!(cam.released(), 1);
    assert!(!screen.is_ar());
}
