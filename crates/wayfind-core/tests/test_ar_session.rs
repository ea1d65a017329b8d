use std::time::Duration;

use wayfind_core::ar::camera::{CameraBackend, CameraFacing, SimulatedCamera, SimulatedOutcome};
use wayfind_core::ar::{
    spawn_camera_worker, ArSession, ArSessionState, CameraCommand, CameraFailure, Completion,
    FailureReason,
};
use wayfind_core::error::WayfindError;

fn camera() -> SimulatedCamera {
    SimulatedCamera::new(SimulatedOutcome::Grant, Duration::ZERO)
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[test]
fn test_initial_state_is_inactive() {
    let session = ArSession::default();
    assert_eq!(session.state(), ArSessionState::Inactive);
    assert!(!session.is_engaged());
}

#[test]
fn test_enable_requests_environment_camera() {
    let mut session = ArSession::default();
    let req = session.enable().expect("request");
    assert_eq!(req.facing, CameraFacing::Environment);
    assert_eq!(
        session.state(),
        ArSessionState::Acquiring { request_id: req.id }
    );
}

#[test]
fn test_enable_while_acquiring_does_not_issue_second_request() {
    let mut session = ArSession::default();
    assert!(session.enable().is_some());
    assert!(session.enable().is_none());
}

#[test]
fn test_successful_acquisition_binds_stream() {
    let cam = camera();
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    let completion = session.complete(req.id, cam.acquire(req.facing));
    assert_eq!(completion, Completion::Bound);
    assert!(session.is_active());
    assert!(session.stream_label().is_some());
    assert_eq!(cam.released(), 0);
}

#[test]
fn test_disable_while_active_releases_camera() {
    let cam = camera();
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    session.complete(req.id, cam.acquire(req.facing));

    session.disable();
    assert_eq!(session.state(), ArSessionState::Inactive);
    assert_eq!(cam.released(), 1);
    assert!(session.stream_label().is_none());
}

#[test]
fn test_reenabling_uses_fresh_request_id() {
    let cam = camera();
    let mut session = ArSession::default();
    let first = session.enable().unwrap();
    session.complete(first.id, cam.acquire(first.facing));
    session.disable();
    let second = session.enable().unwrap();
    assert_ne!(first.id, second.id);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn test_missing_capability_fails_with_capability_unavailable() {
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    let completion = session.complete(req.id, Err(CameraFailure::Unavailable));
    assert_eq!(
        completion,
        Completion::Failed(FailureReason::CapabilityUnavailable)
    );
    assert_eq!(session.failure().unwrap().as_str(), "capability_unavailable");
    assert!(session.is_engaged(), "error overlay stays until dismissed");
}

#[test]
fn test_denied_and_hardware_errors_fail_with_permission_denied() {
    for failure in [
        CameraFailure::PermissionDenied,
        CameraFailure::Hardware("busy".into()),
    ] {
        let mut session = ArSession::default();
        let req = session.enable().unwrap();
        session.complete(req.id, Err(failure.clone()));
        assert_eq!(
            session.state(),
            ArSessionState::Failed(FailureReason::PermissionDenied),
            "{failure}"
        );
    }
}

#[test]
fn test_failure_is_not_retried_and_can_be_dismissed() {
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    session.complete(req.id, Err(CameraFailure::PermissionDenied));

    assert!(session.enable().is_none(), "no silent retry while failed");
    session.dismiss_error();
    assert_eq!(session.state(), ArSessionState::Inactive);
    assert!(session.enable().is_some());
}

#[test]
fn test_disable_from_failed_returns_to_inactive() {
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    session.complete(req.id, Err(CameraFailure::Unavailable));
    session.disable();
    assert_eq!(session.state(), ArSessionState::Inactive);
}

#[test]
fn test_failure_reason_maps_to_error_taxonomy() {
    assert!(matches!(
        FailureReason::CapabilityUnavailable.to_error(),
        WayfindError::CameraUnavailable
    ));
    assert!(matches!(
        WayfindError::from(CameraFailure::Hardware("x".into())),
        WayfindError::CameraPermissionDenied
    ));
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_off_before_result_discards_and_releases_late_stream() {
    let cam = camera();
    let mut session = ArSession::default();
    let req = session.toggle().expect("request");
    assert!(session.toggle().is_none());
    assert_eq!(session.state(), ArSessionState::Inactive);

    // Acquisition resolves after the user backed out.
    let completion = session.complete(req.id, cam.acquire(req.facing));
    assert_eq!(completion, Completion::Discarded);
    assert_eq!(session.state(), ArSessionState::Inactive);
    assert!(session.stream_label().is_none());
    assert_eq!(cam.opened(), 1);
    assert_eq!(cam.released(), 1, "late stream must be stopped");
}

#[test]
fn test_stale_result_does_not_bind_into_newer_request() {
    let cam = camera();
    let mut session = ArSession::default();
    let stale = session.enable().unwrap();
    session.disable();
    let fresh = session.enable().unwrap();

    assert_eq!(
        session.complete(stale.id, cam.acquire(stale.facing)),
        Completion::Discarded
    );
    assert_eq!(session.state(), ArSessionState::Acquiring { request_id: fresh.id });

    assert_eq!(
        session.complete(fresh.id, cam.acquire(fresh.facing)),
        Completion::Bound
    );
    assert_eq!(cam.opened(), 2);
    assert_eq!(cam.released(), 1);
}

#[test]
fn test_late_failure_is_ignored() {
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    session.disable();
    let completion = session.complete(req.id, Err(CameraFailure::PermissionDenied));
    assert_eq!(completion, Completion::Discarded);
    assert_eq!(session.state(), ArSessionState::Inactive);
}

// ---------------------------------------------------------------------------
// Unmount
// ---------------------------------------------------------------------------

#[test]
fn test_shutdown_while_active_releases_camera() {
    let cam = camera();
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    session.complete(req.id, cam.acquire(req.facing));
    session.shutdown();
    assert_eq!(cam.released(), 1);
    assert_eq!(session.state(), ArSessionState::Inactive);
}

#[test]
fn test_drop_while_active_releases_camera() {
    let cam = camera();
    {
        let mut session = ArSession::default();
        let req = session.enable().unwrap();
        session.complete(req.id, cam.acquire(req.facing));
    }
    assert_eq!(cam.released(), 1);
}

#[test]
fn test_release_happens_once() {
    let cam = camera();
    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    session.complete(req.id, cam.acquire(req.facing));
    session.disable();
    session.disable();
    session.shutdown();
    drop(session);
    assert_eq!(cam.released(), 1);
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

#[test]
fn test_worker_delivers_result_off_thread() {
    let cam = SimulatedCamera::new(SimulatedOutcome::Grant, Duration::from_millis(20));
    let (cmd_tx, result_rx) = spawn_camera_worker(Box::new(cam.clone()), || {}).unwrap();

    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    cmd_tx.send(CameraCommand::Acquire(req)).unwrap();

    let result = result_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(result.request_id, req.id);
    assert_eq!(session.complete(result.request_id, result.outcome), Completion::Bound);
    session.disable();
    assert_eq!(cam.released(), 1);
}

#[test]
fn test_worker_reports_denial() {
    let cam = SimulatedCamera::new(SimulatedOutcome::Deny, Duration::ZERO);
    let (cmd_tx, result_rx) = spawn_camera_worker(Box::new(cam), || {}).unwrap();

    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    cmd_tx.send(CameraCommand::Acquire(req)).unwrap();
    let result = result_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    session.complete(result.request_id, result.outcome);
    assert_eq!(session.failure(), Some(FailureReason::PermissionDenied));
}

#[test]
fn test_stream_dropped_without_stop_is_released() {
    let cam = camera();
    let stream = cam.open_stream(CameraFacing::Environment);
    assert!(stream.is_live());
    drop(stream);
    assert_eq!(cam.released(), 1);
}

#[test]
fn test_dropping_receiver_releases_queued_stream() {
    let cam = camera();
    let (queued_tx, queued_rx) = std::sync::mpsc::channel();
    let (cmd_tx, result_rx) = spawn_camera_worker(Box::new(cam.clone()), move || {
        let _ = queued_tx.send(());
    })
    .unwrap();

    let mut session = ArSession::default();
    let req = session.enable().unwrap();
    cmd_tx.send(CameraCommand::Acquire(req)).unwrap();
    queued_rx.recv_timeout(Duration::from_secs(5)).unwrap();

    drop(cmd_tx);
    drop(result_rx);
    drop(session);
    assert_eq!(cam.opened(), 1);
    assert_eq!(cam.released(), 1, "queued stream must be stopped");
}
