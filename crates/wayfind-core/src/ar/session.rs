use tracing::{info, warn};

use crate::error::WayfindError;

use super::camera::{CameraFacing, CameraFailure, StreamHandle};

/// Why the session ended up in [`ArSessionState::Failed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    CapabilityUnavailable,
    /// Also covers hardware errors; the user-facing remedy is the same.
    PermissionDenied,
}

impl FailureReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CapabilityUnavailable => "capability_unavailable",
            Self::PermissionDenied => "permission_denied",
        }
    }

    /// Translation key of the explanatory message.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::CapabilityUnavailable => "camera_unavailable",
            Self::PermissionDenied => "camera_permission_denied",
        }
    }

    pub fn to_error(self) -> WayfindError {
        match self {
            Self::CapabilityUnavailable => WayfindError::CameraUnavailable,
            Self::PermissionDenied => WayfindError::CameraPermissionDenied,
        }
    }
}

impl From<&CameraFailure> for FailureReason {
    fn from(failure: &CameraFailure) -> Self {
        match failure {
            CameraFailure::Unavailable => Self::CapabilityUnavailable,
            CameraFailure::PermissionDenied | CameraFailure::Hardware(_) => Self::PermissionDenied,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArSessionState {
    Inactive,
    Acquiring { request_id: u64 },
    Active,
    Failed(FailureReason),
}

impl std::fmt::Display for ArSessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inactive => write!(f, "Inactive"),
            Self::Acquiring { request_id } => write!(f, "Acquiring (request #{request_id})"),
            Self::Active => write!(f, "Active"),
            Self::Failed(reason) => write!(f, "Failed({reason})"),
        }
    }
}

/// A camera acquisition the host must perform asynchronously and report back
/// through [`ArSession::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcquisitionRequest {
    pub id: u64,
    pub facing: CameraFacing,
}

/// What [`ArSession::complete`] did with an acquisition result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Stream bound; the session is now active.
    Bound,
    Failed(FailureReason),
    /// Result arrived after the user backed out; any stream was released unbound.
    Discarded,
}

/// Owns the AR camera for the lifetime of the map screen.
#[derive(Debug)]
pub struct ArSession {
    state: ArSessionState,
    stream: Option<StreamHandle>,
    facing: CameraFacing,
    next_request_id: u64,
}

impl Default for ArSession {
    fn default() -> Self {
        Self::new(CameraFacing::Environment)
    }
}

impl ArSession {
    pub fn new(facing: CameraFacing) -> Self {
        Self {
            state: ArSessionState::Inactive,
            stream: None,
            facing,
            next_request_id: 1,
        }
    }

    pub fn state(&self) -> ArSessionState {
        self.state
    }

    /// True whenever the AR view replaces the map, including while acquiring or failed.
    pub fn is_engaged(&self) -> bool {
        self.state != ArSessionState::Inactive
    }

    pub fn is_active(&self) -> bool {
        self.state == ArSessionState::Active
    }

    pub fn failure(&self) -> Option<FailureReason> {
        match self.state {
            ArSessionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Label of the bound stream, for display only.
    pub fn stream_label(&self) -> Option<&str> {
        self.stream.as_ref().map(|s| s.label())
    }

    /// Turn AR on. Returns the request to perform if a new acquisition started.
    pub fn enable(&mut self) -> Option<AcquisitionRequest> {
        if self.state != ArSessionState::Inactive {
            return None;
        }
        let request = AcquisitionRequest {
            id: self.next_request_id,
            facing: self.facing,
        };
        self.next_request_id += 1;
        self.state = ArSessionState::Acquiring {
            request_id: request.id,
        };
        info!(request = request.id, facing = %request.facing, "AR acquiring camera");
        Some(request)
    }

    /// Turn AR off from any state, releasing the camera first.
    pub fn disable(&mut self) {
        if self.state == ArSessionState::Inactive {
            return;
        }
        if let ArSessionState::Acquiring { request_id } = self.state {
            info!(request = request_id, "AR disabled while acquiring; result will be discarded");
        }
        self.release();
        self.state = ArSessionState::Inactive;
        info!("AR inactive");
    }

    /// Flip AR mode. Returns a request when turning on started an acquisition.
    pub fn toggle(&mut self) -> Option<AcquisitionRequest> {
        if self.is_engaged() {
            self.disable();
            None
        } else {
            self.enable()
        }
    }

    /// Acknowledge the error overlay and return to the map.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, ArSessionState::Failed(_)) {
            self.state = ArSessionState::Inactive;
            info!("AR error dismissed");
        }
    }

    /// Deliver the outcome of request `request_id`.
    pub fn complete(
        &mut self,
        request_id: u64,
        result: Result<StreamHandle, CameraFailure>,
    ) -> Completion {
        let current = matches!(
            self.state,
            ArSessionState::Acquiring { request_id: pending } if pending == request_id
        );

        if !current {
            if let Ok(mut stream) = result {
                warn!(
                    request = request_id,
                    stream = stream.label(),
                    "late camera stream released without binding"
                );
                stream.stop();
            }
            return Completion::Discarded;
        }

        match result {
            Ok(stream) => {
                info!(request = request_id, stream = stream.label(), "AR active");
                self.release();
                self.stream = Some(stream);
                self.state = ArSessionState::Active;
                Completion::Bound
            }
            Err(failure) => {
                let reason = FailureReason::from(&failure);
                warn!(request = request_id, %failure, "AR camera acquisition failed");
                self.state = ArSessionState::Failed(reason);
                Completion::Failed(reason)
            }
        }
    }

    /// Release everything; called when the screen goes away.
    pub fn shutdown(&mut self) {
        self.release();
        self.state = ArSessionState::Inactive;
    }

    fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            info!(stream = stream.label(), "camera released");
        }
    }
}

impl Drop for ArSession {
    fn drop(&mut self) {
        self.release();
    }
}
