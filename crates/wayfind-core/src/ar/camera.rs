use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::WayfindError;

/// Which physical camera to open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    /// Rear camera, pointing where the user is walking.
    #[default]
    Environment,
    User,
}

impl std::fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment => write!(f, "environment"),
            Self::User => write!(f, "user"),
        }
    }
}

/// A live camera stream. Stopping it releases every track it holds;
/// implementations also stop on drop, so a stream lost in transit is still released.
pub trait CameraStream: Send + std::fmt::Debug {
    fn label(&self) -> &str;

    /// Stop all tracks. Must be idempotent.
    fn stop(&mut self);

    fn is_live(&self) -> bool;
}

pub type StreamHandle = Box<dyn CameraStream>;

/// Why an acquisition attempt failed, as reported by the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraFailure {
    /// No camera API on this device.
    Unavailable,
    PermissionDenied,
    Hardware(String),
}

impl std::fmt::Display for CameraFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "camera capability unavailable"),
            Self::PermissionDenied => write!(f, "camera permission denied"),
            Self::Hardware(msg) => write!(f, "camera hardware error: {msg}"),
        }
    }
}

impl From<CameraFailure> for WayfindError {
    fn from(failure: CameraFailure) -> Self {
        match failure {
            CameraFailure::Unavailable => WayfindError::CameraUnavailable,
            CameraFailure::PermissionDenied | CameraFailure::Hardware(_) => {
                WayfindError::CameraPermissionDenied
            }
        }
    }
}

/// Opens camera streams. Implementations may block; callers run them off the UI thread.
pub trait CameraBackend: Send {
    fn acquire(&self, facing: CameraFacing) -> Result<StreamHandle, CameraFailure>;
}

/// Scripted answer of [`SimulatedCamera`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedOutcome {
    #[default]
    Grant,
    Deny,
    Unavailable,
    HardwareError,
}

/// Camera backend for hosts without a real camera: answers after a fixed
/// latency and counts how many of its streams were stopped.
#[derive(Clone, Debug)]
pub struct SimulatedCamera {
    pub outcome: SimulatedOutcome,
    pub latency: Duration,
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl SimulatedCamera {
    pub fn new(outcome: SimulatedOutcome, latency: Duration) -> Self {
        Self {
            outcome,
            latency,
            opened: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Streams handed out so far.
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Streams stopped so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Open a stream immediately, ignoring the scripted outcome and latency.
    pub fn open_stream(&self, facing: CameraFacing) -> StreamHandle {
        let n = self.opened.fetch_add(1, Ordering::SeqCst) + 1;
        Box::new(SimulatedStream {
            label: format!("simulated {facing} camera #{n}"),
            live: true,
            released: Arc::clone(&self.released),
        })
    }
}

impl CameraBackend for SimulatedCamera {
    fn acquire(&self, facing: CameraFacing) -> Result<StreamHandle, CameraFailure> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        match self.outcome {
            SimulatedOutcome::Grant => Ok(self.open_stream(facing)),
            SimulatedOutcome::Deny => Err(CameraFailure::PermissionDenied),
            SimulatedOutcome::Unavailable => Err(CameraFailure::Unavailable),
            SimulatedOutcome::HardwareError => {
                Err(CameraFailure::Hardware("device busy".to_string()))
            }
        }
    }
}

#[derive(Debug)]
pub struct SimulatedStream {
    label: String,
    live: bool,
    released: Arc<AtomicUsize>,
}

impl CameraStream for SimulatedStream {
    fn label(&self) -> &str {
        &self.label
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

impl Drop for SimulatedStream {
    fn drop(&mut self) {
        self.stop();
    }
}
