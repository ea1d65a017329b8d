pub mod camera;
pub mod overlay;
mod session;
mod worker;

pub use camera::{CameraBackend, CameraFacing, CameraFailure, CameraStream, StreamHandle};
pub use overlay::{overlay_frame, ArPalette, OverlayFrame, PaletteKind};
pub use session::{AcquisitionRequest, ArSession, ArSessionState, Completion, FailureReason};
pub use worker::{spawn_camera_worker, CameraCommand, CameraResult};
