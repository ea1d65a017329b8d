use std::sync::mpsc;

use tracing::debug;

use super::camera::{CameraBackend, CameraFailure, StreamHandle};
use super::session::AcquisitionRequest;

/// Commands sent from the UI thread to the camera thread.
pub enum CameraCommand {
    Acquire(AcquisitionRequest),
}

/// Results sent from the camera thread back to the UI thread.
pub struct CameraResult {
    pub request_id: u64,
    pub outcome: Result<StreamHandle, CameraFailure>,
}

/// Spawn the camera thread. Returns the command sender and the result receiver.
///
/// `notify` runs after every result is queued, so a UI can wake up and drain it.
pub fn spawn_camera_worker(
    backend: Box<dyn CameraBackend>,
    notify: impl Fn() + Send + 'static,
) -> std::io::Result<(mpsc::Sender<CameraCommand>, mpsc::Receiver<CameraResult>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<CameraCommand>();
    let (result_tx, result_rx) = mpsc::channel::<CameraResult>();

    std::thread::Builder::new()
        .name("wayfind-camera".into())
        .spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    CameraCommand::Acquire(request) => {
                        debug!(request = request.id, "camera worker acquiring");
                        let outcome = backend.acquire(request.facing);
                        let result = CameraResult {
                            request_id: request.id,
                            outcome,
                        };
                        if let Err(mpsc::SendError(mut unsent)) = result_tx.send(result) {
                            // Receiver gone; release the stream.
                            if let Ok(stream) = unsent.outcome.as_mut() {
                                stream.stop();
                            }
                            break;
                        }
                        notify();
                    }
                }
            }
        })?;

    Ok((cmd_tx, result_rx))
}
