use std::sync::mpsc;
use std::time::{Duration, Instant};

use wayfind_core::ar::camera::SimulatedCamera;
use wayfind_core::ar::{
    spawn_camera_worker, AcquisitionRequest, CameraCommand, CameraFailure, CameraResult,
    Completion,
};
use wayfind_core::config::WayfindConfig;
use wayfind_core::nav::{NavAction, NavStore, NavigationState};
use wayfind_core::screen::MapScreen;

use crate::fonts;
use crate::panels;
use crate::state::UIState;

pub struct WayfindApp {
    /// `None` when the camera thread could not be started.
    pub cmd_tx: Option<mpsc::Sender<CameraCommand>>,
    pub result_rx: Option<mpsc::Receiver<CameraResult>>,
    pub store: NavStore,
    pub screen: MapScreen,
    pub ui_state: UIState,
    started: Instant,
}

impl WayfindApp {
    pub fn new(ctx: &egui::Context, config: WayfindConfig) -> Self {
        fonts::install_fallback_fonts(ctx);

        let store = NavStore::new(NavigationState::from(&config.navigation));
        let screen = MapScreen::new(&config, store.state());
        let mut ui_state = UIState::default();

        let camera = SimulatedCamera::new(
            config.camera.simulated,
            Duration::from_millis(config.camera.latency_ms),
        );
        let repaint_ctx = ctx.clone();
        let (cmd_tx, result_rx) =
            match spawn_camera_worker(Box::new(camera), move || repaint_ctx.request_repaint()) {
                Ok((tx, rx)) => (Some(tx), Some(rx)),
                Err(e) => {
                    tracing::error!(error = %e, "camera thread failed to start");
                    ui_state.add_log(format!("ERROR: camera thread failed to start: {e}"));
                    (None, None)
                }
            };

        Self {
            cmd_tx,
            result_rx,
            store,
            screen,
            ui_state,
            started: Instant::now(),
        }
    }

    /// Update the shared state and let the screen follow it.
    pub fn dispatch(&mut self, action: NavAction) {
        if self.store.dispatch(action) {
            self.screen.sync(self.store.state());
        }
    }

    pub fn toggle_ar(&mut self) {
        if let Some(request) = self.screen.toggle_ar() {
            self.request_camera(request);
        } else {
            self.ui_state.add_log("AR off".into());
        }
    }

    fn request_camera(&mut self, request: AcquisitionRequest) {
        self.ui_state
            .add_log(format!("Requesting {} camera (#{})", request.facing, request.id));
        let sent = self
            .cmd_tx
            .as_ref()
            .is_some_and(|tx| tx.send(CameraCommand::Acquire(request)).is_ok());
        if !sent {
            // No camera thread means no camera capability.
            self.finish_acquisition(request.id, Err(CameraFailure::Unavailable));
        }
    }

    /// Drain all pending results from the camera thread.
    fn poll_results(&mut self) {
        let Some(rx) = self.result_rx.as_ref() else {
            return;
        };
        for (request_id, completion) in self.screen.drain_camera_results(rx) {
            self.log_completion(request_id, completion);
        }
    }

    fn finish_acquisition(
        &mut self,
        request_id: u64,
        outcome: Result<wayfind_core::ar::StreamHandle, CameraFailure>,
    ) {
        let completion = self.screen.on_camera_result(request_id, outcome);
        self.log_completion(request_id, completion);
    }

    fn log_completion(&mut self, request_id: u64, completion: Completion) {
        let message = match completion {
            Completion::Bound => format!(
                "AR active: {}",
                self.screen.ar().stream_label().unwrap_or("camera")
            ),
            Completion::Failed(reason) => format!("ERROR: AR camera {reason}"),
            Completion::Discarded => format!("Late camera answer #{request_id} released"),
        };
        self.ui_state.add_log(message);
    }
}

impl eframe::App for WayfindApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();
        self.screen.advance(self.started.elapsed());

        panels::menu_bar::show(ctx, self);
        panels::info_card::show(ctx, self);
        panels::bottom_sheet::show(ctx, self);
        if self.screen.is_ar() {
            panels::ar_view::show(ctx, self);
        } else {
            panels::map::show(ctx, self);
        }

        if self.ui_state.show_about {
            egui::Window::new("About Wayfind")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Wayfind");
                        ui.label("Indoor navigation kiosk");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }

        // Route dashes and AR cues animate continuously.
        ctx.request_repaint();
    }
}

impl Drop for WayfindApp {
    fn drop(&mut self) {
        // Stop the camera thread first, then release anything it already sent.
        self.cmd_tx = None;
        if let Some(rx) = self.result_rx.take() {
            self.screen.drain_camera_results(&rx);
        }
        self.screen.unmount();
    }
}
