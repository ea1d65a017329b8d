use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use wayfind_core::ar::camera::{SimulatedCamera, SimulatedOutcome};
use wayfind_core::ar::{spawn_camera_worker, CameraCommand};
use wayfind_core::config::WayfindConfig;
use wayfind_core::nav::NavigationState;
use wayfind_core::screen::MapScreen;

use crate::summary::{print_completion, print_overlay, print_transition};

#[derive(Args)]
pub struct ArDemoArgs {
    /// Simulate the user denying camera permission
    #[arg(long, conflicts_with = "unavailable")]
    pub deny: bool,

    /// Simulate a device without a camera
    #[arg(long)]
    pub unavailable: bool,

    /// Turn AR off again before the camera answers
    #[arg(long)]
    pub cancel: bool,

    /// Use the high-contrast overlay palette
    #[arg(long)]
    pub color_blind: bool,

    /// Simulated camera latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,
}

const SAMPLE_TIMES_MS: [u64; 6] = [0, 400, 800, 1200, 1600, 2000];

pub fn run(args: &ArDemoArgs, config: &WayfindConfig) -> Result<()> {
    let outcome = if args.deny {
        SimulatedOutcome::Deny
    } else if args.unavailable {
        SimulatedOutcome::Unavailable
    } else {
        config.camera.simulated
    };
    let latency = Duration::from_millis(args.latency_ms.unwrap_or(config.camera.latency_ms));
    let camera = SimulatedCamera::new(outcome, latency);

    let (cmd_tx, result_rx) = spawn_camera_worker(Box::new(camera.clone()), || {})
        .context("Failed to start camera thread")?;

    let mut nav = NavigationState::from(&config.navigation);
    nav.color_blind_mode |= args.color_blind;
    let mut screen = MapScreen::new(config, &nav);

    println!();
    print_transition("mounted", screen.ar().state());

    let request = screen
        .toggle_ar()
        .ok_or_else(|| anyhow!("AR session did not start an acquisition"))?;
    print_transition("AR toggled on", screen.ar().state());
    cmd_tx
        .send(CameraCommand::Acquire(request))
        .map_err(|_| anyhow!("Camera thread exited early"))?;

    if args.cancel {
        screen.toggle_ar();
        print_transition("AR toggled off", screen.ar().state());
    }

    let result = result_rx
        .recv_timeout(latency + Duration::from_secs(5))
        .context("Camera did not answer")?;
    let completion = screen.on_camera_result(result.request_id, result.outcome);
    print_completion(completion);
    print_transition("after answer", screen.ar().state());

    if let Some(view) = screen.ar_view() {
        if let Some(error) = view.error {
            println!();
            println!("    {}", error.title);
            println!("    {}", error.message);
            println!("    [{}]", error.action);
            println!();
            screen.dismiss_camera_error();
            print_transition("error dismissed", screen.ar().state());
        } else {
            if let Some(label) = screen.ar().stream_label() {
                println!("  {:<22}{}", "stream", label);
            }
            let since = screen.clock();
            for at_ms in SAMPLE_TIMES_MS {
                screen.advance(since + Duration::from_millis(at_ms));
                if let Some(frame) = screen.ar_view().and_then(|v| v.overlay) {
                    print_overlay(at_ms, &frame);
                }
            }
        }
    }

    screen.unmount();
    print_transition("unmounted", screen.ar().state());
    println!(
        "  {:<22}{} opened, {} released",
        "camera streams",
        camera.opened(),
        camera.released()
    );
    println!();

    Ok(())
}
