//! Headless Simulation Demo
//!
//! Drives the simulation controller with the manual frame driver and
//! synthetic 60 fps timestamps, printing readouts and chart samples through
//! tracing instead of a UI:
//! - Starts a run with x0 = 0, v0 = 0, a = 2
//! - Pauses at ~2 s of simulated time, waits, resumes
//! - Runs until the vehicle leaves the track and the controller auto-pauses
//!
//! Run with: cargo run -p kinema_sim --example headless

use kinema_sim::{
    FieldInputs, KinemaConfig, ManualFrameDriver, MemorySurface, Phase, SimulationController,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = KinemaConfig::default();
    let track = config.track.geometry(1000.0, 50.0)?;
    let mut controller = SimulationController::with_config(
        &config,
        track,
        FieldInputs::new("0", "0", "2"),
        MemorySurface::new(),
        ManualFrameDriver::new(),
    );

    let mut now_ms = 0.0;
    controller.start(now_ms);
    tracing::info!(label = %controller.phase().control_label(), "simulation started");

    // First segment: two simulated seconds.
    run_until(&mut controller, &mut now_ms, |c| c.elapsed_seconds() >= 2.0);
    report(&controller);

    controller.pause();
    tracing::info!("paused; wall clock keeps moving");
    now_ms += 5_000.0;

    controller.start(now_ms);
    tracing::info!(
        elapsed = controller.elapsed_seconds(),
        "resumed with no time jump"
    );

    // Second segment: run until the boundary-exit auto-pause.
    run_until(&mut controller, &mut now_ms, |c| c.phase() != Phase::Running);
    report(&controller);
    tracing::info!(
        samples = controller.surface().samples.len(),
        "vehicle left the track, controller auto-paused"
    );

    Ok(())
}

fn run_until<P>(
    controller: &mut SimulationController<FieldInputs, MemorySurface, ManualFrameDriver>,
    now_ms: &mut f64,
    done: P,
) where
    P: Fn(&SimulationController<FieldInputs, MemorySurface, ManualFrameDriver>) -> bool,
{
    while !done(controller) {
        let ready = controller.driver_mut().take_ready();
        if ready.is_empty() {
            break;
        }
        *now_ms += FRAME_MS;
        controller.tick(*now_ms);
    }
}

fn report(controller: &SimulationController<FieldInputs, MemorySurface, ManualFrameDriver>) {
    if let Some((time, position, velocity)) = controller.surface().readout.clone() {
        tracing::info!(%time, %position, %velocity, "readout");
    }
}
