//! End-to-end simulation scenarios driven through the manual frame driver.

use kinema_core::TrackGeometry;
use kinema_sim::{
    ControlLabel, FieldInputs, KinemaConfig, ManualFrameDriver, MemorySurface, Phase,
    SimulationController,
};

type Controller = SimulationController<FieldInputs, MemorySurface, ManualFrameDriver>;

fn controller(position: &str, velocity: &str, acceleration: &str) -> Controller {
    let track = TrackGeometry::new(1000.0, 50.0).unwrap();
    SimulationController::new(
        track,
        FieldInputs::new(position, velocity, acceleration),
        MemorySurface::new(),
        ManualFrameDriver::new(),
    )
}

/// Run the frame loop at a fixed step until `until_ms`, like a host repaint
/// loop would.
fn run_frames(controller: &mut Controller, from_ms: f64, until_ms: f64, step_ms: f64) {
    let mut now = from_ms;
    while now <= until_ms {
        let ready = controller.driver_mut().take_ready();
        if ready.is_empty() {
            break;
        }
        controller.tick(now);
        now += step_ms;
    }
}

#[test]
fn full_run_matches_the_kinematic_equations() {
    let mut c = controller("0", "0", "2");
    c.start(0.0);
    run_frames(&mut c, 16.0, 2_000.0, 16.0);

    let t = c.elapsed_seconds();
    let sample = *c.current_sample();
    assert!((sample.velocity - 2.0 * t).abs() < 1e-9);
    assert!((sample.position - t * t).abs() < 1e-9);
}

#[test]
fn pause_resume_pause_keeps_simulated_time_continuous() {
    let mut c = controller("0", "0", "2");

    c.start(0.0);
    run_frames(&mut c, 100.0, 1_000.0, 100.0);
    c.pause();
    let frozen = c.elapsed_seconds();

    // Hours pass on the wall clock.
    c.start(7_200_000.0);
    run_frames(&mut c, 7_200_000.0, 7_200_000.0, 100.0);
    assert!((c.elapsed_seconds() - frozen).abs() < 1e-9);

    run_frames(&mut c, 7_200_100.0, 7_200_500.0, 100.0);
    assert!(c.elapsed_seconds() > frozen);
}

#[test]
fn fast_vehicle_stops_at_the_track_edge_and_stays_stopped() {
    let mut c = controller("0", "400", "100");
    c.start(0.0);
    run_frames(&mut c, 16.0, 10_000.0, 16.0);

    assert_eq!(c.phase(), Phase::Paused);
    assert_eq!(c.surface().last_label(), Some(ControlLabel::Reanudar));
    assert_eq!(c.driver().pending_count(), 0);

    // Every rendered offset stayed inside the track.
    for &offset in &c.surface().vehicle_offsets {
        assert!(offset + 50.0 / 2.0 <= 950.0 + 1e-9, "offset {offset} out of track");
    }
}

#[test]
fn chart_growth_is_bounded_by_wall_clock_not_frame_rate() {
    // 120 fps-style frames over one simulated second.
    let mut fast = controller("0", "1", "0");
    fast.start(0.0);
    run_frames(&mut fast, 8.0, 1_000.0, 8.0);

    // 30 fps-style frames over the same second.
    let mut slow = controller("0", "1", "0");
    slow.start(0.0);
    run_frames(&mut slow, 33.0, 1_000.0, 33.0);

    // Cadence, not frame rate, sets the density: one second at a 100 ms
    // interval yields samples in the same narrow band for both frame rates.
    let fast_samples = fast.surface().samples.len();
    let slow_samples = slow.surface().samples.len();
    assert!((6..=10).contains(&fast_samples), "got {fast_samples} samples");
    assert!((6..=10).contains(&slow_samples), "got {slow_samples} samples");
}

#[test]
fn reset_mid_run_starts_a_clean_second_run() {
    let mut c = controller("0", "0", "2");
    c.start(0.0);
    run_frames(&mut c, 100.0, 1_500.0, 100.0);
    assert!(!c.surface().samples.is_empty());

    c.reset(false);
    assert_eq!(c.elapsed_seconds(), 0.0);
    assert!(c.surface().samples.is_empty());

    // Second run starts from t = 0 again.
    c.start(50_000.0);
    run_frames(&mut c, 50_100.0, 51_000.0, 100.0);
    assert!((c.elapsed_seconds() - 1.0).abs() < 1e-9);
}

#[test]
fn configured_cadence_interval_is_honored() {
    let config: KinemaConfig = toml::from_str(
        r#"
        [sampling]
        interval_ms = 300.0
        "#,
    )
    .unwrap();
    let track = TrackGeometry::new(1000.0, 50.0).unwrap();
    let mut c = SimulationController::with_config(
        &config,
        track,
        FieldInputs::new("0", "1", "0"),
        MemorySurface::new(),
        ManualFrameDriver::new(),
    );

    c.start(0.0);
    run_frames(&mut c, 100.0, 1_000.0, 100.0);
    // 10 ticks over one second, but only every >300 ms one samples.
    assert!(c.surface().samples.len() <= 3);
}
