//! The simulation controller
//!
//! Owns the run phase, the simulation clock, the run constants, and the
//! cadence throttle, and wires them to the collaborator traits. The frame
//! driver invokes [`tick`](SimulationController::tick) once per repaint;
//! everything else happens in response to user controls.
//!
//! Single-threaded by construction: the driver only reschedules after a
//! tick returns, so no operation can interleave with another.

use kinema_charts::format::{format_readout, format_time_label};
use kinema_core::{evaluate, KinematicSample, RunConstants, TrackGeometry};

use crate::clock::SimClock;
use crate::config::{KinemaConfig, RunDefaults};
use crate::driver::{FrameDriver, FrameRequestId};
use crate::phase::Phase;
use crate::sampler::SampleCadence;
use crate::surface::{parse_or_zero, InputSource, SimSurface};

/// Frame-driven controller for the uniformly-accelerated-motion simulation.
pub struct SimulationController<I, S, F>
where
    I: InputSource,
    S: SimSurface,
    F: FrameDriver,
{
    inputs: I,
    surface: S,
    driver: F,
    track: TrackGeometry,
    defaults: RunDefaults,

    phase: Phase,
    clock: SimClock,
    cadence: SampleCadence,
    constants: RunConstants,
    current: KinematicSample,
    pending_frame: Option<FrameRequestId>,
}

impl<I, S, F> SimulationController<I, S, F>
where
    I: InputSource,
    S: SimSurface,
    F: FrameDriver,
{
    /// Create a controller with default configuration and push the t = 0
    /// state to the surface.
    pub fn new(track: TrackGeometry, inputs: I, surface: S, driver: F) -> Self {
        Self::with_config(&KinemaConfig::default(), track, inputs, surface, driver)
    }

    /// Create a controller with explicit configuration and push the t = 0
    /// state to the surface.
    pub fn with_config(
        config: &KinemaConfig,
        track: TrackGeometry,
        inputs: I,
        surface: S,
        driver: F,
    ) -> Self {
        let mut controller = Self {
            inputs,
            surface,
            driver,
            track,
            defaults: config.defaults.clone(),
            phase: Phase::Idle,
            clock: SimClock::new(),
            cadence: SampleCadence::new(config.sampling.interval_ms),
            constants: RunConstants::default(),
            current: KinematicSample::default(),
            pending_frame: None,
        };
        controller.apply_initial_state(false);
        controller.surface.set_control_label(Phase::Idle.control_label());
        controller
    }

    // ========== User controls ==========

    /// Start or resume the simulation. No-op while already running.
    ///
    /// On the first start since the last reset the run constants are
    /// captured from the input fields. The clock origin is rebased on every
    /// start so resume continues exactly from the frozen elapsed time.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase.is_running() {
            tracing::debug!("start ignored: already running");
            return;
        }

        if self.clock.is_unstarted() {
            self.capture_run_constants();
            self.current = self.constants.at_rest();
        }

        self.clock.rebase(now_ms);
        self.cadence.arm(now_ms);
        self.transition(Phase::Running);
        self.pending_frame = Some(self.driver.request());
    }

    /// Freeze the simulation. No-op unless running.
    ///
    /// Cancels the outstanding frame request so no stale tick can keep
    /// advancing elapsed time.
    pub fn pause(&mut self) {
        if !self.phase.is_running() {
            tracing::debug!("pause ignored: not running");
            return;
        }

        self.transition(Phase::Paused);
        self.cancel_pending_frame();
    }

    /// The start/pause button: start when idle or paused, pause otherwise.
    pub fn toggle(&mut self, now_ms: f64) {
        if self.phase.is_running() {
            self.pause();
        } else {
            self.start(now_ms);
        }
    }

    /// Stop and return to the initial state.
    ///
    /// With `clear_inputs` the input fields are first restored to the
    /// configured defaults; either way the run constants are re-read, the
    /// charts are cleared, and the t = 0 state is pushed to the surface.
    pub fn reset(&mut self, clear_inputs: bool) {
        self.cancel_pending_frame();
        self.transition(Phase::Idle);
        self.clock.reset();
        self.cadence.clear();
        self.apply_initial_state(clear_inputs);
    }

    /// Committed edit of the initial-position field.
    ///
    /// Ignored entirely while running; otherwise the run constant and the
    /// rendered position are updated together, leaving velocity,
    /// acceleration and elapsed time untouched.
    pub fn on_initial_position_changed(&mut self) {
        if self.phase.is_running() {
            tracing::debug!("initial-position edit ignored while running");
            return;
        }

        let position = parse_or_zero(&self.inputs.initial_position());
        self.constants.initial_position = position;
        self.current.position = position;

        self.push_readout();
        self.push_vehicle();
    }

    // ========== Frame callback ==========

    /// Advance the simulation by one frame.
    ///
    /// Invoked by the frame driver with the host's monotonic timestamp in
    /// milliseconds. A tick that arrives after a pause (a cancelled request
    /// that fired anyway, or a stale callback) is a no-op.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.phase.is_running() {
            tracing::trace!(now_ms, "stale tick ignored");
            return;
        }
        self.pending_frame = None;

        let t = self.clock.advance(now_ms);
        self.current = evaluate(t, &self.constants);
        tracing::trace!(
            t,
            position = self.current.position,
            velocity = self.current.velocity,
            "tick"
        );

        self.push_readout();

        let pixel_pos = self.track.position_to_pixels(self.current.position);
        if self.track.is_within_track(pixel_pos) {
            self.surface
                .set_vehicle_offset(self.track.vehicle_offset(pixel_pos));
        } else {
            tracing::debug!(pixel_pos, "vehicle left the track, pausing");
            self.pause();
        }

        if self.cadence.should_sample(now_ms) {
            self.cadence.mark(now_ms);
            self.surface.append_chart_sample(
                &format_time_label(t),
                self.current.position,
                self.current.velocity,
                self.current.acceleration,
            );
        }

        if self.phase.is_running() {
            self.pending_frame = Some(self.driver.request());
        }
    }

    // ========== Accessors ==========

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn constants(&self) -> &RunConstants {
        &self.constants
    }

    pub fn current_sample(&self) -> &KinematicSample {
        &self.current
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn driver(&self) -> &F {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut F {
        &mut self.driver
    }

    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    // ========== Internals ==========

    fn transition(&mut self, to: Phase) {
        tracing::debug!(from = ?self.phase, to = ?to, "phase transition");
        self.phase = to;
        self.surface.set_control_label(to.control_label());
    }

    fn capture_run_constants(&mut self) {
        self.constants = RunConstants {
            initial_position: parse_or_zero(&self.inputs.initial_position()),
            initial_velocity: parse_or_zero(&self.inputs.initial_velocity()),
            acceleration: parse_or_zero(&self.inputs.acceleration()),
        };
    }

    /// Re-read constants, clear the charts, and push the t = 0 state.
    fn apply_initial_state(&mut self, clear_inputs: bool) {
        if clear_inputs {
            self.inputs.restore_defaults(&self.defaults);
        }

        self.capture_run_constants();
        self.current = self.constants.at_rest();

        self.surface.clear_charts();
        self.push_readout();
        self.push_vehicle();
    }

    fn push_readout(&mut self) {
        self.surface.update_readout(
            &format_readout(self.clock.elapsed_seconds()),
            &format_readout(self.current.position),
            &format_readout(self.current.velocity),
        );
    }

    fn push_vehicle(&mut self) {
        let pixel_pos = self.track.position_to_pixels(self.current.position);
        if self.track.is_within_track(pixel_pos) {
            self.surface
                .set_vehicle_offset(self.track.vehicle_offset(pixel_pos));
        } else {
            tracing::warn!(pixel_pos, "position maps outside the track, not rendered");
        }
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            self.driver.cancel(id);
        }
    }
}
