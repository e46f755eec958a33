//! Collaborator traits
//!
//! The simulation treats everything user-facing as an external collaborator
//! behind a narrow trait: the numeric input fields, and the combined output
//! surface (readout, vehicle view, chart feeds, control label). The
//! embedding application implements these against its actual widgets; tests
//! implement them in memory.

use crate::config::RunDefaults;
use crate::phase::ControlLabel;

/// Read access to the three numeric input fields.
///
/// Values come back as raw text; parsing is the controller's policy (see
/// [`parse_or_zero`]).
pub trait InputSource {
    fn initial_position(&self) -> String;
    fn initial_velocity(&self) -> String;
    fn acceleration(&self) -> String;

    /// Overwrite the fields with the configured defaults (full reset).
    fn restore_defaults(&mut self, defaults: &RunDefaults);
}

/// Everything the simulation pushes out per frame or per transition.
pub trait SimSurface {
    /// 2-decimal readout strings for elapsed time, position, velocity.
    fn update_readout(&mut self, time: &str, position: &str, velocity: &str);

    /// Left-edge pixel offset of the vehicle on the track.
    fn set_vehicle_offset(&mut self, offset_px: f64);

    /// Append one sample to all three chart feeds, without animation.
    fn append_chart_sample(
        &mut self,
        time_label: &str,
        position: f64,
        velocity: f64,
        acceleration: f64,
    );

    /// Drop all chart samples (reset).
    fn clear_charts(&mut self);

    /// Reflect the current phase on the start/pause control.
    fn set_control_label(&mut self, label: ControlLabel);
}

/// Parse a numeric field, degrading malformed or empty input to zero.
///
/// Silent-recovery policy: bad input is not an error, but it is logged so
/// surprising zeros can be traced.
pub fn parse_or_zero(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !trimmed.is_empty() {
                tracing::warn!(raw = trimmed, "malformed numeric input, using 0");
            }
            0.0
        }
    }
}

/// In-memory input fields.
///
/// Stands in for the host's numeric widgets in tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct FieldInputs {
    pub position: String,
    pub velocity: String,
    pub acceleration: String,
}

impl FieldInputs {
    pub fn new(
        position: impl Into<String>,
        velocity: impl Into<String>,
        acceleration: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            velocity: velocity.into(),
            acceleration: acceleration.into(),
        }
    }
}

impl InputSource for FieldInputs {
    fn initial_position(&self) -> String {
        self.position.clone()
    }

    fn initial_velocity(&self) -> String {
        self.velocity.clone()
    }

    fn acceleration(&self) -> String {
        self.acceleration.clone()
    }

    fn restore_defaults(&mut self, defaults: &RunDefaults) {
        self.position = defaults.position.to_string();
        self.velocity = defaults.velocity.to_string();
        self.acceleration = defaults.acceleration.to_string();
    }
}

/// In-memory output surface recording everything the simulation pushes.
#[derive(Debug, Default)]
pub struct MemorySurface {
    /// Last readout pushed: (time, position, velocity)
    pub readout: Option<(String, String, String)>,
    /// Every vehicle offset pushed, in order
    pub vehicle_offsets: Vec<f64>,
    /// The chart feeds
    pub samples: kinema_charts::SampleSet,
    /// Every control label pushed, in order
    pub labels: Vec<ControlLabel>,
    /// How many times the charts were cleared
    pub chart_clears: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent control label, if any was pushed.
    pub fn last_label(&self) -> Option<ControlLabel> {
        self.labels.last().copied()
    }
}

impl SimSurface for MemorySurface {
    fn update_readout(&mut self, time: &str, position: &str, velocity: &str) {
        self.readout = Some((time.to_string(), position.to_string(), velocity.to_string()));
    }

    fn set_vehicle_offset(&mut self, offset_px: f64) {
        self.vehicle_offsets.push(offset_px);
    }

    fn append_chart_sample(
        &mut self,
        time_label: &str,
        position: f64,
        velocity: f64,
        acceleration: f64,
    ) {
        self.samples
            .append(time_label, position, velocity, acceleration);
    }

    fn clear_charts(&mut self) {
        self.samples.clear();
        self.chart_clears += 1;
    }

    fn set_control_label(&mut self, label: ControlLabel) {
        self.labels.push(label);
    }
}
