//! Cadence limiting for chart appends
//!
//! The readout updates at display refresh rate; the charts do not need to.
//! A sample is accepted only when a minimum wall-clock interval has passed
//! since the last accepted one, which bounds series growth and chart render
//! cost independent of frame rate.

/// Default minimum interval between chart samples, in milliseconds.
pub const DEFAULT_SAMPLE_INTERVAL_MS: f64 = 100.0;

/// Wall-clock throttle for sample appends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCadence {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl SampleCadence {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Treat `now_ms` as the last accepted instant without taking a sample.
    /// Called at every start, so the first sample of a run segment lands a
    /// full interval in.
    pub fn arm(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Whether a sample at `now_ms` should be accepted.
    pub fn should_sample(&self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) => now_ms - last > self.interval_ms,
            None => true,
        }
    }

    /// Record that a sample was accepted at `now_ms`.
    pub fn mark(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Forget all history (reset).
    pub fn clear(&mut self) {
        self.last_ms = None;
    }
}

impl Default for SampleCadence {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL_MS)
    }
}
