//! The simulation clock
//!
//! Simulated elapsed time is always re-derived from the wall clock rather
//! than accumulated per frame: `elapsed = (now - origin) / 1000`. Pausing
//! freezes the elapsed value; resuming rebases the origin so the frozen
//! value is reproduced exactly at the instant of resume. This is what keeps
//! the simulation free of drift and time jumps across arbitrary pause
//! lengths.

/// Wall-clock-backed clock for simulated elapsed time.
///
/// Timestamps are milliseconds from the host's monotonic frame clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimClock {
    origin_ms: Option<f64>,
    elapsed_seconds: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated seconds since the last reset. Frozen while the clock is
    /// not being advanced.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// True until the first [`rebase`](Self::rebase) after a reset.
    pub fn is_unstarted(&self) -> bool {
        self.origin_ms.is_none()
    }

    /// Anchor the origin so that `now_ms` corresponds to the current frozen
    /// elapsed value. Called on every start, which makes resume seamless:
    /// the elapsed value observed right after rebasing equals the value
    /// frozen at pause.
    pub fn rebase(&mut self, now_ms: f64) {
        self.origin_ms = Some(now_ms - self.elapsed_seconds * 1000.0);
        tracing::trace!(
            origin_ms = ?self.origin_ms,
            elapsed = self.elapsed_seconds,
            "clock rebased"
        );
    }

    /// Re-derive elapsed time from the wall clock and return it.
    ///
    /// If the clock was never rebased, `now_ms` becomes the origin, so the
    /// first advance reads as zero elapsed.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let origin = *self.origin_ms.get_or_insert(now_ms);
        self.elapsed_seconds = (now_ms - origin) / 1000.0;
        self.elapsed_seconds
    }

    /// Back to the unstarted state: zero elapsed, no origin.
    pub fn reset(&mut self) {
        self.origin_ms = None;
        self.elapsed_seconds = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn starts_unstarted_at_zero() {
        let clock = SimClock::new();
        assert!(clock.is_unstarted());
        assert_eq!(clock.elapsed_seconds(), 0.0);
    }

    #[test]
    fn advance_derives_elapsed_from_origin() {
        let mut clock = SimClock::new();
        clock.rebase(10_000.0);
        assert!((clock.advance(10_500.0) - 0.5).abs() < EPS);
        assert!((clock.advance(12_000.0) - 2.0).abs() < EPS);
    }

    #[test]
    fn first_advance_without_rebase_reads_zero() {
        let mut clock = SimClock::new();
        assert_eq!(clock.advance(5_000.0), 0.0);
        assert!((clock.advance(5_250.0) - 0.25).abs() < EPS);
    }

    #[test]
    fn rebase_reproduces_frozen_elapsed_exactly() {
        let mut clock = SimClock::new();
        clock.rebase(0.0);
        clock.advance(3_000.0);
        let frozen = clock.elapsed_seconds();

        // Arbitrary wall-clock gap while paused, then resume.
        clock.rebase(90_000.0);
        assert!((clock.advance(90_000.0) - frozen).abs() < EPS);

        // Ticks keep advancing from the frozen value.
        assert!((clock.advance(91_000.0) - (frozen + 1.0)).abs() < EPS);
    }

    #[test]
    fn reset_clears_origin_and_elapsed() {
        let mut clock = SimClock::new();
        clock.rebase(100.0);
        clock.advance(2_100.0);
        clock.reset();
        assert!(clock.is_unstarted());
        assert_eq!(clock.elapsed_seconds(), 0.0);
    }
}
