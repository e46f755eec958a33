//! Closed-form kinematics for uniformly accelerated motion
//!
//! The evaluator is a pure function of elapsed time and the run constants;
//! it never integrates incrementally, so pause/resume cannot accumulate
//! numerical drift.

/// Constants captured at the start of a run.
///
/// Immutable for the duration of the run (the initial position may be
/// re-captured while the simulation is not running).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunConstants {
    /// Starting position in distance units
    pub initial_position: f64,
    /// Starting velocity in units per second
    pub initial_velocity: f64,
    /// Constant acceleration in units per second squared
    pub acceleration: f64,
}

/// Kinematic state at a single instant of simulated time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicSample {
    /// Position in distance units
    pub position: f64,
    /// Velocity in units per second
    pub velocity: f64,
    /// Acceleration in units per second squared (constant, echoed through
    /// so all three chart feeds share one sample type)
    pub acceleration: f64,
}

impl RunConstants {
    /// The sample at t = 0: the run constants themselves.
    pub fn at_rest(&self) -> KinematicSample {
        KinematicSample {
            position: self.initial_position,
            velocity: self.initial_velocity,
            acceleration: self.acceleration,
        }
    }
}

/// Evaluate position and velocity at elapsed time `t` (seconds).
///
/// `v = v0 + a·t` and `x = x0 + v0·t + ½·a·t²`.
pub fn evaluate(t: f64, constants: &RunConstants) -> KinematicSample {
    let v0 = constants.initial_velocity;
    let a = constants.acceleration;
    KinematicSample {
        position: constants.initial_position + v0 * t + 0.5 * a * t * t,
        velocity: v0 + a * t,
        acceleration: a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn at_zero_time_returns_constants() {
        let constants = RunConstants {
            initial_position: 12.5,
            initial_velocity: -3.0,
            acceleration: 9.81,
        };
        let sample = evaluate(0.0, &constants);
        assert_eq!(sample, constants.at_rest());
    }

    #[test]
    fn velocity_is_linear_in_time() {
        let constants = RunConstants {
            initial_velocity: 1.5,
            acceleration: 2.0,
            ..Default::default()
        };
        for step in 0..50 {
            let t = f64::from(step) * 0.1;
            let sample = evaluate(t, &constants);
            assert!((sample.velocity - (1.5 + 2.0 * t)).abs() < EPS);
        }
    }

    #[test]
    fn position_is_quadratic_in_time() {
        let constants = RunConstants {
            initial_position: 4.0,
            initial_velocity: 1.0,
            acceleration: -0.5,
        };
        for step in 0..50 {
            let t = f64::from(step) * 0.25;
            let sample = evaluate(t, &constants);
            let expected = 4.0 + 1.0 * t + 0.5 * -0.5 * t * t;
            assert!((sample.position - expected).abs() < EPS);
        }
    }

    #[test]
    fn reference_scenario_two_seconds() {
        // x0 = 0, v0 = 0, a = 2: at t = 2 s, v = 4, x = 4
        let constants = RunConstants {
            acceleration: 2.0,
            ..Default::default()
        };
        let sample = evaluate(2.0, &constants);
        assert!((sample.velocity - 4.0).abs() < EPS);
        assert!((sample.position - 4.0).abs() < EPS);
    }

    #[test]
    fn acceleration_is_echoed_at_every_time() {
        let constants = RunConstants {
            acceleration: 3.25,
            ..Default::default()
        };
        for step in 0..10 {
            let sample = evaluate(f64::from(step), &constants);
            assert!((sample.acceleration - 3.25).abs() < EPS);
        }
    }
}
