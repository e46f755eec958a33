//! Kinema Simulation Runtime
//!
//! Drives a one-dimensional uniformly-accelerated-motion simulation from a
//! per-frame scheduler and keeps a numeric readout, a vehicle view, and
//! three chart feeds in sync:
//!
//! - **SimClock**: derives simulated elapsed time from wall-clock
//!   timestamps, rebasing its origin across pause/resume so time never jumps
//! - **Phase**: the Idle/Running/Paused run state machine
//! - **FrameDriver**: cancellable frame-request abstraction over the host's
//!   repaint scheduler
//! - **SampleCadence**: wall-clock throttle decoupling chart appends from
//!   frame rate
//! - **SimulationController**: ties the above to the collaborator traits in
//!   [`surface`]
//!
//! All timestamps are `f64` milliseconds from the host's monotonic frame
//! clock, so tests can drive the controller with synthetic time.

pub mod clock;
pub mod config;
pub mod controller;
pub mod driver;
pub mod phase;
pub mod sampler;
pub mod surface;

pub use clock::SimClock;
pub use config::{KinemaConfig, RunDefaults};
pub use controller::SimulationController;
pub use driver::{FrameDriver, FrameRequestId, ManualFrameDriver};
pub use phase::{ControlLabel, Phase};
pub use sampler::SampleCadence;
pub use surface::{parse_or_zero, FieldInputs, InputSource, MemorySurface, SimSurface};
