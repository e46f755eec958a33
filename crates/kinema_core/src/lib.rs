//! Kinema Core Domain
//!
//! This crate provides the pure domain primitives for the Kinema simulator:
//!
//! - **Kinematics**: closed-form evaluation of uniformly accelerated motion
//! - **Track Geometry**: position-to-pixel mapping and the renderable-bounds
//!   policy that stops the simulation at the track edge
//!
//! Nothing in this crate knows about clocks, frames, or display surfaces;
//! everything is a pure function of its inputs.

pub mod kinematics;
pub mod track;

pub use kinematics::{evaluate, KinematicSample, RunConstants};
pub use track::{TrackError, TrackGeometry};
