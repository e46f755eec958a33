//! Kinema Chart Feeds
//!
//! Data-side support for the three synchronized time-series displays
//! (position, velocity, acceleration):
//!
//! - **Sample Series**: append-only labelled series, cleared on reset
//! - **Formatting**: fixed-decimal readout and axis-label strings
//!
//! Rendering itself belongs to the embedding application; this crate only
//! owns the data the charts consume.

pub mod format;
pub mod series;

pub use format::format_fixed;
pub use series::{SampleSet, SampleSeries};
