//! Kinema configuration file handling

use anyhow::{Context, Result};
use kinema_core::{TrackError, TrackGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Kinema configuration (kinema.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KinemaConfig {
    #[serde(default)]
    pub defaults: RunDefaults,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub track: TrackConfig,
}

/// Default run constants restored by a full reset
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RunDefaults {
    #[serde(default)]
    pub position: f64,
    #[serde(default)]
    pub velocity: f64,
    #[serde(default = "default_acceleration")]
    pub acceleration: f64,
}

fn default_acceleration() -> f64 {
    2.0
}

impl Default for RunDefaults {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            acceleration: default_acceleration(),
        }
    }
}

/// Chart sampling cadence
#[derive(Debug, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Minimum wall-clock interval between chart samples, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: f64,
}

fn default_interval_ms() -> f64 {
    crate::sampler::DEFAULT_SAMPLE_INTERVAL_MS
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Track geometry
#[derive(Debug, Deserialize, Serialize)]
pub struct TrackConfig {
    /// Distance units rendered across the full track width
    #[serde(default = "default_span_units")]
    pub span_units: f64,
}

fn default_span_units() -> f64 {
    kinema_core::track::DEFAULT_TRACK_SPAN
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            span_units: default_span_units(),
        }
    }
}

impl TrackConfig {
    /// Build validated track geometry from the configured span and the
    /// host-measured pixel widths.
    pub fn geometry(
        &self,
        track_width_px: f64,
        vehicle_width_px: f64,
    ) -> Result<TrackGeometry, TrackError> {
        TrackGeometry::with_span(self.span_units, track_width_px, vehicle_width_px)
    }
}

impl KinemaConfig {
    /// Load configuration from a kinema.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
