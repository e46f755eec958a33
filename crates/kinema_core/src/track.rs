//! Track geometry and the renderable-bounds policy
//!
//! The track maps a fixed span of distance units onto its rendered pixel
//! width. Whether the vehicle still fits on the track is a rendering-geometry
//! policy, deliberately not a physical limit: it is the named stop condition
//! the simulation controller consults each tick, kept separate so it can be
//! swapped or tested on its own.

use thiserror::Error;

/// Errors raised when constructing degenerate track geometry
#[derive(Error, Debug, PartialEq)]
pub enum TrackError {
    /// Track pixel width must be positive
    #[error("track width must be positive, got {0}")]
    NonPositiveTrackWidth(f64),

    /// Vehicle pixel width must be positive
    #[error("vehicle width must be positive, got {0}")]
    NonPositiveVehicleWidth(f64),

    /// The vehicle cannot be wider than the track it renders on
    #[error("vehicle width {vehicle} exceeds track width {track}")]
    VehicleWiderThanTrack { vehicle: f64, track: f64 },

    /// Distance span must be positive
    #[error("track span must be positive, got {0}")]
    NonPositiveSpan(f64),
}

/// Distance span rendered across the full track width, in distance units.
pub const DEFAULT_TRACK_SPAN: f64 = 1000.0;

/// Geometry of the rendered track and vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    span_units: f64,
    track_width_px: f64,
    vehicle_width_px: f64,
}

impl TrackGeometry {
    /// Create validated geometry with the default distance span.
    pub fn new(track_width_px: f64, vehicle_width_px: f64) -> Result<Self, TrackError> {
        Self::with_span(DEFAULT_TRACK_SPAN, track_width_px, vehicle_width_px)
    }

    /// Create validated geometry with an explicit distance span.
    pub fn with_span(
        span_units: f64,
        track_width_px: f64,
        vehicle_width_px: f64,
    ) -> Result<Self, TrackError> {
        if !(span_units > 0.0) {
            return Err(TrackError::NonPositiveSpan(span_units));
        }
        if !(track_width_px > 0.0) {
            return Err(TrackError::NonPositiveTrackWidth(track_width_px));
        }
        if !(vehicle_width_px > 0.0) {
            return Err(TrackError::NonPositiveVehicleWidth(vehicle_width_px));
        }
        if vehicle_width_px > track_width_px {
            return Err(TrackError::VehicleWiderThanTrack {
                vehicle: vehicle_width_px,
                track: track_width_px,
            });
        }
        Ok(Self {
            span_units,
            track_width_px,
            vehicle_width_px,
        })
    }

    /// Distance span rendered across the track, in distance units.
    pub fn span_units(&self) -> f64 {
        self.span_units
    }

    /// Rendered track width in pixels.
    pub fn track_width_px(&self) -> f64 {
        self.track_width_px
    }

    /// Rendered vehicle width in pixels.
    pub fn vehicle_width_px(&self) -> f64 {
        self.vehicle_width_px
    }

    /// Map a simulated position (distance units) onto the track in pixels.
    pub fn position_to_pixels(&self, position: f64) -> f64 {
        position / self.span_units * self.track_width_px
    }

    /// The renderable-bounds policy: the vehicle anchored at `pixel_pos`
    /// must render fully inside the track.
    pub fn is_within_track(&self, pixel_pos: f64) -> bool {
        pixel_pos >= 0.0 && pixel_pos <= self.track_width_px - self.vehicle_width_px
    }

    /// Offset of the vehicle's left edge so it renders centered on the
    /// mapped position.
    pub fn vehicle_offset(&self, pixel_pos: f64) -> f64 {
        pixel_pos - self.vehicle_width_px / 2.0
    }
}
