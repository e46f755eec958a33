//! Run phase state machine
//!
//! Flat three-state machine: `Idle → Running ⇄ Paused`, with reset landing
//! back in `Idle` from anywhere. Running and Paused differ only in whether
//! the frame driver is active; the control button label tracks the phase.

use std::fmt;

/// The run phase of the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Never started, or just reset
    #[default]
    Idle,
    /// The frame driver is active and ticks advance simulated time
    Running,
    /// Elapsed time is frozen; the frame driver is stopped
    Paused,
}

impl Phase {
    pub fn is_running(self) -> bool {
        self == Phase::Running
    }

    /// Label the start/pause control shows in this phase.
    pub fn control_label(self) -> ControlLabel {
        match self {
            Phase::Idle => ControlLabel::Iniciar,
            Phase::Running => ControlLabel::Pausar,
            Phase::Paused => ControlLabel::Reanudar,
        }
    }
}

/// User-visible label of the start/pause toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlLabel {
    Iniciar,
    Pausar,
    Reanudar,
}

impl fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ControlLabel::Iniciar => "Iniciar",
            ControlLabel::Pausar => "Pausar",
            ControlLabel::Reanudar => "Reanudar",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_track_phase() {
        assert_eq!(Phase::Idle.control_label(), ControlLabel::Iniciar);
        assert_eq!(Phase::Running.control_label(), ControlLabel::Pausar);
        assert_eq!(Phase::Paused.control_label(), ControlLabel::Reanudar);
    }

    #[test]
    fn labels_render_verbatim() {
        assert_eq!(ControlLabel::Iniciar.to_string(), "Iniciar");
        assert_eq!(ControlLabel::Pausar.to_string(), "Pausar");
        assert_eq!(ControlLabel::Reanudar.to_string(), "Reanudar");
    }

    #[test]
    fn only_running_reports_running() {
        assert!(Phase::Running.is_running());
        assert!(!Phase::Idle.is_running());
        assert!(!Phase::Paused.is_running());
    }
}
