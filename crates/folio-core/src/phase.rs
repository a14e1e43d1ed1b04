use crate::constants::{ANGLE_AFTER, ANGLE_BEFORE, PHASE_MIN_SPAN};
use crate::threshold::ThresholdWindow;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Waiting,
    Entering,
    Stationary,
    Exiting,
    Hidden,
}

/// Visual state of one item at one rotation value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Projection {
    pub phase: Phase,
    /// Degrees: -90 before, 0 while stationary, +90 after.
    pub rotation_angle: f32,
    pub opacity: f32,
}

/// Project `rotation` onto one item's window. Intervals are half-open, so a
/// value exactly on a boundary belongs to the later phase.
pub fn project(rotation: f32, window: &ThresholdWindow, next_enter: f32) -> Projection {
    if rotation < window.enter {
        Projection {
            phase: Phase::Waiting,
            rotation_angle: ANGLE_BEFORE,
            opacity: 0.0,
        }
    } else if rotation < window.stationary {
        let span = (window.stationary - window.enter).max(PHASE_MIN_SPAN);
        let t = (rotation - window.enter) / span;
        Projection {
            phase: Phase::Entering,
            rotation_angle: ANGLE_BEFORE - ANGLE_BEFORE * t,
            opacity: t.clamp(0.0, 1.0),
        }
    } else if rotation < window.exit {
        Projection {
            phase: Phase::Stationary,
            rotation_angle: 0.0,
            opacity: 1.0,
        }
    } else if rotation < next_enter {
        let span = (next_enter - window.exit).max(PHASE_MIN_SPAN);
        let t = (rotation - window.exit) / span;
        Projection {
            phase: Phase::Exiting,
            rotation_angle: ANGLE_AFTER * t,
            opacity: (1.0 - t).clamp(0.0, 1.0),
        }
    } else {
        Projection {
            phase: Phase::Hidden,
            rotation_angle: ANGLE_AFTER,
            opacity: 0.0,
        }
    }
}
