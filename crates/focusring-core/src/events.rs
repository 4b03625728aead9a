use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{SessionCounts, SessionType};

/// Every state change in the core produces an Event for the host to
/// render or announce. `StateSnapshot` carries everything one frame of
/// presentation needs: the digital readout, the arc sweep fraction and
/// the counter labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        session: SessionType,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        session: SessionType,
        at: DateTime<Utc>,
    },
    /// Manual mode-button selection; never counts as a completion.
    ModeSelected {
        session: SessionType,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// One-shot completion signal. The host may chime on it; a failed
    /// chime is the host's problem and never blocks the transition.
    SessionCompleted {
        finished: SessionType,
        next: SessionType,
        next_duration_secs: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        session: SessionType,
        remaining_secs: u32,
        total_secs: u32,
        /// `remaining / total` -- 360 degrees times this is the arc sweep.
        progress: f64,
        counts: SessionCounts,
        running: bool,
        at: DateTime<Utc>,
    },
}
