//! Session selection and counting.
//!
//! The controller owns the "which interval comes next" rules. It knows
//! nothing about the countdown itself: `complete_current()` returns the
//! decision and the caller applies it to whatever is doing the counting.

use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Focus,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Focus => "Focus",
            SessionType::ShortBreak => "Short Break",
            SessionType::LongBreak => "Long Break",
        }
    }
}

/// How many sessions of each type have fully elapsed.
///
/// Counts only ever go up; manual mode jumps do not touch them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub focus: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl SessionCounts {
    pub fn get(&self, kind: SessionType) -> u32 {
        match kind {
            SessionType::Focus => self.focus,
            SessionType::ShortBreak => self.short_break,
            SessionType::LongBreak => self.long_break,
        }
    }

    fn bump(&mut self, kind: SessionType) {
        match kind {
            SessionType::Focus => self.focus += 1,
            SessionType::ShortBreak => self.short_break += 1,
            SessionType::LongBreak => self.long_break += 1,
        }
    }
}

/// The controller's verdict on what runs after a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextSession {
    pub kind: SessionType,
    pub duration_secs: u32,
}

/// Decides session order and keeps the completed-session statistics.
///
/// One long-lived instance per timer, created with `current` on Focus
/// and every counter at zero.
#[derive(Debug, Clone)]
pub struct SessionController {
    current: SessionType,
    counts: SessionCounts,
    /// Completed focus sessions, counted toward the long-break cadence.
    /// Stays `<= counts.focus` because it only moves inside
    /// `complete_current()` right after the focus bump.
    focus_cycle: u32,
    config: TimerConfig,
}

impl SessionController {
    /// # Panics
    ///
    /// Panics when `config.cycle_length` is zero; the cadence rule needs
    /// a positive modulus.
    pub fn new(config: TimerConfig) -> Self {
        assert!(config.cycle_length > 0, "cycle length must be positive");
        Self {
            current: SessionType::Focus,
            counts: SessionCounts::default(),
            focus_cycle: 0,
            config,
        }
    }

    pub fn current(&self) -> SessionType {
        self.current
    }

    pub fn counts(&self) -> SessionCounts {
        self.counts
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Record the running session as fully elapsed and decide what follows.
    ///
    /// A completed focus session is followed by a long break once per
    /// `cycle_length` completions and a short break otherwise; a completed
    /// break always hands control back to focus.
    pub fn complete_current(&mut self) -> NextSession {
        self.counts.bump(self.current);
        let next = match self.current {
            SessionType::Focus => {
                self.focus_cycle += 1;
                if self.focus_cycle % self.config.cycle_length == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Focus,
        };
        self.current = next;
        NextSession {
            kind: next,
            duration_secs: self.config.duration_for(next),
        }
    }

    /// Manual mode override from the mode buttons.
    ///
    /// Sets `current` and nothing else: a session abandoned mid-way never
    /// counts, and jumping modes must not advance the long-break cadence.
    pub fn select_mode(&mut self, kind: SessionType) -> u32 {
        self.current = kind;
        self.config.duration_for(kind)
    }
}
