//! The session controller and the countdown wired together.
//!
//! `PomodoroTimer` is the one object a host drives. Commands return
//! `Some(Event)` when they changed anything worth announcing; `tick()`
//! performs the completion handshake -- the controller decides the next
//! session, the countdown is reconfigured with its duration, and an
//! active timer rolls straight into it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = PomodoroTimer::new(TimerConfig::default());
//! timer.start();
//! // Host loop, once per second, only while `timer.is_running()`:
//! if let Some(event) = timer.tick() {
//!     // Event::SessionCompleted -- chime and announce.
//! }
//! ```

use chrono::Utc;

use super::countdown::{CountdownEngine, Tick};
use super::session::{NextSession, SessionController, SessionCounts, SessionType};
use crate::config::TimerConfig;
use crate::events::Event;

pub struct PomodoroTimer {
    controller: SessionController,
    engine: CountdownEngine,
}

impl PomodoroTimer {
    /// # Panics
    ///
    /// Panics when `config` carries a zero duration or cycle length; run
    /// [`TimerConfig::validate`] on untrusted input first.
    pub fn new(config: TimerConfig) -> Self {
        let engine = CountdownEngine::new(config.duration_for(SessionType::Focus));
        Self {
            controller: SessionController::new(config),
            engine,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> SessionType {
        self.controller.current()
    }

    pub fn counts(&self) -> SessionCounts {
        self.controller.counts()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.engine.remaining_secs()
    }

    pub fn total_secs(&self) -> u32 {
        self.engine.total_secs()
    }

    pub fn progress(&self) -> f64 {
        self.engine.progress()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            session: self.controller.current(),
            remaining_secs: self.engine.remaining_secs(),
            total_secs: self.engine.total_secs(),
            progress: self.engine.progress(),
            counts: self.controller.counts(),
            running: self.engine.is_running(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.engine.is_running() {
            return None; // Already running.
        }
        self.engine.start();
        Some(Event::TimerStarted {
            session: self.controller.current(),
            remaining_secs: self.engine.remaining_secs(),
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.engine.is_running() {
            return None;
        }
        self.engine.pause();
        Some(Event::TimerPaused {
            remaining_secs: self.engine.remaining_secs(),
            at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.engine.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Back to the top of the current session, paused. Counters are
    /// untouched; only a fully elapsed session counts.
    pub fn reset(&mut self) -> Option<Event> {
        self.engine.reset();
        Some(Event::TimerReset {
            session: self.controller.current(),
            at: Utc::now(),
        })
    }

    /// Mode-button selection: jump to `kind` at its full duration without
    /// crediting the abandoned session.
    pub fn select_mode(&mut self, kind: SessionType) -> Event {
        let duration_secs = self.controller.select_mode(kind);
        self.engine.configure(duration_secs);
        Event::ModeSelected {
            session: kind,
            duration_secs,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second. Call only while running; the
    /// host re-checks `is_running` before every scheduled tick.
    ///
    /// Returns the completion event when a session elapses, `None` for an
    /// ordinary second. On completion the next session is already loaded
    /// and, because the running flag is never touched here, ticking
    /// continues into it without further action.
    pub fn tick(&mut self) -> Option<Event> {
        match self.engine.tick() {
            Tick::Counting { .. } => None,
            Tick::Completed => {
                let finished = self.controller.current();
                let NextSession {
                    kind,
                    duration_secs,
                } = self.controller.complete_current();
                self.engine.configure(duration_secs);
                Some(Event::SessionCompleted {
                    finished,
                    next: kind,
                    next_duration_secs: duration_secs,
                    at: Utc::now(),
                })
            }
        }
    }
}
