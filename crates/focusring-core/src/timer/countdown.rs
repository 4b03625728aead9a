//! The countdown itself.
//!
//! The engine has no clock of its own -- the host calls `tick()` once per
//! second while the timer is running and stops scheduling when it is not.

/// One observation reported by [`CountdownEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Another second elapsed; `progress` is the fraction of the session
    /// still remaining (the arc sweep).
    Counting { remaining_secs: u32, progress: f64 },
    /// The countdown is spent. The caller asks the session controller for
    /// the next session and reconfigures before ticking again.
    Completed,
}

/// Discrete one-second countdown over the current session.
///
/// Invariant: `0 <= remaining_secs <= total_secs`, and `total_secs` only
/// changes through [`configure`](CountdownEngine::configure).
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    remaining_secs: u32,
    total_secs: u32,
    running: bool,
}

impl CountdownEngine {
    /// Create an engine loaded with a full session, paused.
    ///
    /// # Panics
    ///
    /// Panics when `total_secs` is zero. A session with no duration is a
    /// programming error, not a state to clamp.
    pub fn new(total_secs: u32) -> Self {
        assert!(total_secs > 0, "countdown duration must be positive");
        Self {
            remaining_secs: total_secs,
            total_secs,
            running: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    /// `remaining / total`, 1.0 at session start and 0.0 when spent.
    pub fn progress(&self) -> f64 {
        f64::from(self.remaining_secs) / f64::from(self.total_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Load a new session duration. The running flag is left alone so an
    /// active timer rolls straight into the next session.
    ///
    /// # Panics
    ///
    /// Panics when `total_secs` is zero.
    pub fn configure(&mut self, total_secs: u32) {
        assert!(total_secs > 0, "countdown duration must be positive");
        self.total_secs = total_secs;
        self.remaining_secs = total_secs;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Back to the top of the current session, paused.
    pub fn reset(&mut self) {
        self.remaining_secs = self.total_secs;
        self.running = false;
    }

    /// Advance by one second.
    ///
    /// Reports [`Tick::Completed`] when the countdown was already spent at
    /// call time, without decrementing further -- repeated ticks at zero
    /// keep reporting completion until `configure` loads the next session.
    ///
    /// # Panics
    ///
    /// Panics when the engine is paused. The host checks `is_running`
    /// before every scheduled tick, so a tick landing here from a stale
    /// schedule is a host bug.
    pub fn tick(&mut self) -> Tick {
        assert!(self.running, "tick() called while the countdown is paused");
        if self.remaining_secs == 0 {
            return Tick::Completed;
        }
        self.remaining_secs -= 1;
        Tick::Counting {
            remaining_secs: self.remaining_secs,
            progress: self.progress(),
        }
    }
}
