//! # Focusring Core Library
//!
//! Core state machine for the focusring Pomodoro timer: alternating
//! focus and break countdowns, with a long break after every fourth
//! completed focus session.
//!
//! The library draws nothing and schedules nothing. The host owns the
//! once-per-second tick source and all rendering; the core owns the
//! rules -- which session runs, how much of it is left, and what comes
//! next when it elapses. The host must check `is_running` before each
//! scheduled tick so a pause between scheduling and firing cannot keep
//! the countdown moving.
//!
//! ## Key components
//!
//! - [`SessionController`]: decides what runs next and keeps the
//!   completed-session counts
//! - [`CountdownEngine`]: the per-second countdown itself
//! - [`PomodoroTimer`]: the two wired together behind one host-facing API
//! - [`Config`]: TOML-backed interval configuration

pub mod config;
pub mod error;
pub mod events;
pub mod timer;

pub use config::{Config, SoundConfig, TimerConfig};
pub use error::ConfigError;
pub use events::Event;
pub use timer::{
    CountdownEngine, NextSession, PomodoroTimer, SessionController, SessionCounts, SessionType,
    Tick,
};
