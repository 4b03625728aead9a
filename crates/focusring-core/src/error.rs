//! Error types for focusring-core.
//!
//! The state machine itself has no recoverable failures; everything here
//! belongs to the configuration boundary. Invariant violations inside the
//! timer (zero-duration sessions, ticking a paused countdown) panic
//! instead -- they are programming errors, not conditions to handle.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO errors while reading or writing the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file exists but is not valid TOML
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config cannot be serialized to TOML
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Intermediate JSON representation failed (dot-path get/set)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dot-path key does not name a config field
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed into the field's type
    #[error("cannot parse '{value}' for key '{key}'")]
    InvalidValue { key: String, value: String },

    /// Interval lengths and the cycle length must be positive
    #[error("{field} must be positive")]
    InvalidDuration { field: &'static str },
}
