//! TOML-based application configuration.
//!
//! Stores interval lengths, the long-break cadence and the chime toggle.
//! Configuration lives at `~/.config/focusring/config.toml`; set
//! `FOCUSRING_ENV=dev` to use `~/.config/focusring-dev/` instead.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::timer::SessionType;

/// Interval lengths (whole seconds) and the long-break cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_focus_secs")]
    pub focus_secs: u32,
    #[serde(default = "default_short_break_secs")]
    pub short_break_secs: u32,
    #[serde(default = "default_long_break_secs")]
    pub long_break_secs: u32,
    /// Completed focus sessions per long break.
    #[serde(default = "default_cycle_length")]
    pub cycle_length: u32,
}

impl TimerConfig {
    pub fn duration_for(&self, kind: SessionType) -> u32 {
        match kind {
            SessionType::Focus => self.focus_secs,
            SessionType::ShortBreak => self.short_break_secs,
            SessionType::LongBreak => self.long_break_secs,
        }
    }

    /// Reject zero fields before they reach the state machine, where they
    /// would trip its asserts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("timer.focus_secs", self.focus_secs),
            ("timer.short_break_secs", self.short_break_secs),
            ("timer.long_break_secs", self.long_break_secs),
            ("timer.cycle_length", self.cycle_length),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::InvalidDuration { field });
            }
        }
        Ok(())
    }
}

/// Completion chime preference. Playback is entirely the host's concern;
/// the core only carries the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/focusring/config.toml`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub sound: SoundConfig,
}

// Default functions
fn default_focus_secs() -> u32 {
    25 * 60
}
fn default_short_break_secs() -> u32 {
    5 * 60
}
fn default_long_break_secs() -> u32 {
    15 * 60
}
fn default_cycle_length() -> u32 {
    4
}
fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_secs: default_focus_secs(),
            short_break_secs: default_short_break_secs(),
            long_break_secs: default_long_break_secs(),
            cycle_length: default_cycle_length(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Returns `~/.config/focusring[-dev]/`, creating it if needed.
///
/// Set FOCUSRING_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSRING_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusring-dev")
    } else {
        base_dir.join("focusring")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Read a value by dot-separated key, e.g. `timer.focus_secs`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Update a value by dot-separated key. The caller persists with
    /// [`save`](Config::save); keeping the write separate keeps this
    /// testable without touching disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not name a config field, the
    /// value does not parse into the field's type, or the resulting
    /// timer config has a zero field.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(*self)?;

        let mut parts = key.split('.').peekable();
        let mut current = &mut json;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let slot = current
                    .as_object_mut()
                    .and_then(|obj| obj.get_mut(part))
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let new_value = match slot {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| ConfigError::InvalidValue {
                                key: key.to_string(),
                                value: value.to_string(),
                            })?
                            .into(),
                    ),
                    _ => serde_json::Value::String(value.to_string()),
                };
                *slot = new_value;
            } else {
                current = current
                    .as_object_mut()
                    .and_then(|obj| obj.get_mut(part))
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            }
        }

        let updated: Config = serde_json::from_value(json)?;
        updated.timer.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_technique() {
        let config = TimerConfig::default();
        assert_eq!(config.focus_secs, 1500);
        assert_eq!(config.short_break_secs, 300);
        assert_eq!(config.long_break_secs, 900);
        assert_eq!(config.cycle_length, 4);
        assert!(SoundConfig::default().enabled);
    }

    #[test]
    fn duration_for_maps_each_type() {
        let config = TimerConfig::default();
        assert_eq!(config.duration_for(SessionType::Focus), 1500);
        assert_eq!(config.duration_for(SessionType::ShortBreak), 300);
        assert_eq!(config.duration_for(SessionType::LongBreak), 900);
    }

    #[test]
    fn validate_rejects_zero_fields() {
        let config = TimerConfig {
            short_break_secs: 0,
            ..TimerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDuration {
                field: "timer.short_break_secs"
            }
        ));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[timer]\nfocus_secs = 600\n").unwrap();
        assert_eq!(config.timer.focus_secs, 600);
        assert_eq!(config.timer.short_break_secs, 300);
        assert!(config.sound.enabled);
    }

    #[test]
    fn get_reads_nested_keys() {
        let config = Config::default();
        assert_eq!(config.get("timer.focus_secs").as_deref(), Some("1500"));
        assert_eq!(config.get("sound.enabled").as_deref(), Some("true"));
        assert_eq!(config.get("timer.missing"), None);
        assert_eq!(config.get(""), None);
    }

    #[test]
    fn set_parses_numbers_and_bools() {
        let mut config = Config::default();
        config.set("timer.focus_secs", "1200").unwrap();
        assert_eq!(config.timer.focus_secs, 1200);

        config.set("sound.enabled", "false").unwrap();
        assert!(!config.sound.enabled);
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("timer.nope", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            config.set("timer.focus_secs", "soon"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("timer.focus_secs", "0"),
            Err(ConfigError::InvalidDuration { .. })
        ));
        // failed sets leave the config untouched
        assert_eq!(config.timer.focus_secs, 1500);
    }
}
