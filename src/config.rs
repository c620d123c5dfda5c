//! Interaction settings.
//!
//! Settings are plain serde structs, loadable from a TOML file. Every field
//! has a default so a partial file only overrides what it names.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::Scancode;

/// Errors raised while loading an [`InteractionConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("stick_magnitude must be between 1 and 127, got {0}")]
    StickMagnitude(i8),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Keys that open the chat box when it exists and is not focused.
    pub chat_keys: Vec<Scancode>,
    /// Stick deflection written while an arrow key is held, `1..=127`.
    pub stick_magnitude: i8,
    /// Delay before a held direction starts repeating.
    pub initial_repeat_delay_ms: u64,
    /// Interval between repeats once repeating.
    pub repeat_interval_ms: u64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            chat_keys: vec![Scancode::ENTER],
            stick_magnitude: 64,
            initial_repeat_delay_ms: 250,
            repeat_interval_ms: 100,
        }
    }
}

impl InteractionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the merger cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stick_magnitude < 1 {
            return Err(ConfigError::StickMagnitude(self.stick_magnitude));
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Ignoring interaction config {}: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn chat_keys(mut self, keys: impl IntoIterator<Item = Scancode>) -> Self {
        self.chat_keys = keys.into_iter().collect();
        self
    }

    /// Clamped to `1..=127`.
    pub fn stick_magnitude(mut self, magnitude: i8) -> Self {
        self.stick_magnitude = magnitude.clamp(1, i8::MAX);
        self
    }

    pub fn repeat_timing(mut self, initial_delay_ms: u64, interval_ms: u64) -> Self {
        self.initial_repeat_delay_ms = initial_delay_ms;
        self.repeat_interval_ms = interval_ms;
        self
    }

    pub fn is_chat_key(&self, code: Scancode) -> bool {
        self.chat_keys.contains(&code)
    }

    pub fn initial_repeat_delay(&self) -> Duration {
        Duration::from_millis(self.initial_repeat_delay_ms)
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }
}
