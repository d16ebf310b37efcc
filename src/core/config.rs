//! Table configuration.
//!
//! A table is configured once at startup:
//! - `seed`: shuffle seed; `None` draws one from OS entropy
//! - `command_prefix`: the character(s) that mark a chat line as a command
//!
//! Configs load from JSON and can be adjusted with `with_*` builders, so a
//! driver can lay command-line flags over a config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Path of the built-in draw pile.
pub const DRAW_PILE: &str = "draw";

/// Path of the built-in discard pile.
pub const DISCARD_PILE: &str = "discard";

/// Namespace holding one pile per player.
pub const HANDS_NAMESPACE: &str = "hands";

/// Prefix used by the chat bot this table was built for.
pub const DEFAULT_PREFIX: &str = ".";

/// Configuration for a `Table`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Shuffle seed. `None` for entropy.
    pub seed: Option<u64>,

    /// Command prefix, e.g. `.` for `.draw`.
    pub command_prefix: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            command_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl TableConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Read and parse a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the command prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }

    /// Check the configuration is usable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.command_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(self)
    }
}
