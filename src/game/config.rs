//! Run configuration loaded from TOML.
//!
//! ```toml
//! seed = 42          # omit for a random seed per process
//! interest_cap = 3
//! slots = 3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{DEFAULT_INTEREST_CAP, DEFAULT_SLOTS};

/// Largest army size accepted. The home ranks hold fifteen units.
pub const MAX_SLOTS: usize = 15;

/// Tunable parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Run seed. `None` draws a random one when the run is created.
    pub seed: Option<u32>,
    /// Cap on interest earned per victory.
    pub interest_cap: u32,
    /// Maximum army size.
    pub slots: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            interest_cap: DEFAULT_INTEREST_CAP,
            slots: DEFAULT_SLOTS,
        }
    }
}

impl RunConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, has unknown keys, or
    /// asks for zero slots or more than [`MAX_SLOTS`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `slots` is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots == 0 || self.slots > MAX_SLOTS {
            return Err(ConfigError::Invalid(format!(
                "slots must be between 1 and {MAX_SLOTS}, got {}",
                self.slots
            )));
        }
        Ok(())
    }
}
