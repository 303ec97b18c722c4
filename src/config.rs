//! Configuration Management
//!
//! Loads buffer settings from TOML files. Lookup order:
//! - explicit path (`--config`)
//! - `circular-buffer.toml` in the working directory
//! - `~/.config/circular-buffer/config.toml`
//! - built-in defaults
//!
//! Environment variables override whatever the file provided.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::RingBufferError;

/// Overrides `buffer.capacity`
pub const CAPACITY_ENV: &str = "CIRCULAR_BUFFER_CAPACITY";

const LOCAL_CONFIG: &str = "circular-buffer.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub buffer: BufferConfig,
}

/// Settings for buffers created by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Number of slots; must be at least 1
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    5
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .map_err(|e| RingBufferError::Config(format!("cannot read {}: {}", p, e)))
                    .with_context(|| format!("Failed to read config from {}", p))?;
                Self::from_toml(&content).context("Failed to parse config")?
            }
            None => {
                let mut default_paths = vec![std::path::PathBuf::from(LOCAL_CONFIG)];
                if let Some(home) = dirs::home_dir() {
                    default_paths.push(home.join(".config/circular-buffer/config.toml"));
                }

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        debug!(path = %p.display(), "Loading config");
                        loaded = Some(Self::from_toml(&content).context("Failed to parse config")?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(content: &str) -> crate::errors::Result<Self> {
        toml::from_str(content).map_err(|e| RingBufferError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::errors::Result<String> {
        toml::to_string(self).map_err(|e| RingBufferError::Config(e.to_string()))
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`Config::load`]). Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.buffer.capacity = n,
                Err(_) => warn!(value = %raw, "Ignoring unparsable {}", CAPACITY_ENV),
            }
        }
    }

    pub fn validate(&self) -> crate::errors::Result<()> {
        if self.buffer.capacity == 0 {
            return Err(RingBufferError::Config(
                "buffer.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
