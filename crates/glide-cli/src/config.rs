//! TOML render settings.
//!
//! ```toml
//! rate = 2.5
//! depth = 0.8
//! block_size = 256
//! bit_depth = 24
//! ```
//!
//! Every key is optional. Values given on the command line win over the file.

use std::path::{Path, PathBuf};

use glide_core::GlideParams;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value that no clamp can repair
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Config key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

/// Settings for one render, from a file, the command line, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlideConfig {
    /// Pan rate in Hz.
    pub rate: Option<f32>,
    /// Pan depth.
    pub depth: Option<f32>,
    /// Frames per processing block.
    pub block_size: Option<usize>,
    /// Output bit depth.
    pub bit_depth: Option<u16>,
}

impl GlideConfig {
    /// Frames per block when neither the file nor the command line sets one.
    pub const DEFAULT_BLOCK_SIZE: usize = 512;
    /// Output bit depth when neither the file nor the command line sets one.
    pub const DEFAULT_BIT_DEPTH: u16 = 32;

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Overlay `other` on `self`: every value `other` sets wins.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            rate: other.rate.or(self.rate),
            depth: other.depth.or(self.depth),
            block_size: other.block_size.or(self.block_size),
            bit_depth: other.bit_depth.or(self.bit_depth),
        }
    }

    /// Reject values the renderer cannot use.
    ///
    /// Rate and depth are not checked here; the parameter store clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "block_size",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(bits) = self.bit_depth
            && !matches!(bits, 16 | 24 | 32)
        {
            return Err(ConfigError::InvalidValue {
                key: "bit_depth",
                reason: format!("{bits} is not one of 16, 24, 32"),
            });
        }
        Ok(())
    }

    /// Block size, or the default.
    pub fn block_size(&self) -> usize {
        self.block_size.unwrap_or(Self::DEFAULT_BLOCK_SIZE)
    }

    /// Bit depth, or the default.
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth.unwrap_or(Self::DEFAULT_BIT_DEPTH)
    }

    /// Write rate and depth into `params`. Unset values keep their defaults.
    ///
    /// Values outside the parameter range are clamped and logged.
    pub fn apply(&self, params: &GlideParams) {
        if let Some(rate) = self.rate {
            let stored = params.set_rate(rate);
            if stored != rate {
                tracing::warn!(requested = rate, stored, "rate clamped");
            }
        }
        if let Some(depth) = self.depth {
            let stored = params.set_depth(depth);
            if stored != depth {
                tracing::warn!(requested = depth, stored, "depth clamped");
            }
        }
    }
}
