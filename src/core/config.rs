//! Configuration management for the augmentation toolkit
//!
//! Settings come from an optional TOML file, then `FA_*` environment
//! overrides. Validation runs after the last override layer.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up by [`Config::load`]
pub const DEFAULT_CONFIG_FILE: &str = "floorplan-augment.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which augmentation passes the pipeline runs
    pub augment: AugmentConfig,

    /// Triangulation orchestrator settings
    pub triangulation: TriangulationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Metrics configuration
    pub metrics: MetricsConfig,
}

/// Augmentation pass selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Run the biconnectivity augmenter
    pub biconnect: bool,

    /// Run the triangulation orchestrator
    pub triangulate: bool,
}

/// Triangulation orchestrator settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangulationConfig {
    /// Accept `T + V - E == 1` as chordal without running the exact test.
    ///
    /// Only sound for maximal planar candidates; leave off for arbitrary graphs.
    pub euler_shortcut: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

/// Metrics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Print Prometheus metrics after a run
    pub enable_prometheus: bool,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            biconnect: true,
            triangulate: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default file (if present) and environment variables.
    ///
    /// Not validated here: callers layer their own overrides on top and call
    /// [`Config::validate`] once the result is final.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        use std::env;

        if let Ok(level) = env::var("FA_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(format) = env::var("FA_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Ok(flag) = env::var("FA_EULER_SHORTCUT") {
            self.triangulation.euler_shortcut = flag
                .parse()
                .map_err(|e| Error::config(format!("Invalid FA_EULER_SHORTCUT: {}", e)))?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(Error::config(format!("Invalid log level: {}", other))),
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => return Err(Error::config(format!("Invalid log format: {}", other))),
        }

        Ok(())
    }
}
