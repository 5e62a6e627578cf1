//! Configuration system for TourForge.
//!
//! Load engine configuration from TOML or YAML to control the k-opt
//! neighbourhood and reproducibility without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use tourforge_config::{EngineConfig, EnvironmentMode};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//!
//!     [k_opt]
//!     min_k = 2
//!     max_k = 4
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
//! assert_eq!(config.k_opt.max_k, 4);
//! assert_eq!(config.k_opt.max_cycles_patched(), 4);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use tourforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("tourforge.toml").unwrap_or_default();
//! assert_eq!(config.k_opt.min_k, 2);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// K-opt move selection.
    #[serde(default)]
    pub k_opt: KOptSelectorConfig,
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the k-opt selector configuration.
    pub fn with_k_opt(mut self, k_opt: KOptSelectorConfig) -> Self {
        self.k_opt = k_opt;
        self
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.k_opt.validate()
    }

    /// Seed to use for random number generation, if any.
    ///
    /// Reproducible mode always yields a seed, falling back to 0.
    pub fn effective_seed(&self) -> Option<u64> {
        match self.environment_mode {
            EnvironmentMode::Reproducible => Some(self.random_seed.unwrap_or(0)),
            EnvironmentMode::NonReproducible => self.random_seed,
        }
    }
}

/// Environment mode affecting engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Non-reproducible mode, seeded from the operating system.
    #[default]
    NonReproducible,

    /// Reproducible mode with deterministic behavior.
    Reproducible,
}

/// K-opt move selector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct KOptSelectorConfig {
    /// Smallest number of edges exchanged by a move.
    #[serde(default = "default_min_k")]
    pub min_k: usize,

    /// Largest number of edges exchanged by a move.
    #[serde(default = "default_max_k")]
    pub max_k: usize,

    /// Largest number of cycles an infeasible pick may have and still be
    /// patched into a single tour. Defaults to `max_k`.
    #[serde(default)]
    pub max_cycles_patched: Option<usize>,

    /// Number of moves generated per step.
    #[serde(default = "default_moves_per_step")]
    pub moves_per_step: usize,
}

fn default_min_k() -> usize {
    2
}

fn default_max_k() -> usize {
    2
}

fn default_moves_per_step() -> usize {
    10
}

impl Default for KOptSelectorConfig {
    fn default() -> Self {
        Self {
            min_k: default_min_k(),
            max_k: default_max_k(),
            max_cycles_patched: None,
            moves_per_step: default_moves_per_step(),
        }
    }
}

impl KOptSelectorConfig {
    /// Creates a configuration for moves exchanging `min_k..=max_k` edges.
    pub fn new(min_k: usize, max_k: usize) -> Self {
        Self {
            min_k,
            max_k,
            ..Self::default()
        }
    }

    /// Sets the largest patchable cycle count.
    pub fn with_max_cycles_patched(mut self, cycles: usize) -> Self {
        self.max_cycles_patched = Some(cycles);
        self
    }

    /// Sets the number of moves generated per step.
    pub fn with_moves_per_step(mut self, moves: usize) -> Self {
        self.moves_per_step = moves;
        self
    }

    /// Largest patchable cycle count, resolving the default.
    pub fn max_cycles_patched(&self) -> usize {
        self.max_cycles_patched.unwrap_or(self.max_k)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_k < 2 {
            return Err(ConfigError::Invalid(format!(
                "k_opt.min_k must be at least 2, got {}",
                self.min_k
            )));
        }
        if self.max_k < self.min_k {
            return Err(ConfigError::Invalid(format!(
                "k_opt.max_k ({}) must not be below k_opt.min_k ({})",
                self.max_k, self.min_k
            )));
        }
        if self.moves_per_step == 0 {
            return Err(ConfigError::Invalid(
                "k_opt.moves_per_step must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
