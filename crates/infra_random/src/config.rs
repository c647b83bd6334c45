//! Randomizer configuration.
//!
//! The run seed is the only input that determines the sequence of draws.
//! [`RandomizeConfig`] loads it, together with the number of worker
//! randomizers to fork, from layered sources:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. Environment variables prefixed with `RANDOMIZE_` (e.g. `RANDOMIZE_SEED=7`)

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::rng::Randomizer;

/// Prefix of environment variables read by [`RandomizeConfig::load`].
pub const ENV_PREFIX: &str = "RANDOMIZE";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration load error: {0}")]
    Load(String),

    #[error("Invalid worker count: {0}. Must be at least 1")]
    InvalidWorkers(usize),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

/// Randomizer configuration.
///
/// # Examples
///
/// ```rust
/// use infra_random::config::RandomizeConfig;
///
/// let config = RandomizeConfig::default().with_seed(7);
/// let mut rng = config.build_randomizer();
/// assert_eq!(rng.seed(), 7);
/// assert_eq!(rng.get_random_int(0, 9).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RandomizeConfig {
    /// Seed applied at construction; `None` keeps the default state.
    pub seed: Option<i32>,
    /// Number of worker randomizers to fork from the master.
    pub workers: usize,
}

impl Default for RandomizeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            workers: 1,
        }
    }
}

impl RandomizeConfig {
    /// Loads configuration from defaults, an optional TOML file and the
    /// environment, in increasing order of precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file cannot be read or a value
    /// cannot be parsed, and [`ConfigError::InvalidWorkers`] if the merged
    /// configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let config: RandomizeConfig = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        tracing::debug!(
            seed = ?config.seed,
            workers = config.workers,
            "randomizer configuration loaded"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), without the environment layer.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RandomizeConfig = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with `seed` set.
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkers`] if `workers` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers(self.workers));
        }
        Ok(())
    }

    /// Builds a randomizer seeded according to this configuration.
    pub fn build_randomizer(&self) -> Randomizer {
        match self.seed {
            Some(seed) => Randomizer::from_seed(seed),
            None => Randomizer::new(),
        }
    }
}
