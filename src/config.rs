use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::implementations::expression::parse_number;
use crate::models::problem::{ MAX_INITIAL_MAGNITUDE, MAX_ROOT_MAGNITUDE };
use crate::models::rational::Rational;

/// Environment variable overriding the generator seed
pub const SEED_ENV_VAR: &str = "MATHLAB_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Ranges the problem generator draws from
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Roots are drawn from `[-root_bound, root_bound]` without zero
    pub root_bound: i64,

    /// Smallest initial condition
    pub initial_min: i64,

    /// Largest initial condition
    pub initial_max: i64,
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // need at least two distinct nonzero roots
        if !(1..=MAX_ROOT_MAGNITUDE).contains(&self.root_bound) {
            return Err(ConfigError::InvalidValue {
                field: "generator.root_bound".to_string(),
                message: format!("must be between 1 and {}, got {}", MAX_ROOT_MAGNITUDE, self.root_bound),
            });
        }
        for (field, value) in [("initial_min", self.initial_min), ("initial_max", self.initial_max)] {
            if value.unsigned_abs() > MAX_INITIAL_MAGNITUDE as u64 {
                return Err(ConfigError::InvalidValue {
                    field: format!("generator.{}", field),
                    message: format!("magnitude must not exceed {}, got {}", MAX_INITIAL_MAGNITUDE, value),
                });
            }
        }
        if self.initial_min > self.initial_max {
            return Err(ConfigError::InvalidValue {
                field: "generator.initial_min".to_string(),
                message: format!(
                    "{} is greater than initial_max {}",
                    self.initial_min,
                    self.initial_max
                ),
            });
        }
        Ok(())
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        GeneratorSettings {
            root_bound: 5,
            initial_min: 1,
            initial_max: 10,
        }
    }
}

/// Configuration for the lab
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LabConfig {
    pub generator: GeneratorSettings,

    /// Absolute tolerance for constant and final-value answers, e.g. "0.01" or "1/100"
    pub tolerance: String,

    /// Fixed seed for reproducible problems
    pub seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        LabConfig {
            generator: GeneratorSettings::default(),
            tolerance: "0.01".to_string(),
            seed: None,
        }
    }
}

impl LabConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: LabConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MATHLAB_SEED` if it is set
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => {
                let seed = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    field: SEED_ENV_VAR.to_string(),
                    message: e.to_string(),
                })?;
                debug!("Seed overridden from environment: {}", seed);
                self.seed = Some(seed);
            }
            Err(_) => {
                debug!("{} not set, keeping configured seed", SEED_ENV_VAR);
            }
        }
        Ok(self)
    }

    /// The tolerance as an exact fraction
    pub fn tolerance(&self) -> Result<Rational, ConfigError> {
        let value = parse_number(&self.tolerance).map_err(|e| ConfigError::InvalidValue {
            field: "tolerance".to_string(),
            message: e.to_string(),
        })?;
        if !value.is_positive() {
            return Err(ConfigError::InvalidValue {
                field: "tolerance".to_string(),
                message: format!("must be positive, got {}", value),
            });
        }
        Ok(value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.tolerance()?;
        Ok(())
    }
}
