//! Driver configuration management
//!
//! Settings come from three places, later ones winning:
//! 1. Built-in defaults
//! 2. An optional TOML file (`--config`, default `ivol.toml`)
//! 3. `IVOL_*` environment variables
//!
//! ```toml
//! days_per_year = 365.0
//! significant_digits = 10
//! parallel = true
//!
//! [solver]
//! tolerance = 1e-8
//! newton_max_iterations = 100
//! bisection_max_iterations = 100
//! ```

use std::path::Path;

use pricer_optimiser::implied_vol::ImpliedVolConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Effective driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Day-count basis turning `Days To Expiry` into years
    pub days_per_year: f64,
    /// Significant digits written for every number in the output file
    pub significant_digits: usize,
    /// Solve batch records on the rayon pool
    pub parallel: bool,
    /// Implied volatility solver settings
    pub solver: ImpliedVolConfig<f64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            days_per_year: 365.0,
            significant_digits: 10,
            parallel: true,
            solver: ImpliedVolConfig::default(),
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text, without environment overrides.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Load the file if it exists, otherwise start from defaults, then apply
    /// environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            debug!("Loading configuration from {}", path.display());
            Self::from_file(path)?
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `IVOL_*` variables supplied by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(days) = lookup("IVOL_DAYS_PER_YEAR") {
            self.days_per_year = days
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("IVOL_DAYS_PER_YEAR = '{}'", days)))?;
        }

        if let Some(digits) = lookup("IVOL_SIGNIFICANT_DIGITS") {
            self.significant_digits = digits.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("IVOL_SIGNIFICANT_DIGITS = '{}'", digits))
            })?;
        }

        if let Some(parallel) = lookup("IVOL_PARALLEL") {
            self.parallel = parallel
                .trim()
                .to_lowercase()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("IVOL_PARALLEL = '{}'", parallel)))?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.days_per_year > 0.0 && self.days_per_year.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            )));
        }

        if !(1..=17).contains(&self.significant_digits) {
            return Err(ConfigError::Invalid(format!(
                "significant_digits must be between 1 and 17, got {}",
                self.significant_digits
            )));
        }

        self.solver
            .check()
            .map_err(|reason| ConfigError::Invalid(format!("solver: {}", reason)))
    }

    /// Convert a day count into a year fraction.
    pub fn years(&self, days: f64) -> f64 {
        days / self.days_per_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.days_per_year, 365.0);
        assert_eq!(config.significant_digits, 10);
        assert!(config.parallel);
        assert_eq!(config.solver, ImpliedVolConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml(
            r#"
            days_per_year = 360.0

            [solver]
            newton_max_iterations = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.days_per_year, 360.0);
        assert_eq!(config.significant_digits, 10);
        assert_eq!(config.solver.newton_max_iterations, 50);
        assert_eq!(config.solver.tolerance, 1e-8);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            CliConfig::from_toml("days_per_year = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("significant_digits = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("[solver]\nbracket_low = 6.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("days_per_year = \"many\""),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(config, Err(ConfigError::FileError(_))));

        let mut expected = CliConfig::default();
        expected
            .apply_overrides(|key| std::env::var(key).ok())
            .unwrap();
        assert_eq!(CliConfig::load(&dir.path().join("absent.toml")).unwrap(), expected);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ivol.toml");
        std::fs::write(&path, "significant_digits = 6\nparallel = false\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        assert_eq!(config.significant_digits, 6);
        assert!(!config.parallel);
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = [
            ("IVOL_DAYS_PER_YEAR", "252"),
            ("IVOL_SIGNIFICANT_DIGITS", " 8 "),
            ("IVOL_PARALLEL", "FALSE"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.days_per_year, 252.0);
        assert_eq!(config.significant_digits, 8);
        assert!(!config.parallel);
    }

    #[test]
    fn test_bad_environment_value() {
        let mut config = CliConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "IVOL_DAYS_PER_YEAR").then(|| "a year".to_string())
        });
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_unrecognised_parallel_flag_rejected() {
        let mut config = CliConfig::default();
        let result = config.apply_overrides(|key| (key == "IVOL_PARALLEL").then(|| "yes".to_string()));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
        assert!(config.parallel);
    }

    #[test]
    fn test_years() {
        let config = CliConfig::default();
        assert_eq!(config.years(365.0), 1.0);
        assert_eq!(config.years(0.0), 0.0);
    }
}
