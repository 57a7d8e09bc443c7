//! Hasher configuration module
//!
//! Handles loading and validating the bcrypt cost from environment variables.

use crate::auth::{DEFAULT_COST, MAX_COST, MIN_COST};
use crate::error::ConfigError;
use serde::Deserialize;

/// Environment variable overriding the bcrypt cost
pub const COST_VAR: &str = "PASSWORD_HASH_COST";

/// Hasher configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HasherConfig {
    pub cost: u32,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl HasherConfig {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cost = match lookup(COST_VAR) {
            Some(raw) => Self::parse_cost(&raw)?,
            None => DEFAULT_COST,
        };

        Ok(Self { cost })
    }

    fn parse_cost(raw: &str) -> Result<u32, ConfigError> {
        let cost: u32 = raw.trim().parse().map_err(|_| {
            ConfigError::InvalidValue(format!("{} must be an integer, got {:?}", COST_VAR, raw))
        })?;

        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(ConfigError::InvalidValue(format!(
                "{} must be between {} and {}, got {}",
                COST_VAR, MIN_COST, MAX_COST, cost
            )));
        }

        Ok(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = HasherConfig::default();
        assert_eq!(config.cost, 12);
    }

    #[test]
    fn test_deserialize_config() {
        let config: HasherConfig = serde_json::from_str(r#"{"cost": 11}"#).unwrap();
        assert_eq!(config.cost, 11);
    }

    #[test]
    fn test_missing_var_uses_default() {
        let config = HasherConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, HasherConfig::default());
    }

    #[test]
    fn test_cost_override() {
        let config = HasherConfig::from_lookup(|key| {
            (key == COST_VAR).then(|| " 10 ".to_string())
        })
        .unwrap();
        assert_eq!(config.cost, 10);
    }

    #[test]
    fn test_non_numeric_cost() {
        let result = HasherConfig::from_lookup(|_| Some("high".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_out_of_range_cost() {
        assert!(HasherConfig::from_lookup(|_| Some("3".to_string())).is_err());
        assert!(HasherConfig::from_lookup(|_| Some("32".to_string())).is_err());
    }
}
