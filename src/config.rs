//! Mapper configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MapperError, Result};
use crate::mapper::FixedPointMapper;

/// Environment variable holding the storage width
pub const ENV_WIDTH: &str = "NUMBER_MAPPER_WIDTH";
/// Environment variable holding the divisor
pub const ENV_DIVISOR: &str = "NUMBER_MAPPER_DIVISOR";
/// Environment variable holding the warning window in milliseconds
pub const ENV_WARN_INTERVAL_MS: &str = "NUMBER_MAPPER_WARN_INTERVAL_MS";

/// Settings for building a [`FixedPointMapper`].
///
/// Missing fields take their defaults, so `{}` is a valid JSON config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Storage width in bits (1-64)
    pub width: u32,
    /// Fixed-point scale factor
    pub divisor: u64,
    /// Minimum time between two precision warnings
    pub warn_interval_ms: u64,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            width: 64,
            divisor: 1 << 16,
            warn_interval_ms: 500,
        }
    }
}

impl MapperConfig {
    /// Parse a JSON config.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Create config from environment variables, falling back to defaults
    /// for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(width) = lookup(ENV_WIDTH) {
            config.width = parse_var(ENV_WIDTH, &width)?;
        }

        if let Some(divisor) = lookup(ENV_DIVISOR) {
            config.divisor = parse_var(ENV_DIVISOR, &divisor)?;
        }

        if let Some(interval) = lookup(ENV_WARN_INTERVAL_MS) {
            config.warn_interval_ms = parse_var(ENV_WARN_INTERVAL_MS, &interval)?;
        }

        Ok(config)
    }

    /// Window between two precision warnings
    pub fn warn_interval(&self) -> Duration {
        Duration::from_millis(self.warn_interval_ms)
    }

    /// Validate and build the mapper.
    pub fn build(&self) -> Result<FixedPointMapper> {
        FixedPointMapper::with_warn_interval(self.width, self.divisor, self.warn_interval())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MapperError::InvalidConfig(format!("{}={:?} is not a valid number", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_builds() {
        let mapper = MapperConfig::default().build().unwrap();
        assert_eq!(mapper.width(), 64);
        assert_eq!(mapper.divisor(), 65536);
    }

    #[test]
    fn test_from_json_partial() {
        let config = MapperConfig::from_json(r#"{"width": 8, "divisor": 100}"#).unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.divisor, 100);
        assert_eq!(config.warn_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            MapperConfig::from_json(r#"{"width": "wide"}"#),
            Err(MapperError::InvalidConfig(_))
        ));
        assert!(matches!(
            MapperConfig::from_json(r#"{"scale": 3}"#),
            Err(MapperError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_build_validates() {
        let config = MapperConfig {
            width: 8,
            divisor: 300,
            warn_interval_ms: 0,
        };
        assert!(matches!(
            config.build(),
            Err(MapperError::DivisorTooLarge { divisor: 300, .. })
        ));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = MapperConfig::from_lookup(lookup_from(&[
            (ENV_WIDTH, "16"),
            (ENV_DIVISOR, " 1000 "),
        ]))
        .unwrap();
        assert_eq!(config.width, 16);
        assert_eq!(config.divisor, 1000);
        assert_eq!(config.warn_interval_ms, 500);
    }

    #[test]
    fn test_from_lookup_reports_bad_value() {
        let err = MapperConfig::from_lookup(lookup_from(&[(ENV_WARN_INTERVAL_MS, "soon")]))
            .unwrap_err();
        assert!(format!("{}", err).contains(ENV_WARN_INTERVAL_MS));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = MapperConfig {
            width: 32,
            divisor: 1 << 12,
            warn_interval_ms: 250,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MapperConfig::from_json(&json).unwrap(), config);
    }
}
