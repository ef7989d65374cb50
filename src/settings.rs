//! Field configuration
//!
//! Compiled-in defaults, optionally overridden by a JSON file on native.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How a click resolves against overlapping circles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HitPolicy {
    /// Remove at most one circle per click, misses are free
    SingleHit,
    /// Remove every circle under the click, a miss costs a point
    #[default]
    MultiHit,
}

impl HitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitPolicy::SingleHit => "single",
            HitPolicy::MultiHit => "multi",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" | "single-hit" => Some(HitPolicy::SingleHit),
            "multi" | "multi-hit" => Some(HitPolicy::MultiHit),
            _ => None,
        }
    }
}

/// Errors produced while loading or validating a configuration
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("radius bounds must satisfy 0 < min ({min}) <= max ({max})")]
    RadiusBounds { min: f32, max: f32 },

    #[error("creation interval bounds must satisfy 0 < min ({min}) <= max ({max})")]
    IntervalBounds { min: f32, max: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("initial window {width}x{height} cannot fit a circle of radius {max_radius}")]
    WindowTooSmall {
        width: f32,
        height: f32,
        max_radius: f32,
    },
}

/// Tunable parameters of a circle field and its host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    // === Spawning ===
    pub min_radius: f32,
    pub max_radius: f32,
    /// Milliseconds, before score scaling
    pub min_creation_interval_ms: f32,
    pub max_creation_interval_ms: f32,
    /// Extra population allowed per point of score
    pub circle_coeff: u32,

    // === Decay ===
    /// Radius units per second
    pub decrement: f32,

    // === Scoring ===
    pub hit_policy: HitPolicy,
    pub label_lifetime_ms: f32,

    // === Host ===
    pub initial_width: f32,
    pub initial_height: f32,
    pub tick_interval_ms: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            min_creation_interval_ms: MIN_CREATION_INTERVAL_MS,
            max_creation_interval_ms: MAX_CREATION_INTERVAL_MS,
            circle_coeff: CIRCLE_COEFF,

            decrement: DECREMENT,

            hit_policy: HitPolicy::MultiHit,
            label_lifetime_ms: LABEL_LIFETIME_MS,

            initial_width: INITIAL_WIDTH,
            initial_height: INITIAL_HEIGHT,
            tick_interval_ms: TICK_MS,
        }
    }
}

impl FieldConfig {
    /// Default config with a different hit policy
    pub fn with_policy(policy: HitPolicy) -> Self {
        Self {
            hit_policy: policy,
            ..Self::default()
        }
    }

    /// Check every bound the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("decrement", self.decrement),
            ("tick_interval_ms", self.tick_interval_ms),
            ("label_lifetime_ms", self.label_lifetime_ms),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let (min, max) = (self.min_radius, self.max_radius);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::RadiusBounds { min, max });
        }

        let (min, max) = (self.min_creation_interval_ms, self.max_creation_interval_ms);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::IntervalBounds { min, max });
        }

        let span = 2.0 * self.max_radius;
        if !(self.initial_width >= span && self.initial_height >= span) {
            return Err(ConfigError::WindowTooSmall {
                width: self.initial_width,
                height: self.initial_height,
                max_radius: self.max_radius,
            });
        }

        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded field config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default field config");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_radius, 20.0);
        assert_eq!(config.max_radius, 80.0);
        assert_eq!(config.circle_coeff, 1);
        assert_eq!(config.hit_policy, HitPolicy::MultiHit);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = FieldConfig::from_json(r#"{ "decrement": 12.5, "hit_policy": "SingleHit" }"#)
            .expect("valid config");
        assert_eq!(config.decrement, 12.5);
        assert_eq!(config.hit_policy, HitPolicy::SingleHit);
        assert_eq!(config.max_radius, MAX_RADIUS);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = FieldConfig::with_policy(HitPolicy::SingleHit);
        let json = config.to_json().expect("serializable");
        assert_eq!(FieldConfig::from_json(&json).expect("parses"), config);
    }

    #[test]
    fn test_malformed_json() {
        let err = FieldConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_inverted_radius_rejected() {
        let err = FieldConfig::from_json(r#"{ "min_radius": 90.0, "max_radius": 80.0 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::RadiusBounds { .. }));
    }

    #[test]
    fn test_inverted_interval_rejected() {
        let config = FieldConfig {
            min_creation_interval_ms: 3000.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IntervalBounds { .. })
        ));
    }

    #[test]
    fn test_non_positive_decrement_rejected() {
        let config = FieldConfig {
            decrement: 0.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "decrement", .. })
        ));
    }

    #[test]
    fn test_small_window_rejected() {
        let config = FieldConfig {
            initial_width: 150.0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowTooSmall { .. })
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/circle-whack/config.json");
        assert!(matches!(
            FieldConfig::load_from(path),
            Err(ConfigError::Io(_))
        ));
        assert_eq!(FieldConfig::load_or_default(Some(path)), FieldConfig::default());
    }

    #[test]
    fn test_hit_policy_names() {
        assert_eq!(HitPolicy::from_str("Single"), Some(HitPolicy::SingleHit));
        assert_eq!(HitPolicy::from_str("multi-hit"), Some(HitPolicy::MultiHit));
        assert_eq!(HitPolicy::from_str("both"), None);
        assert_eq!(HitPolicy::MultiHit.as_str(), "multi");
    }
}
