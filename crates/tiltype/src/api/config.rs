use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tuning for the tilt → italic mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// Tilt angle mapped to `italic_min` (degrees, default: -90).
    pub min_angle: f64,
    /// Tilt angle mapped to `italic_max` (degrees, default: 90).
    pub max_angle: f64,
    /// Lower bound of the italic axis (default: 0).
    pub italic_min: f64,
    /// Upper bound of the italic axis (default: 100).
    pub italic_max: f64,
    /// Italic value before the first sensor reading (default: 50).
    pub initial_italic: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            min_angle: -90.0,
            max_angle: 90.0,
            italic_min: 0.0,
            italic_max: 100.0,
            initial_italic: 50.0,
        }
    }
}

/// Tuning for the keystroke interval → width mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    /// Intervals at or below this map to `width_min` (ms, default: 100).
    pub fast_ms: f64,
    /// Intervals at or above this map to `width_max` (ms, default: 800).
    pub slow_ms: f64,
    /// Intervals above this count as a new word and reset to `neutral_width` (ms, default: 2000).
    pub pause_ms: f64,
    /// Narrowest width (default: 10).
    pub width_min: f64,
    /// Widest width (default: 190).
    pub width_max: f64,
    /// Width for the first character and after a pause (default: 100).
    pub neutral_width: f64,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            fast_ms: 100.0,
            slow_ms: 800.0,
            pause_ms: 2000.0,
            width_min: 10.0,
            width_max: 190.0,
            neutral_width: 100.0,
        }
    }
}

/// Configuration for a typing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    /// Fixed weight axis value applied to every glyph (default: 90).
    pub weight: f64,
    pub tilt: TiltConfig,
    pub cadence: CadenceConfig,
}

impl Default for TypeConfig {
    fn default() -> Self {
        Self {
            weight: 90.0,
            tilt: TiltConfig::default(),
            cadence: CadenceConfig::default(),
        }
    }
}

impl TypeConfig {
    /// Parse and validate a config from a JSON string.
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every range is well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tilt = &self.tilt;
        let cadence = &self.cadence;

        if !self.weight.is_finite() {
            return Err(ConfigError::Invalid("weight must be finite"));
        }
        if !(tilt.max_angle - tilt.min_angle).is_finite() {
            return Err(ConfigError::Invalid("tilt angle range must be finite"));
        }
        if !(tilt.italic_max - tilt.italic_min).is_finite() {
            return Err(ConfigError::Invalid("tilt italic range must be finite"));
        }
        if !(cadence.slow_ms - cadence.fast_ms).is_finite() {
            return Err(ConfigError::Invalid("cadence interval range must be finite"));
        }
        if !(cadence.width_max - cadence.width_min).is_finite() {
            return Err(ConfigError::Invalid("cadence width range must be finite"));
        }
        if !(tilt.min_angle < tilt.max_angle) {
            return Err(ConfigError::Invalid("tilt.min_angle must be below tilt.max_angle"));
        }
        if !(tilt.italic_min <= tilt.italic_max) {
            return Err(ConfigError::Invalid("tilt.italic_min must not exceed tilt.italic_max"));
        }
        if !(tilt.italic_min..=tilt.italic_max).contains(&tilt.initial_italic) {
            return Err(ConfigError::Invalid("tilt.initial_italic must lie in the italic range"));
        }
        if !(cadence.fast_ms < cadence.slow_ms) {
            return Err(ConfigError::Invalid("cadence.fast_ms must be below cadence.slow_ms"));
        }
        if !(cadence.slow_ms <= cadence.pause_ms) {
            return Err(ConfigError::Invalid("cadence.pause_ms must not be below cadence.slow_ms"));
        }
        if !(cadence.width_min <= cadence.width_max) {
            return Err(ConfigError::Invalid("cadence.width_min must not exceed cadence.width_max"));
        }
        if !(cadence.width_min..=cadence.width_max).contains(&cadence.neutral_width) {
            return Err(ConfigError::Invalid("cadence.neutral_width must lie in the width range"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TypeConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = TypeConfig::from_json(r#"{ "weight": 120, "cadence": { "pause_ms": 3000 } }"#)
            .unwrap();
        assert_eq!(config.weight, 120.0);
        assert_eq!(config.cadence.pause_ms, 3000.0);
        assert_eq!(config.cadence.fast_ms, 100.0);
        assert_eq!(config.tilt, TiltConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(TypeConfig::from_json("{}").unwrap(), TypeConfig::default());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = TypeConfig::from_json("{ weight: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn inverted_cadence_is_rejected() {
        let err = TypeConfig::from_json(r#"{ "cadence": { "fast_ms": 900 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn overflowing_ranges_are_rejected() {
        let err = TypeConfig::from_json(
            r#"{ "tilt": { "italic_min": -1e308, "italic_max": 1e308, "initial_italic": 0 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = TypeConfig::default();
        config.cadence.width_min = -1e308;
        config.cadence.width_max = 1e308;
        assert!(config.validate().is_err());

        let mut config = TypeConfig::default();
        config.tilt.min_angle = f64::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn neutral_width_outside_range_is_rejected() {
        let mut config = TypeConfig::default();
        config.cadence.neutral_width = 500.0;
        assert!(config.validate().is_err());
    }
}
