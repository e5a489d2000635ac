use crate::api::config::TiltConfig;
use crate::core::axes::remap_clamped;

/// Map a left-right tilt angle onto the italic axis.
///
/// `italic = clamp(((gamma + 90) / 180) * 100, 0, 100)` with the default config.
pub fn italic_from_gamma(gamma: f64, config: &TiltConfig) -> f64 {
    remap_clamped(
        gamma,
        config.min_angle,
        config.max_angle,
        config.italic_min,
        config.italic_max,
    )
}

/// Owns the current italic value. Only orientation readings write it.
#[derive(Debug, Clone)]
pub struct TiltTracker {
    config: TiltConfig,
    italic: f64,
}

impl TiltTracker {
    pub fn new(config: TiltConfig) -> Self {
        let italic = config.initial_italic;
        Self { config, italic }
    }

    /// Feed one orientation reading.
    ///
    /// Returns the new italic value, or `None` when the reading carried no
    /// usable angle and the state was left untouched.
    pub fn observe(&mut self, gamma: Option<f64>) -> Option<f64> {
        let gamma = gamma.filter(|g| !g.is_nan())?;
        self.italic = italic_from_gamma(gamma, &self.config);
        Some(self.italic)
    }

    /// Current italic value.
    pub fn italic(&self) -> f64 {
        self.italic
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Swap in a new config. The current italic value is kept but re-clamped.
    pub fn set_config(&mut self, config: TiltConfig) {
        self.italic = self.italic.clamp(config.italic_min, config.italic_max);
        self.config = config;
    }
}

impl Default for TiltTracker {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_sensor_range() {
        let config = TiltConfig::default();
        for step in 0..=36 {
            let gamma = -90.0 + step as f64 * 5.0;
            let italic = italic_from_gamma(gamma, &config);
            let expected = ((gamma + 90.0) / 180.0) * 100.0;
            assert!((italic - expected).abs() < 1e-9, "gamma {gamma}: {italic} != {expected}");
            assert!((0.0..=100.0).contains(&italic));
        }
    }

    #[test]
    fn clamps_outside_sensor_range() {
        let config = TiltConfig::default();
        assert_eq!(italic_from_gamma(-135.0, &config), 0.0);
        assert_eq!(italic_from_gamma(270.0, &config), 100.0);
    }

    #[test]
    fn starts_centred() {
        assert_eq!(TiltTracker::default().italic(), 50.0);
    }

    #[test]
    fn null_reading_is_ignored() {
        let mut tilt = TiltTracker::default();
        tilt.observe(Some(-45.0));
        assert_eq!(tilt.italic(), 25.0);

        assert_eq!(tilt.observe(None), None);
        assert_eq!(tilt.italic(), 25.0);
        assert_eq!(tilt.observe(Some(f64::NAN)), None);
        assert_eq!(tilt.italic(), 25.0);
    }

    #[test]
    fn set_config_reclamps_current_value() {
        let mut tilt = TiltTracker::default();
        tilt.observe(Some(90.0));
        tilt.set_config(TiltConfig {
            italic_max: 60.0,
            initial_italic: 30.0,
            ..TiltConfig::default()
        });
        assert_eq!(tilt.italic(), 60.0);
        assert_eq!(tilt.config().italic_max, 60.0);
    }
}
