use crate::api::config::CadenceConfig;
use crate::core::axes::remap_clamped;

/// Map the delay since the previous accepted keystroke onto the width axis.
///
/// `None` (first keystroke of the session) and a zero interval both give the
/// neutral width, as does any pause longer than `pause_ms`. Everything else is
/// clamped to `[fast_ms, slow_ms]` and mapped linearly onto
/// `[width_min, width_max]`: fast typing condenses, slow typing expands.
pub fn width_from_interval(interval_ms: Option<f64>, config: &CadenceConfig) -> f64 {
    match interval_ms {
        None => config.neutral_width,
        Some(interval) if interval == 0.0 => config.neutral_width,
        Some(interval) if interval > config.pause_ms => config.neutral_width,
        Some(interval) => {
            let interval = interval.clamp(config.fast_ms, config.slow_ms);
            remap_clamped(
                interval,
                config.fast_ms,
                config.slow_ms,
                config.width_min,
                config.width_max,
            )
        }
    }
}

/// Owns the current width value and the last accepted keystroke time.
/// Only accepted insertions write either field.
#[derive(Debug, Clone)]
pub struct CadenceTracker {
    config: CadenceConfig,
    width: f64,
    last_input_ms: Option<f64>,
}

impl CadenceTracker {
    pub fn new(config: CadenceConfig) -> Self {
        let width = config.neutral_width;
        Self {
            config,
            width,
            last_input_ms: None,
        }
    }

    /// Record an accepted keystroke at `now_ms` and return the new width.
    pub fn record(&mut self, now_ms: f64) -> f64 {
        let interval = self.last_input_ms.map(|last| now_ms - last);
        self.last_input_ms = Some(now_ms);
        self.width = width_from_interval(interval, &self.config);
        self.width
    }

    /// Current width value.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Timestamp of the last accepted keystroke, if any.
    pub fn last_input_ms(&self) -> Option<f64> {
        self.last_input_ms
    }

    pub fn config(&self) -> &CadenceConfig {
        &self.config
    }

    /// Swap in a new config. The current width is kept but re-clamped.
    pub fn set_config(&mut self, config: CadenceConfig) {
        self.width = self.width.clamp(config.width_min, config.width_max);
        self.config = config;
    }
}

impl Default for CadenceTracker {
    fn default() -> Self {
        Self::new(CadenceConfig::default())
    }
}
