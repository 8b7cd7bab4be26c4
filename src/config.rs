// =============================================================================
// Analysis Configuration — canonical indicator parameters and thresholds
// =============================================================================
//
// Every tunable parameter of the engine lives here. The defaults are the
// canonical values used by `generate_trend_analysis`. All fields carry
// `#[serde(default)]` so that loading a partial config never fails; callers
// own persistence, this crate only validates.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_ma_short_window() -> usize {
    7
}

fn default_ma_mid_window() -> usize {
    30
}

fn default_ma_long_window() -> usize {
    90
}

fn default_rsi_period() -> usize {
    14
}

fn default_bollinger_window() -> usize {
    20
}

fn default_bollinger_multiplier() -> f64 {
    2.0
}

fn default_macd_fast_period() -> usize {
    12
}

fn default_macd_slow_period() -> usize {
    26
}

fn default_macd_signal_period() -> usize {
    9
}

fn default_volatility_window() -> usize {
    30
}

fn default_trend_threshold() -> f64 {
    0.001
}

// =============================================================================
// AnalysisConfig
// =============================================================================

/// Indicator parameters and classifier thresholds for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Short moving-average window (trend classifier fast leg).
    #[serde(default = "default_ma_short_window")]
    pub ma_short_window: usize,

    /// Mid moving-average window (trend classifier slow leg).
    #[serde(default = "default_ma_mid_window")]
    pub ma_mid_window: usize,

    /// Long moving-average window.
    #[serde(default = "default_ma_long_window")]
    pub ma_long_window: usize,

    /// RSI look-back period.
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Bollinger Band window.
    #[serde(default = "default_bollinger_window")]
    pub bollinger_window: usize,

    /// Bollinger Band standard-deviation multiplier.
    #[serde(default = "default_bollinger_multiplier")]
    pub bollinger_multiplier: f64,

    /// MACD fast EMA period. Must be shorter than the slow period.
    #[serde(default = "default_macd_fast_period")]
    pub macd_fast_period: usize,

    /// MACD slow EMA period.
    #[serde(default = "default_macd_slow_period")]
    pub macd_slow_period: usize,

    /// MACD signal-line EMA period.
    #[serde(default = "default_macd_signal_period")]
    pub macd_signal_period: usize,

    /// Trailing window for the volatility index scalar.
    #[serde(default = "default_volatility_window")]
    pub volatility_window: usize,

    /// Minimum relative short/long MA spread before the trend classifier
    /// leaves `sideways`. 0.001 means 0.1%.
    #[serde(default = "default_trend_threshold")]
    pub trend_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ma_short_window: default_ma_short_window(),
            ma_mid_window: default_ma_mid_window(),
            ma_long_window: default_ma_long_window(),
            rsi_period: default_rsi_period(),
            bollinger_window: default_bollinger_window(),
            bollinger_multiplier: default_bollinger_multiplier(),
            macd_fast_period: default_macd_fast_period(),
            macd_slow_period: default_macd_slow_period(),
            macd_signal_period: default_macd_signal_period(),
            volatility_window: default_volatility_window(),
            trend_threshold: default_trend_threshold(),
        }
    }
}

impl AnalysisConfig {
    /// Check every parameter eagerly, before any series is scanned.
    ///
    /// A failed check aborts the whole analysis; no partial output is built.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("ma_short_window", self.ma_short_window),
            ("ma_mid_window", self.ma_mid_window),
            ("ma_long_window", self.ma_long_window),
            ("rsi_period", self.rsi_period),
            ("bollinger_window", self.bollinger_window),
            ("macd_fast_period", self.macd_fast_period),
            ("macd_slow_period", self.macd_slow_period),
            ("macd_signal_period", self.macd_signal_period),
            ("volatility_window", self.volatility_window),
        ] {
            if value == 0 {
                return Err(AnalysisError::config(format!(
                    "{name} must be a positive integer"
                )));
            }
        }

        if self.macd_fast_period >= self.macd_slow_period {
            return Err(AnalysisError::config(format!(
                "macd_fast_period ({}) must be shorter than macd_slow_period ({})",
                self.macd_fast_period, self.macd_slow_period
            )));
        }

        if !self.bollinger_multiplier.is_finite() || self.bollinger_multiplier < 0.0 {
            return Err(AnalysisError::config(format!(
                "bollinger_multiplier must be finite and non-negative, got {}",
                self.bollinger_multiplier
            )));
        }

        if !self.trend_threshold.is_finite() || self.trend_threshold < 0.0 {
            return Err(AnalysisError::config(format!(
                "trend_threshold must be finite and non-negative, got {}",
                self.trend_threshold
            )));
        }

        Ok(())
    }
}
