// =============================================================================
// Shared types used across the analysis engine
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single market observation supplied by the data provider.
///
/// Points are immutable and owned by the caller; the engine never mutates or
/// retains them between calls. Within a series, timestamps are strictly
/// increasing (index 0 is the oldest point). The engine does not validate or
/// fill time gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataPoint {
    /// Observation time (UTC).
    pub timestamp: DateTime<Utc>,
    /// Reference price used by all indicator math. Positive per the input
    /// contract; data hygiene is the provider's responsibility.
    pub average_price: f64,
    /// Traded volume at this observation. Non-negative.
    pub volume: f64,
    /// Signed percentage change versus the previous observation.
    pub price_change: f64,
    /// Region label. Not used by indicator math.
    pub region: String,
}

impl MarketDataPoint {
    pub fn new(
        timestamp: DateTime<Utc>,
        average_price: f64,
        volume: f64,
        price_change: f64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            average_price,
            volume,
            price_change,
            region: region.into(),
        }
    }
}

/// Extract the reference prices from a series, in order.
pub(crate) fn prices(series: &[MarketDataPoint]) -> Vec<f64> {
    series.iter().map(|p| p.average_price).collect()
}

/// Overall market mood derived from RSI, MACD and the latest price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketSentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Default for MarketSentiment {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for MarketSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "bullish"),
            Self::Bearish => write!(f, "bearish"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Direction of the prevailing trend, from the short/long moving-average
/// spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
}

impl Default for TrendDirection {
    fn default() -> Self {
        Self::Sideways
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Sideways => write!(f, "sideways"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MarketSentiment::Bullish).unwrap(),
            "\"bullish\""
        );
        assert_eq!(MarketSentiment::Neutral.to_string(), "neutral");
    }

    #[test]
    fn trend_direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TrendDirection::Sideways).unwrap(),
            "\"sideways\""
        );
        assert_eq!(TrendDirection::Up.to_string(), "up");
    }
}
