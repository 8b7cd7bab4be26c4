// =============================================================================
// Trend Direction Classifier
// =============================================================================
//
// Compares the latest short moving average against the latest long moving
// average. The relative spread (short - long) / long must clear a small
// threshold before the label leaves `sideways`; the canonical threshold is
// 0.001 (0.1%). A series too short for the long MA (long series entirely
// `None`) is always `sideways`.

use tracing::debug;

use crate::types::{MarketDataPoint, TrendDirection};

/// Classify trend direction from the short and long MA series.
///
/// `threshold` is the minimum relative spread between the two latest MA
/// values, e.g. `0.001` for 0.1%.
pub fn classify_trend_direction(
    series: &[MarketDataPoint],
    short_ma: &[Option<f64>],
    long_ma: &[Option<f64>],
    threshold: f64,
) -> TrendDirection {
    let latest = match (
        short_ma.last().copied().flatten(),
        long_ma.last().copied().flatten(),
    ) {
        (Some(short), Some(long)) => (short, long),
        // Not enough history for both averages.
        _ => {
            debug!(points = series.len(), "Trend direction: insufficient data");
            return TrendDirection::Sideways;
        }
    };

    let (short, long) = latest;
    if long == 0.0 {
        return TrendDirection::Sideways;
    }

    let spread = (short - long) / long;
    let direction = if spread > threshold {
        TrendDirection::Up
    } else if spread < -threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Sideways
    };

    debug!(short, long, spread, direction = %direction, "Trend direction");
    direction
}
