// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Trailing arithmetic mean of the reference price over a fixed window.
// A rolling sum keeps the scan O(n) regardless of window size.

use crate::error::{AnalysisError, Result};
use crate::types::MarketDataPoint;

/// Compute the moving-average series for the given `series` and `window`.
///
/// The output has exactly one slot per input point. Slots `0..window-1` are
/// `None` (not enough trailing history); slot `i >= window-1` holds the mean
/// of `average_price` over the inclusive window `[i-window+1, i]`.
///
/// # Errors
/// - `window == 0` fails with a configuration error before the series is
///   scanned.
pub fn calculate_sma(series: &[MarketDataPoint], window: usize) -> Result<Vec<Option<f64>>> {
    if window == 0 {
        return Err(AnalysisError::config(
            "moving-average window must be a positive integer",
        ));
    }

    let mut result = vec![None; series.len()];
    let mut rolling_sum = 0.0;

    for (i, point) in series.iter().enumerate() {
        rolling_sum += point.average_price;
        if i >= window {
            rolling_sum -= series[i - window].average_price;
        }
        if i + 1 >= window {
            result[i] = Some(rolling_sum / window as f64);
        }
    }

    Ok(result)
}
