// =============================================================================
// Volatility Index
// =============================================================================
//
// Population standard deviation of percentage returns over the trailing
// `window` points, as a non-negative scalar. The value is the raw per-step
// return deviation; no annualization is applied (scaling constant 1.0).
//
// This indicator returns a scalar, not a series: a series shorter than the
// window yields exactly 0.0, which is an in-band "no reading" value, not an
// error.

use crate::error::{AnalysisError, Result};
use crate::types::MarketDataPoint;

/// Calculate the volatility index over the trailing `window` points.
///
/// # Errors
/// - `window == 0` fails with a configuration error before the series is
///   scanned.
pub fn calculate_volatility(series: &[MarketDataPoint], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(AnalysisError::config(
            "volatility window must be a positive integer",
        ));
    }

    if series.len() < window {
        return Ok(0.0);
    }

    // window points => window - 1 consecutive returns.
    let tail = &series[series.len() - window..];
    let returns: Vec<f64> = tail
        .windows(2)
        .map(|w| {
            let prev = w[0].average_price;
            if prev == 0.0 {
                0.0
            } else {
                (w[1].average_price - prev) / prev
            }
        })
        .collect();

    if returns.is_empty() {
        return Ok(0.0);
    }

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance =
        returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / returns.len() as f64;

    Ok(variance.sqrt())
}
