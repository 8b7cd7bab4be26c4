// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Momentum oscillator in [0, 100] built from smoothed average gains and
// losses of the reference price:
//
//   1. deltas from consecutive reference prices
//   2. seed avg_gain / avg_loss with the mean of the first `period` deltas
//   3. Wilder smoothing:
//        avg_gain = (prev_avg_gain * (period - 1) + current_gain) / period
//        avg_loss = (prev_avg_loss * (period - 1) + current_loss) / period
//   4. RS  = avg_gain / avg_loss
//      RSI = 100 - 100 / (1 + RS)
//
// Conventions (deliberate, not inferred):
// - avg_loss == 0 with gains present  => RSI = 100
// - avg_gain == avg_loss == 0 (flat)  => RSI = 50 (neutral)
// Every produced value is clamped to [0, 100].
// =============================================================================

use crate::error::{AnalysisError, Result};
use crate::types::MarketDataPoint;

/// Compute the full RSI series for the given `series` and `period`.
///
/// The output has exactly one slot per input point. Indices `0..period` are
/// `None` (fewer than `period` deltas available); index `period` carries the
/// seeded value and later indices the smoothed recurrence.
///
/// # Errors
/// - `period == 0` fails with a configuration error before the series is
///   scanned.
pub fn calculate_rsi(series: &[MarketDataPoint], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(AnalysisError::config(
            "RSI period must be a positive integer",
        ));
    }

    let mut result = vec![None; series.len()];
    if series.len() <= period {
        return Ok(result);
    }

    let deltas: Vec<f64> = series
        .windows(2)
        .map(|w| w[1].average_price - w[0].average_price)
        .collect();

    // Seed averages with the mean of the first `period` deltas.
    let (sum_gain, sum_loss) = deltas[..period]
        .iter()
        .fold((0.0_f64, 0.0_f64), |(g, l), &d| {
            if d > 0.0 {
                (g + d, l)
            } else {
                (g, l + d.abs())
            }
        });

    let period_f = period as f64;
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;

    result[period] = Some(rsi_from_averages(avg_gain, avg_loss));

    // Wilder's smoothing for subsequent values. delta[i-1] is the change
    // leading into point i.
    for i in period + 1..series.len() {
        let delta = deltas[i - 1];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        result[i] = Some(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(result)
}

/// Convert average gain / average loss into an RSI value in [0, 100].
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let rsi = if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0 // Perfectly flat prices: neutral by convention.
    } else if avg_loss == 0.0 {
        100.0 // Only gains.
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    };

    rsi.clamp(0.0, 100.0)
}
