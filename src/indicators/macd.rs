// =============================================================================
// MACD — Moving Average Convergence / Divergence
// =============================================================================
//
// MACD line  = EMA(fast) - EMA(slow), defined once the slow EMA is seeded.
// Signal     = EMA of the defined MACD values with the signal period, so it
//              becomes defined at index slow + signal_period - 2.
// Histogram  = MACD - Signal, defined wherever both are defined.
//
// Each EMA is seeded with the simple average of its first `period` inputs
// (same seeding as `indicators::ema`). The histogram is a derived identity:
// it always equals macd - signal at the same index, modulo floating-point
// rounding.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::indicators::ema::ema_series;
use crate::types::{prices, MarketDataPoint};

/// MACD line, signal line and histogram, positionally aligned with the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate MACD for the given `series` with `fast`/`slow` EMA periods and
/// the `signal_period` for the signal line.
///
/// # Errors
/// - Any zero period, or `fast >= slow`, fails with a configuration error
///   before the series is scanned.
pub fn calculate_macd(
    series: &[MarketDataPoint],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<MacdSeries> {
    if fast == 0 || slow == 0 || signal_period == 0 {
        return Err(AnalysisError::config(
            "MACD periods must be positive integers",
        ));
    }
    if fast >= slow {
        return Err(AnalysisError::config(format!(
            "MACD fast period ({fast}) must be shorter than the slow period ({slow})"
        )));
    }

    let values = prices(series);
    let ema_fast = ema_series(&values, fast);
    let ema_slow = ema_series(&values, slow);

    // MACD line: defined from the slow seed (the fast EMA is seeded earlier).
    let mut macd = vec![None; series.len()];
    for i in 0..series.len() {
        if let (Some(f), Some(s)) = (ema_fast[i], ema_slow[i]) {
            macd[i] = Some(f - s);
        }
    }

    // Signal line: EMA over the defined MACD values only. The compacted
    // vector starts at index slow - 1, so compact index j maps back to
    // series index slow - 1 + j.
    let compact: Vec<f64> = macd.iter().flatten().copied().collect();
    let signal_compact = ema_series(&compact, signal_period);

    let mut signal = vec![None; series.len()];
    let offset = series.len() - compact.len();
    for (j, value) in signal_compact.iter().enumerate() {
        signal[offset + j] = *value;
    }

    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    Ok(MacdSeries {
        macd,
        signal,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarketDataPoint;
    use chrono::DateTime;

    fn series(prices: &[f64]) -> Vec<MarketDataPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                MarketDataPoint::new(
                    DateTime::from_timestamp(1_700_000_000 + i as i64 * 3600, 0).unwrap(),
                    p,
                    10.0,
                    0.0,
                    "global",
                )
            })
            .collect()
    }

    /// 60 points of gently varying prices.
    fn wavy(n: usize) -> Vec<MarketDataPoint> {
        let prices: Vec<f64> = (0..n)
            .map(|i| 100.0 + (i % 7) as f64 * 1.5 - (i % 5) as f64)
            .collect();
        series(&prices)
    }

    // ---- calculate_macd --------------------------------------------------

    #[test]
    fn macd_zero_period_is_config_error() {
        let data = wavy(60);
        assert!(calculate_macd(&data, 0, 26, 9).is_err());
        assert!(calculate_macd(&data, 12, 26, 0).is_err());
    }

    #[test]
    fn macd_fast_must_be_below_slow() {
        let data = wavy(60);
        assert!(matches!(
            calculate_macd(&data, 26, 12, 9),
            Err(AnalysisError::Configuration(_))
        ));
        assert!(calculate_macd(&data, 26, 26, 9).is_err());
    }

    #[test]
    fn macd_lengths_match_input() {
        let data = wavy(60);
        let out = calculate_macd(&data, 12, 26, 9).unwrap();
        assert_eq!(out.macd.len(), 60);
        assert_eq!(out.signal.len(), 60);
        assert_eq!(out.histogram.len(), 60);
    }

    #[test]
    fn macd_defined_from_slow_seed() {
        let data = wavy(60);
        let out = calculate_macd(&data, 12, 26, 9).unwrap();
        // MACD line: None before index 25, defined from there on.
        assert!(out.macd[..25].iter().all(Option::is_none));
        assert!(out.macd[25..].iter().all(Option::is_some));
        // Signal line: seeded after 9 defined MACD values, index 33 onward.
        assert!(out.signal[..33].iter().all(Option::is_none));
        assert!(out.signal[33..].iter().all(Option::is_some));
    }

    #[test]
    fn macd_histogram_identity() {
        let data = wavy(80);
        let out = calculate_macd(&data, 12, 26, 9).unwrap();
        let mut checked = 0;
        for i in 0..data.len() {
            if let (Some(m), Some(s), Some(h)) = (out.macd[i], out.signal[i], out.histogram[i]) {
                assert!(
                    (h - (m - s)).abs() < 0.01,
                    "histogram diverges from macd - signal at {i}"
                );
                checked += 1;
            }
        }
        assert!(checked > 0, "no defined histogram values to check");
    }

    #[test]
    fn macd_short_series_is_all_none() {
        let data = wavy(20);
        let out = calculate_macd(&data, 12, 26, 9).unwrap();
        assert!(out.macd.iter().all(Option::is_none));
        assert!(out.signal.iter().all(Option::is_none));
        assert!(out.histogram.iter().all(Option::is_none));
    }
}
