// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = price_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The first EMA value is seeded at index `period - 1` with the SMA of the
// first `period` prices. From the seed onward every index carries a value;
// only the seed warm-up is `None`.
// =============================================================================

use crate::error::{AnalysisError, Result};
use crate::types::{prices, MarketDataPoint};

/// Compute the EMA series for the given `series` and look-back `period`.
///
/// The output has exactly one slot per input point: `None` for indices
/// `0..period-1`, the SMA seed at index `period-1`, and the smoothed
/// recurrence everywhere after that.
///
/// # Errors
/// - `period == 0` fails with a configuration error before the series is
///   scanned.
pub fn calculate_ema(series: &[MarketDataPoint], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(AnalysisError::config(
            "EMA period must be a positive integer",
        ));
    }
    Ok(ema_series(&prices(series), period))
}

/// EMA recurrence over raw values, aligned to the input.
///
/// Shared by `calculate_ema` and the MACD signal line, which runs the same
/// recurrence over the compacted MACD values rather than over prices. The
/// recurrence state is an explicit accumulator, so the function stays pure.
pub(crate) fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    if values.len() < period {
        return result;
    }

    let multiplier = 2.0 / (period as f64 + 1.0);

    // Seed: SMA of the first `period` values.
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = Some(seed);

    let mut prev_ema = seed;
    for (i, &value) in values.iter().enumerate().skip(period) {
        let ema = value * multiplier + prev_ema * (1.0 - multiplier);
        result[i] = Some(ema);
        prev_ema = ema;
    }

    result
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

    // ---- calculate_ema ---------------------------------------------------

    #[test]
    fn ema_period_zero_is_config_error() {
        let data = series(&[1.0, 2.0, 3.0]);
        assert!(calculate_ema(&data, 0).is_err());
    }

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).unwrap().is_empty());
    }

    #[test]
    fn ema_insufficient_data_is_all_none() {
        let data = series(&[1.0, 2.0]);
        let out = calculate_ema(&data, 5).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(Option::is_none));
    }

    #[test]
    fn ema_seed_is_simple_average() {
        let data = series(&[2.0, 4.0, 6.0]);
        let out = calculate_ema(&data, 3).unwrap();
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        // Seed = (2+4+6)/3 = 4.0
        assert!((out[2].unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..10]: seed = 3.0 at index 4, multiplier = 1/3.
        let data = series(&(1..=10).map(|x| x as f64).collect::<Vec<_>>());
        let out = calculate_ema(&data, 5).unwrap();
        assert_eq!(out.len(), 10);
        assert!(out[..4].iter().all(Option::is_none));

        let mult = 2.0 / 6.0;
        let mut expected = 3.0;
        assert!((out[4].unwrap() - expected).abs() < 1e-10);
        for i in 5..10 {
            expected = (i + 1) as f64 * mult + expected * (1.0 - mult);
            assert!((out[i].unwrap() - expected).abs() < 1e-10);
        }
    }
}
