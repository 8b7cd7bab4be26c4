// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), where σ is the population standard deviation
// of the reference price over the same trailing window.
//
// All three bands are `None` exactly where the underlying SMA is `None`.
// Wherever all three are defined: upper >= middle >= lower, with equality
// only when σ = 0 (flat window).

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::indicators::sma::calculate_sma;
use crate::types::MarketDataPoint;

/// The three Bollinger band series, positionally aligned with the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

/// Calculate Bollinger Bands for the given `series`, `window` and
/// standard-deviation `multiplier`.
///
/// # Errors
/// - `window == 0` or a non-finite / negative `multiplier` fails with a
///   configuration error before the series is scanned.
pub fn calculate_bollinger(
    series: &[MarketDataPoint],
    window: usize,
    multiplier: f64,
) -> Result<BollingerSeries> {
    if window == 0 {
        return Err(AnalysisError::config(
            "Bollinger window must be a positive integer",
        ));
    }
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(AnalysisError::config(format!(
            "Bollinger multiplier must be finite and non-negative, got {multiplier}"
        )));
    }

    let middle = calculate_sma(series, window)?;
    let mut upper = vec![None; series.len()];
    let mut lower = vec![None; series.len()];

    for (i, mean) in middle.iter().enumerate() {
        let Some(mean) = *mean else { continue };

        let window_slice = &series[i + 1 - window..=i];
        let variance = window_slice
            .iter()
            .map(|p| (p.average_price - mean).powi(2))
            .sum::<f64>()
            / window as f64;
        let sigma = variance.sqrt();

        upper[i] = Some(mean + multiplier * sigma);
        lower[i] = Some(mean - multiplier * sigma);
    }

    Ok(BollingerSeries {
        upper,
        middle,
        lower,
    })
}
