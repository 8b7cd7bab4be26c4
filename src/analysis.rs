// =============================================================================
// Analysis Orchestrator
// =============================================================================
//
// Composes the indicator library into one aggregate report per call:
//
//   1. Moving averages over the short / mid / long canonical windows
//   2. RSI over the canonical period
//   3. Bollinger Bands
//   4. MACD
//   5. (full report only) sentiment, trend direction, volatility, statistics
//
// Every sub-series is length-matched to the input; an empty input produces
// empty sub-series. Configuration is validated eagerly, so either the whole
// output structure is produced or nothing is.
// =============================================================================

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::indicators::{
    calculate_bollinger, calculate_macd, calculate_rsi, calculate_sma, calculate_volatility,
    BollingerSeries, MacdSeries,
};
use crate::signals::{classify_sentiment, classify_trend_direction};
use crate::stats::{market_stats, MarketStats};
use crate::types::{MarketDataPoint, MarketSentiment, TrendDirection};

/// Aggregate indicator report, computed fresh per call. Every series has
/// exactly one slot per input point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Short-window moving average (canonical window 7).
    pub ma_short: Vec<Option<f64>>,
    /// Mid-window moving average (canonical window 30).
    pub ma_mid: Vec<Option<f64>>,
    /// Long-window moving average (canonical window 90).
    pub ma_long: Vec<Option<f64>>,
    /// RSI series (canonical period 14).
    pub rsi: Vec<Option<f64>>,
    /// Bollinger Bands (canonical 20, 2.0).
    pub bollinger: BollingerSeries,
    /// MACD (canonical 12 / 26 / 9).
    pub macd: MacdSeries,
}

/// The composite consumed by the reporting layer: indicator series plus the
/// categorical labels, the volatility scalar and the aggregate statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub trend: TrendAnalysis,
    pub sentiment: MarketSentiment,
    pub trend_direction: TrendDirection,
    pub volatility: f64,
    pub stats: MarketStats,
}

/// Generate the aggregate indicator report with the canonical parameters.
pub fn generate_trend_analysis(series: &[MarketDataPoint]) -> Result<TrendAnalysis> {
    generate_trend_analysis_with(series, &AnalysisConfig::default())
}

/// Generate the aggregate indicator report with explicit parameters.
///
/// # Errors
/// Fails with a configuration error (before touching the series) when the
/// config does not validate; no partial output is built.
pub fn generate_trend_analysis_with(
    series: &[MarketDataPoint],
    config: &AnalysisConfig,
) -> Result<TrendAnalysis> {
    config.validate()?;

    Ok(TrendAnalysis {
        ma_short: calculate_sma(series, config.ma_short_window)?,
        ma_mid: calculate_sma(series, config.ma_mid_window)?,
        ma_long: calculate_sma(series, config.ma_long_window)?,
        rsi: calculate_rsi(series, config.rsi_period)?,
        bollinger: calculate_bollinger(series, config.bollinger_window, config.bollinger_multiplier)?,
        macd: calculate_macd(
            series,
            config.macd_fast_period,
            config.macd_slow_period,
            config.macd_signal_period,
        )?,
    })
}

/// Run the full pipeline with the canonical parameters: indicators, both
/// classifiers, the volatility index and the aggregate statistics.
pub fn analyze_market(series: &[MarketDataPoint]) -> Result<MarketReport> {
    analyze_market_with(series, &AnalysisConfig::default())
}

/// Run the full pipeline with explicit parameters.
pub fn analyze_market_with(
    series: &[MarketDataPoint],
    config: &AnalysisConfig,
) -> Result<MarketReport> {
    let trend = generate_trend_analysis_with(series, config)?;

    let sentiment = classify_sentiment(series, &trend.rsi, &trend.macd);
    let trend_direction = classify_trend_direction(
        series,
        &trend.ma_short,
        &trend.ma_mid,
        config.trend_threshold,
    );
    let volatility = calculate_volatility(series, config.volatility_window)?;
    let stats = market_stats(series);

    debug!(
        points = series.len(),
        sentiment = %sentiment,
        trend_direction = %trend_direction,
        volatility,
        "Market analysis complete"
    );

    Ok(MarketReport {
        trend,
        sentiment,
        trend_direction,
        volatility,
        stats,
    })
}
