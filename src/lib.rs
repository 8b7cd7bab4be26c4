// =============================================================================
// Canopy Analysis — Market-Data Technical-Analysis Engine
// =============================================================================
//
// Pure, stateless computation over an ordered series of market observations:
// classic indicators (moving averages, RSI, Bollinger Bands, MACD, a
// volatility index) plus rule-based sentiment and trend classification, and
// light aggregate statistics.
//
// The surrounding marketplace backend supplies the ordered price series and
// consumes the structures produced here. This crate performs no I/O, holds no
// state between calls, and shares no mutable data, so any number of analyses
// may run concurrently over read-only series.
// =============================================================================

// ── Module declarations ──────────────────────────────────────────────────────
pub mod analysis;
pub mod config;
pub mod error;
pub mod indicators;
pub mod signals;
pub mod stats;
pub mod types;

pub use analysis::{
    analyze_market, analyze_market_with, generate_trend_analysis, generate_trend_analysis_with,
    MarketReport, TrendAnalysis,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use indicators::{
    calculate_bollinger, calculate_ema, calculate_macd, calculate_rsi, calculate_sma,
    calculate_volatility, BollingerSeries, MacdSeries,
};
pub use signals::{classify_sentiment, classify_trend_direction};
pub use stats::{market_stats, MarketStats};
pub use types::{MarketDataPoint, MarketSentiment, TrendDirection};
