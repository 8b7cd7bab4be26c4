// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the core technical indicators.
// Every series-producing function returns a vector of exactly the input
// length, with `None` marking positions where the trailing history is still
// too short. Index `i` of an output always corresponds to index `i` of the
// input; indicators never reorder, deduplicate or gap-fill the series.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod volatility;

pub use bollinger::{calculate_bollinger, BollingerSeries};
pub use ema::calculate_ema;
pub use macd::{calculate_macd, MacdSeries};
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;
pub use volatility::calculate_volatility;
