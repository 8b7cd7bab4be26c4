// =============================================================================
// Error type for the analysis engine
// =============================================================================
//
// Only unusable indicator parameters abort a computation, and they do so
// eagerly, before any scan of the series. Insufficient history is never an
// error: short series produce `None` slots (or a zero scalar for the
// volatility index) instead.

use thiserror::Error;

/// Result alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error type surfaced by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// An indicator or classifier was invoked with an unusable parameter:
    /// a zero window/period, a non-finite or negative band multiplier, or a
    /// fast period that is not shorter than the slow period.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl AnalysisError {
    /// Shorthand used by the parameter checks at the top of each indicator.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
