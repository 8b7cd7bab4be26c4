// =============================================================================
// Aggregate Market Statistics
// =============================================================================
//
// Light derived statistics over the same price series the indicators consume:
// trailing-24h high / low / volume, the volume change versus the preceding
// 24h window, and a market-cap-like total (latest price times cumulative
// volume). Plain arithmetic only; indicator outputs are never read here.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::types::MarketDataPoint;

/// Aggregate statistics snapshot for one series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketStats {
    /// Highest reference price within 24h of the latest point. `None` for an
    /// empty series.
    pub high_24h: Option<f64>,
    /// Lowest reference price within 24h of the latest point.
    pub low_24h: Option<f64>,
    /// Total volume within 24h of the latest point.
    pub volume_24h: f64,
    /// Percentage change of `volume_24h` versus the 24 hours before that
    /// window. 0.0 when the prior window is empty or has zero volume.
    pub volume_change_pct: f64,
    /// Latest reference price times the cumulative volume of the whole
    /// series. A market-cap-like total, not an exchange-reported cap.
    pub market_cap: f64,
}

/// Compute the aggregate statistics for the given series.
pub fn market_stats(series: &[MarketDataPoint]) -> MarketStats {
    let Some(latest) = series.last() else {
        return MarketStats {
            high_24h: None,
            low_24h: None,
            volume_24h: 0.0,
            volume_change_pct: 0.0,
            market_cap: 0.0,
        };
    };

    let day_ago = latest.timestamp - Duration::hours(24);
    let two_days_ago = latest.timestamp - Duration::hours(48);

    let mut high_24h = f64::MIN;
    let mut low_24h = f64::MAX;
    let mut volume_24h = 0.0;
    let mut prior_volume = 0.0;
    let mut total_volume = 0.0;

    for point in series {
        total_volume += point.volume;
        if point.timestamp > day_ago {
            high_24h = high_24h.max(point.average_price);
            low_24h = low_24h.min(point.average_price);
            volume_24h += point.volume;
        } else if point.timestamp > two_days_ago {
            prior_volume += point.volume;
        }
    }

    let volume_change_pct = if prior_volume > 0.0 {
        (volume_24h - prior_volume) / prior_volume * 100.0
    } else {
        0.0
    };

    MarketStats {
        high_24h: Some(high_24h),
        low_24h: Some(low_24h),
        volume_24h,
        volume_change_pct,
        market_cap: latest.average_price * total_volume,
    }
}
