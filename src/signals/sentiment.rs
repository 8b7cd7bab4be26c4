// =============================================================================
// Sentiment Classifier
// =============================================================================
//
// Evaluated at the latest available index only. Three independent votes:
//
//   RSI vote    :  > 70 bullish,  < 30 bearish, else neutral
//   MACD vote   :  latest histogram > 0 bullish, < 0 bearish, else neutral
//                  (momentum above / below the signal line)
//   Price vote  :  latest price_change > 0 bullish, < 0 bearish, else neutral
//
// A missing indicator value at the latest index votes neutral. The label is
// bullish only when all three votes are bullish, bearish only when all three
// are bearish, and neutral in every other case.

use tracing::debug;

use crate::indicators::MacdSeries;
use crate::types::{MarketDataPoint, MarketSentiment};

/// Vote cast by one input: +1 bullish, -1 bearish, 0 neutral.
type Vote = i8;

/// Classify overall market sentiment from the series, its RSI series and its
/// MACD series. Returns `Neutral` for an empty series.
pub fn classify_sentiment(
    series: &[MarketDataPoint],
    rsi: &[Option<f64>],
    macd: &MacdSeries,
) -> MarketSentiment {
    if series.is_empty() {
        return MarketSentiment::Neutral;
    }

    let rsi_vote: Vote = match rsi.last().copied().flatten() {
        Some(v) if v > 70.0 => 1,
        Some(v) if v < 30.0 => -1,
        _ => 0,
    };

    let macd_vote: Vote = match macd.histogram.last().copied().flatten() {
        Some(h) if h > 0.0 => 1,
        Some(h) if h < 0.0 => -1,
        _ => 0,
    };

    let price_vote: Vote = match series.last().map(|p| p.price_change) {
        Some(c) if c > 0.0 => 1,
        Some(c) if c < 0.0 => -1,
        _ => 0,
    };

    let sentiment = if rsi_vote == 1 && macd_vote == 1 && price_vote == 1 {
        MarketSentiment::Bullish
    } else if rsi_vote == -1 && macd_vote == -1 && price_vote == -1 {
        MarketSentiment::Bearish
    } else {
        MarketSentiment::Neutral
    };

    debug!(
        rsi_vote,
        macd_vote,
        price_vote,
        sentiment = %sentiment,
        "Sentiment classification"
    );

    sentiment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{calculate_macd, calculate_rsi};
    use crate::types::MarketDataPoint;
    use chrono::DateTime;

    /// Series where each point carries its actual percentage change.
    fn series(prices: &[f64]) -> Vec<MarketDataPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let change = if i == 0 {
                    0.0
                } else {
                    (p - prices[i - 1]) / prices[i - 1] * 100.0
                };
                MarketDataPoint::new(
                    DateTime::from_timestamp(1_700_000_000 + i as i64 * 3600, 0).unwrap(),
                    p,
                    10.0,
                    change,
                    "global",
                )
            })
            .collect()
    }

    fn classify(data: &[MarketDataPoint]) -> MarketSentiment {
        let rsi = calculate_rsi(data, 14).unwrap();
        let macd = calculate_macd(data, 12, 26, 9).unwrap();
        classify_sentiment(data, &rsi, &macd)
    }

    #[test]
    fn empty_series_is_neutral() {
        let macd = MacdSeries {
            macd: vec![],
            signal: vec![],
            histogram: vec![],
        };
        assert_eq!(classify_sentiment(&[], &[], &macd), MarketSentiment::Neutral);
    }

    #[test]
    fn short_series_defaults_to_neutral() {
        // Indicators are all None: every vote is neutral.
        let data = series(&[1.0, 2.0, 3.0]);
        assert_eq!(classify(&data), MarketSentiment::Neutral);
    }

    #[test]
    fn monotonic_rise_is_never_bearish() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + i as f64 * 2.0).collect();
        let data = series(&prices);
        let label = classify(&data);
        assert_ne!(label, MarketSentiment::Bearish);
    }

    #[test]
    fn strong_rally_is_bullish() {
        // Accelerating rise: RSI near 100, histogram positive, rising price.
        let prices: Vec<f64> = (0..60).map(|i| 100.0 * 1.02_f64.powi(i)).collect();
        let data = series(&prices);
        assert_eq!(classify(&data), MarketSentiment::Bullish);
    }

    #[test]
    fn accelerating_decline_is_bearish() {
        // Quadratic fall keeps the MACD line dropping away from its signal
        // line, so the histogram stays negative alongside RSI = 0.
        let prices: Vec<f64> = (0..60).map(|i| 100_000.0 - (i * i) as f64).collect();
        let data = series(&prices);
        assert_eq!(classify(&data), MarketSentiment::Bearish);
    }

    #[test]
    fn output_is_always_one_of_the_three_labels() {
        let prices: Vec<f64> = (0..40)
            .map(|i| 100.0 + ((i * 37) % 11) as f64 - 5.0)
            .collect();
        let data = series(&prices);
        let label = classify(&data);
        assert!(matches!(
            label,
            MarketSentiment::Bullish | MarketSentiment::Bearish | MarketSentiment::Neutral
        ));
    }
}
