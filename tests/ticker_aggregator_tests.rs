use ticker_sentiment::{AggregateRecord, TickerAggregator};

#[cfg(test)]
mod ticker_aggregator_tests {
    use super::*;

    #[test]
    fn test_empty_aggregator() {
        let aggregator = TickerAggregator::new();

        assert!(aggregator.is_empty());
        assert_eq!(aggregator.len(), 0);
        assert_eq!(aggregator.total_mentions(), 0);
        assert!(aggregator.snapshot().is_empty());
        assert_eq!(aggregator.get("TSLA"), None);
    }

    #[test]
    fn test_record_preserves_counts_and_sums() {
        let mut aggregator = TickerAggregator::new();
        let recorded = [
            ("TSLA", 0.5),
            ("GME", -0.25),
            ("TSLA", 0.25),
            ("TSLA", -1.0),
        ];

        for (ticker, sentiment) in recorded {
            aggregator.record(ticker, sentiment);
        }

        assert_eq!(
            aggregator.get("TSLA"),
            Some(&AggregateRecord {
                mentions: 3,
                sentiment_sum: -0.25,
            })
        );
        assert_eq!(
            aggregator.get("GME"),
            Some(&AggregateRecord {
                mentions: 1,
                sentiment_sum: -0.25,
            })
        );
        assert_eq!(aggregator.total_mentions(), recorded.len());
    }

    #[test]
    fn test_snapshot_is_in_first_mention_order() {
        let mut aggregator = TickerAggregator::new();
        aggregator.record("NVDA", 0.0);
        aggregator.record("AMD", 0.0);
        aggregator.record("NVDA", 0.0);
        aggregator.record("INTC", 0.0);

        let tickers: Vec<String> = aggregator
            .snapshot()
            .into_iter()
            .map(|(ticker, _)| ticker)
            .collect();

        assert_eq!(tickers, vec!["NVDA", "AMD", "INTC"]);
    }

    #[test]
    fn test_snapshot_reflects_later_records() {
        let mut aggregator = TickerAggregator::new();
        aggregator.record("AMC", 0.5);

        let before = aggregator.snapshot();
        aggregator.record("AMC", 0.5);
        let after = aggregator.snapshot();

        assert_eq!(before[0].1.mentions, 1);
        assert_eq!(after[0].1.mentions, 2);
        assert_eq!(after[0].1.sentiment_sum, 1.0);
    }
}
