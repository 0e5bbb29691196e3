use crate::constants::AVERAGE_SENTIMENT_DECIMAL_PLACES;
use crate::types::{AggregateSnapshot, MentionCount, SentimentScore, TickerSymbol};
use crate::utils::{round_to_decimal_places, sort_results};
use serde::Serialize;

/// One finalized line of the ranked report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub ticker: TickerSymbol,
    pub mentions: MentionCount,
    pub average_sentiment: SentimentScore,
}

/// Turns aggregator state into ranked `ResultRow`s.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds the ranked report.
    ///
    /// Averages are rounded to three decimal places, half away from zero.
    /// Rows are ordered by mentions (descending), then ticker (ascending).
    pub fn build(records: &AggregateSnapshot) -> Vec<ResultRow> {
        let results = records
            .iter()
            .filter(|(_, record)| record.mentions > 0)
            .map(|(ticker, record)| ResultRow {
                ticker: ticker.clone(),
                mentions: record.mentions,
                average_sentiment: round_to_decimal_places(
                    record.sentiment_sum / record.mentions as SentimentScore,
                    AVERAGE_SENTIMENT_DECIMAL_PLACES,
                ),
            })
            .collect();

        sort_results(results)
    }
}
