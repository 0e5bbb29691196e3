use crate::types::{AggregateSnapshot, MentionCount, SentimentScore, TickerSymbol, TokenRef};
use std::collections::HashMap;

/// Running totals for a single ticker within one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateRecord {
    pub mentions: MentionCount,
    pub sentiment_sum: SentimentScore,
}

/// Accumulates mention counts and sentiment sums per ticker.
///
/// Records are kept in first-mention order so a snapshot iterates the same way
/// on every run over the same input.
#[derive(Debug, Default)]
pub struct TickerAggregator {
    record_indices: HashMap<TickerSymbol, usize>,
    records: AggregateSnapshot,
}

impl TickerAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one mention of `ticker` carrying `sentiment`.
    ///
    /// The ticker is not re-validated; callers only pass filtered symbols.
    pub fn record(&mut self, ticker: &TokenRef, sentiment: SentimentScore) {
        let record_index = match self.record_indices.get(ticker) {
            Some(&record_index) => record_index,
            None => {
                let record_index = self.records.len();
                self.records
                    .push((ticker.to_string(), AggregateRecord::default()));
                self.record_indices.insert(ticker.to_string(), record_index);
                record_index
            }
        };

        let (_, record) = &mut self.records[record_index];
        record.mentions += 1;
        record.sentiment_sum += sentiment;
    }

    /// Copy of the current state, in first-mention order.
    pub fn snapshot(&self) -> AggregateSnapshot {
        self.records.clone()
    }

    pub fn get(&self, ticker: &TokenRef) -> Option<&AggregateRecord> {
        self.record_indices
            .get(ticker)
            .map(|&record_index| &self.records[record_index].1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_mentions(&self) -> MentionCount {
        self.records.iter().map(|(_, record)| record.mentions).sum()
    }
}
