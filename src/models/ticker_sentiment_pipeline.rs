use crate::models::{
    Document, ReportBuilder, ResultRow, SentimentSource, TickerAggregator, TickerFilter,
    TickerSentimentConfig, TokenScanner,
};
use crate::types::{AggregateSnapshot, SentimentScore, TokenRef};
use log::{debug, trace, warn};

/// Drives documents through scanning, filtering, scoring and aggregation.
///
/// A pipeline is a single run: feed it documents in order, then build the
/// report from whatever has been accumulated.
pub struct TickerSentimentPipeline<'a, S: SentimentSource + ?Sized> {
    token_scanner: TokenScanner,
    ticker_filter: TickerFilter,
    sentiment_source: &'a S,
    aggregator: TickerAggregator,
    document_limit: Option<usize>,
    processed_documents: usize,
}

impl<'a, S: SentimentSource + ?Sized> TickerSentimentPipeline<'a, S> {
    pub fn new(config: &TickerSentimentConfig, sentiment_source: &'a S) -> Self {
        Self {
            token_scanner: TokenScanner::new(&config.token_scanner_config),
            ticker_filter: config.ticker_filter(),
            sentiment_source,
            aggregator: TickerAggregator::new(),
            document_limit: config.document_limit,
            processed_documents: 0,
        }
    }

    /// Processes documents in order until the configured document limit is reached.
    pub fn process_documents<I>(&mut self, documents: I)
    where
        I: IntoIterator<Item = Document>,
    {
        for document in documents {
            if self.is_at_document_limit() {
                debug!(
                    "Document limit of {} reached; skipping remaining documents",
                    self.processed_documents
                );
                break;
            }

            self.process_text(&document.title);
        }
    }

    /// Processes one document title. Returns the number of accepted mentions.
    pub fn process_text(&mut self, text: &TokenRef) -> usize {
        self.processed_documents += 1;

        let accepted_tickers: Vec<_> = self
            .token_scanner
            .scan(text)
            .into_iter()
            .filter(|candidate| {
                let is_accepted = self.ticker_filter.is_accepted(candidate);
                if !is_accepted {
                    trace!("Rejected candidate {:?}", candidate);
                }
                is_accepted
            })
            .collect();

        if accepted_tickers.is_empty() {
            return 0;
        }

        // Scored once; every ticker in the document shares the same contribution
        let sentiment = self.score(text);

        for ticker in &accepted_tickers {
            self.aggregator.record(ticker, sentiment);
        }

        debug!(
            "Recorded {:?} with sentiment {:.3}",
            accepted_tickers, sentiment
        );

        accepted_tickers.len()
    }

    pub fn aggregator(&self) -> &TickerAggregator {
        &self.aggregator
    }

    pub fn snapshot(&self) -> AggregateSnapshot {
        self.aggregator.snapshot()
    }

    pub fn processed_documents(&self) -> usize {
        self.processed_documents
    }

    pub fn build_report(&self) -> Vec<ResultRow> {
        ReportBuilder::build(&self.aggregator.snapshot())
    }

    fn is_at_document_limit(&self) -> bool {
        self.document_limit
            .map_or(false, |limit| self.processed_documents >= limit)
    }

    fn score(&self, text: &TokenRef) -> SentimentScore {
        let sentiment = self.sentiment_source.score(text);

        if !sentiment.is_finite() {
            warn!("Non-finite sentiment score for {:?}", text);
        }

        sentiment
    }
}
