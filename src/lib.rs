#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_TOKEN_SCANNER_CONFIG;
pub mod constants;
pub mod models;
#[cfg(feature = "fetch")]
pub use models::ListingClient;
pub use models::{
    is_accepted, AggregateRecord, Document, Error, ReportBuilder, ResultRow, SentimentSource,
    TickerAggregator, TickerFilter, TickerSentimentConfig, TickerSentimentPipeline, TokenScanner,
    TokenScannerConfig, VaderSentimentSource,
};
pub mod types;
pub mod utils;
pub use types::{
    AggregateSnapshot, MentionCount, SentimentScore, TickerSymbol, TickerSymbolSet, Token,
    TokenRef,
};

/// Ranks ticker mentions across `documents` using the default allowlist,
/// denylist and document limit.
pub fn analyze_ticker_sentiment<I, S>(documents: I, sentiment_source: &S) -> Vec<ResultRow>
where
    I: IntoIterator<Item = Document>,
    S: SentimentSource + ?Sized,
{
    analyze_ticker_sentiment_with_custom_config(
        &TickerSentimentConfig::default(),
        documents,
        sentiment_source,
    )
}

pub fn analyze_ticker_sentiment_with_custom_config<I, S>(
    config: &TickerSentimentConfig,
    documents: I,
    sentiment_source: &S,
) -> Vec<ResultRow>
where
    I: IntoIterator<Item = Document>,
    S: SentimentSource + ?Sized,
{
    let mut pipeline = TickerSentimentPipeline::new(config, sentiment_source);
    pipeline.process_documents(documents);

    pipeline.build_report()
}
