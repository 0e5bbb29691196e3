pub mod document;
pub use document::Document;

pub mod error;
pub use error::Error;

#[cfg(feature = "fetch")]
pub mod listing_client;
#[cfg(feature = "fetch")]
pub use listing_client::ListingClient;

pub mod report_builder;
pub use report_builder::{ReportBuilder, ResultRow};

pub mod sentiment_source;
pub use sentiment_source::{SentimentSource, VaderSentimentSource};

pub mod ticker_aggregator;
pub use ticker_aggregator::{AggregateRecord, TickerAggregator};

pub mod ticker_filter;
pub use ticker_filter::{is_accepted, TickerFilter};

pub mod ticker_sentiment_config;
pub use ticker_sentiment_config::TickerSentimentConfig;

pub mod ticker_sentiment_pipeline;
pub use ticker_sentiment_pipeline::TickerSentimentPipeline;

pub mod token_scanner;
pub use token_scanner::{TokenScanner, TokenScannerConfig};
