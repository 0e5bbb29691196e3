use crate::constants::{DEFAULT_DOCUMENT_LIMIT, DEFAULT_IGNORE_WORDS, DEFAULT_VALID_TICKERS};
use crate::models::{TickerFilter, TokenScannerConfig};
use crate::types::TickerSymbolSet;

/// Everything a pipeline run needs to know up front.
///
/// Each run owns its configuration, so runs with different allowlists never
/// interfere with one another.
#[derive(Debug, Clone)]
pub struct TickerSentimentConfig {
    pub token_scanner_config: TokenScannerConfig,
    pub valid_tickers: TickerSymbolSet,
    pub ignore_words: TickerSymbolSet,
    /// Maximum number of documents to process; `None` processes all of them.
    pub document_limit: Option<usize>,
}

impl TickerSentimentConfig {
    pub fn with_token_scanner_config(mut self, token_scanner_config: TokenScannerConfig) -> Self {
        self.token_scanner_config = token_scanner_config;
        self
    }

    pub fn with_valid_tickers<I, S>(mut self, valid_tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_tickers = collect_symbols(valid_tickers);
        self
    }

    pub fn with_ignore_words<I, S>(mut self, ignore_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_words = collect_symbols(ignore_words);
        self
    }

    pub fn with_document_limit(mut self, document_limit: Option<usize>) -> Self {
        self.document_limit = document_limit;
        self
    }

    pub fn ticker_filter(&self) -> TickerFilter {
        TickerFilter::new(self.valid_tickers.clone(), self.ignore_words.clone())
    }
}

impl Default for TickerSentimentConfig {
    fn default() -> Self {
        Self {
            token_scanner_config: TokenScannerConfig::default(),
            valid_tickers: collect_symbols(DEFAULT_VALID_TICKERS.iter().copied()),
            ignore_words: collect_symbols(DEFAULT_IGNORE_WORDS.iter().copied()),
            document_limit: Some(DEFAULT_DOCUMENT_LIMIT),
        }
    }
}

fn collect_symbols<I, S>(symbols: I) -> TickerSymbolSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    symbols.into_iter().map(Into::into).collect()
}
