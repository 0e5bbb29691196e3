use crate::types::{TickerSymbolSet, TokenRef};

/// Returns `true` when `candidate` is allowlisted and not denylisted.
///
/// The denylist always wins, even if a symbol was placed in both sets.
pub fn is_accepted(
    candidate: &TokenRef,
    valid_tickers: &TickerSymbolSet,
    ignore_words: &TickerSymbolSet,
) -> bool {
    valid_tickers.contains(candidate) && !ignore_words.contains(candidate)
}

/// Allowlist/denylist pair used to decide which candidates count as tickers.
#[derive(Debug, Clone, Default)]
pub struct TickerFilter {
    valid_tickers: TickerSymbolSet,
    ignore_words: TickerSymbolSet,
}

impl TickerFilter {
    pub fn new(valid_tickers: TickerSymbolSet, ignore_words: TickerSymbolSet) -> Self {
        Self {
            valid_tickers,
            ignore_words,
        }
    }

    pub fn is_accepted(&self, candidate: &TokenRef) -> bool {
        is_accepted(candidate, &self.valid_tickers, &self.ignore_words)
    }

    pub fn valid_tickers(&self) -> &TickerSymbolSet {
        &self.valid_tickers
    }

    pub fn ignore_words(&self) -> &TickerSymbolSet {
        &self.ignore_words
    }
}
