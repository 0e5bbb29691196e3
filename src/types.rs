use crate::models::AggregateRecord;
use std::collections::HashSet;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a candidate token as an owned `String`. Tokens are produced by the
/// `TokenScanner` before any allowlist or denylist filtering.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// A set of ticker symbols, used for both the allowlist and the denylist.
pub type TickerSymbolSet = HashSet<TickerSymbol>;

/// A compound sentiment score, nominally within `[-1.0, 1.0]`.
pub type SentimentScore = f64;

/// Represents the total number of accepted occurrences of a ticker symbol
/// across all processed documents.
pub type MentionCount = usize;

/// Ordered `(TickerSymbol, AggregateRecord)` pairs, in first-mention order.
pub type AggregateSnapshot = Vec<(TickerSymbol, AggregateRecord)>;
