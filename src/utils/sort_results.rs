use crate::models::ResultRow;

/// Sorts report rows for deterministic output.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by mentions in descending order (most mentioned first).
/// - **Secondary:** If two tickers have the same mention count, sorts by ticker
///   symbol in ascending lexicographical order.
///
/// ### Example:
/// ```rust
/// use ticker_sentiment::utils::sort_results;
/// use ticker_sentiment::ResultRow;
///
/// let row = |ticker: &str, mentions| ResultRow {
///     ticker: ticker.to_string(),
///     mentions,
///     average_sentiment: 0.0,
/// };
///
/// let sorted = sort_results(vec![row("GME", 3), row("TSLA", 5), row("AMC", 3)]);
/// let tickers: Vec<&str> = sorted.iter().map(|r| r.ticker.as_str()).collect();
/// assert_eq!(tickers, vec!["TSLA", "AMC", "GME"]);
/// ```
pub fn sort_results(mut results: Vec<ResultRow>) -> Vec<ResultRow> {
    results.sort_by(|a, b| {
        b.mentions
            .cmp(&a.mentions) // Sort by mentions (descending)
            .then_with(|| a.ticker.cmp(&b.ticker)) // Secondary sort by ticker symbol (ascending)
    });

    results
}
