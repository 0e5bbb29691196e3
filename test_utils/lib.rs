use std::{fs, path::Path};
use ticker_sentiment::{
    analyze_ticker_sentiment_with_custom_config, utils::read_documents_from_lines, MentionCount,
    ResultRow, TickerSentimentConfig, TickerSymbol,
};
pub mod constants;

const NEUTRAL_SENTIMENT: fn(&str) -> f64 = |_| 0.0;

// Helper function to get the expected `(ticker, mentions)` pairs from the text file
pub fn get_expected_mentions(file_path: &Path) -> Vec<(TickerSymbol, MentionCount)> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("EXPECTED:"))
        .map(|expected| {
            let mut parts = expected.split_whitespace();
            let ticker = parts.next().expect("EXPECTED line without a ticker");
            let mentions = parts
                .next()
                .expect("EXPECTED line without a mention count")
                .parse()
                .expect("Mention count is not a number");
            (ticker.to_string(), mentions)
        })
        .collect()
}

// Helper function to strip the fixture annotations, leaving only titles
pub fn get_fixture_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(test_file_path: &Path, config: &TickerSentimentConfig) -> Vec<ResultRow> {
    let documents = read_documents_from_lines(&get_fixture_text(test_file_path));

    let results =
        analyze_ticker_sentiment_with_custom_config(config, documents, &NEUTRAL_SENTIMENT);

    let expected_mentions = get_expected_mentions(test_file_path);

    let actual_mentions: Vec<(TickerSymbol, MentionCount)> = results
        .iter()
        .map(|result| (result.ticker.clone(), result.mentions))
        .collect();

    // Fixtures list their expectations in report order
    assert_eq!(
        actual_mentions,
        expected_mentions,
        "{} - Expected {:?} but found {:?}",
        test_file_path.display(),
        expected_mentions,
        actual_mentions
    );

    results
}
