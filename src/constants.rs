/// Tickers counted by default when no allowlist file is supplied.
pub const DEFAULT_VALID_TICKERS: &[&str] = &[
    "TSLA", "NVDA", "GME", "AMC", "AAPL", "MSFT", "AMD", "NFLX", "BA", "BABA", "FB", "META",
    "GOOG", "GOOGL", "INTC", "UBER",
];

/// Words shaped like tickers that are never counted.
pub const DEFAULT_IGNORE_WORDS: &[&str] = &["CEO", "LOL", "YOLO", "FOMO"];

pub const DEFAULT_DOCUMENT_LIMIT: usize = 100;

pub const DEFAULT_TOP_RESULTS: usize = 10;

pub const DEFAULT_SUBREDDIT: &str = "wallstreetbets";

pub const DEFAULT_REPORT_FILE_PATH: &str = "wsb_ticker_analysis.csv";

pub const AVERAGE_SENTIMENT_DECIMAL_PLACES: i32 = 3;

/// Column header used by symbol-list CSV files.
pub const SYMBOL_COLUMN_HEADER: &str = "Symbol";

pub const LISTING_USER_AGENT: &str = "ticker_sentiment_scraper_v1";
