use clap::Parser;
use log::{error, info};
use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::PathBuf;
use ticker_sentiment::constants::{
    DEFAULT_DOCUMENT_LIMIT, DEFAULT_REPORT_FILE_PATH, DEFAULT_SUBREDDIT, DEFAULT_TOP_RESULTS,
};
use ticker_sentiment::utils::{
    read_documents_from_lines, read_documents_from_listing_json, read_documents_from_path,
    read_ticker_symbol_list_from_path, top_results, write_report_csv_to_path,
};
use ticker_sentiment::{
    analyze_ticker_sentiment_with_custom_config, Document, Error, TickerSentimentConfig,
    VaderSentimentSource,
};

/// Rank stock ticker mentions in post titles by count and average sentiment.
#[derive(Debug, Parser)]
#[command(name = "ticker-sentiment-cli", version, about)]
struct Cli {
    /// Listing JSON or newline-delimited titles; `-` reads stdin.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Subreddit fetched when no input is given.
    #[arg(long, default_value = DEFAULT_SUBREDDIT)]
    subreddit: String,

    /// Maximum number of posts to process.
    #[arg(long, default_value_t = DEFAULT_DOCUMENT_LIMIT)]
    limit: usize,

    /// CSV file with a `Symbol` column replacing the default allowlist.
    #[arg(long)]
    valid_tickers: Option<PathBuf>,

    /// CSV file with a `Symbol` column replacing the default denylist.
    #[arg(long)]
    ignore_words: Option<PathBuf>,

    /// Where the CSV report is written.
    #[arg(long, default_value = DEFAULT_REPORT_FILE_PATH)]
    output: PathBuf,

    /// Number of rows printed to the console.
    #[arg(long, default_value_t = DEFAULT_TOP_RESULTS)]
    top: usize,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = TickerSentimentConfig::default().with_document_limit(Some(cli.limit));

    if let Some(path) = &cli.valid_tickers {
        config.valid_tickers = read_ticker_symbol_list_from_path(path)?;
    }

    if let Some(path) = &cli.ignore_words {
        config.ignore_words = read_ticker_symbol_list_from_path(path)?;
    }

    let documents = load_documents(cli)?;
    info!("Loaded {} documents", documents.len());

    let sentiment_source = VaderSentimentSource::new();
    let results =
        analyze_ticker_sentiment_with_custom_config(&config, documents, &sentiment_source);

    write_report_csv_to_path(&cli.output, &results)?;
    info!("Wrote {} rows to {}", results.len(), cli.output.display());

    println!("Top trending stocks on r/{}:\n", cli.subreddit);
    for result in top_results(&results, cli.top) {
        println!(
            "{}: {} mentions, average sentiment {:.3}",
            result.ticker, result.mentions, result.average_sentiment
        );
    }

    Ok(())
}

fn load_documents(cli: &Cli) -> Result<Vec<Document>, Error> {
    match &cli.input {
        Some(path) if path.as_os_str() == OsStr::new("-") => {
            // Read the input from stdin
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).map_err(|e| {
                Error::RetrievalFailure(format!("Failed to read from stdin: {}", e))
            })?;

            if input.trim_start().starts_with('{') {
                read_documents_from_listing_json(&input)
            } else {
                Ok(read_documents_from_lines(&input))
            }
        }
        Some(path) => read_documents_from_path(path),
        None => fetch_documents(cli),
    }
}

#[cfg(feature = "fetch")]
fn fetch_documents(cli: &Cli) -> Result<Vec<Document>, Error> {
    ticker_sentiment::ListingClient::new()?.fetch_hot(&cli.subreddit, cli.limit)
}

#[cfg(not(feature = "fetch"))]
fn fetch_documents(_cli: &Cli) -> Result<Vec<Document>, Error> {
    Err(Error::RetrievalFailure(
        "No --input given and the `fetch` feature is disabled".to_string(),
    ))
}
