use ticker_sentiment::{analyze_ticker_sentiment, Document, VaderSentimentSource};

fn main() {
    env_logger::init();

    let titles = [
        "TSLA to the moon!",
        "TSLA and GME both mooning, ignore CEO hype",
        "AMC bagholders unite",
    ];

    let documents = titles.iter().map(|title| Document::new(*title));
    let results = analyze_ticker_sentiment(documents, &VaderSentimentSource::new());

    println!("Ticker sentiment for {} titles", titles.len());
    for result in results {
        println!(
            "{}: {} mentions, average sentiment {:.3}",
            result.ticker, result.mentions, result.average_sentiment
        );
    }
}
