use crate::types::{SentimentScore, TokenRef};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Maps a text to a compound sentiment score, nominally within `[-1.0, 1.0]`.
///
/// Implementations must be deterministic for a given text. Negative scores are
/// bearish, positive scores bullish and zero neutral.
pub trait SentimentSource {
    fn score(&self, text: &TokenRef) -> SentimentScore;
}

impl<F> SentimentSource for F
where
    F: Fn(&TokenRef) -> SentimentScore,
{
    fn score(&self, text: &TokenRef) -> SentimentScore {
        self(text)
    }
}

/// Compound VADER score, tuned for social media text.
pub struct VaderSentimentSource {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSentimentSource {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderSentimentSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentSource for VaderSentimentSource {
    fn score(&self, text: &TokenRef) -> SentimentScore {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);

        scores.get("compound").copied().unwrap_or(0.0)
    }
}
