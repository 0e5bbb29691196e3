use crate::constants::LISTING_USER_AGENT;
use crate::models::{Document, Error};
use crate::utils::read_documents_from_listing_json;
use log::debug;
use reqwest::blocking::Client;

/// Blocking client for a subreddit's "hot" listing.
pub struct ListingClient {
    client: Client,
    base_url: String,
}

impl ListingClient {
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://www.reddit.com")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(LISTING_USER_AGENT)
            .build()
            .map_err(|e| Error::RetrievalFailure(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn hot_listing_url(&self, subreddit: &str, limit: usize) -> String {
        format!(
            "{}/r/{}/hot.json?limit={}",
            self.base_url.trim_end_matches('/'),
            subreddit,
            limit
        )
    }

    /// Fetches up to `limit` posts from the subreddit's hot listing.
    pub fn fetch_hot(&self, subreddit: &str, limit: usize) -> Result<Vec<Document>, Error> {
        let url = self.hot_listing_url(subreddit, limit);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::RetrievalFailure(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RetrievalFailure(format!(
                "Request to {} returned {}",
                url, status
            )));
        }

        let body = response.text().map_err(|e| {
            Error::RetrievalFailure(format!("Failed to read response from {}: {}", url, e))
        })?;

        read_documents_from_listing_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_listing_url() {
        let client = ListingClient::with_base_url("http://localhost:8080/").unwrap();

        assert_eq!(
            client.hot_listing_url("wallstreetbets", 100),
            "http://localhost:8080/r/wallstreetbets/hot.json?limit=100"
        );
    }
}
