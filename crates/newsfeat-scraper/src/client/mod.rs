//! HTTP client for the news search results pages.

mod collect;

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Url};

use crate::error::ScraperError;

pub use newsfeat_core::config::DEFAULT_SEARCH_URL;

/// Pause between consecutive page fetches for one search term.
pub const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Upper bound on pages followed for one search term.
pub const DEFAULT_MAX_PAGES: usize = 200;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.83 Safari/537.36 Edg/85.0.564.44";

/// Client for a news search results site.
///
/// Use [`NewsSearchClient::new`] for the public endpoint or
/// [`NewsSearchClient::with_base_url`] to point at a mock server in tests.
pub struct NewsSearchClient {
    client: Client,
    search_url: String,
    page_delay: Duration,
    max_pages: usize,
}

impl NewsSearchClient {
    /// Creates a client for the public news search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ScraperError> {
        Self::with_base_url(DEFAULT_SEARCH_URL, timeout_secs)
    }

    /// Creates a client against a custom search URL.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `search_url` is not an absolute
    /// URL, or [`ScraperError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_url(search_url: &str, timeout_secs: u64) -> Result<Self, ScraperError> {
        Url::parse(search_url).map_err(|e| ScraperError::InvalidUrl {
            url: search_url.to_owned(),
            reason: e.to_string(),
        })?;

        // reqwest negotiates gzip/deflate/br itself and decodes the body.
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            search_url: search_url.trim_end_matches('?').to_owned(),
            page_delay: PAGE_DELAY,
            max_pages: DEFAULT_MAX_PAGES,
        })
    }

    /// Overrides the delay between page fetches. Tests use `Duration::ZERO`.
    #[must_use]
    pub fn with_page_delay(mut self, page_delay: Duration) -> Self {
        self.page_delay = page_delay;
        self
    }

    /// Overrides the per-term page limit.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// First results page URL for a search term.
    #[must_use]
    pub fn search_url_for(&self, term: &str) -> String {
        let encoded = utf8_percent_encode(term, NON_ALPHANUMERIC);
        format!("{}?p={encoded}", self.search_url)
    }

    /// Fetches one results page and returns its HTML body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "*/*")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, "https://www.google.com")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
