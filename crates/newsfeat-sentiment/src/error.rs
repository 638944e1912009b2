use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("scraper error: {0}")]
    Scraper(#[from] newsfeat_scraper::ScraperError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier error: {0}")]
    Classifier(String),

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("classifier returned no prediction for \"{text}\"")]
    EmptyPrediction { text: String },

    #[error("classifier returned unknown label \"{label}\"")]
    UnknownLabel { label: String },

    #[error("cannot look back {days} days from now")]
    InvalidDaysBack { days: u32 },
}
