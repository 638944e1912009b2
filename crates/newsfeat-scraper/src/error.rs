use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("malformed relative time \"{text}\": {reason}")]
    MalformedRelativeTime { text: String, reason: String },

    #[error("result card is missing expected element `{selector}`")]
    MissingElement { selector: &'static str },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("pagination limit reached for \"{company}\": exceeded {max_pages} pages")]
    PaginationLimit { company: String, max_pages: usize },
}
