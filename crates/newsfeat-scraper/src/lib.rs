pub mod client;
pub mod error;
pub mod pagination;
pub mod parse;
pub mod relative_time;
pub mod types;

pub use client::{NewsSearchClient, DEFAULT_MAX_PAGES, DEFAULT_SEARCH_URL, PAGE_DELAY};
pub use error::ScraperError;
pub use parse::{extract_article, extract_page, extract_page_at};
pub use relative_time::{parse_relative_time, parse_relative_time_at};
pub use types::{CompanyArticles, ExtractedCard, NewsArticle, SearchPage, SearchTerms};
