use chrono::{DateTime, Utc};
use serde::Serialize;

/// A usable search result, after recency filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsArticle {
    /// Taken from the result link's `title` attribute.
    pub headline: String,
    /// Absolute time derived from the card's "N units ago" label.
    pub posted_at: DateTime<Utc>,
    /// Snippet text with every literal `...` removed.
    pub text: String,
}

/// An extracted card together with the link used for deduplication.
///
/// The link never leaves the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCard {
    pub link: String,
    pub article: NewsArticle,
}

/// Usable cards from one results page plus the next-page link, if any.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub cards: Vec<ExtractedCard>,
    pub next_url: Option<String>,
}

/// Articles found for one search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyArticles<T> {
    pub company: String,
    pub articles: Vec<T>,
}

/// Ordered, de-duplicated list of company search terms.
///
/// A single string converts into a one-element list. Repeated terms keep
/// their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    #[must_use]
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.into();
            if !out.contains(&term) {
                out.push(term);
            }
        }
        Self(out)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchTerms {
    fn from(term: &str) -> Self {
        Self::new([term])
    }
}

impl From<String> for SearchTerms {
    fn from(term: String) -> Self {
        Self::new([term])
    }
}

impl From<Vec<String>> for SearchTerms {
    fn from(terms: Vec<String>) -> Self {
        Self::new(terms)
    }
}

impl From<Vec<&str>> for SearchTerms {
    fn from(terms: Vec<&str>) -> Self {
        Self::new(terms)
    }
}

impl From<&[&str]> for SearchTerms {
    fn from(terms: &[&str]) -> Self {
        Self::new(terms.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for SearchTerms {
    fn from(terms: [&str; N]) -> Self {
        Self::new(terms)
    }
}

impl<'a> IntoIterator for &'a SearchTerms {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
