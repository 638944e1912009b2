//! Next-page link resolution.
//!
//! The results page links to its successor with an `a.next` anchor. The
//! `href` is normally absolute, but relative and scheme-relative forms are
//! resolved against the page that contained them.

use reqwest::Url;

use crate::error::ScraperError;

/// Resolves the next-page `href` found on `current_url`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `current_url` is not absolute or
/// the joined URL is invalid.
pub fn resolve_next_url(current_url: &str, href: &str) -> Result<String, ScraperError> {
    let base = Url::parse(current_url).map_err(|e| ScraperError::InvalidUrl {
        url: current_url.to_owned(),
        reason: e.to_string(),
    })?;
    let next = base.join(href.trim()).map_err(|e| ScraperError::InvalidUrl {
        url: href.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(next.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_href_is_kept() {
        let next = resolve_next_url(
            "https://news.search.yahoo.com/search?p=tesla",
            "https://news.search.yahoo.com/search?p=tesla&b=11",
        )
        .unwrap();
        assert_eq!(next, "https://news.search.yahoo.com/search?p=tesla&b=11");
    }

    #[test]
    fn relative_href_resolves_against_current_page() {
        let next = resolve_next_url(
            "https://news.search.yahoo.com/search?p=tesla",
            "/search?p=tesla&b=11",
        )
        .unwrap();
        assert_eq!(next, "https://news.search.yahoo.com/search?p=tesla&b=11");
    }

    #[test]
    fn scheme_relative_href_takes_current_scheme() {
        let next = resolve_next_url(
            "https://news.search.yahoo.com/search?p=tesla",
            "//news.search.yahoo.com/search?p=tesla&b=21",
        )
        .unwrap();
        assert_eq!(next, "https://news.search.yahoo.com/search?p=tesla&b=21");
    }

    #[test]
    fn relative_current_url_is_rejected() {
        let err = resolve_next_url("/search?p=tesla", "/search?b=11").unwrap_err();
        assert!(matches!(err, ScraperError::InvalidUrl { .. }));
    }
}
