//! Extraction of article records from search-results HTML.
//!
//! Each result is a `div.NewsArticle` card. A usable card carries:
//!
//! ```text
//! <div class="NewsArticle">
//!   <a class="thmb" title="Headline" href="https://...">...</a>
//!   <h4 class="s-title">...</h4>
//!   <span class="s-time">· 2 hours ago</span>
//!   <p class="s-desc">Snippet...</p>
//! </div>
//! ```
//!
//! Cards without the `a.thmb` link (promoted blocks, video carousels) are
//! skipped. The next page is linked from `a.next`.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::relative_time::parse_relative_time_at;
use crate::types::{ExtractedCard, NewsArticle, SearchPage};

const CARD: &str = "div.NewsArticle";
const HEADLINE: &str = "h4.s-title";
const POSTED: &str = "span.s-time";
const SNIPPET: &str = "p.s-desc";
const LINK: &str = "a.thmb";
const NEXT_PAGE: &str = "a.next";

static CARD_SEL: LazyLock<Selector> = LazyLock::new(|| selector(CARD));
static HEADLINE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(HEADLINE));
static POSTED_SEL: LazyLock<Selector> = LazyLock::new(|| selector(POSTED));
static SNIPPET_SEL: LazyLock<Selector> = LazyLock::new(|| selector(SNIPPET));
static LINK_SEL: LazyLock<Selector> = LazyLock::new(|| selector(LINK));
static NEXT_PAGE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(NEXT_PAGE));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

/// Parses a results page, evaluating relative times against the current
/// instant.
///
/// # Errors
///
/// See [`extract_page_at`].
pub fn extract_page(html: &str, cutoff: DateTime<Utc>) -> Result<SearchPage, ScraperError> {
    extract_page_at(html, cutoff, Utc::now())
}

/// Parses a results page into its usable cards (document order) and the
/// next-page `href`.
///
/// # Errors
///
/// Propagates the first fatal card error from [`extract_article`].
pub fn extract_page_at(
    html: &str,
    cutoff: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<SearchPage, ScraperError> {
    let document = Html::parse_document(html);

    let mut cards = Vec::new();
    for card in document.select(&CARD_SEL) {
        if let Some(extracted) = extract_article(card, cutoff, now)? {
            cards.push(extracted);
        }
    }

    let next_url = document
        .select(&NEXT_PAGE_SEL)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_owned);

    Ok(SearchPage { cards, next_url })
}

/// Extracts one result card.
///
/// Returns `Ok(None)` when the card has no `a.thmb` link (or the link has no
/// `href`), when the time label has an unrecognized unit, or when the card
/// was posted strictly before `cutoff`.
///
/// # Errors
///
/// - [`ScraperError::MissingElement`] if a linked card lacks its headline,
///   time, or snippet element.
/// - [`ScraperError::MalformedRelativeTime`] if the time label cannot be
///   parsed.
pub fn extract_article(
    card: ElementRef<'_>,
    cutoff: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<Option<ExtractedCard>, ScraperError> {
    let Some(link) = card.select(&LINK_SEL).next() else {
        return Ok(None);
    };
    let Some(href) = link.value().attr("href") else {
        return Ok(None);
    };

    let headline_el = require(card, &HEADLINE_SEL, HEADLINE)?;
    let posted_el = require(card, &POSTED_SEL, POSTED)?;
    let snippet_el = require(card, &SNIPPET_SEL, SNIPPET)?;

    let headline = link
        .value()
        .attr("title")
        .map_or_else(|| element_text(headline_el), str::to_owned);

    let Some(posted_at) = parse_relative_time_at(&element_text(posted_el), now)? else {
        return Ok(None);
    };
    if posted_at < cutoff {
        return Ok(None);
    }

    let text = element_text(snippet_el).replace("...", "");

    Ok(Some(ExtractedCard {
        link: href.to_owned(),
        article: NewsArticle {
            headline,
            posted_at,
            text,
        },
    }))
}

fn require<'a>(
    card: ElementRef<'a>,
    sel: &Selector,
    css: &'static str,
) -> Result<ElementRef<'a>, ScraperError> {
    card.select(sel)
        .next()
        .ok_or(ScraperError::MissingElement { selector: css })
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
