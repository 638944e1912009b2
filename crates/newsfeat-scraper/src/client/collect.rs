//! Multi-page headline collection for `NewsSearchClient`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::ScraperError;
use crate::pagination::resolve_next_url;
use crate::parse::extract_page;
use crate::types::{CompanyArticles, NewsArticle, SearchTerms};

use super::NewsSearchClient;

impl NewsSearchClient {
    /// Collects recent articles for every search term, in the caller's order.
    ///
    /// Each term gets at most `max_articles_per_search` articles posted at or
    /// after `cutoff`. Terms are processed one after another.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Self::collect_company`]; results for
    /// earlier terms are discarded.
    pub async fn collect_headlines(
        &self,
        terms: impl Into<SearchTerms>,
        cutoff: DateTime<Utc>,
        max_articles_per_search: usize,
    ) -> Result<Vec<CompanyArticles<NewsArticle>>, ScraperError> {
        let terms = terms.into();
        let mut results = Vec::with_capacity(terms.len());

        for term in &terms {
            let articles = self
                .collect_company(term, cutoff, max_articles_per_search)
                .await?;
            results.push(CompanyArticles {
                company: term.clone(),
                articles,
            });
        }

        Ok(results)
    }

    /// Follows the results pages for one term, collecting unseen articles.
    ///
    /// Every card on a fetched page is extracted; an article is kept only if
    /// its link has not been seen for this term and fewer than
    /// `max_articles_per_search` have been kept. Pagination follows `a.next`
    /// links with a fixed pause between fetches, and stops when there is no
    /// next link or once the cap has been reached on the current page.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] / [`ScraperError::UnexpectedStatus`] on a
    ///   failed fetch.
    /// - Fatal card errors from [`crate::parse::extract_article`].
    /// - [`ScraperError::PaginationLimit`] if more than the configured number
    ///   of pages would be fetched.
    pub async fn collect_company(
        &self,
        term: &str,
        cutoff: DateTime<Utc>,
        max_articles_per_search: usize,
    ) -> Result<Vec<NewsArticle>, ScraperError> {
        tracing::info!(company = term, "collecting articles");

        let mut url = self.search_url_for(term);
        let mut articles: Vec<NewsArticle> = Vec::new();
        let mut seen_links: HashSet<String> = HashSet::new();
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > self.max_pages {
                tracing::warn!(
                    company = term,
                    max_pages = self.max_pages,
                    "next-page chain did not terminate"
                );
                return Err(ScraperError::PaginationLimit {
                    company: term.to_owned(),
                    max_pages: self.max_pages,
                });
            }

            let body = self.fetch_page(&url).await?;
            let page = extract_page(&body, cutoff)?;
            let usable = page.cards.len();

            for card in page.cards {
                if articles.len() < max_articles_per_search && seen_links.insert(card.link) {
                    articles.push(card.article);
                }
            }

            tracing::debug!(
                company = term,
                page = page_count,
                %url,
                usable,
                collected = articles.len(),
                "parsed results page"
            );

            let Some(next) = page.next_url else {
                break;
            };
            if articles.len() >= max_articles_per_search {
                tracing::debug!(company = term, "article cap reached");
                break;
            }

            url = resolve_next_url(&url, &next)?;
            tokio::time::sleep(self.page_delay).await;
        }

        tracing::info!(company = term, count = articles.len(), "collected articles");
        Ok(articles)
    }
}
