//! Tokenized feature extraction: the end of the scraping pipeline.

use newsfeat_scraper::{CompanyArticles, NewsSearchClient, SearchTerms};

use crate::classifier::SentimentClassifier;
use crate::error::SentimentError;
use crate::labeler::get_labels;
use crate::tokenizer::TextTokenizer;
use crate::types::{ArticleFeatures, LabeledArticle};

/// Parameters for [`get_embedded_features`].
#[derive(Debug, Clone)]
pub struct FeatureRequest {
    pub companies: SearchTerms,
    pub num_days_back: u32,
    pub max_articles_per_search: usize,
}

impl Default for FeatureRequest {
    fn default() -> Self {
        Self {
            companies: SearchTerms::from("tesla"),
            num_days_back: 1,
            max_articles_per_search: 50,
        }
    }
}

/// Replaces each labeled text with its token ids and flattens the result in
/// company order, then article order.
///
/// # Errors
///
/// Returns the first tokenizer error.
pub async fn tokenize_features<T: TextTokenizer>(
    tokenizer: &T,
    labeled: Vec<CompanyArticles<LabeledArticle>>,
) -> Result<Vec<ArticleFeatures>, SentimentError> {
    let mut features = Vec::with_capacity(labeled.iter().map(|c| c.articles.len()).sum());

    for company in labeled {
        for article in company.articles {
            let ids = tokenizer.encode(&article.text).await?;
            features.push(ArticleFeatures {
                text: ids,
                label: article.label,
            });
        }
    }

    Ok(features)
}

/// Collects, labels, and tokenizes recent articles for the requested
/// companies.
///
/// # Errors
///
/// Propagates any collection, classification, or tokenization error.
pub async fn get_embedded_features<C, T>(
    client: &NewsSearchClient,
    classifier: &C,
    tokenizer: &T,
    request: &FeatureRequest,
) -> Result<Vec<ArticleFeatures>, SentimentError>
where
    C: SentimentClassifier,
    T: TextTokenizer,
{
    let labeled = get_labels(
        client,
        classifier,
        request.companies.clone(),
        request.num_days_back,
        request.max_articles_per_search,
    )
    .await?;

    let features = tokenize_features(tokenizer, labeled).await?;
    tracing::info!(count = features.len(), "built feature records");
    Ok(features)
}
