//! Headline + snippet labeling.

use std::str::FromStr;

use chrono::{TimeDelta, Utc};
use newsfeat_core::SentimentLabel;
use newsfeat_scraper::{CompanyArticles, NewsArticle, NewsSearchClient, SearchTerms};

use crate::classifier::SentimentClassifier;
use crate::error::SentimentError;
use crate::types::LabeledArticle;

/// Joins a headline and snippet into the text that gets classified.
///
/// A snippet that already ends in a question mark is joined with a single
/// space; anything else gets `". "` so the headline reads as a sentence.
#[must_use]
pub fn join_headline(headline: &str, snippet: &str) -> String {
    let separator = if snippet.ends_with('?') { " " } else { ". " };
    format!("{headline}{separator}{snippet}")
}

/// Labels one text with the classifier's highest-scoring prediction.
/// Ties keep the earlier entry.
async fn classify_text<C: SentimentClassifier>(
    classifier: &C,
    text: &str,
) -> Result<SentimentLabel, SentimentError> {
    let predictions = classifier.classify(text).await?;
    let top = predictions
        .iter()
        .reduce(|best, p| if p.score > best.score { p } else { best })
        .ok_or_else(|| SentimentError::EmptyPrediction {
            text: text.to_owned(),
        })?;

    SentimentLabel::from_str(&top.label).map_err(|_| SentimentError::UnknownLabel {
        label: top.label.clone(),
    })
}

/// Replaces every article's headline, timestamp, and snippet with the joined
/// text and its sentiment label.
///
/// # Errors
///
/// - Any error returned by the classifier.
/// - [`SentimentError::EmptyPrediction`] if the classifier returns no labels.
/// - [`SentimentError::UnknownLabel`] if the top label is not one of
///   `negative`, `positive`, `neutral`.
pub async fn label_articles<C: SentimentClassifier>(
    classifier: &C,
    companies: Vec<CompanyArticles<NewsArticle>>,
) -> Result<Vec<CompanyArticles<LabeledArticle>>, SentimentError> {
    let mut labeled = Vec::with_capacity(companies.len());

    for CompanyArticles { company, articles } in companies {
        let mut out = Vec::with_capacity(articles.len());
        for article in articles {
            let text = join_headline(&article.headline, &article.text);
            let label = classify_text(classifier, &text).await?;
            out.push(LabeledArticle { text, label });
        }
        tracing::debug!(company = %company, count = out.len(), "labeled articles");
        labeled.push(CompanyArticles {
            company,
            articles: out,
        });
    }

    Ok(labeled)
}

/// Collects articles posted within the last `num_days_back` days and labels
/// them.
///
/// # Errors
///
/// - [`SentimentError::InvalidDaysBack`] if the cutoff falls outside the
///   representable date range.
/// - Collection errors as [`SentimentError::Scraper`].
/// - Any error from [`label_articles`].
pub async fn get_labels<C: SentimentClassifier>(
    client: &NewsSearchClient,
    classifier: &C,
    companies: impl Into<SearchTerms>,
    num_days_back: u32,
    max_articles_per_search: usize,
) -> Result<Vec<CompanyArticles<LabeledArticle>>, SentimentError> {
    let cutoff = TimeDelta::try_days(i64::from(num_days_back))
        .and_then(|delta| Utc::now().checked_sub_signed(delta))
        .ok_or(SentimentError::InvalidDaysBack {
            days: num_days_back,
        })?;
    let collected = client
        .collect_headlines(companies, cutoff, max_articles_per_search)
        .await?;
    label_articles(classifier, collected).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeZone;

    use super::*;
    use crate::classifier::Prediction;

    /// Returns a fixed label and records every text it sees.
    struct StubClassifier {
        label: &'static str,
        seen: Mutex<Vec<String>>,
    }

    impl StubClassifier {
        fn new(label: &'static str) -> Self {
            Self {
                label,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl SentimentClassifier for StubClassifier {
        async fn classify(&self, text: &str) -> Result<Vec<Prediction>, SentimentError> {
            self.seen.lock().unwrap().push(text.to_owned());
            if self.label.is_empty() {
                return Ok(Vec::new());
            }
            Ok(vec![
                Prediction {
                    label: self.label.to_owned(),
                    score: 0.9,
                },
                Prediction {
                    label: "neutral".to_owned(),
                    score: 0.1,
                },
            ])
        }
    }

    /// Returns the same prediction list for every text.
    struct FixedClassifier(Vec<Prediction>);

    impl SentimentClassifier for FixedClassifier {
        async fn classify(&self, _text: &str) -> Result<Vec<Prediction>, SentimentError> {
            Ok(self.0.clone())
        }
    }

    fn prediction(label: &str, score: f32) -> Prediction {
        Prediction {
            label: label.to_owned(),
            score,
        }
    }

    fn article(headline: &str, text: &str) -> NewsArticle {
        NewsArticle {
            headline: headline.to_owned(),
            posted_at: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
            text: text.to_owned(),
        }
    }

    #[test]
    fn join_uses_period_for_statement_snippet() {
        assert_eq!(
            join_headline("Tesla beats estimates", "Revenue rose 10%"),
            "Tesla beats estimates. Revenue rose 10%"
        );
    }

    #[test]
    fn join_uses_space_for_question_snippet() {
        assert_eq!(
            join_headline("Is Tesla a buy", "Analysts weigh in?"),
            "Is Tesla a buy Analysts weigh in?"
        );
    }

    #[test]
    fn join_with_empty_snippet() {
        assert_eq!(join_headline("Headline", ""), "Headline. ");
    }

    #[tokio::test]
    async fn labels_each_article_with_top_prediction() {
        let classifier = StubClassifier::new("Positive");
        let companies = vec![CompanyArticles {
            company: "tesla".to_owned(),
            articles: vec![article("Up", "Shares gained"), article("Why", "Is it up?")],
        }];

        let labeled = label_articles(&classifier, companies).await.unwrap();

        assert_eq!(labeled[0].company, "tesla");
        assert_eq!(
            labeled[0].articles,
            vec![
                LabeledArticle {
                    text: "Up. Shares gained".to_owned(),
                    label: SentimentLabel::Positive,
                },
                LabeledArticle {
                    text: "Why Is it up?".to_owned(),
                    label: SentimentLabel::Positive,
                },
            ]
        );
        assert_eq!(
            *classifier.seen.lock().unwrap(),
            vec!["Up. Shares gained".to_owned(), "Why Is it up?".to_owned()]
        );
    }

    #[tokio::test]
    async fn unknown_classifier_label_is_fatal() {
        let classifier = StubClassifier::new("LABEL_3");
        let companies = vec![CompanyArticles {
            company: "tesla".to_owned(),
            articles: vec![article("Up", "Shares gained")],
        }];

        let err = label_articles(&classifier, companies).await.unwrap_err();
        assert!(
            matches!(err, SentimentError::UnknownLabel { ref label } if label == "LABEL_3"),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn empty_prediction_is_fatal() {
        let classifier = StubClassifier::new("");
        let companies = vec![CompanyArticles {
            company: "tesla".to_owned(),
            articles: vec![article("Up", "Shares gained")],
        }];

        let err = label_articles(&classifier, companies).await.unwrap_err();
        assert!(matches!(err, SentimentError::EmptyPrediction { .. }));
    }

    #[tokio::test]
    async fn company_without_articles_is_kept() {
        let classifier = StubClassifier::new("neutral");
        let companies = vec![CompanyArticles {
            company: "quiet corp".to_owned(),
            articles: Vec::new(),
        }];

        let labeled = label_articles(&classifier, companies).await.unwrap();
        assert_eq!(labeled.len(), 1);
        assert!(labeled[0].articles.is_empty());
        assert!(classifier.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn highest_score_wins_regardless_of_order() {
        let classifier = FixedClassifier(vec![
            prediction("neutral", 0.15),
            prediction("negative", 0.05),
            prediction("positive", 0.8),
        ]);
        let companies = vec![CompanyArticles {
            company: "tesla".to_owned(),
            articles: vec![article("Up", "Shares gained")],
        }];

        let labeled = label_articles(&classifier, companies).await.unwrap();
        assert_eq!(labeled[0].articles[0].label, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn tied_scores_keep_first_prediction() {
        let classifier =
            FixedClassifier(vec![prediction("negative", 0.5), prediction("neutral", 0.5)]);
        let companies = vec![CompanyArticles {
            company: "tesla".to_owned(),
            articles: vec![article("Flat", "No change")],
        }];

        let labeled = label_articles(&classifier, companies).await.unwrap();
        assert_eq!(labeled[0].articles[0].label, SentimentLabel::Negative);
    }

    #[tokio::test]
    async fn out_of_range_days_back_is_error() {
        // Unroutable base URL: the call must fail before any request.
        let client = NewsSearchClient::with_base_url("http://127.0.0.1:9/search", 1).unwrap();
        let classifier = StubClassifier::new("positive");

        let err = get_labels(&client, &classifier, "tesla", u32::MAX, 5)
            .await
            .unwrap_err();
        assert!(
            matches!(err, SentimentError::InvalidDaysBack { days } if days == u32::MAX),
            "unexpected error: {err:?}"
        );
        assert!(classifier.seen.lock().unwrap().is_empty());
    }
}
