use newsfeat_core::SentimentLabel;
use serde::Serialize;

/// An article after labeling: headline and snippet joined into one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledArticle {
    pub text: String,
    pub label: SentimentLabel,
}

/// Final model-ready record. Serializes as `{"text": [ids], "label": code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleFeatures {
    pub text: Vec<u32>,
    pub label: SentimentLabel,
}
