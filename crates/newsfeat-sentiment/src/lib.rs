//! Sentiment labeling and tokenization of collected news headlines.
//!
//! Collects articles with [`newsfeat_scraper`], joins each headline with its
//! snippet, labels the text with a pretrained financial-news sentiment
//! classifier, and replaces the text with its token ids. The classifier and
//! tokenizer are traits so they can be served by TEI, loaded locally, or
//! stubbed in tests.

pub mod classifier;
pub mod error;
pub mod features;
pub mod labeler;
pub mod tokenizer;
pub mod types;

pub use classifier::{Prediction, SentimentClassifier, TeiClassifier};
pub use error::SentimentError;
pub use features::{get_embedded_features, tokenize_features, FeatureRequest};
pub use labeler::{get_labels, join_headline, label_articles};
pub use tokenizer::{LocalTokenizer, TeiTokenizer, TextTokenizer, TokenizerBackend};
pub use types::{ArticleFeatures, LabeledArticle};
