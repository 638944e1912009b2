//! Sentiment classification service.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// One `(label, confidence)` pair from the classifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f32,
}

/// A text classifier returning one scored prediction per label.
pub trait SentimentClassifier {
    /// Classifies one text.
    fn classify(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Prediction>, SentimentError>> + Send;
}

/// Classifier served by a Text Embeddings Inference (`/predict`) endpoint.
pub struct TeiClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

impl TeiClassifier {
    /// Creates a client for the TEI server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }
}

impl SentimentClassifier for TeiClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Prediction>, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { inputs: text })
            .send()
            .await
            .map_err(|e| SentimentError::Classifier(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Classifier(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SentimentError::Classifier(format!("response parse error: {e}")))
    }
}
