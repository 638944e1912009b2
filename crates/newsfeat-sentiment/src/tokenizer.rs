//! Subword tokenization of labeled text.
//!
//! Two backends: a Text Embeddings Inference `/tokenize` endpoint, or a
//! `tokenizer.json` loaded in-process with the `tokenizers` crate.

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SentimentError;

/// Turns one text into its ordered token ids.
pub trait TextTokenizer {
    fn encode(&self, text: &str) -> impl Future<Output = Result<Vec<u32>, SentimentError>> + Send;
}

/// Tokenizer served by a TEI `/tokenize` endpoint.
pub struct TeiTokenizer {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct TokenizeRequest<'a> {
    inputs: &'a str,
    add_special_tokens: bool,
}

#[derive(Deserialize)]
struct TokenInfo {
    id: u32,
}

impl TeiTokenizer {
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
            url: format!("{}/tokenize", base_url.trim_end_matches('/')),
        })
    }
}

impl TextTokenizer for TeiTokenizer {
    async fn encode(&self, text: &str) -> Result<Vec<u32>, SentimentError> {
        let request = TokenizeRequest {
            inputs: text,
            add_special_tokens: false,
        };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SentimentError::Tokenizer(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Tokenizer(format!(
                "TEI returned status {}",
                response.status()
            )));
        }

        // One inner list per input; a single input was sent.
        let mut batches: Vec<Vec<TokenInfo>> = response
            .json()
            .await
            .map_err(|e| SentimentError::Tokenizer(format!("response parse error: {e}")))?;

        if batches.len() != 1 {
            return Err(SentimentError::Tokenizer(format!(
                "TEI returned {} token lists for 1 input",
                batches.len()
            )));
        }

        Ok(batches.swap_remove(0).into_iter().map(|t| t.id).collect())
    }
}

/// In-process tokenizer loaded from a `tokenizer.json` file.
pub struct LocalTokenizer {
    inner: tokenizers::Tokenizer,
}

impl LocalTokenizer {
    /// Loads a tokenizer definition from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Tokenizer`] if the file is missing or invalid.
    pub fn from_file(path: &Path) -> Result<Self, SentimentError> {
        let inner = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            SentimentError::Tokenizer(format!("failed to load {}: {e}", path.display()))
        })?;
        Ok(Self { inner })
    }

    fn encode_sync(&self, text: &str) -> Result<Vec<u32>, SentimentError> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| SentimentError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }
}

impl TextTokenizer for LocalTokenizer {
    async fn encode(&self, text: &str) -> Result<Vec<u32>, SentimentError> {
        self.encode_sync(text)
    }
}

/// Tokenizer chosen at runtime from configuration.
pub enum TokenizerBackend {
    Tei(TeiTokenizer),
    Local(LocalTokenizer),
}

impl TextTokenizer for TokenizerBackend {
    async fn encode(&self, text: &str) -> Result<Vec<u32>, SentimentError> {
        match self {
            TokenizerBackend::Tei(t) => t.encode(text).await,
            TokenizerBackend::Local(t) => t.encode(text).await,
        }
    }
}
