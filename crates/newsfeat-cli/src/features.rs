//! `features` command: collect, label, tokenize, and emit JSON.

use std::path::Path;

use anyhow::Context;
use newsfeat_core::AppConfig;
use newsfeat_scraper::{NewsSearchClient, SearchTerms};
use newsfeat_sentiment::{
    get_embedded_features, FeatureRequest, LocalTokenizer, TeiClassifier, TeiTokenizer,
    TokenizerBackend,
};

/// Build the tokenizer named by configuration: a local `tokenizer.json` when
/// `NEWSFEAT_TOKENIZER_PATH` is set, the TEI endpoint otherwise.
fn build_tokenizer(config: &AppConfig) -> anyhow::Result<TokenizerBackend> {
    let backend = match &config.tokenizer_path {
        Some(path) => TokenizerBackend::Local(LocalTokenizer::from_file(path)?),
        None => TokenizerBackend::Tei(TeiTokenizer::new(
            &config.tokenizer_url,
            config.request_timeout_secs,
        )?),
    };
    Ok(backend)
}

/// Run the full scraping pipeline and write the feature records as JSON.
///
/// # Errors
///
/// Returns an error if any client cannot be built, any stage of the pipeline
/// fails, or the output file cannot be written.
pub(crate) async fn run_features(
    config: &AppConfig,
    companies: Vec<String>,
    days_back: u32,
    max_articles: usize,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let client = NewsSearchClient::with_base_url(&config.search_url, config.request_timeout_secs)
        .context("failed to build news search client")?
        .with_max_pages(config.max_pages);
    let classifier = TeiClassifier::new(&config.classifier_url, config.request_timeout_secs)
        .context("failed to build classifier client")?;
    let tokenizer = build_tokenizer(config)?;

    let request = FeatureRequest {
        companies: SearchTerms::from(companies),
        num_days_back: days_back,
        max_articles_per_search: max_articles,
    };

    let features = get_embedded_features(&client, &classifier, &tokenizer, &request).await?;
    let json = serde_json::to_string_pretty(&features)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "wrote {} feature records to {}",
                features.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
