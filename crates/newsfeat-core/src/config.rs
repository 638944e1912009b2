use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SEARCH_URL: &str = "https://news.search.yahoo.com/search";
pub const DEFAULT_CORPUS_INPUT: &str = "base-data/FinancialPhraseBank/Sentences_75Agree.txt";
pub const DEFAULT_CORPUS_OUTPUT: &str = "base-data/FinancialPhraseBank/all-data-75-above.csv";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so parsing
/// can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("NEWSFEAT_LOG_LEVEL", "info");
    let search_url = or_default("NEWSFEAT_SEARCH_URL", DEFAULT_SEARCH_URL);
    let request_timeout_secs = parse_u64("NEWSFEAT_REQUEST_TIMEOUT_SECS", "30")?;
    let max_pages = parse_usize("NEWSFEAT_MAX_PAGES", "200")?;
    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEWSFEAT_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let classifier_url = or_default("NEWSFEAT_CLASSIFIER_URL", "http://localhost:8080");
    let tokenizer_url = or_default("NEWSFEAT_TOKENIZER_URL", "http://localhost:8081");
    let tokenizer_path = lookup("NEWSFEAT_TOKENIZER_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let corpus_input = PathBuf::from(or_default("NEWSFEAT_CORPUS_INPUT", DEFAULT_CORPUS_INPUT));
    let corpus_output = PathBuf::from(or_default("NEWSFEAT_CORPUS_OUTPUT", DEFAULT_CORPUS_OUTPUT));

    Ok(AppConfig {
        log_level,
        search_url,
        request_timeout_secs,
        max_pages,
        classifier_url,
        tokenizer_url,
        tokenizer_path,
        corpus_input,
        corpus_output,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
