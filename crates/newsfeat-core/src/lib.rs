pub mod app_config;
pub mod config;
pub mod corpus;
pub mod labels;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use corpus::{convert_corpus, parse_corpus_line, read_corpus, write_corpus_csv, CorpusRow};
pub use labels::SentimentLabel;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: no '{delimiter}' separating text from sentiment tag")]
    MalformedLine { line: usize, delimiter: char },

    #[error("line {line}: unknown sentiment tag \"{tag}\"")]
    UnknownLabel { line: usize, tag: String },

    #[error("failed to write CSV {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}
