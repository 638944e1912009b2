use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub search_url: String,
    pub request_timeout_secs: u64,
    pub max_pages: usize,
    pub classifier_url: String,
    pub tokenizer_url: String,
    /// Local `tokenizer.json`. When set it replaces the remote tokenizer.
    pub tokenizer_path: Option<PathBuf>,
    pub corpus_input: PathBuf,
    pub corpus_output: PathBuf,
}
