//! `convert-corpus` command.

use std::path::PathBuf;

use newsfeat_core::AppConfig;

pub(crate) fn run_convert_corpus(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    delimiter: char,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| config.corpus_input.clone());
    let output = output.unwrap_or_else(|| config.corpus_output.clone());

    let rows = newsfeat_core::convert_corpus(&input, &output, delimiter)?;
    println!("wrote {rows} rows to {}", output.display());
    Ok(())
}
