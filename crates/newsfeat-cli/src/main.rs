mod corpus;
mod features;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsfeat-cli")]
#[command(about = "News headline sentiment features and corpus conversion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect recent headlines, label their sentiment, and tokenize them
    Features {
        /// Company search term; repeat for several companies
        #[arg(long = "company", default_value = "tesla")]
        companies: Vec<String>,

        /// Only keep articles posted within this many days
        #[arg(long, default_value_t = 1)]
        days_back: u32,

        /// Maximum articles kept per company
        #[arg(long, default_value_t = 50)]
        max_articles: usize,

        /// Write the JSON feature list here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Convert a delimited sentence corpus into a Text,Label CSV
    ConvertCorpus {
        /// Corpus file (defaults to NEWSFEAT_CORPUS_INPUT)
        #[arg(long)]
        input: Option<PathBuf>,

        /// CSV destination (defaults to NEWSFEAT_CORPUS_OUTPUT)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Character separating the sentence from its sentiment tag
        #[arg(long, default_value_t = newsfeat_core::corpus::DEFAULT_DELIMITER)]
        delimiter: char,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = newsfeat_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Features {
            companies,
            days_back,
            max_articles,
            output,
        } => {
            features::run_features(&config, companies, days_back, max_articles, output.as_deref())
                .await
        }
        Commands::ConvertCorpus {
            input,
            output,
            delimiter,
        } => corpus::run_convert_corpus(&config, input, output, delimiter),
    }
}

#[cfg(test)]
mod tests;
