use super::*;

#[test]
fn features_defaults() {
    let cli = Cli::try_parse_from(["newsfeat-cli", "features"]).expect("expected valid cli args");
    match cli.command {
        Commands::Features {
            companies,
            days_back,
            max_articles,
            output,
        } => {
            assert_eq!(companies, ["tesla"]);
            assert_eq!(days_back, 1);
            assert_eq!(max_articles, 50);
            assert!(output.is_none());
        }
        other => panic!("expected Features, got {other:?}"),
    }
}

#[test]
fn features_with_repeated_companies() {
    let cli = Cli::try_parse_from([
        "newsfeat-cli",
        "features",
        "--company",
        "apple",
        "--company",
        "nvidia",
        "--days-back",
        "3",
        "--max-articles",
        "10",
        "--output",
        "features.json",
    ])
    .unwrap();
    match cli.command {
        Commands::Features {
            companies,
            days_back,
            max_articles,
            output,
        } => {
            assert_eq!(companies, ["apple", "nvidia"]);
            assert_eq!(days_back, 3);
            assert_eq!(max_articles, 10);
            assert_eq!(output, Some(PathBuf::from("features.json")));
        }
        other => panic!("expected Features, got {other:?}"),
    }
}

#[test]
fn convert_corpus_defaults_to_at_delimiter() {
    let cli = Cli::try_parse_from(["newsfeat-cli", "convert-corpus"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::ConvertCorpus {
            input: None,
            output: None,
            delimiter: '@'
        }
    ));
}

#[test]
fn convert_corpus_with_paths() {
    let cli = Cli::try_parse_from([
        "newsfeat-cli",
        "convert-corpus",
        "--input",
        "in.txt",
        "--output",
        "out.csv",
        "--delimiter",
        "|",
    ])
    .unwrap();
    match cli.command {
        Commands::ConvertCorpus {
            input,
            output,
            delimiter,
        } => {
            assert_eq!(input, Some(PathBuf::from("in.txt")));
            assert_eq!(output, Some(PathBuf::from("out.csv")));
            assert_eq!(delimiter, '|');
        }
        other => panic!("expected ConvertCorpus, got {other:?}"),
    }
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["newsfeat-cli"]).is_err());
}

#[test]
fn negative_days_back_is_rejected() {
    assert!(Cli::try_parse_from(["newsfeat-cli", "features", "--days-back", "-1"]).is_err());
}
