use clap::Parser;
use polyglot_app::{Cli, Command};
use polyglot_core::LanguageId;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("polyglot").chain(args.iter().copied()))
}

#[test]
fn watch_parses_targets_as_comma_separated_languages() {
    let cli = parse(&[
        "watch",
        "main.cs",
        "--source",
        "CSharp",
        "--targets",
        "python,rust",
        "--api-url",
        "http://127.0.0.1:4000/api",
        "--poll-ms",
        "50",
    ])
    .unwrap();

    let Command::Watch(args) = cli.command;
    assert_eq!(args.file, std::path::PathBuf::from("main.cs"));
    assert_eq!(args.source, LanguageId::CSharp);
    assert_eq!(
        args.targets,
        Some(vec![LanguageId::Python, LanguageId::Rust])
    );
    assert_eq!(args.api_url.as_str(), "http://127.0.0.1:4000/api");
    assert_eq!(args.poll_ms, 50);
}

#[test]
fn targets_default_to_none() {
    let cli = parse(&["watch", "main.py", "--source", "python"]).unwrap();

    let Command::Watch(args) = cli.command;
    assert_eq!(args.targets, None);
    assert_eq!(args.poll_ms, 200);
}

#[test]
fn unknown_language_is_rejected() {
    assert!(parse(&["watch", "main.cob", "--source", "cobol"]).is_err());
    assert!(parse(&[
        "watch",
        "main.cs",
        "--source",
        "csharp",
        "--targets",
        "python,cobol"
    ])
    .is_err());
}

#[test]
fn source_is_required() {
    assert!(parse(&["watch", "main.cs"]).is_err());
}

#[test]
fn poll_interval_has_a_floor() {
    assert!(parse(&["watch", "main.cs", "--source", "csharp", "--poll-ms", "5"]).is_err());
}

#[test]
fn repeated_targets_are_collapsed_in_order() {
    let cli = parse(&[
        "watch",
        "main.cs",
        "--source",
        "csharp",
        "--targets",
        "python,rust,python",
    ])
    .unwrap();

    let Command::Watch(args) = cli.command;
    assert_eq!(
        args.target_override(),
        Some(vec![LanguageId::Python, LanguageId::Rust])
    );
}

#[test]
fn no_targets_means_no_override() {
    let cli = parse(&["watch", "main.cs", "--source", "csharp"]).unwrap();

    let Command::Watch(args) = cli.command;
    assert_eq!(args.target_override(), None);
}
