use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use polyglot_core::LanguageId;
use polyglot_engine::DEFAULT_API_URL;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(about = "Live source-to-source translation in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-translate FILE every time it settles after an edit.
    /// Saving the file without changes retries the current text.
    Watch(WatchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Source file to watch
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Language the file is written in (e.g. csharp, python, rust)
    #[arg(long)]
    pub source: LanguageId,

    /// Comma-separated target languages (default: the primary languages other than the source).
    /// Repeats are ignored
    #[arg(long, value_delimiter = ',')]
    pub targets: Option<Vec<LanguageId>>,

    /// Base URL of the translation backend API
    #[arg(long, env = "POLYGLOT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// How often to check the file for changes, in milliseconds
    #[arg(long, default_value_t = 200, value_parser = clap::value_parser!(u64).range(10..))]
    pub poll_ms: u64,
}

impl WatchArgs {
    /// The explicit target set with repeats removed, first occurrence wins.
    pub fn target_override(&self) -> Option<Vec<LanguageId>> {
        let targets = self.targets.as_ref()?;
        let mut distinct = Vec::with_capacity(targets.len());
        for target in targets {
            if !distinct.contains(target) {
                distinct.push(*target);
            }
        }
        Some(distinct)
    }
}
