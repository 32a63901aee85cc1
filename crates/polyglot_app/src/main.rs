use std::path::PathBuf;

use clap::Parser;
use polyglot_app::{watch, Cli, Command};
use polyglot_logging::{level_from_env, LevelFilter, LogDestination};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout belongs to the rendered translations.
    polyglot_logging::initialize(
        LogDestination::File(PathBuf::from("./polyglot.log")),
        level_from_env("POLYGLOT_LOG", LevelFilter::Info),
    );

    match cli.command {
        Command::Watch(args) => watch(args).await,
    }
}
