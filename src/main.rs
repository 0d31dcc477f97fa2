// gh-cache: list GitHub Actions caches from the terminal.

mod cli;
mod commands;
mod display;
mod error;
mod github;
mod repo;

use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let result = match &cli.command {
        Commands::List(args) => commands::run_list(cli.repo.as_deref(), args).await,
    };

    if let Err(e) = result {
        log::debug!("{:?}", e.source);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
