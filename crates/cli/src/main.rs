mod chat;
mod cli;
mod context;
mod error;
mod fetch;
mod resolve;
mod view;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Contexts => context::list(&cli.api),
        Commands::Open { context } => context::open(&cli.api, &context),
        Commands::View(args) => view::view(&cli.api, args),
        Commands::Resolve { input } => resolve::resolve(&input),
        Commands::Chat(args) => chat::chat(&cli.api, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
