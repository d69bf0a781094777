//! Wordcraft CLI - corpus preparation jobs for a spelling game.

mod cli;
mod commands;
mod prompt;

use clap::Parser;
use cli::{Cli, Commands};
use commands::Context;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = Context::load(&cli).and_then(|ctx| match cli.command {
        Commands::Ingest {
            target,
            strategy,
            seed,
        } => commands::ingest::run(&ctx, target, strategy, seed),

        Commands::Synth {
            words,
            strategy,
            seed,
            json,
        } => commands::synth::run(words, strategy, seed, json),

        Commands::Improve { strategy, seed } => commands::improve::run(&ctx, strategy, seed),

        Commands::Scrub => commands::scrub::run(&ctx),

        Commands::Check { json } => commands::check::run(&ctx, json),

        Commands::Validate {
            batch_size,
            base_url,
        } => commands::validate::run(&ctx, batch_size, base_url),

        Commands::Publish {
            collection,
            dry_run,
        } => commands::publish::run(&ctx, collection, dry_run),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "wordcraft=debug" } else { "wordcraft=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
