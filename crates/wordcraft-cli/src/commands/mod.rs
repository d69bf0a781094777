//! CLI command implementations.

pub mod check;
pub mod improve;
pub mod ingest;
pub mod publish;
pub mod scrub;
pub mod synth;
pub mod validate;

use colored::Colorize;
use wordcraft::{CorpusLayout, WordcraftConfig};

use crate::cli::Cli;

/// Settings shared by every command.
pub struct Context {
    pub config: WordcraftConfig,
    pub layout: CorpusLayout,
    pub verbose: bool,
    pub yes: bool,
}

impl Context {
    /// Load the config file, then apply environment and flag overrides.
    pub fn load(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = WordcraftConfig::discover(cli.config.as_deref())?.with_env_overrides();
        if let Some(dir) = &cli.data_dir {
            config.paths.data_dir = dir.clone();
        }
        let layout = config.layout();
        tracing::debug!(data_dir = %config.paths.data_dir.display(), "loaded config");

        Ok(Self {
            config,
            layout,
            verbose: cli.verbose,
            yes: cli.yes,
        })
    }
}

/// Comma-separated list with a trailing ellipsis when `total` exceeds it.
pub fn sample_list(items: &[String], total: usize) -> String {
    let mut out = items.join(", ");
    if total > items.len() {
        out.push_str(", ...");
    }
    out
}

pub fn cancelled() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Cancelled.".yellow());
    Ok(())
}
