//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wordcraft::Strategy;

/// Wordcraft: corpus preparation jobs for a spelling game
#[derive(Parser)]
#[command(name = "wordcraft")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./wordcraft.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the corpus files (overrides the config file)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the tier and combined files from the raw dictionary
    Ingest {
        /// Words sampled per difficulty tier
        #[arg(short, long)]
        target: Option<usize>,

        /// Misspelling strategy for new entries (simple, realistic)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Fixed seed for sampling, shuffling and synthesis
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print misspellings for one or more words
    Synth {
        /// Words to misspell
        #[arg(value_name = "WORD", required = true)]
        words: Vec<String>,

        /// Misspelling strategy (simple, realistic)
        #[arg(short, long, default_value = "realistic")]
        strategy: Strategy,

        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Regenerate every misspelling in the combined file
    Improve {
        /// Misspelling strategy (simple, realistic)
        #[arg(short, long, default_value = "realistic")]
        strategy: Strategy,

        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Remove misspellings that are correct spellings elsewhere in the corpus
    Scrub,

    /// Report misspelling/correct-spelling collisions without changing anything
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Confirm words with the dictionary service and fill in definitions
    Validate {
        /// Words per batch
        #[arg(short, long)]
        batch_size: Option<usize>,

        /// Dictionary endpoint (the word is appended to it)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Upload new and changed entries to the remote collection
    Publish {
        /// Remote collection name
        #[arg(long)]
        collection: Option<String>,

        /// Show the change summary and stop
        #[arg(long)]
        dry_run: bool,
    },
}
