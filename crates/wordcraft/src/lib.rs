//! Wordcraft: corpus preparation jobs for a spelling game.
//!
//! The game shows a correctly spelled word next to plausible misspellings.
//! This crate builds and maintains that corpus as a chain of batch jobs
//! sharing JSON files on disk:
//!
//! 1. [`ingest`] filters a raw dictionary into five difficulty tiers;
//! 2. [`synth`] generates misspellings (simple at ingestion, realistic on `improve`);
//! 3. [`scrub`] removes misspellings that are real words elsewhere in the corpus;
//! 4. [`validate`] confirms words with a dictionary service and fills in definitions;
//! 5. [`publish`] uploads new and changed entries to a remote document store.
//!
//! # Example
//!
//! ```no_run
//! use wordcraft::corpus::CorpusLayout;
//! use wordcraft::ingest::Ingestor;
//! use wordcraft::scrub::scrub_corpus;
//!
//! let layout = CorpusLayout::new("assets/data");
//! let report = Ingestor::new().run(&layout).unwrap();
//! println!("Selected {} words", report.total_selected);
//!
//! scrub_corpus(&layout).unwrap();
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod ingest;
pub mod lookup;
pub mod publish;
pub mod scrub;
pub mod synth;
pub mod validate;

pub use config::WordcraftConfig;
pub use corpus::{CombinedFile, CorpusLayout, TierFile, WordEntry};
pub use error::{Result, WordcraftError};
pub use synth::{Strategy, Synthesize};
