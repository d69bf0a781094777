//! Misspelling synthesis.
//!
//! Two independent strategies exist and are never composed:
//!
//! - **simple**: a handful of deterministic rewrites, used by ingestion to
//!   give every new entry something to start with;
//! - **realistic**: a curated table of real-world mistakes, falling back to
//!   shuffled rule families (phonetic, vowel, silent letter, doubling,
//!   suffix, prefix, transposition, insertion/deletion) with rejection
//!   sampling. Used by the `improve` job.
//!
//! # Example
//!
//! ```
//! use wordcraft::synth::{Strategy, Synthesize};
//!
//! let mut synth = Strategy::Realistic.build_seeded(7);
//! let misspellings = synth.synthesize("definitely");
//! assert_eq!(misspellings, vec!["definately", "definatly"]);
//! ```

mod generator;
mod improve;
mod rules;
mod simple;
mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use generator::{MisspellingGenerator, TARGET_MISSPELLINGS};
pub use improve::{improve_corpus, improve_entries, ImproveReport, Improvement, IMPROVE_BACKUP_LABEL};
pub use rules::{default_rules, Family, Rule, Transform};
pub use simple::SimpleSynthesizer;
pub use table::{known_misspellings, table_len};

/// Shortest misspelling worth showing to a player.
pub const MIN_MISSPELLING_LEN: usize = 3;

pub(crate) const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Something that turns a correct spelling into plausible misspellings.
pub trait Synthesize {
    /// Produce misspellings for `word`. Never contains `word` itself.
    fn synthesize(&mut self, word: &str) -> Vec<String>;

    /// Get the name of this synthesizer (for logging).
    fn name(&self) -> &str;
}

/// Which synthesizer a job should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Simple,
    Realistic,
}

impl Strategy {
    /// Build the synthesizer with an entropy-seeded RNG.
    pub fn build(self) -> Box<dyn Synthesize + Send> {
        match self {
            Strategy::Simple => Box::new(SimpleSynthesizer::new()),
            Strategy::Realistic => Box::new(MisspellingGenerator::new()),
        }
    }

    /// Build the synthesizer with a fixed seed.
    pub fn build_seeded(self, seed: u64) -> Box<dyn Synthesize + Send> {
        match self {
            Strategy::Simple => Box::new(SimpleSynthesizer::new()),
            Strategy::Realistic => Box::new(MisspellingGenerator::with_seed(seed)),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" | "basic" => Ok(Strategy::Simple),
            "realistic" | "better" => Ok(Strategy::Realistic),
            _ => Err(format!("Unknown strategy: {}. Use: simple or realistic.", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Simple => write!(f, "simple"),
            Strategy::Realistic => write!(f, "realistic"),
        }
    }
}
