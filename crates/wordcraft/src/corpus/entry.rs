//! The word entry record and difficulty tiers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Number of difficulty tiers.
pub const TIER_COUNT: u8 = 5;

/// All difficulty tiers, easiest first.
pub const TIERS: [u8; TIER_COUNT as usize] = [1, 2, 3, 4, 5];

/// One word in the game corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// The correctly spelled word (lowercase letters).
    pub correct_spelling: String,

    /// Plausible misspellings shown to the player.
    #[serde(default)]
    pub misspellings: Vec<String>,

    /// Difficulty tier (1-5), derived from the word length.
    pub difficulty: u8,

    /// Dictionary definition; empty until validation backfills it.
    #[serde(default)]
    pub definition: String,
}

impl WordEntry {
    /// Create an entry with the difficulty derived from the word length.
    pub fn new(correct_spelling: impl Into<String>, misspellings: Vec<String>) -> Self {
        let correct_spelling = correct_spelling.into();
        let difficulty = difficulty_for(&correct_spelling);
        Self {
            correct_spelling,
            misspellings,
            difficulty,
            definition: String::new(),
        }
    }

    /// Set the definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Case-folded key used to match entries across files and stores.
    pub fn key(&self) -> String {
        self.correct_spelling.to_lowercase()
    }

    /// Misspellings as an order-insensitive set.
    pub fn misspelling_set(&self) -> HashSet<&str> {
        self.misspellings.iter().map(String::as_str).collect()
    }
}

/// Difficulty tier for a word, based purely on its length.
///
/// Only five-letter words are tier 1; anything shorter lands in tier 2.
pub fn difficulty_for(word: &str) -> u8 {
    match word.chars().count() {
        5 => 1,
        0..=7 => 2,
        8..=9 => 3,
        10..=12 => 4,
        _ => 5,
    }
}
