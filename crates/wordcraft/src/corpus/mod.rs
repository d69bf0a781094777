//! The word corpus: entries, file shapes, and persistence.
//!
//! Every job loads a full corpus file, transforms it in memory and rewrites
//! it wholesale. Before any destructive rewrite a byte-identical backup of
//! the input is written next to it.
//!
//! # Usage
//!
//! ```no_run
//! use wordcraft::corpus::{load_json, save_json, CombinedFile, CorpusLayout};
//!
//! let layout = CorpusLayout::new("assets/data");
//! let mut loaded = load_json::<CombinedFile>(layout.combined()).unwrap();
//! loaded.backup_to(layout.combined_backup("backup")).unwrap();
//!
//! loaded.doc.words.retain(|w| !w.misspellings.is_empty());
//! loaded.doc.refresh_count();
//! save_json(layout.combined(), &loaded.doc).unwrap();
//! ```

mod entry;
mod files;
mod layout;
mod persistence;

pub use entry::{difficulty_for, WordEntry, TIERS, TIER_COUNT};
pub use files::{CombinedFile, TierFile};
pub use layout::{backup_path, CorpusLayout};
pub use persistence::{content_hash, load_json, save_json, Loaded};
