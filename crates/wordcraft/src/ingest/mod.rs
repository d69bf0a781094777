//! Dictionary ingestion.
//!
//! Turns a raw word -> flag mapping into five difficulty tiers of plausible
//! English words, samples each tier down to a target size, and writes the
//! tier files plus a shuffled combined file.
//!
//! # Example
//!
//! ```no_run
//! use wordcraft::corpus::CorpusLayout;
//! use wordcraft::ingest::Ingestor;
//!
//! let report = Ingestor::new().run(&CorpusLayout::new("assets/data")).unwrap();
//! println!("{} of {} words accepted", report.accepted, report.scanned);
//! ```

mod filter;
mod ingestor;

pub use filter::{FilterConfig, WordFilter};
pub use ingestor::{IngestConfig, IngestReport, Ingestor, TierSummary};
