//! Dictionary validation of the tier files.
//!
//! Every word is looked up one at a time against a dictionary service.
//! Confirmed words get their definition filled in, rejected words are
//! dropped, and words the service could not decide are kept unchanged.
//! Each tier is checkpointed (backup, then rewrite) as soon as it finishes,
//! so an interrupted run loses at most one tier of work.
//!
//! # Example
//!
//! ```no_run
//! use wordcraft::corpus::CorpusLayout;
//! use wordcraft::validate::{ValidateConfig, Validator};
//!
//! let mut validator = Validator::free_dictionary(ValidateConfig::default()).unwrap();
//! let report = validator.run(&CorpusLayout::new("assets/data")).unwrap();
//! println!("{} invalid words removed", report.total_invalid());
//! ```

mod config;
mod validator;

pub use config::ValidateConfig;
pub use validator::{rebuild_combined, TierOutcome, TierValidation, ValidationReport, Validator};
