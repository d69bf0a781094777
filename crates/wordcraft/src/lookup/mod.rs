//! Dictionary service lookups.
//!
//! A [`DictionaryLookup`] performs one request per call and reports the raw
//! outcome as a [`LookupAttempt`]. Retrying, pacing and the final
//! [`Verdict`] belong to [`crate::validate`].
//!
//! # Example
//!
//! ```no_run
//! use wordcraft::lookup::{DictionaryLookup, FreeDictionaryClient, LookupAttempt};
//!
//! let client = FreeDictionaryClient::new().unwrap();
//! if let LookupAttempt::Found(definition) = client.fetch("garden") {
//!     println!("garden: {}", definition);
//! }
//! ```

mod free_dictionary;
mod mock;
mod provider;

pub use free_dictionary::{FreeDictionaryClient, DEFAULT_BASE_URL};
pub use mock::MockDictionary;
pub use provider::{DictionaryLookup, LookupAttempt, Verdict};
