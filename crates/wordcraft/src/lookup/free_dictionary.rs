//! Client for the public Free Dictionary API (dictionaryapi.dev).

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{Result, WordcraftError};

use super::provider::{DictionaryLookup, LookupAttempt};

/// Default API endpoint; the word is appended to this path.
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Free Dictionary API client.
pub struct FreeDictionaryClient {
    client: Client,
    base_url: String,
}

impl FreeDictionaryClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, Duration::from_secs(10))
    }

    /// Create a client against a custom endpoint with a request timeout.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers())
            .build()
            .map_err(|e| WordcraftError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, word)
    }
}

impl DictionaryLookup for FreeDictionaryClient {
    fn fetch(&self, word: &str) -> LookupAttempt {
        let response = match self.client.get(self.url_for(word)).send() {
            Ok(r) => r,
            Err(e) => return LookupAttempt::Network(e.to_string()),
        };

        match response.status() {
            StatusCode::OK => match response.json::<Vec<ApiEntry>>() {
                Ok(entries) => LookupAttempt::Found(first_definition(&entries)),
                Err(e) => LookupAttempt::Network(format!("unreadable response: {}", e)),
            },
            StatusCode::NOT_FOUND => LookupAttempt::NotFound,
            StatusCode::TOO_MANY_REQUESTS => LookupAttempt::RateLimited,
            other => LookupAttempt::ServerError(other.as_u16()),
        }
    }

    fn name(&self) -> &str {
        "free-dictionary"
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("wordcraft/", env!("CARGO_PKG_VERSION"))),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers
}

/// First non-empty definition across all entries and meanings.
fn first_definition(entries: &[ApiEntry]) -> String {
    entries
        .iter()
        .flat_map(|e| &e.meanings)
        .flat_map(|m| &m.definitions)
        .map(|d| d.definition.trim())
        .find(|d| !d.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// One entry of the API response array.
#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    #[serde(default)]
    definition: String,
}
