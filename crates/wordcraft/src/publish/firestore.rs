//! Firestore REST document store.
//!
//! Speaks the v1 REST API: documents are listed page by page and written
//! through `documents:commit`, which applies a group of writes atomically.
//! Works against the local emulator when `FIRESTORE_EMULATOR_HOST` is set.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::corpus::WordEntry;
use crate::error::{Result, WordcraftError};

use super::store::{auto_id, DocumentStore, RemoteDocument, RemoteRecord, WriteOp};

/// Production API host.
pub const FIRESTORE_URL: &str = "https://firestore.googleapis.com";

/// Fields written by every insert and update.
const WORD_FIELDS: [&str; 4] = ["correctSpelling", "misspellings", "definition", "difficulty"];

/// Connection settings for [`FirestoreStore`].
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub collection: String,
    /// API host, e.g. `https://firestore.googleapis.com` or `http://localhost:8080`.
    pub base_url: String,
    /// OAuth2 access token; not needed by the emulator.
    pub token: Option<String>,
    pub page_size: usize,
    pub timeout: Duration,
}

impl FirestoreConfig {
    /// Settings for `project_id` with the default collection and host.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            collection: "words".to_string(),
            base_url: FIRESTORE_URL.to_string(),
            token: None,
            page_size: 300,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Point at the emulator listening on `host` (`host:port`, no scheme).
    pub fn with_emulator(self, host: &str) -> Self {
        let base_url = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        self.with_base_url(base_url)
    }

    fn is_emulator(&self) -> bool {
        !self.base_url.starts_with(FIRESTORE_URL)
    }
}

/// Document store backed by a Firestore collection.
pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
    rng: std::sync::Mutex<fastrand::Rng>,
}

impl FirestoreStore {
    /// Create a store; the production host requires an access token.
    pub fn new(config: FirestoreConfig) -> Result<Self> {
        if config.project_id.is_empty() {
            return Err(WordcraftError::Config("Firestore project id not set".to_string()));
        }
        if config.token.is_none() && !config.is_emulator() {
            return Err(WordcraftError::Config(
                "WORDCRAFT_FIRESTORE_TOKEN environment variable not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WordcraftError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            rng: std::sync::Mutex::new(fastrand::Rng::new()),
        })
    }

    /// `projects/{p}/databases/(default)/documents`
    fn database_path(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.config.project_id
        )
    }

    fn document_name(&self, id: &str) -> String {
        format!("{}/{}/{}", self.database_path(), self.config.collection, id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config.token {
            Some(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| WordcraftError::Config(format!("Invalid access token: {}", e)))?;
                Ok(request.header(AUTHORIZATION, value))
            }
            None => Ok(request),
        }
    }

    fn new_id(&self) -> String {
        match self.rng.lock() {
            Ok(mut rng) => auto_id(&mut rng),
            Err(_) => auto_id(&mut fastrand::Rng::new()),
        }
    }

    /// Encode one write for the commit body.
    fn encode_write(&self, op: &WriteOp) -> Value {
        match op {
            WriteOp::Insert(entry) => json!({
                "update": {
                    "name": self.document_name(&self.new_id()),
                    "fields": encode_fields(entry),
                },
                "currentDocument": { "exists": false },
            }),
            WriteOp::Update { id, entry } => json!({
                "update": {
                    "name": self.document_name(id),
                    "fields": encode_fields(entry),
                },
                "updateMask": { "fieldPaths": WORD_FIELDS },
                "currentDocument": { "exists": true },
            }),
        }
    }
}

impl DocumentStore for FirestoreStore {
    fn list(&self) -> Result<Vec<RemoteDocument>> {
        let url = self.url(&format!("{}/{}", self.database_path(), self.config.collection));
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", self.config.page_size.to_string())];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let response = self.authorize(self.client.get(&url).query(&query))?.send()?;
            let page: ListResponse = check(response)?.json()?;

            for doc in page.documents {
                documents.push(decode_document(&doc));
            }
            tracing::debug!(documents = documents.len(), "listed page");

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    fn commit(&self, writes: &[WriteOp]) -> Result<()> {
        if writes.is_empty() {
            return Ok(());
        }
        let body = json!({
            "writes": writes.iter().map(|op| self.encode_write(op)).collect::<Vec<_>>(),
        });
        let url = self.url(&format!("{}:commit", self.database_path()));

        let response = self.authorize(self.client.post(&url).json(&body))?.send()?;
        check(response)?;
        Ok(())
    }

    fn name(&self) -> String {
        format!(
            "firestore:{}/{}{}",
            self.config.project_id,
            self.config.collection,
            if self.config.is_emulator() { " (emulator)" } else { "" }
        )
    }
}

/// Turn a non-success response into a [`WordcraftError::Store`].
fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    Err(WordcraftError::Store {
        status: status.as_u16(),
        message,
    })
}

// =============================================================================
// Value encoding
// =============================================================================

/// Encode the word fields as Firestore typed values.
pub fn encode_fields(entry: &WordEntry) -> Value {
    json!({
        "correctSpelling": { "stringValue": entry.correct_spelling },
        "misspellings": {
            "arrayValue": {
                "values": entry
                    .misspellings
                    .iter()
                    .map(|m| json!({ "stringValue": m }))
                    .collect::<Vec<_>>(),
            }
        },
        "definition": { "stringValue": entry.definition },
        // int64 travels as a string
        "difficulty": { "integerValue": entry.difficulty.to_string() },
    })
}

/// Decode a listed document into its ID and word fields.
fn decode_document(doc: &ApiDocument) -> RemoteDocument {
    let id = doc.name.rsplit('/').next().unwrap_or_default().to_string();
    let field = |name: &str| doc.fields.get(name);

    RemoteDocument {
        id,
        record: RemoteRecord {
            correct_spelling: field("correctSpelling").and_then(decode_string).unwrap_or_default(),
            misspellings: field("misspellings").and_then(decode_string_array),
            definition: field("definition").and_then(decode_string),
            difficulty: field("difficulty").and_then(decode_integer),
        },
    }
}

fn decode_string(value: &Value) -> Option<String> {
    value.get("stringValue")?.as_str().map(str::to_string)
}

fn decode_string_array(value: &Value) -> Option<Vec<String>> {
    let array = value.get("arrayValue")?;
    // An empty array is sent without its "values" key.
    let Some(values) = array.get("values").and_then(Value::as_array) else {
        return Some(Vec::new());
    };
    Some(values.iter().filter_map(decode_string).collect())
}

fn decode_integer(value: &Value) -> Option<i64> {
    if let Some(v) = value.get("integerValue") {
        return match v {
            Value::String(s) => s.parse().ok(),
            other => other.as_i64(),
        };
    }
    let d = value.get("doubleValue")?.as_f64()?;
    (d.fract() == 0.0).then_some(d as i64)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<ApiDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> FirestoreStore {
        FirestoreStore::new(FirestoreConfig::new("demo-project").with_emulator("localhost:8080")).unwrap()
    }

    #[test]
    fn test_production_requires_token() {
        let err = FirestoreStore::new(FirestoreConfig::new("demo-project")).err().unwrap();
        assert!(matches!(err, WordcraftError::Config(_)));
        assert!(FirestoreStore::new(FirestoreConfig::new("demo-project").with_token("t")).is_ok());
    }

    #[test]
    fn test_paths() {
        let store = store();
        assert_eq!(
            store.url(&format!("{}:commit", store.database_path())),
            "http://localhost:8080/v1/projects/demo-project/databases/(default)/documents:commit"
        );
        assert_eq!(
            store.document_name("abc"),
            "projects/demo-project/databases/(default)/documents/words/abc"
        );
        assert_eq!(store.name(), "firestore:demo-project/words (emulator)");
    }

    #[test]
    fn test_encode_fields() {
        let entry = WordEntry::new("garden", vec!["gardin".into()]).with_definition("A plot.");
        assert_eq!(
            encode_fields(&entry),
            json!({
                "correctSpelling": {"stringValue": "garden"},
                "misspellings": {"arrayValue": {"values": [{"stringValue": "gardin"}]}},
                "definition": {"stringValue": "A plot."},
                "difficulty": {"integerValue": "2"},
            })
        );
    }

    #[test]
    fn test_encode_update_write() {
        let store = store();
        let write = store.encode_write(&WriteOp::Update {
            id: "abc".into(),
            entry: WordEntry::new("garden", vec![]),
        });
        assert_eq!(write["currentDocument"]["exists"], json!(true));
        assert_eq!(write["updateMask"]["fieldPaths"].as_array().unwrap().len(), 4);
        assert!(write["update"]["name"].as_str().unwrap().ends_with("/words/abc"));
    }

    #[test]
    fn test_encode_insert_write() {
        let store = store();
        let write = store.encode_write(&WriteOp::Insert(WordEntry::new("garden", vec![])));
        assert_eq!(write["currentDocument"]["exists"], json!(false));
        assert!(write.get("updateMask").is_none());
        let name = write["update"]["name"].as_str().unwrap();
        assert_eq!(name.rsplit('/').next().unwrap().len(), 20);
    }

    #[test]
    fn test_decode_document() {
        let doc: ApiDocument = serde_json::from_value(json!({
            "name": "projects/p/databases/(default)/documents/words/XyZ123",
            "fields": {
                "correctSpelling": {"stringValue": "Garden"},
                "misspellings": {"arrayValue": {}},
                "difficulty": {"integerValue": "2"},
            }
        }))
        .unwrap();

        let decoded = decode_document(&doc);
        assert_eq!(decoded.id, "XyZ123");
        assert_eq!(decoded.record.key(), "garden");
        assert_eq!(decoded.record.misspellings, Some(vec![]));
        assert_eq!(decoded.record.definition, None);
        assert_eq!(decoded.record.difficulty, Some(2));
    }

    #[test]
    fn test_decode_list_response() {
        let page: ListResponse = serde_json::from_str(r#"{"nextPageToken": "p2"}"#).unwrap();
        assert!(page.documents.is_empty());
        assert_eq!(page.next_page_token.as_deref(), Some("p2"));
    }
}
