//! Job configuration, loadable from `wordcraft.toml`.
//!
//! Every section is optional in the file; missing keys keep their defaults.
//!
//! ```toml
//! [paths]
//! data_dir = "assets/data"
//!
//! [ingest]
//! target_per_tier = 500
//!
//! [validate]
//! batch_size = 100
//!
//! [publish]
//! collection = "words"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusLayout;
use crate::error::{Result, WordcraftError};
use crate::ingest::IngestConfig;
use crate::publish::{FirestoreConfig, PublishConfig};
use crate::validate::ValidateConfig;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "wordcraft.toml";

/// Firestore project ID.
pub const ENV_PROJECT: &str = "WORDCRAFT_FIRESTORE_PROJECT";
/// Firestore collection name.
pub const ENV_COLLECTION: &str = "WORDCRAFT_FIRESTORE_COLLECTION";
/// OAuth2 access token for the production API.
pub const ENV_TOKEN: &str = "WORDCRAFT_FIRESTORE_TOKEN";
/// `host:port` of a local Firestore emulator.
pub const ENV_EMULATOR: &str = "FIRESTORE_EMULATOR_HOST";

/// Where the corpus files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
    pub dictionary_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            dictionary_file: "words_dictionary.json".to_string(),
        }
    }
}

/// All job settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordcraftConfig {
    pub paths: PathsConfig,
    pub ingest: IngestConfig,
    pub validate: ValidateConfig,
    pub publish: PublishConfig,
}

impl WordcraftConfig {
    /// Parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| WordcraftError::io(path, e))?;
        Self::from_toml(&text)
            .map_err(|e| WordcraftError::Config(format!("'{}': {}", path.display(), e)))
    }

    /// Parse TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| WordcraftError::Config(e.to_string()))
    }

    /// Load `path` if given, else `wordcraft.toml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Apply the Firestore environment variables over the file settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(project) = std::env::var(ENV_PROJECT) {
            self.publish.project_id = Some(project);
        }
        if let Ok(collection) = std::env::var(ENV_COLLECTION) {
            self.publish.collection = collection;
        }
        self
    }

    pub fn layout(&self) -> CorpusLayout {
        CorpusLayout::new(&self.paths.data_dir).with_dictionary_file(&self.paths.dictionary_file)
    }

    /// Firestore connection settings from the publish section and environment.
    pub fn firestore(&self) -> Result<FirestoreConfig> {
        let project = self
            .publish
            .project_id
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                WordcraftError::Config(format!(
                    "Firestore project not set (use [publish] project_id or {})",
                    ENV_PROJECT
                ))
            })?;

        let mut config = FirestoreConfig::new(project).with_collection(&self.publish.collection);
        config.page_size = self.publish.page_size;
        config.timeout = std::time::Duration::from_secs(self.publish.timeout_secs);

        if let Ok(host) = std::env::var(ENV_EMULATOR) {
            if !host.is_empty() {
                config = config.with_emulator(&host);
            }
        }
        if let Ok(token) = std::env::var(ENV_TOKEN) {
            config = config.with_token(token);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::Strategy;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = WordcraftConfig::from_toml(
            r#"
            [ingest]
            target_per_tier = 50
            strategy = "realistic"

            [validate]
            max_attempts = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.ingest.target_per_tier, 50);
        assert_eq!(config.ingest.strategy, Strategy::Realistic);
        assert_eq!(config.ingest.min_len, 5);
        assert_eq!(config.validate.max_attempts, 5);
        assert_eq!(config.validate.batch_size, 100);
        assert_eq!(config.publish.collection, "words");
        assert_eq!(config.paths.data_dir, PathBuf::from("assets/data"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = WordcraftConfig::from_toml("[ingest\n").unwrap_err();
        assert!(matches!(err, WordcraftError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[paths]\ndata_dir = \"corpus\"\n").unwrap();

        let config = WordcraftConfig::load(&path).unwrap();
        assert_eq!(config.layout().combined(), PathBuf::from("corpus/words_combined.json"));
    }

    #[test]
    fn test_firestore_requires_project() {
        let config = WordcraftConfig::default();
        assert!(matches!(config.firestore(), Err(WordcraftError::Config(_))));
    }
}
