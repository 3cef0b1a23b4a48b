//! Application configuration.
//!
//! Configuration is read from a TOML file. Every field has a default, so an
//! empty file (or no file at all) yields a working Gemini setup:
//!
//! ```toml
//! [provider]
//! model = "gemini-2.5-flash-image"
//! base_url = "https://generativelanguage.googleapis.com/v1beta"
//! api_key_env = "GEMINI_API_KEY"
//!
//! [generation]
//! candidate_count = 4
//! failure_policy = "all-or-nothing"
//! timeout_secs = 120
//!
//! [download]
//! file_prefix = "tableau"
//! output_dir = "."
//! ```

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tableau_error::{ConfigError, TableauResult};
use tableau_models::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use tableau_orchestrator::{DEFAULT_CANDIDATE_COUNT, FailurePolicy};
use tracing::{debug, instrument};

/// Default prefix for downloaded candidate files.
const DEFAULT_FILE_PREFIX: &str = "tableau";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct TableauConfig {
    /// Provider connection settings
    provider: ProviderSettings,
    /// Orchestration settings
    generation: GenerationSettings,
    /// Download settings
    download: DownloadSettings,
}

/// Which provider model to call and how to authenticate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct ProviderSettings {
    /// Model identifier
    model: String,
    /// Base URL up to and including the API version
    base_url: String,
    /// Environment variable holding the API key
    api_key_env: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// How many candidates to request and how to treat failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct GenerationSettings {
    /// Concurrent calls per generation
    candidate_count: usize,
    /// Policy applied when only some calls fail
    failure_policy: FailurePolicy,
    /// Upper bound on a whole generation, in seconds
    timeout_secs: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            candidate_count: DEFAULT_CANDIDATE_COUNT,
            failure_policy: FailurePolicy::default(),
            timeout_secs: None,
        }
    }
}

impl GenerationSettings {
    /// The configured timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Where and how candidates are written when downloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
#[serde(default)]
pub struct DownloadSettings {
    /// File name prefix
    file_prefix: String,
    /// Target directory
    output_dir: PathBuf,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl TableauConfig {
    /// Creates a new builder for TableauConfig.
    pub fn builder() -> TableauConfigBuilder {
        TableauConfigBuilder::default()
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read, is not valid
    /// TOML, or holds invalid values.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TableauResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the text is not valid TOML or holds
    /// invalid values.
    pub fn from_toml_str(content: &str) -> TableauResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        debug!(
            model = %config.provider.model,
            candidates = config.generation.candidate_count,
            policy = %config.generation.failure_policy,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> TableauResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.candidate_count == 0 {
            return Err(ConfigError::new(
                "generation.candidate_count must be at least 1",
            ));
        }
        if self.provider.model.trim().is_empty() {
            return Err(ConfigError::new("provider.model must not be empty"));
        }
        if self.provider.api_key_env.trim().is_empty() {
            return Err(ConfigError::new("provider.api_key_env must not be empty"));
        }
        if self.download.file_prefix.trim().is_empty() {
            return Err(ConfigError::new("download.file_prefix must not be empty"));
        }
        if self.generation.timeout_secs == Some(0) {
            return Err(ConfigError::new("generation.timeout_secs must be positive"));
        }
        Ok(())
    }
}
