//! YAML Configuration File Support for plagscan
//!
//! Loads the whole checker configuration (probe presets, matcher knobs,
//! search credentials, embedding backend, logging) from one YAML file, then
//! applies environment overrides so secrets can stay out of the file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! probes:
//!   text_check: { ngram_size: 8, step: 3, max_queries: 60 }
//!   file_check: { ngram_size: 8, step: 3, max_queries: 80 }
//!
//! matcher:
//!   paraphrase_threshold: 0.80
//!   primary_results: 5
//!   fallback_results: 3
//!   probe_concurrency: 1
//!
//! search:
//!   engine_id: "0123456789abcdef"
//!   timeout_secs: 15
//!
//! semantic:
//!   mode: "disabled"
//!
//! log_level: "info"
//! log_json: false
//! ```
//!
//! ## Environment overrides
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `GOOGLE_CSE_API_KEY` | `search.api_key` |
//! | `GOOGLE_CSE_CX` | `search.engine_id` |
//! | `OPENAI_API_KEY` | switches `semantic` to the OpenAI embeddings API |
//! | `PLAGSCAN_LOG` | `log_level` |

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use perceptual::ProbeConfig;
use search::SearchConfig;
use semantic::SemanticConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_CSE_API_KEY";
pub const ENV_GOOGLE_CX: &str = "GOOGLE_CSE_CX";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_LOG: &str = "PLAGSCAN_LOG";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the checker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PlagscanConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Probe presets for pasted text and uploaded files
    #[serde(default)]
    pub probes: ProbePresets,

    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub semantic: SemanticConfig,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

/// Probe sampling used per entry point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbePresets {
    #[serde(default = "ProbeConfig::text_check")]
    pub text_check: ProbeConfig,
    #[serde(default = "ProbeConfig::file_check")]
    pub file_check: ProbeConfig,
}

impl Default for ProbePresets {
    fn default() -> Self {
        Self {
            text_check: ProbeConfig::text_check(),
            file_check: ProbeConfig::file_check(),
        }
    }
}

impl PlagscanConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PlagscanConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides using `lookup` to read variables. Blank values are
    /// ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_GOOGLE_API_KEY) {
            self.search.api_key = Some(key);
        }
        if let Some(cx) = get(ENV_GOOGLE_CX) {
            self.search.engine_id = Some(cx);
        }
        if let Some(key) = get(ENV_OPENAI_API_KEY) {
            let model_name = self.semantic.model_name.clone();
            self.semantic = SemanticConfig {
                model_name,
                ..SemanticConfig::openai(&key)
            };
        }
        if let Some(level) = get(ENV_LOG) {
            self.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.probes
            .text_check
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("probes.text_check: {e}")))?;
        self.probes
            .file_check
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("probes.file_check: {e}")))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        self.semantic
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("semantic: {e}")))?;
        if self.search.timeout_secs == 0 {
            return Err(ConfigLoadError::Validation(
                "search.timeout_secs must be >= 1".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "log_level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PlagscanConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            probes: ProbePresets::default(),
            matcher: MatchConfig::default(),
            search: SearchConfig::default(),
            semantic: SemanticConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
probes:
  text_check:
    ngram_size: 6
    step: 2
    max_queries: 40
matcher:
  probe_concurrency: 4
search:
  engine_id: "cx-123"
"#;

        let config = PlagscanConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.probes.text_check.ngram_size, 6);
        assert_eq!(config.probes.file_check, ProbeConfig::file_check());
        assert_eq!(config.matcher.probe_concurrency, 4);
        assert_eq!(config.matcher.primary_results, 5);
        assert_eq!(config.search.engine_id.as_deref(), Some("cx-123"));
        assert!(!config.semantic.is_enabled());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
log_level: "debug"
log_json: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PlagscanConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    fn test_default_config() {
        let config = PlagscanConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.probes.text_check, ProbeConfig::text_check());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = PlagscanConfig::from_yaml("{}").unwrap();
        assert_eq!(config, PlagscanConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let err = PlagscanConfig::from_yaml("version: \"2.0\"").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_probe_validation() {
        let yaml = r#"
version: "1.0"
probes:
  file_check:
    ngram_size: 8
    step: 0
    max_queries: 80
"#;

        let err = PlagscanConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("probes.file_check"));
    }

    #[test]
    fn test_matcher_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  paraphrase_threshold: 1.2
"#;

        let err = PlagscanConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("paraphrase_threshold"));
    }

    #[test]
    fn test_semantic_validation() {
        let yaml = r#"
version: "1.0"
semantic:
  mode: "gpu"
"#;

        let err = PlagscanConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("semantic"));
    }

    #[test]
    fn env_overrides_search_credentials() {
        let mut config = PlagscanConfig::default();
        config.apply_env_with(env(&[
            (ENV_GOOGLE_API_KEY, "key-1"),
            (ENV_GOOGLE_CX, "cx-1"),
        ]));
        assert!(config.search.is_configured());
        assert_eq!(config.search.api_key.as_deref(), Some("key-1"));
    }

    #[test]
    fn env_openai_key_enables_api_embeddings() {
        let mut config = PlagscanConfig::default();
        config.apply_env_with(env(&[(ENV_OPENAI_API_KEY, "sk-abc")]));

        assert_eq!(config.semantic.mode, "api");
        assert_eq!(
            config.semantic.api_url.as_deref(),
            Some(semantic::OPENAI_EMBEDDINGS_URL)
        );
        assert_eq!(
            config.semantic.api_auth_header.as_deref(),
            Some("Bearer sk-abc")
        );
        assert_eq!(config.semantic.model_name, "text-embedding-3-small");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = PlagscanConfig::default();
        config.apply_env_with(env(&[(ENV_OPENAI_API_KEY, "  "), (ENV_LOG, "")]));
        assert!(!config.semantic.is_enabled());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn env_log_level() {
        let mut config = PlagscanConfig::default();
        config.apply_env_with(env(&[(ENV_LOG, "plagscan=debug")]));
        assert_eq!(config.log_level, "plagscan=debug");
    }
}
