//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::repository::DEFAULT_BASE_URL;
use storefront_catalog::search::SuggestionConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Product API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Search and suggestion settings.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Suggestion limits with the configured overrides applied.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        let mut config = SuggestionConfig {
            min_query_len: self.search.min_query_len,
            ..SuggestionConfig::default()
        };
        if let Some(terms) = &self.search.popular_terms {
            config.popular_terms = terms.iter().map(|t| t.to_lowercase()).collect();
        }
        config
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!(
                "api.base_url '{}' must start with http:// or https://",
                self.api.base_url
            ));
        }
        if self.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }
        if self.search.min_query_len == 0 {
            warnings.push(
                "search.min_query_len = 0 shows suggestions for an empty query".to_string(),
            );
        }
        if let Some(terms) = &self.search.popular_terms {
            if terms.is_empty() {
                warnings.push(
                    "search.popular_terms is empty; related terms will not be topped up"
                        .to_string(),
                );
            }
        }

        (errors, warnings)
    }
}

/// Product API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Repository base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Search and suggestion settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Replaces the built-in popular terms list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular_terms: Option<Vec<String>>,

    /// Characters needed before suggestions appear.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_min_query_len() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular_terms: None,
            min_query_len: default_min_query_len(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront browser configuration

[api]
base_url = "{base_url}"
timeout_secs = 10

[search]
min_query_len = 2
# popular_terms = ["clothing", "electronics", "jewelry", "men", "women"]
"#,
        base_url = DEFAULT_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.api.base_url, "https://fakestoreapi.com");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.suggestion_config(), SuggestionConfig::default());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validate().0.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config: CliConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:3000"
            timeout_secs = 3

            [search]
            min_query_len = 3
            popular_terms = ["Hats", "gloves"]
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout(), Duration::from_secs(3));

        let suggestions = config.suggestion_config();
        assert_eq!(suggestions.min_query_len, 3);
        assert_eq!(suggestions.popular_terms, vec!["hats", "gloves"]);
        assert_eq!(suggestions.max_categories, 3);
    }

    #[test]
    fn test_json_config() {
        let config: CliConfig =
            serde_json::from_str(r#"{"api": {"timeout_secs": 5}}"#).unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_reports_errors() {
        let mut config = CliConfig::default();
        config.api.base_url = "fakestoreapi.com".to_string();
        config.api.timeout_secs = 0;
        config.search.popular_terms = Some(Vec::new());

        let (errors, warnings) = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_load_from_disk() {
        let file_name = format!("storefront-test-{}.toml", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let path = path.to_str().unwrap().to_string();
        let content =
            generate_default_config().replace("timeout_secs = 10", "timeout_secs = 42");
        std::fs::write(&path, content).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.api.timeout_secs, 42);
        assert_eq!(loaded.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = CliConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
