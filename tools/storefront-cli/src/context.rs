//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_catalog::repository::HttpProductRepository;
use storefront_catalog::search::SuggestionEngine;
use storefront_data::{FetchClient, ReqwestTransport};

use crate::config::CliConfig;
use crate::output::Output;

/// Names looked up when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file, then apply flag overrides.
    pub fn load(
        config_path: Option<&str>,
        base_url: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(base_url) = base_url {
            config.api.base_url = base_url;
        }

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }
        output.debug(&format!("Product API: {}", config.api.base_url));

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Repository client for the configured API.
    pub fn repository(&self) -> Result<HttpProductRepository> {
        let transport = ReqwestTransport::new(self.config.api.timeout())
            .context("Failed to build HTTP client")?;
        let client = FetchClient::new(Arc::new(transport))
            .with_base_url(self.config.api.base_url.clone())
            .with_default_header(
                "User-Agent",
                concat!("storefront-cli/", env!("CARGO_PKG_VERSION")),
            );
        Ok(HttpProductRepository::new(client))
    }

    /// Suggestion engine with configured limits.
    pub fn engine(&self) -> SuggestionEngine {
        SuggestionEngine::new(self.config.suggestion_config())
    }
}
