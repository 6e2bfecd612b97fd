//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_commerce::navigation::StoreSession;
use shopfront_commerce::source::HttpProductSource;
use shopfront_data::FetchClient;
use tracing::{debug, warn};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Sent with every product service request.
const USER_AGENT: &str = concat!("shopfront/", env!("CARGO_PKG_VERSION"));

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with command line overrides applied.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        base_url: Option<String>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            let (found, skipped) = find_config(&cwd);
            for (path, err) in &skipped {
                warn!(
                    path = %path.display(),
                    error = %format!("{:#}", err),
                    "skipping config file"
                );
            }
            match found {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(base_url) = base_url {
            config.api.base_url = base_url;
        }

        debug!(base_url = %config.api.base_url, config = ?config_path, "loaded config");

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// HTTP product source for the configured service.
    pub fn source(&self) -> HttpProductSource {
        HttpProductSource::with_client(
            FetchClient::new()
                .with_base_url(self.config.api.base_url.clone())
                .with_default_header("User-Agent", USER_AGENT)
                .with_timeout(self.config.timeout()),
        )
    }

    /// A fresh session using the configured delivery fee.
    pub fn session(&self) -> Result<StoreSession> {
        Ok(StoreSession::new().with_delivery_fee(self.config.delivery_fee()?))
    }

    /// Load the catalog behind a spinner. A failed load leaves the catalog
    /// empty and is reported as a warning.
    pub async fn load_catalog(&self, session: &mut StoreSession) -> usize {
        let source = self.source();
        let spinner = self.output.spinner("Fetching products...");
        let count = session.mount_home(&source).await;
        spinner.finish_and_clear();

        if let Some(err) = session.catalog().load_error() {
            self.output.warn(&format!("Could not load products: {}", err));
        }
        count
    }
}

/// A config file that exists but could not be read or parsed.
pub type SkippedConfig = (PathBuf, anyhow::Error);

/// Find the nearest loadable config file, walking up from `start`.
///
/// Files that fail to load are returned alongside so the caller can report them.
pub fn find_config(start: &Path) -> (Option<(CliConfig, PathBuf)>, Vec<SkippedConfig>) {
    let mut skipped = Vec::new();
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                match CliConfig::load(&config_path.to_string_lossy()) {
                    Ok(config) => return (Some((config, config_path)), skipped),
                    Err(e) => skipped.push((config_path, e)),
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    (None, skipped)
}
