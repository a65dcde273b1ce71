//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bakery_observability::{LogFormat, LogLevel};
use bakery_storefront::{StoreConfig, StorefrontView};

use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["bakery.toml", ".bakery.toml", "bakery.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, using an explicit config path or searching upward from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            let config = StoreConfig::load(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            (config, Some(path))
        } else if let Some(path) = find_config(&cwd) {
            match StoreConfig::load(&path) {
                Ok(config) => (config, Some(path)),
                Err(e) => {
                    output.warn(&format!(
                        "Ignoring {}: {}. Using defaults.",
                        path.display(),
                        e
                    ));
                    (StoreConfig::default(), Some(path))
                }
            }
        } else {
            (StoreConfig::default(), None)
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// A storefront view configured for this run. `--verbose` lowers logging to debug.
    pub fn storefront(&self) -> StorefrontView {
        let view = StorefrontView::from_config(&self.config);
        if self.output.is_verbose() {
            let logger = view
                .logger()
                .clone()
                .with_min_level(LogLevel::Debug)
                .with_format(LogFormat::Human);
            view.with_logger(logger)
        } else {
            view
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}
