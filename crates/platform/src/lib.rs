#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod sink;

use std::{
    fs,
    path::{Path, PathBuf},
};

use designsystem::{ExportFormat, MutationPolicy, TokenSet, TokenStore};
use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub use sink::{ExportArtifact, ExportSink, FileSink, SinkError, WriterSink};

/// Default application qualifier used for configuration storage.
static QUALIFIER: &str = "dev.multiplex";
static ORGANIZATION: &str = "design-system-builder";
static APPLICATION: &str = "tokens";

/// Environment variable that forces minified exports.
pub const MINIFY_ENV: &str = "DESIGN_TOKENS_MINIFY";
/// Environment variable that switches the store to strict mutations.
pub const STRICT_ENV: &str = "DESIGN_TOKENS_STRICT";

/// Persistent plugin configuration stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    /// Whitespace style used when no format is requested explicitly.
    pub export_format: ExportFormat,
    /// How invalid edits are handled.
    pub mutation_policy: MutationPolicy,
    /// Directory receiving downloaded exports; the working directory if unset.
    pub export_dir: Option<PathBuf>,
}

impl PluginConfig {
    /// Applies `DESIGN_TOKENS_MINIFY` and `DESIGN_TOKENS_STRICT` overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides resolved through `lookup`.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| {
            lookup(name).map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        };
        if let Some(minify) = flag(MINIFY_ENV) {
            self.export_format = if minify {
                ExportFormat::Minified
            } else {
                ExportFormat::Pretty
            };
        }
        if let Some(strict) = flag(STRICT_ENV) {
            self.mutation_policy = if strict {
                MutationPolicy::Strict
            } else {
                MutationPolicy::Permissive
            };
        }
        self
    }

    /// Directory that receives export files.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Errors raised when reading or writing configuration or state files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Wraps underlying IO errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Wraps JSON serialization issues.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reader/writer responsible for persisting [`PluginConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(default_path("config.json", ProjectDirs::config_dir))
    }
}

impl ConfigStore {
    /// Creates a store rooted at the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration or returns a default value.
    pub fn load(&self) -> Result<PluginConfig, ConfigError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// Persists the configuration to disk.
    pub fn save(&self, config: &PluginConfig) -> Result<(), ConfigError> {
        write_json(&self.path, config)
    }

    /// Returns the backing file path, primarily used in diagnostics.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reader/writer for the token snapshot edited between sessions.
#[derive(Debug, Clone)]
pub struct TokenStateStore {
    path: PathBuf,
}

impl Default for TokenStateStore {
    fn default() -> Self {
        Self::new(default_path("tokens.json", ProjectDirs::data_dir))
    }
}

impl TokenStateStore {
    /// Creates a state store rooted at the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the saved tokens, falling back to the built-in set.
    pub fn load(&self) -> Result<TokenSet, ConfigError> {
        let tokens = read_json(&self.path)?;
        if tokens.is_none() {
            tracing::debug!(path = %self.path.display(), "no saved tokens, using defaults");
        }
        Ok(tokens.unwrap_or_default())
    }

    /// Persists the token data of `store`.
    pub fn save(&self, store: &TokenStore) -> Result<(), ConfigError> {
        write_json(&self.path, store.tokens())?;
        tracing::info!(path = %self.path.display(), "saved tokens");
        Ok(())
    }

    /// Removes the saved tokens so the next load starts from defaults.
    pub fn clear(&self) -> Result<(), ConfigError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads configuration and saved tokens and builds a ready-to-edit store.
pub fn bootstrap(
    config_store: &ConfigStore,
    state_store: &TokenStateStore,
) -> Result<(PluginConfig, TokenStore), ConfigError> {
    let config = config_store.load()?.with_env_overrides();
    let tokens = state_store.load()?;
    let store = TokenStore::from_tokens(tokens).with_policy(config.mutation_policy);
    Ok((config, store))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path)?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let buffer = serde_json::to_vec_pretty(value)?;
    fs::write(path, buffer)?;
    Ok(())
}

fn default_path(file_name: &str, dir: fn(&ProjectDirs) -> &Path) -> PathBuf {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dir(&dirs).join(file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}
