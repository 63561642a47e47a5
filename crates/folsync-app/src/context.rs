// Rust guideline compliant 2026-10-19

//! Application context: configuration plus the dataset provider it selects.

use crate::error::Result;
use crate::provider::{DatasetProvider, FileDatasetProvider};
use folsync_core::{Config, DatasetIndex, Session};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolved configuration and paths for one invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    config_dir: PathBuf,
    config: Config,
}

impl AppContext {
    /// Loads configuration from a directory.
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `folsync.toml`; the current
    ///   directory when `None`
    ///
    /// # Returns
    ///
    /// An `AppContext` with the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The configuration cannot be loaded or validated
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let config = Config::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    /// Creates a context from an already loaded configuration.
    #[must_use]
    pub fn with_config(config_dir: PathBuf, config: Config) -> Self {
        Self { config_dir, config }
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        self.config_dir.as_path()
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the dataset path, resolved against the config directory when
    /// relative.
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        if self.config.dataset_path.is_absolute() {
            self.config.dataset_path.clone()
        } else {
            self.config_dir.join(&self.config.dataset_path)
        }
    }

    /// Returns a provider for the configured dataset file.
    #[must_use]
    pub fn dataset_provider(&self) -> FileDatasetProvider {
        FileDatasetProvider::new(self.dataset_path())
    }

    /// Loads the configured dataset into a new index.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset file cannot be read or parsed.
    pub fn load_index(&self) -> Result<Arc<DatasetIndex>> {
        load_index(&self.dataset_provider())
    }

    /// Creates a session with the configured dataset installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset file cannot be read or parsed.
    pub fn open_session(&self) -> Result<Session> {
        let mut session = Session::new();
        session.replace_dataset(self.load_index()?);
        Ok(session)
    }
}

/// Builds an index from any provider.
///
/// # Errors
///
/// Returns an error if the provider fails.
pub fn load_index(provider: &dyn DatasetProvider) -> Result<Arc<DatasetIndex>> {
    let records = provider.load()?;
    Ok(Arc::new(DatasetIndex::build(records)))
}
