//! Builder for creating and configuring PromptStore instances.

use std::path::{Path, PathBuf};

use super::PromptStore;
use crate::{
    error::{Result, StoreError},
    storage::{StorageLocation, StorageManager},
};

/// Builder for creating and configuring PromptStore instances.
#[derive(Debug, Clone, Default)]
pub struct PromptStoreBuilder {
    location: Option<StorageLocation>,
}

impl PromptStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { location: None }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/prompt-store/prompts.db` or
    /// `~/.local/share/prompt-store/prompts.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.location = Some(StorageLocation::File(path.as_ref().to_path_buf()));
        }
        self
    }

    /// Uses a private in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.location = Some(StorageLocation::Memory);
        self
    }

    /// Builds the store. Nothing is opened until the first operation or an
    /// explicit [`PromptStore::open`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::XdgDirectory` if no path was given and the XDG
    /// data directory cannot be determined.
    pub fn build(self) -> Result<PromptStore> {
        let location = match self.location {
            Some(location) => location,
            None => StorageLocation::File(Self::default_database_path()?),
        };

        Ok(PromptStore::new(StorageManager::new(location)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("prompt-store")
            .place_data_file("prompts.db")
            .map_err(|e| StoreError::XdgDirectory(e.to_string()))
    }
}
