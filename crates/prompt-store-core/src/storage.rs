//! Lifecycle management for the process-wide database handle.
//!
//! [`StorageManager`] owns at most one open [`Database`] and moves through
//! `Uninitialized -> Open -> Closed`. The handle is opened lazily on first use
//! and reused for every later operation. [`StorageManager::reset`] destroys
//! the persisted file and reopens an empty store, and
//! [`StorageManager::inject`] swaps in a caller-supplied handle so tests can
//! run against an isolated database.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{info, warn};

use crate::{
    db::Database,
    error::{Result, StoreError},
};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// A SQLite file on disk, plus its `-wal` and `-shm` companions.
    File(PathBuf),
    /// A private in-memory database, discarded when closed.
    Memory,
}

/// Observable lifecycle state of the storage handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageState {
    Uninitialized,
    Open,
    Closed,
}

struct Inner {
    database: Option<Database>,
    state: StorageState,
}

/// Owner of the single shared database handle.
pub struct StorageManager {
    location: StorageLocation,
    inner: Mutex<Inner>,
}

impl StorageManager {
    /// Creates a manager for `location` without opening anything.
    pub fn new(location: StorageLocation) -> Self {
        Self {
            location,
            inner: Mutex::new(Inner {
                database: None,
                state: StorageState::Uninitialized,
            }),
        }
    }

    /// The configured storage location.
    pub fn location(&self) -> &StorageLocation {
        &self.location
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Result<StorageState> {
        Ok(self.lock()?.state)
    }

    /// Opens the store if it is not already open. Idempotent.
    pub fn open(&self) -> Result<()> {
        let mut inner = self.lock()?;
        self.ensure_open(&mut inner)?;
        Ok(())
    }

    /// Runs `f` against the shared handle, opening it first if needed.
    pub fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T>,
    {
        let mut inner = self.lock()?;
        let db = self.ensure_open(&mut inner)?;
        f(db)
    }

    /// Releases the handle. Idempotent.
    pub fn close(&self) -> Result<()> {
        let mut inner = self.lock()?;
        if let Some(db) = inner.database.take() {
            db.close()?;
            info!("Closed prompt store");
        }
        if inner.state == StorageState::Open {
            inner.state = StorageState::Closed;
        }
        Ok(())
    }

    /// Destroys all persisted data and reopens an empty store.
    pub fn reset(&self) -> Result<()> {
        let mut inner = self.lock()?;
        if let Some(db) = inner.database.take() {
            db.close()?;
        }
        inner.state = StorageState::Uninitialized;

        if let StorageLocation::File(path) = &self.location {
            for file in database_files(path) {
                remove_if_exists(&file)?;
            }
        }
        info!("Reset prompt store at {}", self.describe());

        self.ensure_open(&mut inner)?;
        Ok(())
    }

    /// Replaces the current handle with `database`, closing the previous one.
    ///
    /// The manager is `Open` afterwards and every operation runs against the
    /// injected handle until the next `close` or `reset`.
    pub fn inject(&self, database: Database) -> Result<()> {
        let mut inner = self.lock()?;
        if let Some(previous) = inner.database.replace(database) {
            previous.close()?;
        }
        inner.state = StorageState::Open;
        Ok(())
    }

    fn ensure_open<'a>(&self, inner: &'a mut Inner) -> Result<&'a mut Database> {
        if inner.database.is_none() {
            let db = self.open_database()?;
            inner.database = Some(db);
            inner.state = StorageState::Open;
            info!("Opened prompt store at {}", self.describe());
        }
        inner.database.as_mut().ok_or_else(|| StoreError::Configuration {
            message: "storage handle missing after open".to_string(),
        })
    }

    fn open_database(&self) -> Result<Database> {
        match &self.location {
            StorageLocation::Memory => Database::in_memory(),
            StorageLocation::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| StoreError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }
                let db = Database::new(path)?;
                restrict_permissions(path);
                Ok(db)
            }
        }
    }

    fn describe(&self) -> String {
        match &self.location {
            StorageLocation::File(path) => path.display().to_string(),
            StorageLocation::Memory => ":memory:".to_string(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| StoreError::Configuration {
            message: "storage lock poisoned by a panicked operation".to_string(),
        })
    }
}

/// The database file and its write-ahead artifacts.
fn database_files(path: &Path) -> [PathBuf; 3] {
    let with_suffix = |suffix: &str| {
        let mut name = path.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    };
    [path.to_path_buf(), with_suffix("-wal"), with_suffix("-shm")]
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
        warn!("Could not restrict permissions on {}: {e}", path.display());
    }
}

#[cfg(not(unix))]
fn restrict_permissions(path: &Path) {
    warn!(
        "Owner-only permissions are not enforced on this platform: {}",
        path.display()
    );
}
