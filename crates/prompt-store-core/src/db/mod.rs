//! Database operations and SQLite management for prompts and tags.
//!
//! This module provides the low-level storage layer for the prompt store. It
//! owns a single SQLite connection, applies the schema, and exposes one method
//! per entity operation. Each mutating method runs inside its own transaction.

use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod prompt_queries;
pub mod tag_queries;
pub mod utils;

/// How long a writer waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database file and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.enable_wal()?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Creates an isolated, empty in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    /// Wraps an existing connection and applies the schema to it.
    pub fn from_connection(connection: Connection) -> Result<Self> {
        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Raw access to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Closes the connection, flushing the write-ahead log.
    pub fn close(self) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, e)| e)
            .db_context("Failed to close database connection")
    }

    fn enable_wal(&self) -> Result<()> {
        self.connection
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| {
                row.get::<_, String>(0)
            })
            .db_context("Failed to enable WAL journal mode")?;
        Ok(())
    }

    fn configure_connection(&self) -> Result<()> {
        self.connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")
    }
}
