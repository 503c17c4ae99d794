// ABOUTME: SQLite database handle for the shared users collection
// ABOUTME: Connection pool setup, schema migration, and lifecycle management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Database layer
//!
//! One [`Database`] wraps one `sqlx` pool. The pool is cheap to clone; every
//! clone refers to the same connections, so closing any clone closes them all.

/// User storage operations on the shared `users` table
pub mod users;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::fs;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Handle to the seeded database
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for the given configuration
    ///
    /// File databases are created if missing, along with their parent
    /// directory, unless the URL asks for read-only mode. In-memory databases
    /// use a single connection that is never recycled, since every connection
    /// would otherwise see its own empty database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database directory cannot be created, the URL
    /// is malformed or the first connection fails
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        if let Some(parent) = config.url.parent_dir() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!(
                    "Cannot create database directory {}: {e}",
                    parent.display()
                ))
                .with_source(e)
            })?;
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

        let pool_options = match config.url {
            DatabaseUrl::Memory => SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None),
            DatabaseUrl::SQLite { .. } => {
                SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
            }
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(url = %config.url, "Database pool opened");

        Ok(Self { pool })
    }

    /// Open a pool for a URL with default pool settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the first connection fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        Self::new(&DatabaseConfig::for_url(database_url)?).await
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the schema if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        info!("Database migrations complete");
        Ok(())
    }

    /// Close every connection; waits for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
        debug!("Database pool closed");
    }

    /// Whether [`Database::close`] has been called on this pool
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}
