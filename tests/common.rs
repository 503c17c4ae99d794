// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, database creation and seeded generator helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `clinic_seed`

use anyhow::Result;
use clinic_seed::config::DatabaseConfig;
use clinic_seed::database::Database;
use clinic_seed::seeding::UserGenerator;
use std::sync::Once;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Migrated in-memory database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let db = Database::connect("sqlite::memory:").await?;
    db.migrate().await?;
    Ok(db)
}

/// File-backed database URL inside a fresh temporary directory
///
/// Keep the returned directory alive for as long as the database is used.
pub fn temp_database_url() -> Result<(TempDir, String)> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite:{}", dir.path().join("clinic.db").display());
    Ok((dir, url))
}

/// Pool configuration for a file-backed test database
pub fn file_database_config(url: &str) -> Result<DatabaseConfig> {
    let mut config = DatabaseConfig::for_url(url)?;
    config.busy_timeout_secs = 10;
    Ok(config)
}

/// Deterministic generator for reproducible fixtures
pub fn test_generator() -> UserGenerator {
    UserGenerator::from_seed(0x5EED)
}
