// ABOUTME: Database configuration types for SQLite connections
// ABOUTME: Parses DATABASE_URL and pool settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use super::env_var_or;

/// Default location of the seeded database
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/clinic.db";

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path and optional query parameters
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
        /// Connection parameters after `?` (e.g. `mode=ro`)
        params: Option<String>,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or names a server database, which
    /// this seeder does not support
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL is empty"));
        }
        if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            return Err(AppError::config_invalid(
                "PostgreSQL URLs are not supported; use a sqlite: URL",
            ));
        }

        let path_str = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        if path_str == ":memory:" {
            return Ok(Self::Memory);
        }

        let (path, params) = match path_str.split_once('?') {
            Some((path, params)) => (path, Some(params.to_owned())),
            None => (path_str, None),
        };
        Ok(Self::SQLite {
            path: PathBuf::from(path),
            params,
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path, params } => match params {
                Some(params) => format!("sqlite:{}?{params}", path.display()),
                None => format!("sqlite:{}", path.display()),
            },
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// Whether the URL opens the file with `mode=ro`
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        match self {
            Self::SQLite {
                params: Some(params),
                ..
            } => params.split('&').any(|param| param == "mode=ro"),
            Self::SQLite { params: None, .. } | Self::Memory => false,
        }
    }

    /// Directory that must exist before a writable file database is opened
    #[must_use]
    pub fn parent_dir(&self) -> Option<&Path> {
        match self {
            Self::SQLite { path, .. } if !self.is_read_only() => {
                path.parent().filter(|parent| !parent.as_os_str().is_empty())
            }
            Self::SQLite { .. } | Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/clinic.db"),
            params: None,
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Maximum pooled connections (in-memory databases always use one)
    pub max_connections: u32,
    /// Seconds a writer waits on a locked database before failing
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: 5,
            busy_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Configuration for an explicit URL with default pool settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed
    pub fn for_url(url: &str) -> AppResult<Self> {
        Ok(Self {
            url: DatabaseUrl::parse_url(url)?,
            ..Self::default()
        })
    }

    /// Load database configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if database environment variables are invalid
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with_url(None)
    }

    /// Load database configuration, taking the URL from `url` when given
    ///
    /// `DATABASE_URL` is not read at all when a URL is supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL or a pool environment variable is invalid
    pub fn from_env_with_url(url: Option<&str>) -> AppResult<Self> {
        let url = url.map_or_else(
            || env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned()),
            ToOwned::to_owned,
        );
        Ok(Self {
            url: DatabaseUrl::parse_url(&url)?,
            max_connections: env_var_or("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|e| {
                    AppError::config_invalid(format!("Invalid DATABASE_MAX_CONNECTIONS value: {e}"))
                })?,
            busy_timeout_secs: env_var_or("DATABASE_BUSY_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|e| {
                    AppError::config_invalid(format!(
                        "Invalid DATABASE_BUSY_TIMEOUT_SECS value: {e}"
                    ))
                })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory_url() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
    }

    #[test]
    fn test_parse_file_url_keeps_params() {
        let url = DatabaseUrl::parse_url("sqlite:./data/test.db?mode=ro").unwrap();
        assert_eq!(
            url,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/test.db"),
                params: Some("mode=ro".into()),
            }
        );
        assert_eq!(url.to_string(), "sqlite:./data/test.db?mode=ro");
    }

    #[test]
    fn test_bare_path_treated_as_sqlite() {
        let url = DatabaseUrl::parse_url("clinic.db").unwrap();
        assert!(!url.is_memory());
        assert_eq!(url.to_connection_string(), "sqlite:clinic.db");
    }

    #[test]
    fn test_parent_dir_only_for_writable_files() {
        let url = DatabaseUrl::parse_url(DEFAULT_DATABASE_URL).unwrap();
        assert_eq!(url.parent_dir(), Some(Path::new("./data")));

        let read_only = DatabaseUrl::parse_url("sqlite:./data/clinic.db?mode=ro").unwrap();
        assert!(read_only.is_read_only());
        assert_eq!(read_only.parent_dir(), None);

        assert_eq!(DatabaseUrl::parse_url("clinic.db").unwrap().parent_dir(), None);
        assert_eq!(DatabaseUrl::Memory.parent_dir(), None);
    }

    #[test]
    fn test_server_urls_rejected() {
        assert!(DatabaseUrl::parse_url("postgres://localhost/clinic").is_err());
        assert!(DatabaseUrl::parse_url("   ").is_err());
    }
}
