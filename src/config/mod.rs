// ABOUTME: Configuration management module for the clinic user seeder
// ABOUTME: Environment-only settings for the database connection and seeding run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! All settings come from environment variables (optionally loaded from a
//! `.env` file by the binary) and can be overridden by CLI flags:
//!
//! - **Database**: `DATABASE_URL` and pool settings
//! - **Seed**: per-variant record counts and the generator seed

use std::env;

/// Database connection configuration
pub mod database;
/// Seeding run configuration
pub mod seed;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use seed::{SeedConfig, SeedOverrides};

/// Read an environment variable, falling back to a default
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
