// ABOUTME: Main library entry point for the clinic user seeder
// ABOUTME: Storage for the discriminated user collection plus synthetic data seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Clinic Seed
//!
//! Stores Patient, Doctor and Admin users in one shared `users` table
//! (distinguished by a `kind` discriminator) and fills it with synthetic
//! records for development and testing.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use clinic_seed::config::SeedConfig;
//! use clinic_seed::errors::AppResult;
//! use clinic_seed::seeding::seed_users;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = SeedConfig::from_env()?;
//!     let report = seed_users(&config).await;
//!     println!("seeded: {}", report.is_success());
//!     Ok(())
//! }
//! ```

/// Environment configuration for the database and seeding run
pub mod config;

/// `SQLite` storage for the shared users table
pub mod database;

/// Structured logging setup
pub mod logging;

/// Record generation and the reseed driver
pub mod seeding;

/// Error types re-exported from `clinic-core`
pub mod errors;

pub use clinic_core::{constants, models, validation};

pub use seeding::{generate_users, seed_users, GeneratedUsers, SeedCounts, SeedReport};
