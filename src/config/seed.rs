// ABOUTME: Seeding run configuration loaded from the environment
// ABOUTME: Per-variant record counts, generator seed, and database settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::seed_defaults;
use crate::errors::{AppError, AppResult};
use crate::seeding::SeedCounts;
use serde::{Deserialize, Serialize};
use std::env;

use super::{env_var_or, DatabaseConfig};

/// Everything a seeding run needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Where to write
    pub database: DatabaseConfig,
    /// How many records of each variant to generate
    pub counts: SeedCounts,
    /// Generator seed for reproducible runs; random when absent
    pub rng_seed: Option<u64>,
}

/// Explicit values that take precedence over the environment
///
/// A set field means its environment variable is never read, so a malformed
/// variable cannot fail a run that overrides it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOverrides {
    /// Replaces `DATABASE_URL`
    pub database_url: Option<String>,
    /// Replaces `SEED_PATIENTS`
    pub patients: Option<usize>,
    /// Replaces `SEED_DOCTORS`
    pub doctors: Option<usize>,
    /// Replaces `SEED_ADMINS`
    pub admins: Option<usize>,
    /// Replaces `SEED_RNG_SEED`
    pub rng_seed: Option<u64>,
}

impl SeedConfig {
    /// Load seeding configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if any count, seed or database variable is invalid
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_with(&SeedOverrides::default())
    }

    /// Load seeding configuration, reading the environment only for values
    /// `overrides` leaves unset
    ///
    /// # Errors
    ///
    /// Returns an error if an override is invalid or a variable that is read
    /// is invalid
    pub fn from_env_with(overrides: &SeedOverrides) -> AppResult<Self> {
        let rng_seed = match overrides.rng_seed {
            Some(seed) => Some(seed),
            None => seed_from_env()?,
        };

        let counts = SeedCounts {
            patients: count_or_env(overrides.patients, "SEED_PATIENTS", seed_defaults::PATIENTS)?,
            doctors: count_or_env(overrides.doctors, "SEED_DOCTORS", seed_defaults::DOCTORS)?,
            admins: count_or_env(overrides.admins, "SEED_ADMINS", seed_defaults::ADMINS)?,
        };

        Ok(Self {
            database: DatabaseConfig::from_env_with_url(overrides.database_url.as_deref())?,
            counts,
            rng_seed,
        })
    }
}

fn seed_from_env() -> AppResult<Option<u64>> {
    env::var("SEED_RNG_SEED").map_or(Ok(None), |value| {
        value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config_invalid(format!("Invalid SEED_RNG_SEED value: {e}")))
    })
}

fn count_or_env(value: Option<usize>, key: &str, default: usize) -> AppResult<usize> {
    value.map_or_else(
        || {
            env_var_or(key, &default.to_string())
                .trim()
                .parse()
                .map_err(|e| AppError::config_invalid(format!("Invalid {key} value: {e}")))
        },
        Ok,
    )
}
