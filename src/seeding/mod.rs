// ABOUTME: Seeding driver that clears and repopulates the shared users table
// ABOUTME: Generates per-variant record sets and bulk-inserts them concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # User Seeding
//!
//! A seeding run is one linear pass:
//!
//! 1. connect to the database and make sure the schema exists
//! 2. delete every Patient, Doctor and Admin record (the three deletes run
//!    concurrently)
//! 3. generate the configured number of records per variant
//! 4. bulk-insert the three sequences (again concurrently)
//! 5. close the connection, whatever happened before
//!
//! Failures are logged and reported, never retried. A run that fails during
//! the insert phase can leave the table cleared but only partly repopulated.

/// Static vocabulary for synthetic records
pub mod fixtures;
/// Randomized record factory
pub mod generator;

pub use generator::UserGenerator;

use crate::config::SeedConfig;
use crate::constants::seed_defaults;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Admin, Doctor, Patient, UserKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Requested number of records per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCounts {
    /// Patients to generate
    pub patients: usize,
    /// Doctors to generate
    pub doctors: usize,
    /// Admins to generate
    pub admins: usize,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            patients: seed_defaults::PATIENTS,
            doctors: seed_defaults::DOCTORS,
            admins: seed_defaults::ADMINS,
        }
    }
}

impl SeedCounts {
    /// Records across all variants
    #[must_use]
    pub const fn total(&self) -> usize {
        self.patients + self.doctors + self.admins
    }
}

/// Generated but not yet persisted records, one ordered sequence per variant
#[derive(Debug, Clone, Default)]
pub struct GeneratedUsers {
    /// Patient records
    pub patients: Vec<Patient>,
    /// Doctor records
    pub doctors: Vec<Doctor>,
    /// Admin records
    pub admins: Vec<Admin>,
}

/// Build exactly `counts` records per variant
pub fn generate_users<R: Rng>(
    generator: &mut UserGenerator<R>,
    counts: &SeedCounts,
) -> GeneratedUsers {
    GeneratedUsers {
        patients: (0..counts.patients)
            .map(|_| generator.generate_patient())
            .collect(),
        doctors: (0..counts.doctors)
            .map(|_| generator.generate_doctor())
            .collect(),
        admins: (0..counts.admins)
            .map(|_| generator.generate_admin())
            .collect(),
    }
}

/// Rows touched by a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    /// Rows removed during the delete phase
    pub cleared: u64,
    /// Patients inserted
    pub patients: u64,
    /// Doctors inserted
    pub doctors: u64,
    /// Admins inserted
    pub admins: u64,
}

/// Result of a full seeding run
#[derive(Debug)]
pub enum SeedReport {
    /// Every phase finished
    Completed(SeedSummary),
    /// A phase failed; the error was already logged
    Failed(AppError),
}

impl SeedReport {
    /// Whether the run completed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Summary of a completed run
    #[must_use]
    pub const fn summary(&self) -> Option<&SeedSummary> {
        match self {
            Self::Completed(summary) => Some(summary),
            Self::Failed(_) => None,
        }
    }

    /// Error of a failed run
    #[must_use]
    pub const fn error(&self) -> Option<&AppError> {
        match self {
            Self::Completed(_) => None,
            Self::Failed(error) => Some(error),
        }
    }
}

/// Clear all three variants, then insert freshly generated records
///
/// The delete phase completes before any record is generated or inserted.
///
/// # Errors
///
/// Returns the first error from migration, deletion, validation or insertion
pub async fn reseed<R: Rng>(
    db: &Database,
    generator: &mut UserGenerator<R>,
    counts: &SeedCounts,
) -> AppResult<SeedSummary> {
    db.migrate().await?;

    let (cleared_patients, cleared_doctors, cleared_admins) = tokio::try_join!(
        db.delete_users_by_kind(UserKind::Patient),
        db.delete_users_by_kind(UserKind::Doctor),
        db.delete_users_by_kind(UserKind::Admin),
    )?;
    let cleared = cleared_patients + cleared_doctors + cleared_admins;
    info!(cleared, "Cleared existing users");

    let users = generate_users(generator, counts);

    let (patients, doctors, admins) = tokio::try_join!(
        db.insert_users(&users.patients),
        db.insert_users(&users.doctors),
        db.insert_users(&users.admins),
    )?;

    Ok(SeedSummary {
        cleared,
        patients,
        doctors,
        admins,
    })
}

/// Reseed through an open database and close it on every exit path
///
/// Errors are logged and returned in the report rather than propagated.
pub async fn run_seed<R: Rng>(
    db: Database,
    generator: &mut UserGenerator<R>,
    counts: &SeedCounts,
) -> SeedReport {
    let result = reseed(&db, generator, counts).await;
    db.close().await;

    match result {
        Ok(summary) => {
            info!(
                patients = summary.patients,
                doctors = summary.doctors,
                admins = summary.admins,
                "Successfully seeded: {} patients, {} doctors, {} admins",
                summary.patients,
                summary.doctors,
                summary.admins
            );
            SeedReport::Completed(summary)
        }
        Err(e) => {
            error!(error = %e, code = ?e.code, "Error seeding users");
            SeedReport::Failed(e)
        }
    }
}

/// Full reseed: connect, clear, generate, insert, close
///
/// Never panics and never returns an error directly; inspect the report.
pub async fn seed_users(config: &SeedConfig) -> SeedReport {
    let db = match Database::new(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, url = %config.database.url, "Error connecting to database");
            return SeedReport::Failed(e);
        }
    };
    info!(url = %config.database.url, "Connected to database");

    let mut generator = UserGenerator::from_optional_seed(config.rng_seed);
    run_seed(db, &mut generator, &config.counts).await
}
