// ABOUTME: Synthetic user seeder for clinic development databases
// ABOUTME: Clears Patient/Doctor/Admin records and inserts freshly generated ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User seeder.
//!
//! This binary replaces every Patient, Doctor and Admin record in the shared
//! `users` table with synthetic ones.
//!
//! Usage:
//! ```bash
//! # Seed with defaults (10 patients, 5 doctors, 2 admins; DATABASE_URL from .env or environment)
//! cargo run --bin seed-users
//!
//! # Custom counts
//! cargo run --bin seed-users -- --patients 50 --doctors 12 --admins 3
//!
//! # Reproducible data
//! cargo run --bin seed-users -- --seed 42
//!
//! # Exit non-zero when seeding fails (for CI pipelines)
//! cargo run --bin seed-users -- --strict
//!
//! # Verbose output
//! cargo run --bin seed-users -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use clinic_seed::config::{SeedConfig, SeedOverrides};
use clinic_seed::errors::AppError;
use clinic_seed::logging::LoggingConfig;
use clinic_seed::seeding::{seed_users, SeedReport};
use thiserror::Error;
use tracing::{info, warn};

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("Seeding failed: {0}")]
    Failed(AppError),
}

#[derive(Parser)]
#[command(
    name = "seed-users",
    about = "Clinic User Seeder",
    long_about = "Replace all Patient, Doctor and Admin users with synthetic records"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Number of patients to generate
    #[arg(long)]
    patients: Option<usize>,

    /// Number of doctors to generate
    #[arg(long)]
    doctors: Option<usize>,

    /// Number of admins to generate
    #[arg(long)]
    admins: Option<usize>,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Exit with a non-zero status when seeding fails
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl SeedArgs {
    /// Command-line values that replace their environment variables
    fn overrides(&self) -> SeedOverrides {
        SeedOverrides {
            database_url: self.database_url.clone(),
            patients: self.patients,
            doctors: self.doctors,
            admins: self.admins,
            rng_seed: self.seed,
        }
    }
}

/// Process outcome for a finished run; failures only fail the process with `--strict`
fn exit_status(report: SeedReport, strict: bool) -> Result<()> {
    match report {
        SeedReport::Completed(_) => {
            info!("=== Seeding Complete ===");
            Ok(())
        }
        SeedReport::Failed(e) if strict => Err(SeedError::Failed(e).into()),
        SeedReport::Failed(_) => {
            warn!("Seeding did not complete; rerun with --strict to fail the process");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set
    dotenvy::dotenv().ok();

    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    info!("=== Clinic User Seeder ===");

    let config = SeedConfig::from_env_with(&args.overrides())?;
    info!(
        patients = config.counts.patients,
        doctors = config.counts.doctors,
        admins = config.counts.admins,
        seed = ?config.rng_seed,
        "Seeding {} users",
        config.counts.total()
    );

    exit_status(seed_users(&config).await, args.strict)
}
