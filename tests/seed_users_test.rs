// ABOUTME: End-to-end tests for the reseed driver against file-backed databases
// ABOUTME: Checks replacement semantics, failure reporting and connection cleanup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use clinic_seed::config::{DatabaseConfig, SeedConfig};
use clinic_seed::database::Database;
use clinic_seed::errors::ErrorCode;
use clinic_seed::models::UserKind;
use clinic_seed::seeding::{run_seed, seed_users, SeedCounts, SeedReport};
use std::fs;

fn seed_config(
    database: DatabaseConfig,
    patients: usize,
    doctors: usize,
    admins: usize,
) -> SeedConfig {
    SeedConfig {
        database,
        counts: SeedCounts {
            patients,
            doctors,
            admins,
        },
        rng_seed: Some(42),
    }
}

async fn counts_in(url: &str) -> Result<(i64, i64, i64)> {
    let db = Database::connect(url).await?;
    let counts = (
        db.count_users_by_kind(UserKind::Patient).await?,
        db.count_users_by_kind(UserKind::Doctor).await?,
        db.count_users_by_kind(UserKind::Admin).await?,
    );
    db.close().await;
    Ok(counts)
}

#[tokio::test]
async fn test_second_run_replaces_first() -> Result<()> {
    let (_dir, url) = common::temp_database_url()?;

    let first = seed_users(&seed_config(common::file_database_config(&url)?, 10, 5, 2)).await;
    let summary = *first.summary().unwrap();
    assert_eq!((summary.patients, summary.doctors, summary.admins), (10, 5, 2));
    assert_eq!(summary.cleared, 0);
    assert_eq!(counts_in(&url).await?, (10, 5, 2));

    // Same seed again: uids and emails repeat, so stale rows must be gone first
    let second = seed_users(&seed_config(common::file_database_config(&url)?, 3, 1, 4)).await;
    let summary = *second.summary().unwrap();
    assert_eq!(summary.cleared, 17);
    assert_eq!(counts_in(&url).await?, (3, 1, 4));
    Ok(())
}

#[tokio::test]
async fn test_zero_counts_clear_everything() -> Result<()> {
    let (_dir, url) = common::temp_database_url()?;

    let first = seed_users(&seed_config(common::file_database_config(&url)?, 5, 5, 5)).await;
    assert!(first.is_success());
    let report = seed_users(&seed_config(common::file_database_config(&url)?, 0, 0, 0)).await;

    assert!(report.is_success());
    assert_eq!(counts_in(&url).await?, (0, 0, 0));
    Ok(())
}

#[tokio::test]
async fn test_missing_parent_directories_are_created() -> Result<()> {
    let (dir, _) = common::temp_database_url()?;
    let nested = dir.path().join("data").join("nested").join("clinic.db");
    let url = format!("sqlite:{}", nested.display());

    let report = seed_users(&seed_config(common::file_database_config(&url)?, 2, 1, 1)).await;

    assert!(report.is_success());
    assert!(nested.exists());
    assert_eq!(counts_in(&url).await?, (2, 1, 1));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_database_reports_failure() -> Result<()> {
    let (dir, _) = common::temp_database_url()?;
    // A regular file where the database directory should be
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory")?;
    let url = format!("sqlite:{}", blocker.join("clinic.db").display());

    let report = seed_users(&seed_config(common::file_database_config(&url)?, 1, 1, 1)).await;

    assert!(!report.is_success());
    assert_eq!(report.error().unwrap().code, ErrorCode::DatabaseError);
    Ok(())
}

#[tokio::test]
async fn test_failed_run_still_closes_connection() -> Result<()> {
    let (_dir, url) = common::temp_database_url()?;
    let writable = Database::connect(&url).await?;
    writable.migrate().await?;
    writable.close().await;

    let read_only = Database::connect(&format!("{url}?mode=ro")).await?;
    let handle = read_only.clone();

    let report = run_seed(
        read_only,
        &mut common::test_generator(),
        &SeedCounts::default(),
    )
    .await;

    assert!(matches!(report, SeedReport::Failed(_)));
    assert!(handle.is_closed());
    Ok(())
}

#[tokio::test]
async fn test_successful_run_closes_connection() -> Result<()> {
    let (_dir, url) = common::temp_database_url()?;
    let db = Database::new(&common::file_database_config(&url)?).await?;
    let handle = db.clone();

    let report = run_seed(db, &mut common::test_generator(), &SeedCounts::default()).await;

    assert!(report.is_success());
    assert!(handle.is_closed());
    assert_eq!(counts_in(&url).await?, (10, 5, 2));
    Ok(())
}
