// ABOUTME: Tests for environment-driven seeding configuration
// ABOUTME: Covers defaults, overrides and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use clinic_seed::config::{DatabaseUrl, SeedConfig, SeedOverrides};
use clinic_seed::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const SEED_VARS: [&str; 7] = [
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "DATABASE_BUSY_TIMEOUT_SECS",
    "SEED_PATIENTS",
    "SEED_DOCTORS",
    "SEED_ADMINS",
    "SEED_RNG_SEED",
];

fn clear_seed_env() {
    for key in SEED_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_seed_env();
    let config = SeedConfig::from_env().unwrap();

    assert_eq!(config.counts.patients, 10);
    assert_eq!(config.counts.doctors, 5);
    assert_eq!(config.counts.admins, 2);
    assert!(config.rng_seed.is_none());
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.busy_timeout_secs, 30);
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/clinic.db"),
            params: None,
        }
    );
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_seed_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("SEED_PATIENTS", "25");
    env::set_var("SEED_DOCTORS", "0");
    env::set_var("SEED_ADMINS", " 3 ");
    env::set_var("SEED_RNG_SEED", "42");

    let config = SeedConfig::from_env().unwrap();
    clear_seed_env();

    assert!(config.database.url.is_memory());
    assert_eq!(config.counts.patients, 25);
    assert_eq!(config.counts.doctors, 0);
    assert_eq!(config.counts.admins, 3);
    assert_eq!(config.rng_seed, Some(42));
}

#[test]
#[serial]
fn test_negative_count_rejected() {
    clear_seed_env();
    env::set_var("SEED_DOCTORS", "-1");

    let error = SeedConfig::from_env().unwrap_err();
    clear_seed_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("SEED_DOCTORS"));
}

#[test]
#[serial]
fn test_malformed_seed_rejected() {
    clear_seed_env();
    env::set_var("SEED_RNG_SEED", "not-a-number");

    let error = SeedConfig::from_env().unwrap_err();
    clear_seed_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_unsupported_database_url_rejected() {
    clear_seed_env();
    env::set_var("DATABASE_URL", "postgresql://localhost/clinic");

    let result = SeedConfig::from_env();
    clear_seed_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_overrides_skip_malformed_environment() {
    clear_seed_env();
    env::set_var("DATABASE_URL", "postgres://localhost/clinic");
    env::set_var("SEED_PATIENTS", "abc");
    env::set_var("SEED_RNG_SEED", "not-a-number");

    let overrides = SeedOverrides {
        database_url: Some("sqlite::memory:".into()),
        patients: Some(3),
        rng_seed: Some(7),
        ..SeedOverrides::default()
    };
    let config = SeedConfig::from_env_with(&overrides);
    clear_seed_env();

    let config = config.unwrap();
    assert!(config.database.url.is_memory());
    assert_eq!(config.counts.patients, 3);
    assert_eq!(config.counts.doctors, 5);
    assert_eq!(config.rng_seed, Some(7));
}

#[test]
#[serial]
fn test_overrides_win_over_valid_environment() {
    clear_seed_env();
    env::set_var("SEED_ADMINS", "9");
    env::set_var("SEED_DOCTORS", "4");

    let overrides = SeedOverrides {
        admins: Some(0),
        ..SeedOverrides::default()
    };
    let config = SeedConfig::from_env_with(&overrides).unwrap();
    clear_seed_env();

    assert_eq!(config.counts.admins, 0);
    assert_eq!(config.counts.doctors, 4);
}

#[test]
#[serial]
fn test_unset_override_still_reads_malformed_environment() {
    clear_seed_env();
    env::set_var("SEED_PATIENTS", "abc");

    let overrides = SeedOverrides {
        doctors: Some(1),
        ..SeedOverrides::default()
    };
    let error = SeedConfig::from_env_with(&overrides).unwrap_err();
    clear_seed_env();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("SEED_PATIENTS"));
}
