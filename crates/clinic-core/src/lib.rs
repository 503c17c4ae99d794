// ABOUTME: Core types for the clinic user seeder
// ABOUTME: Foundation crate with error handling, validation, constants and the user model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Clinic Core
//!
//! Foundation crate shared by the storage layer and the seeder. It holds the
//! user hierarchy model and the rules enforced before any record is written.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Stored enum values and seeding defaults
//! - **validation**: The `Validate` trait and field checks
//! - **models**: `User` sum type with Patient, Doctor and Admin variants

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Write-time field validation
pub mod validation;

/// User hierarchy model (base record plus discriminated variants)
pub mod models;
