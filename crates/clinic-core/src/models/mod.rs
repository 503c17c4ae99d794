// ABOUTME: User hierarchy model module
// ABOUTME: Re-exports the base record, the three variants and the User sum type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # User Hierarchy Model
//!
//! Patients, doctors and admins share one collection. Each stored record is a
//! [`UserRecord`] embedding the common [`UserBase`] plus a variant profile, and
//! [`User`] is the sum type tagged by the `kind` discriminator.

/// Admin variant: permissions and append-only activity log
pub mod admin;
/// Doctor variant: specialization, license and qualifications
pub mod doctor;
/// Patient variant: demographics, insurance, contacts and history
pub mod patient;
/// Base record, discriminator and sum type
pub mod user;

pub use admin::{ActivityLogEntry, AdminProfile, Permission};
pub use doctor::{DoctorProfile, Specialization};
pub use patient::{
    EmergencyContact, Gender, InsuranceInfo, MedicalHistoryEntry, PatientProfile, Relationship,
};
pub use user::{
    Address, Admin, Doctor, Patient, User, UserBase, UserKind, UserRecord, VariantProfile,
};
