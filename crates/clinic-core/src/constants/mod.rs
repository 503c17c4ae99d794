// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Stored enum values, discriminator tags, and seeding defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain. String values here are the exact values
//! persisted in the `users` table and its JSON profiles.

/// Discriminator tags stored in the `kind` column
pub mod user_kinds {
    /// Patient records
    pub const PATIENT: &str = "Patient";
    /// Doctor records
    pub const DOCTOR: &str = "Doctor";
    /// Admin records
    pub const ADMIN: &str = "Admin";
}

/// Patient gender values
pub mod genders {
    /// Male
    pub const MALE: &str = "male";
    /// Female
    pub const FEMALE: &str = "female";
    /// Other
    pub const OTHER: &str = "other";
    /// Declined to answer
    pub const PREFER_NOT_TO_SAY: &str = "prefer not to say";
}

/// Emergency contact relationship values
pub mod relationships {
    /// Spouse
    pub const SPOUSE: &str = "spouse";
    /// Parent
    pub const PARENT: &str = "parent";
    /// Sibling
    pub const SIBLING: &str = "sibling";
    /// Friend
    pub const FRIEND: &str = "friend";
}

/// Doctor specialization values
pub mod specializations {
    /// Cardiology
    pub const CARDIOLOGY: &str = "Cardiology";
    /// Dermatology
    pub const DERMATOLOGY: &str = "Dermatology";
    /// Neurology
    pub const NEUROLOGY: &str = "Neurology";
    /// Pediatrics
    pub const PEDIATRICS: &str = "Pediatrics";
    /// Oncology
    pub const ONCOLOGY: &str = "Oncology";
    /// Family medicine
    pub const FAMILY_MEDICINE: &str = "Family Medicine";
}

/// Admin permission values
pub mod permissions {
    /// Manage user accounts
    pub const USER_MANAGEMENT: &str = "user_management";
    /// Change system configuration
    pub const SYSTEM_CONFIGURATION: &str = "system_configuration";
    /// View reports
    pub const REPORTING: &str = "reporting";
    /// Read audit logs
    pub const AUDIT_LOGS: &str = "audit_logs";
    /// Review medical records
    pub const MEDICAL_RECORD_REVIEW: &str = "medical_record_review";
}

/// Admin activity log actions
pub mod activity_actions {
    /// Written once for every seeded admin
    pub const ACCOUNT_CREATED: &str = "account_created";
}

/// Default record counts for a seeding run
pub mod seed_defaults {
    /// Patients per run
    pub const PATIENTS: usize = 10;
    /// Doctors per run
    pub const DOCTORS: usize = 5;
    /// Admins per run
    pub const ADMINS: usize = 2;
    /// Smallest permission subset drawn for a seeded admin
    pub const MIN_ADMIN_PERMISSIONS: usize = 2;
    /// Largest permission subset drawn for a seeded admin
    pub const MAX_ADMIN_PERMISSIONS: usize = 5;
}

/// Field format rules
pub mod formats {
    /// Prefix of every doctor license number
    pub const LICENSE_PREFIX: &str = "MD";
    /// Digits following the license prefix
    pub const LICENSE_DIGITS: usize = 6;
    /// Digits in a postal zip code
    pub const ZIP_CODE_DIGITS: usize = 5;
    /// Shortest accepted phone number, country code included
    pub const MIN_PHONE_DIGITS: usize = 7;
}
