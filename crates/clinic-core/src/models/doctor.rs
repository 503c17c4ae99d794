// ABOUTME: Doctor variant of the user hierarchy
// ABOUTME: Specialization enum and DoctorProfile with license and qualifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::specializations;
use crate::errors::{AppError, AppResult};
use crate::validation::{validate_license_number, validate_required, Validate};

use super::user::{User, UserKind, UserRecord, VariantProfile};

/// Medical field a doctor practices
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Specialization {
    /// Cardiology
    Cardiology,
    /// Dermatology
    Dermatology,
    /// Neurology
    Neurology,
    /// Pediatrics
    Pediatrics,
    /// Oncology
    Oncology,
    /// Family medicine
    #[serde(rename = "Family Medicine")]
    FamilyMedicine,
}

impl Specialization {
    /// Every allowed value
    pub const ALL: [Self; 6] = [
        Self::Cardiology,
        Self::Dermatology,
        Self::Neurology,
        Self::Pediatrics,
        Self::Oncology,
        Self::FamilyMedicine,
    ];

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cardiology => specializations::CARDIOLOGY,
            Self::Dermatology => specializations::DERMATOLOGY,
            Self::Neurology => specializations::NEUROLOGY,
            Self::Pediatrics => specializations::PEDIATRICS,
            Self::Oncology => specializations::ONCOLOGY,
            Self::FamilyMedicine => specializations::FAMILY_MEDICINE,
        }
    }
}

impl Display for Specialization {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialization {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|specialization| specialization.as_str() == s)
            .ok_or_else(|| {
                AppError::out_of_range("specialization", format!("Invalid specialization: {s}"))
            })
    }
}

/// Doctor-specific fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorProfile {
    /// Medical field
    pub specialization: Specialization,
    /// License number, `MD` followed by six digits
    pub license_number: String,
    /// Degrees and certifications
    #[serde(default)]
    pub qualifications: Vec<String>,
}

impl Validate for DoctorProfile {
    fn validate(&self) -> AppResult<()> {
        validate_license_number(&self.license_number)?;
        self.qualifications
            .iter()
            .try_for_each(|qualification| validate_required("qualifications", qualification))
    }
}

impl VariantProfile for DoctorProfile {
    const KIND: UserKind = UserKind::Doctor;

    fn into_user(record: UserRecord<Self>) -> User {
        User::Doctor(record)
    }
}
