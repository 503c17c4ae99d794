// ABOUTME: Patient variant of the user hierarchy
// ABOUTME: Gender, Relationship, insurance, emergency contacts and medical history definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{genders, relationships};
use crate::errors::{AppError, AppResult};
use crate::validation::{validate_phone, validate_required, Validate};

use super::user::{User, UserKind, UserRecord, VariantProfile};

/// Patient gender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male
    #[serde(rename = "male")]
    Male,
    /// Female
    #[serde(rename = "female")]
    Female,
    /// Other
    #[serde(rename = "other")]
    Other,
    /// Declined to answer
    #[serde(rename = "prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    /// Every allowed value
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => genders::MALE,
            Self::Female => genders::FEMALE,
            Self::Other => genders::OTHER,
            Self::PreferNotToSay => genders::PREFER_NOT_TO_SAY,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            genders::MALE => Ok(Self::Male),
            genders::FEMALE => Ok(Self::Female),
            genders::OTHER => Ok(Self::Other),
            genders::PREFER_NOT_TO_SAY => Ok(Self::PreferNotToSay),
            _ => Err(AppError::out_of_range(
                "gender",
                format!("Invalid gender: {s}"),
            )),
        }
    }
}

/// How an emergency contact is related to the patient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Spouse
    Spouse,
    /// Parent
    Parent,
    /// Sibling
    Sibling,
    /// Friend
    Friend,
}

impl Relationship {
    /// Every allowed value
    pub const ALL: [Self; 4] = [Self::Spouse, Self::Parent, Self::Sibling, Self::Friend];

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spouse => relationships::SPOUSE,
            Self::Parent => relationships::PARENT,
            Self::Sibling => relationships::SIBLING,
            Self::Friend => relationships::FRIEND,
        }
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            relationships::SPOUSE => Ok(Self::Spouse),
            relationships::PARENT => Ok(Self::Parent),
            relationships::SIBLING => Ok(Self::Sibling),
            relationships::FRIEND => Ok(Self::Friend),
            _ => Err(AppError::out_of_range(
                "relationship",
                format!("Invalid relationship: {s}"),
            )),
        }
    }
}

/// Insurance coverage on file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsuranceInfo {
    /// Insurer name
    pub provider: String,
    /// Policy number
    pub policy_number: String,
    /// Free-text coverage description
    pub coverage_details: String,
}

/// Person to call in an emergency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    /// Full name
    pub name: String,
    /// Relationship to the patient
    pub relationship: Relationship,
    /// Phone number
    pub phone: String,
}

impl Validate for EmergencyContact {
    fn validate(&self) -> AppResult<()> {
        validate_required("emergency_contacts.name", &self.name)?;
        validate_phone("emergency_contacts.phone", &self.phone)
    }
}

/// One medical history entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicalHistoryEntry {
    /// Diagnosed conditions
    #[serde(default)]
    pub diseases: Vec<String>,
    /// Current medications
    #[serde(default)]
    pub medications: Vec<String>,
    /// Known allergies
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Free-text family history
    #[serde(default)]
    pub family_history: String,
}

/// Patient-specific fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientProfile {
    /// Date of birth
    pub date_of_birth: NaiveDate,
    /// Gender
    pub gender: Gender,
    /// Insurance coverage
    pub insurance_info: InsuranceInfo,
    /// Emergency contacts
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
    /// Medical history entries
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEntry>,
}

impl Validate for PatientProfile {
    fn validate(&self) -> AppResult<()> {
        if self.date_of_birth > Utc::now().date_naive() {
            return Err(AppError::out_of_range(
                "date_of_birth",
                format!("Date of birth {} is in the future", self.date_of_birth),
            ));
        }
        validate_required("insurance_info.provider", &self.insurance_info.provider)?;
        validate_required(
            "insurance_info.policy_number",
            &self.insurance_info.policy_number,
        )?;
        self.emergency_contacts.validate()
    }
}

impl VariantProfile for PatientProfile {
    const KIND: UserKind = UserKind::Patient;

    fn into_user(record: UserRecord<Self>) -> User {
        User::Patient(record)
    }
}
