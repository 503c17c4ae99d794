// ABOUTME: Base user record, discriminator, and the User sum type
// ABOUTME: UserBase, Address, UserKind, UserRecord, VariantProfile and User definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::user_kinds;
use crate::errors::{AppError, AppResult};
use crate::validation::{
    validate_email, validate_phone, validate_required, validate_zip_code, Validate,
};

use super::{AdminProfile, DoctorProfile, PatientProfile};

/// Discriminator selecting which variant a stored user record is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserKind {
    /// Patient record
    Patient,
    /// Doctor record
    Doctor,
    /// Admin record
    Admin,
}

impl UserKind {
    /// Every variant, in seeding order
    pub const ALL: [Self; 3] = [Self::Patient, Self::Doctor, Self::Admin];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => user_kinds::PATIENT,
            Self::Doctor => user_kinds::DOCTOR,
            Self::Admin => user_kinds::ADMIN,
        }
    }
}

impl Display for UserKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            user_kinds::PATIENT => Ok(Self::Patient),
            user_kinds::DOCTOR => Ok(Self::Doctor),
            user_kinds::ADMIN => Ok(Self::Admin),
            _ => Err(AppError::out_of_range(
                "kind",
                format!("Invalid user kind: {s}"),
            )),
        }
    }
}

/// Postal address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Street line
    pub street: String,
    /// City
    pub city: String,
    /// State
    pub state: String,
    /// Five-digit zip code
    pub zip_code: String,
}

impl Validate for Address {
    fn validate(&self) -> AppResult<()> {
        validate_required("street", &self.street)?;
        validate_required("city", &self.city)?;
        validate_required("state", &self.state)?;
        validate_zip_code(&self.zip_code)
    }
}

/// Fields shared by every user variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserBase {
    /// Unique identifier (UUID string), unique across all variants
    pub uid: String,
    /// Login name
    pub username: String,
    /// Email address, unique across all variants
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Phone number in `+<digits>` form
    pub phone: String,
    /// Postal address
    pub address: Address,
    /// Whether the account may sign in
    pub is_active: bool,
    /// Last sign-in time
    pub last_login: DateTime<Utc>,
}

impl UserBase {
    /// First and last name joined by a space
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Validate for UserBase {
    fn validate(&self) -> AppResult<()> {
        validate_required("uid", &self.uid)?;
        Uuid::parse_str(&self.uid).map_err(|e| {
            AppError::invalid_format("uid", format!("Invalid uid {}: {e}", self.uid))
        })?;
        validate_required("username", &self.username)?;
        validate_email(&self.email)?;
        validate_required("first_name", &self.first_name)?;
        validate_required("last_name", &self.last_name)?;
        validate_phone("phone", &self.phone)?;
        self.address.validate()
    }
}

/// Variant-specific payload bound to its discriminator
pub trait VariantProfile:
    Serialize + DeserializeOwned + Validate + Clone + Send + Sync + 'static
{
    /// Discriminator stored with every record of this variant
    const KIND: UserKind;

    /// Wrap a record of this variant into the `User` sum type
    fn into_user(record: UserRecord<Self>) -> User;
}

/// One stored user: the shared base fields plus a variant profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord<P> {
    /// Shared fields
    #[serde(flatten)]
    pub user: UserBase,
    /// Variant-specific fields
    #[serde(flatten)]
    pub profile: P,
}

impl<P: VariantProfile> UserRecord<P> {
    /// Build a record from its two halves
    pub const fn new(user: UserBase, profile: P) -> Self {
        Self { user, profile }
    }

    /// Discriminator of this record
    #[must_use]
    pub const fn kind(&self) -> UserKind {
        P::KIND
    }

    /// Move this record into the `User` sum type
    #[must_use]
    pub fn into_user(self) -> User {
        P::into_user(self)
    }
}

impl<P: VariantProfile> Validate for UserRecord<P> {
    fn validate(&self) -> AppResult<()> {
        self.user
            .validate()
            .and_then(|()| self.profile.validate())
            .map_err(|e| e.with_resource_id(self.user.uid.clone()))
    }
}

/// Patient record
pub type Patient = UserRecord<PatientProfile>;
/// Doctor record
pub type Doctor = UserRecord<DoctorProfile>;
/// Admin record
pub type Admin = UserRecord<AdminProfile>;

/// Any user, tagged by its `kind` discriminator
///
/// All three variants share one collection; the tag decides which profile
/// shape the variant-specific fields are read as.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum User {
    /// Patient variant
    Patient(Patient),
    /// Doctor variant
    Doctor(Doctor),
    /// Admin variant
    Admin(Admin),
}

impl User {
    /// Discriminator of this user
    #[must_use]
    pub const fn kind(&self) -> UserKind {
        match self {
            Self::Patient(_) => UserKind::Patient,
            Self::Doctor(_) => UserKind::Doctor,
            Self::Admin(_) => UserKind::Admin,
        }
    }

    /// Shared fields of this user
    #[must_use]
    pub const fn base(&self) -> &UserBase {
        match self {
            Self::Patient(record) => &record.user,
            Self::Doctor(record) => &record.user,
            Self::Admin(record) => &record.user,
        }
    }

    /// Admin record, if this user is one
    #[must_use]
    pub const fn as_admin(&self) -> Option<&Admin> {
        match self {
            Self::Admin(record) => Some(record),
            Self::Patient(_) | Self::Doctor(_) => None,
        }
    }
}

impl Validate for User {
    fn validate(&self) -> AppResult<()> {
        match self {
            Self::Patient(record) => record.validate(),
            Self::Doctor(record) => record.validate(),
            Self::Admin(record) => record.validate(),
        }
    }
}
