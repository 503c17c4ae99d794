// ABOUTME: Randomized factory for synthetic Patient, Doctor and Admin records
// ABOUTME: Seedable generator producing plausible, correctly shaped field values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use uuid::Builder;

use super::fixtures;
use crate::constants::{activity_actions, formats, seed_defaults};
use crate::models::{
    ActivityLogEntry, Address, Admin, AdminProfile, Doctor, DoctorProfile, EmergencyContact,
    Gender, InsuranceInfo, MedicalHistoryEntry, Patient, PatientProfile, Permission,
    Relationship, Specialization, UserBase,
};

/// Youngest seeded patient, in days
const MIN_PATIENT_AGE_DAYS: i64 = 18 * 365;
/// Oldest seeded patient, in days
const MAX_PATIENT_AGE_DAYS: i64 = 80 * 365;
/// Seeded last logins fall within this many seconds before now
const RECENT_LOGIN_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Factory for synthetic user records
///
/// Output is fully determined by the random generator, so a generator built
/// with [`UserGenerator::from_seed`] yields the same records on every run
/// (timestamps relative to "now" aside). Emails embed a per-generator sequence
/// number and are therefore unique within one generator.
#[derive(Debug, Clone)]
pub struct UserGenerator<R = ChaCha8Rng> {
    rng: R,
    sequence: u64,
}

impl UserGenerator<ChaCha8Rng> {
    /// Reproducible generator
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Seeded generator when a seed is given, otherwise entropy-seeded
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }
}

impl<R: Rng> UserGenerator<R> {
    /// Wrap any random generator
    pub const fn new(rng: R) -> Self {
        Self { rng, sequence: 0 }
    }

    /// One fully populated set of shared user fields
    pub fn generate_base_user(&mut self) -> UserBase {
        self.sequence += 1;

        let first_name = self.pick_str(fixtures::FIRST_NAMES);
        let last_name = self.pick_str(fixtures::LAST_NAMES);
        let domain = self.pick_str(fixtures::EMAIL_DOMAINS);
        let handle_suffix: u8 = self.rng.gen_range(10..100);
        let login_offset = self.rng.gen_range(60..=RECENT_LOGIN_WINDOW_SECS);

        UserBase {
            uid: Builder::from_random_bytes(self.rng.gen()).into_uuid().to_string(),
            username: format!(
                "{}_{}{handle_suffix}",
                first_name.to_lowercase(),
                last_name.to_lowercase()
            ),
            email: format!(
                "{}.{}{}@{domain}",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                self.sequence
            ),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            phone: self.phone_number(),
            address: self.address(),
            is_active: true,
            last_login: Utc::now() - Duration::seconds(login_offset),
        }
    }

    /// Synthetic patient with one emergency contact and one history entry
    pub fn generate_patient(&mut self) -> Patient {
        let user = self.generate_base_user();
        let age_days = self
            .rng
            .gen_range(MIN_PATIENT_AGE_DAYS..=MAX_PATIENT_AGE_DAYS);

        let profile = PatientProfile {
            date_of_birth: Utc::now().date_naive() - Duration::days(age_days),
            gender: self.pick(&Gender::ALL).unwrap_or(Gender::PreferNotToSay),
            insurance_info: InsuranceInfo {
                provider: format!(
                    "{} {}",
                    self.pick_str(fixtures::INSURER_PREFIXES),
                    self.pick_str(fixtures::INSURER_SUFFIXES)
                ),
                policy_number: self.alphanumeric(10).to_uppercase(),
                coverage_details: format!("{}.", self.pick_str(fixtures::COVERAGE_PHRASES)),
            },
            emergency_contacts: vec![EmergencyContact {
                name: format!(
                    "{} {}",
                    self.pick_str(fixtures::FIRST_NAMES),
                    self.pick_str(fixtures::LAST_NAMES)
                ),
                relationship: self.pick(&Relationship::ALL).unwrap_or(Relationship::Friend),
                phone: self.phone_number(),
            }],
            medical_history: vec![self.medical_history_entry()],
        };

        Patient::new(user, profile)
    }

    /// Synthetic doctor holding an M.D. plus one further qualification
    pub fn generate_doctor(&mut self) -> Doctor {
        let user = self.generate_base_user();
        let profile = DoctorProfile {
            specialization: self
                .pick(&Specialization::ALL)
                .unwrap_or(Specialization::FamilyMedicine),
            license_number: format!(
                "{}{}",
                formats::LICENSE_PREFIX,
                self.digits(formats::LICENSE_DIGITS)
            ),
            qualifications: vec![
                fixtures::PRIMARY_QUALIFICATION.to_owned(),
                self.pick_str(fixtures::SECONDARY_QUALIFICATIONS).to_owned(),
            ],
        };

        Doctor::new(user, profile)
    }

    /// Synthetic admin with 2 to 5 distinct permissions and an
    /// `account_created` activity entry stamped now
    pub fn generate_admin(&mut self) -> Admin {
        let user = self.generate_base_user();
        let count = self.rng.gen_range(
            seed_defaults::MIN_ADMIN_PERMISSIONS..=seed_defaults::MAX_ADMIN_PERMISSIONS,
        );
        let permissions: Vec<Permission> = Permission::ALL
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect();

        let created = ActivityLogEntry::new(activity_actions::ACCOUNT_CREATED)
            .with_details(json!({ "method": "seeder" }));

        Admin::new(user, AdminProfile::with_activity_log(permissions, vec![created]))
    }

    fn medical_history_entry(&mut self) -> MedicalHistoryEntry {
        let disease_count = self.rng.gen_range(1..=2);
        let medication_count = self.rng.gen_range(1..=2);
        let allergy_count = self.rng.gen_range(0..=2);
        let relative = self.pick_str(fixtures::RELATIVES);
        let condition = self.pick_str(fixtures::CONDITIONS);
        let onset_age: u8 = self.rng.gen_range(35..80);

        MedicalHistoryEntry {
            diseases: self.pick_many(fixtures::CONDITIONS, disease_count),
            medications: self.pick_many(fixtures::MEDICATIONS, medication_count),
            allergies: self.pick_many(fixtures::ALLERGENS, allergy_count),
            family_history: format!(
                "{relative} diagnosed with {} at age {onset_age}.",
                condition.to_lowercase()
            ),
        }
    }

    fn address(&mut self) -> Address {
        let number: u16 = self.rng.gen_range(1..10_000);
        Address {
            street: format!(
                "{number} {} {}",
                self.pick_str(fixtures::STREET_NAMES),
                self.pick_str(fixtures::STREET_SUFFIXES)
            ),
            city: self.pick_str(fixtures::CITIES).to_owned(),
            state: self.pick_str(fixtures::STATES).to_owned(),
            zip_code: self.digits(formats::ZIP_CODE_DIGITS),
        }
    }

    /// US number: `+1` followed by ten digits
    fn phone_number(&mut self) -> String {
        format!("+1{}", self.digits(10))
    }

    fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    fn alphanumeric(&mut self, len: usize) -> String {
        (&mut self.rng)
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).copied()
    }

    fn pick_str(&mut self, items: &[&'static str]) -> &'static str {
        self.pick(items).unwrap_or_default()
    }

    fn pick_many(&mut self, items: &[&str], count: usize) -> Vec<String> {
        items
            .choose_multiple(&mut self.rng, count)
            .map(|item| (*item).to_owned())
            .collect()
    }
}
