// ABOUTME: Property-style tests for synthetic user generation
// ABOUTME: Verifies counts, enum membership, permission subsets and activity entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use clinic_seed::constants::activity_actions;
use clinic_seed::models::{Gender, Permission, Relationship, Specialization, UserKind};
use clinic_seed::seeding::{generate_users, SeedCounts, UserGenerator};
use clinic_seed::validation::Validate;
use std::collections::HashSet;

#[test]
fn test_default_counts() {
    let counts = SeedCounts::default();
    assert_eq!((counts.patients, counts.doctors, counts.admins), (10, 5, 2));
    assert_eq!(counts.total(), 17);
}

#[test]
fn test_generate_users_exact_lengths() {
    let mut generator = common::test_generator();

    for (patients, doctors, admins) in [(0, 0, 0), (1, 0, 0), (0, 3, 0), (0, 0, 4), (7, 2, 5)] {
        let counts = SeedCounts {
            patients,
            doctors,
            admins,
        };
        let users = generate_users(&mut generator, &counts);

        assert_eq!(users.patients.len(), patients);
        assert_eq!(users.doctors.len(), doctors);
        assert_eq!(users.admins.len(), admins);
    }
}

#[test]
fn test_sequences_hold_their_own_variant() {
    let users = generate_users(&mut common::test_generator(), &SeedCounts::default());

    assert!(users.patients.iter().all(|p| p.kind() == UserKind::Patient));
    assert!(users.doctors.iter().all(|d| d.kind() == UserKind::Doctor));
    assert!(users.admins.iter().all(|a| a.kind() == UserKind::Admin));
}

#[test]
fn test_enum_fields_are_members() {
    let counts = SeedCounts {
        patients: 60,
        doctors: 60,
        admins: 0,
    };
    let users = generate_users(&mut common::test_generator(), &counts);

    for patient in &users.patients {
        assert!(Gender::ALL.contains(&patient.profile.gender));
        assert_eq!(
            patient.profile.gender.as_str().parse::<Gender>().unwrap(),
            patient.profile.gender
        );
        for contact in &patient.profile.emergency_contacts {
            assert!(Relationship::ALL.contains(&contact.relationship));
        }
    }
    for doctor in &users.doctors {
        assert!(Specialization::ALL.contains(&doctor.profile.specialization));
    }
}

#[test]
fn test_admin_permissions_are_distinct_subsets_of_two_to_five() {
    let counts = SeedCounts {
        patients: 0,
        doctors: 0,
        admins: 200,
    };
    let users = generate_users(&mut UserGenerator::from_seed(1234), &counts);
    let mut sizes_seen = HashSet::new();

    for admin in &users.admins {
        let permissions = admin.profile.permissions();
        assert!((2..=5).contains(&permissions.len()));
        assert!(permissions.iter().all(|p| Permission::ALL.contains(p)));
        sizes_seen.insert(permissions.len());
    }
    // 200 draws make every size overwhelmingly likely with a fixed seed
    assert_eq!(sizes_seen.len(), 4);
}

#[test]
fn test_admin_has_account_created_entry() {
    let counts = SeedCounts {
        patients: 0,
        doctors: 0,
        admins: 10,
    };
    let users = generate_users(&mut common::test_generator(), &counts);
    let now = Utc::now();

    for admin in &users.admins {
        let entry = admin
            .profile
            .activity_log()
            .iter()
            .find(|entry| entry.action == activity_actions::ACCOUNT_CREATED)
            .expect("account_created entry");
        assert!(entry.timestamp <= now);
        assert_eq!(entry.details["method"], "seeder");
        assert!(entry.performed_by.is_none());
    }
}

#[test]
fn test_uids_and_emails_unique_across_variants() {
    let counts = SeedCounts {
        patients: 40,
        doctors: 30,
        admins: 10,
    };
    let users = generate_users(&mut common::test_generator(), &counts);

    let bases: Vec<_> = users
        .patients
        .iter()
        .map(|r| &r.user)
        .chain(users.doctors.iter().map(|r| &r.user))
        .chain(users.admins.iter().map(|r| &r.user))
        .collect();
    let uids: HashSet<_> = bases.iter().map(|u| u.uid.as_str()).collect();
    let emails: HashSet<_> = bases.iter().map(|u| u.email.as_str()).collect();

    assert_eq!(uids.len(), 80);
    assert_eq!(emails.len(), 80);
}

#[test]
fn test_every_generated_record_is_valid() {
    let users = generate_users(&mut UserGenerator::from_entropy(), &SeedCounts::default());

    users.patients.validate().unwrap();
    users.doctors.validate().unwrap();
    users.admins.validate().unwrap();
}
