// ABOUTME: Static vocabulary used to fabricate plausible user records
// ABOUTME: Names, places, insurers, clinical terms and sentence fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Given names
pub const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Zoe", "Ethan", "Priya", "Mateo", "Hana", "Owen", "Leila",
    "Samuel", "Grace", "Diego", "Amara", "Lucas", "Nora", "Kenji", "Ruth", "Elias", "Ines",
    "Tobias", "Fatima", "Jonah", "Clara", "Malik", "Sofia", "Felix", "Aisha", "Hugo",
];

/// Family names
pub const LAST_NAMES: &[&str] = &[
    "Okafor", "Lindqvist", "Ramirez", "Chen", "Patel", "Novak", "Haddad", "Brennan", "Sato",
    "Moreau", "Kowalski", "Adeyemi", "Fischer", "Costa", "Nguyen", "Oduya", "Larsen", "Petrov",
    "Walsh", "Mendes", "Abbott", "Iqbal", "Romero", "Keller", "Yamamoto", "Dubois", "Hart",
];

/// Email domains reserved for examples and testing
pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Street names
pub const STREET_NAMES: &[&str] = &[
    "Maple", "Cedar", "Willow", "Harbor", "Lakeview", "Sunset", "Hillcrest", "Juniper",
    "Riverside", "Orchard", "Granite", "Meadow", "Chestnut", "Beacon", "Aspen",
];

/// Street suffixes
pub const STREET_SUFFIXES: &[&str] = &["Street", "Avenue", "Lane", "Road", "Drive", "Court", "Way"];

/// Cities
pub const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Lakewood", "Greenville", "Madison", "Ashland",
    "Clinton", "Georgetown", "Salem", "Franklin", "Bristol", "Oakridge", "Milford",
];

/// US states
pub const STATES: &[&str] = &[
    "Alabama", "Arizona", "California", "Colorado", "Florida", "Georgia", "Illinois", "Maine",
    "Michigan", "Minnesota", "New York", "Ohio", "Oregon", "Texas", "Vermont", "Washington",
];

/// First word of an insurer name
pub const INSURER_PREFIXES: &[&str] = &[
    "Harbor", "Summit", "Evergreen", "Keystone", "Pioneer", "Northwind", "Bluepeak", "Meridian",
];

/// Second part of an insurer name
pub const INSURER_SUFFIXES: &[&str] = &[
    "Health", "Mutual", "Care Group", "Assurance", "Health Partners", "Benefit Co.",
];

/// Coverage phrases
pub const COVERAGE_PHRASES: &[&str] = &[
    "Covers inpatient and outpatient care",
    "Includes prescription drug coverage",
    "Dental and vision riders included",
    "Annual deductible applies before coinsurance",
    "Preventive visits covered at no cost",
    "Specialist referrals required for reimbursement",
];

/// Diagnosed conditions
pub const CONDITIONS: &[&str] = &[
    "Hypertension", "Type 2 diabetes", "Asthma", "Migraine", "Hypothyroidism",
    "Osteoarthritis", "Eczema", "Hyperlipidemia", "Anemia", "GERD",
];

/// Medications
pub const MEDICATIONS: &[&str] = &[
    "Lisinopril", "Metformin", "Albuterol", "Levothyroxine", "Atorvastatin", "Omeprazole",
    "Sumatriptan", "Amlodipine", "Ibuprofen", "Cetirizine",
];

/// Allergens
pub const ALLERGENS: &[&str] = &[
    "Penicillin", "Peanuts", "Latex", "Shellfish", "Pollen", "Sulfa drugs", "Dust mites",
    "Bee stings",
];

/// Relatives named in family history notes
pub const RELATIVES: &[&str] = &["Mother", "Father", "Grandmother", "Grandfather", "Aunt", "Uncle"];

/// Secondary qualifications paired with the M.D.
pub const SECONDARY_QUALIFICATIONS: &[&str] = &["Ph.D.", "MBBS", "MS", "DNB"];

/// Primary qualification held by every seeded doctor
pub const PRIMARY_QUALIFICATION: &str = "M.D.";
