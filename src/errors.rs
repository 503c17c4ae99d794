// ABOUTME: Error types re-exported from clinic-core
// ABOUTME: AppError, ErrorCode and AppResult shared by storage and seeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use clinic_core::errors::*;
