// ABOUTME: Field validation shared by every user variant
// ABOUTME: Required-field, email, phone, zip and license checks run before persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Write-time validation.
//!
//! Records are validated as a whole before a bulk insert begins, so a single
//! invalid record aborts its batch without touching the database.

use crate::constants::formats;
use crate::errors::{AppError, AppResult};

/// A record that can check its own field constraints
pub trait Validate {
    /// Check every field constraint of this value
    ///
    /// # Errors
    ///
    /// Returns a validation-class [`AppError`] naming the first failing field
    fn validate(&self) -> AppResult<()>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> AppResult<()> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Validate that a required string field is present
///
/// # Errors
/// * Returns `MissingRequiredField` if the value is empty or whitespace
///
/// # Examples
/// ```
/// # use clinic_core::validation::validate_required;
/// assert!(validate_required("action", "account_created").is_ok());
/// assert!(validate_required("action", "  ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(())
}

/// Validate email format
///
/// Performs basic email validation (one '@' with a non-empty local part and
/// a dotted domain).
///
/// # Errors
/// * Returns `InvalidFormat` if invalid
///
/// # Examples
/// ```
/// # use clinic_core::validation::validate_email;
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("invalid").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> AppResult<()> {
    validate_required("email", email)?;
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
        });
    if !valid {
        return Err(AppError::invalid_format(
            "email",
            format!("Invalid email format: {email}"),
        ));
    }
    Ok(())
}

/// Validate an international phone number (`+` followed by digits only)
///
/// # Errors
/// * Returns `InvalidFormat` if invalid
///
/// # Examples
/// ```
/// # use clinic_core::validation::validate_phone;
/// assert!(validate_phone("phone", "+15551234567").is_ok());
/// assert!(validate_phone("phone", "555-1234").is_err());
/// ```
pub fn validate_phone(field: &str, phone: &str) -> AppResult<()> {
    validate_required(field, phone)?;
    let digits = phone.strip_prefix('+').unwrap_or_default();
    if digits.len() < formats::MIN_PHONE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_format(
            field,
            format!("Invalid phone number: {phone}"),
        ));
    }
    Ok(())
}

/// Validate a five-digit postal code
///
/// # Errors
/// * Returns `InvalidFormat` if invalid
pub fn validate_zip_code(zip_code: &str) -> AppResult<()> {
    if !is_digits(zip_code, formats::ZIP_CODE_DIGITS) {
        return Err(AppError::invalid_format(
            "zip_code",
            format!("Invalid zip code: {zip_code}"),
        ));
    }
    Ok(())
}

/// Validate a doctor license number (`MD` followed by six digits)
///
/// # Errors
/// * Returns `InvalidFormat` if invalid
///
/// # Examples
/// ```
/// # use clinic_core::validation::validate_license_number;
/// assert!(validate_license_number("MD123456").is_ok());
/// assert!(validate_license_number("MD12345").is_err());
/// assert!(validate_license_number("DO123456").is_err());
/// ```
pub fn validate_license_number(license_number: &str) -> AppResult<()> {
    let valid = license_number
        .strip_prefix(formats::LICENSE_PREFIX)
        .is_some_and(|digits| is_digits(digits, formats::LICENSE_DIGITS));
    if !valid {
        return Err(AppError::invalid_format(
            "license_number",
            format!("Invalid license number: {license_number}"),
        ));
    }
    Ok(())
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_required_field_code() {
        let error = validate_required("username", "").unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.context.field.as_deref(), Some("username"));
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(validate_email("a@b@example.com").is_err());
        assert!(validate_email("a@localhost").is_err());
        assert!(validate_email("jane.doe7@example.org").is_ok());
    }

    #[test]
    fn test_phone_requires_plus_prefix() {
        assert!(validate_phone("phone", "15551234567").is_err());
        assert!(validate_phone("phone", "+1555").is_err());
        assert!(validate_phone("phone", "+1555abc4567").is_err());
    }

    #[test]
    fn test_zip_code() {
        assert!(validate_zip_code("02139").is_ok());
        assert!(validate_zip_code("2139").is_err());
        assert!(validate_zip_code("02139-1234").is_err());
    }
}
