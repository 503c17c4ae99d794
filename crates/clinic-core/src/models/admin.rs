// ABOUTME: Admin variant of the user hierarchy
// ABOUTME: Permission set and append-only activity log definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::permissions;
use crate::errors::{AppError, AppResult};
use crate::validation::{validate_required, Validate};

use super::user::{User, UserKind, UserRecord, VariantProfile};

/// Administrative capability granted to an admin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Manage user accounts
    UserManagement,
    /// Change system configuration
    SystemConfiguration,
    /// View reports
    Reporting,
    /// Read audit logs
    AuditLogs,
    /// Review medical records
    MedicalRecordReview,
}

impl Permission {
    /// Every allowed value
    pub const ALL: [Self; 5] = [
        Self::UserManagement,
        Self::SystemConfiguration,
        Self::Reporting,
        Self::AuditLogs,
        Self::MedicalRecordReview,
    ];

    /// Convert to string for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserManagement => permissions::USER_MANAGEMENT,
            Self::SystemConfiguration => permissions::SYSTEM_CONFIGURATION,
            Self::Reporting => permissions::REPORTING,
            Self::AuditLogs => permissions::AUDIT_LOGS,
            Self::MedicalRecordReview => permissions::MEDICAL_RECORD_REVIEW,
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            permissions::USER_MANAGEMENT => Ok(Self::UserManagement),
            permissions::SYSTEM_CONFIGURATION => Ok(Self::SystemConfiguration),
            permissions::REPORTING => Ok(Self::Reporting),
            permissions::AUDIT_LOGS => Ok(Self::AuditLogs),
            permissions::MEDICAL_RECORD_REVIEW => Ok(Self::MedicalRecordReview),
            _ => Err(AppError::out_of_range(
                "permissions",
                format!("Invalid permission: {s}"),
            )),
        }
    }
}

/// One administrative action recorded against an admin account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLogEntry {
    /// What was done (required)
    pub action: String,
    /// When it was done; entries decoded without one are stamped on load
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Free-form structured details
    #[serde(default)]
    pub details: Value,
    /// Uid of the admin who performed the action (lookup only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performed_by: Option<String>,
}

impl ActivityLogEntry {
    /// New entry stamped with the current time
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            timestamp: Utc::now(),
            details: Value::Null,
            performed_by: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Record which admin performed the action
    #[must_use]
    pub fn performed_by(mut self, admin_uid: impl Into<String>) -> Self {
        self.performed_by = Some(admin_uid.into());
        self
    }
}

impl Validate for ActivityLogEntry {
    fn validate(&self) -> AppResult<()> {
        validate_required("activity_log.action", &self.action)?;
        if let Some(performed_by) = &self.performed_by {
            validate_required("activity_log.performed_by", performed_by)?;
        }
        Ok(())
    }
}

/// Admin-specific fields
///
/// The activity log is append-only: entries can be read and added through
/// [`AdminProfile::record_activity`], never edited or removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    #[serde(default)]
    permissions: BTreeSet<Permission>,
    #[serde(default)]
    activity_log: Vec<ActivityLogEntry>,
}

impl AdminProfile {
    /// Admin with the given permissions and an empty activity log
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            activity_log: Vec::new(),
        }
    }

    /// Admin created with an initial activity log
    ///
    /// Entries are checked when the record is validated for storage.
    pub fn with_activity_log(
        permissions: impl IntoIterator<Item = Permission>,
        activity_log: Vec<ActivityLogEntry>,
    ) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            activity_log,
        }
    }

    /// Granted permissions
    #[must_use]
    pub const fn permissions(&self) -> &BTreeSet<Permission> {
        &self.permissions
    }

    /// Check a single permission
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Recorded actions, oldest first
    #[must_use]
    pub fn activity_log(&self) -> &[ActivityLogEntry] {
        &self.activity_log
    }

    /// Append an entry to the activity log
    ///
    /// # Errors
    ///
    /// Returns a validation error if the entry has no action
    pub fn record_activity(&mut self, entry: ActivityLogEntry) -> AppResult<()> {
        entry.validate()?;
        debug!(action = %entry.action, "Recording admin activity");
        self.activity_log.push(entry);
        Ok(())
    }
}

impl Validate for AdminProfile {
    fn validate(&self) -> AppResult<()> {
        self.activity_log.validate()
    }
}

impl VariantProfile for AdminProfile {
    const KIND: UserKind = UserKind::Admin;

    fn into_user(record: UserRecord<Self>) -> User {
        User::Admin(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use serde_json::json;

    #[test]
    fn test_record_activity_requires_action() {
        let mut admin = AdminProfile::new([Permission::Reporting]);
        let error = admin.record_activity(ActivityLogEntry::new("")).unwrap_err();

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert!(admin.activity_log().is_empty());
    }

    #[test]
    fn test_activity_log_appends_in_order() {
        let mut admin = AdminProfile::default();
        admin
            .record_activity(ActivityLogEntry::new("account_created"))
            .unwrap();
        admin
            .record_activity(
                ActivityLogEntry::new("password_reset")
                    .with_details(json!({ "target": "u-1" }))
                    .performed_by("a-1"),
            )
            .unwrap();

        let actions: Vec<_> = admin.activity_log().iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, ["account_created", "password_reset"]);
        assert_eq!(admin.activity_log()[1].performed_by.as_deref(), Some("a-1"));
    }

    #[test]
    fn test_permissions_deduplicate_and_default_empty() {
        let admin = AdminProfile::new([
            Permission::AuditLogs,
            Permission::AuditLogs,
            Permission::Reporting,
        ]);
        assert_eq!(admin.permissions().len(), 2);
        assert!(admin.has_permission(Permission::AuditLogs));

        let decoded: AdminProfile = serde_json::from_value(json!({})).unwrap();
        assert!(decoded.permissions().is_empty());
        assert!(decoded.activity_log().is_empty());
    }

    #[test]
    fn test_missing_timestamp_defaults_on_decode() {
        let before = Utc::now();
        let entry: ActivityLogEntry =
            serde_json::from_value(json!({ "action": "account_created" })).unwrap();

        assert!(entry.timestamp >= before);
        assert!(entry.performed_by.is_none());
    }

    #[test]
    fn test_out_of_enum_permission_rejected() {
        assert!("delete_everything".parse::<Permission>().is_err());
        assert!(serde_json::from_value::<AdminProfile>(
            json!({ "permissions": ["reporting", "delete_everything"] })
        )
        .is_err());
    }
}
