// ABOUTME: User storage operations on the shared discriminated users table
// ABOUTME: Bulk insert, delete-by-kind, counts, and polymorphic lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Address, Admin, User, UserBase, UserKind, UserRecord, VariantProfile,
};
use crate::validation::Validate;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use std::str::FromStr;
use tracing::debug;

/// Rows per multi-row INSERT
///
/// 500 rows of 16 binds is 8000 parameters. That fits the 32766 limit of
/// `SQLite` 3.32 and later (the bundled library is newer), not the older 999.
const INSERT_BATCH_SIZE: usize = 500;

const USER_COLUMNS: &str = "uid, kind, username, email, first_name, last_name, phone, \
     street, city, state, zip_code, is_active, last_login, profile, created_at, updated_at";

impl Database {
    /// Create the shared users table and its indexes
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                uid TEXT PRIMARY KEY,
                kind TEXT NOT NULL CHECK (kind IN ('Patient', 'Doctor', 'Admin')),
                username TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                phone TEXT NOT NULL,
                street TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                zip_code TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                last_login DATETIME NOT NULL,
                profile TEXT NOT NULL DEFAULT '{}',
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_kind ON users(kind)")
            .execute(self.pool())
            .await?;

        Ok(())
    }

    /// Delete every record of one variant
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_users_by_kind(&self, kind: UserKind) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE kind = $1")
            .bind(kind.as_str())
            .execute(self.pool())
            .await?;

        debug!(%kind, deleted = result.rows_affected(), "Deleted users");
        Ok(result.rows_affected())
    }

    /// Validate and persist records of one variant in a single transaction
    ///
    /// Every record is validated before the transaction starts, so one invalid
    /// record rejects the whole batch and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first invalid record, an
    /// `ResourceAlreadyExists` error if a uid or email is already stored, or a
    /// database error if the insert fails
    pub async fn insert_users<P: VariantProfile>(
        &self,
        records: &[UserRecord<P>],
    ) -> AppResult<u64> {
        if records.is_empty() {
            return Ok(0);
        }
        records.validate()?;

        let profiles = records
            .iter()
            .map(|record| serde_json::to_string(&record.profile))
            .collect::<Result<Vec<_>, _>>()?;
        let now = Utc::now();

        let mut tx = self.pool().begin().await?;
        let mut inserted = 0;
        for (chunk, chunk_profiles) in records
            .chunks(INSERT_BATCH_SIZE)
            .zip(profiles.chunks(INSERT_BATCH_SIZE))
        {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new(format!("INSERT INTO users ({USER_COLUMNS}) "));
            builder.push_values(chunk.iter().zip(chunk_profiles), |mut row, (record, profile)| {
                let user = &record.user;
                row.push_bind(user.uid.clone())
                    .push_bind(P::KIND.as_str())
                    .push_bind(user.username.clone())
                    .push_bind(user.email.clone())
                    .push_bind(user.first_name.clone())
                    .push_bind(user.last_name.clone())
                    .push_bind(user.phone.clone())
                    .push_bind(user.address.street.clone())
                    .push_bind(user.address.city.clone())
                    .push_bind(user.address.state.clone())
                    .push_bind(user.address.zip_code.clone())
                    .push_bind(user.is_active)
                    .push_bind(user.last_login)
                    .push_bind(profile.clone())
                    .push_bind(now)
                    .push_bind(now);
            });
            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        debug!(kind = %P::KIND, inserted, "Inserted users");
        Ok(inserted)
    }

    /// Count every stored user
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_users(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Count stored users of one variant
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count_users_by_kind(&self, kind: UserKind) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE kind = $1")
            .bind(kind.as_str())
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    /// Look up any user by uid, decoding the variant from its discriminator
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row cannot be decoded
    pub async fn get_user_by_uid(&self, uid: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE uid = $1"))
            .bind(uid)
            .fetch_optional(self.pool())
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Resolve an admin reference such as an activity log's `performed_by`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row cannot be decoded
    pub async fn get_admin_by_uid(&self, uid: &str) -> AppResult<Option<Admin>> {
        Ok(self
            .get_user_by_uid(uid)
            .await?
            .and_then(|user| match user {
                User::Admin(admin) => Some(admin),
                User::Patient(_) | User::Doctor(_) => None,
            }))
    }

    /// All users of one variant, oldest insert first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row cannot be decoded
    pub async fn list_users_by_kind(&self, kind: UserKind) -> AppResult<Vec<User>> {
        let rows = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE kind = $1 ORDER BY rowid"
        ))
        .bind(kind.as_str())
        .fetch_all(self.pool())
        .await?;

        rows.iter().map(row_to_user).collect()
    }
}

/// Decode one row, choosing the profile shape from the `kind` column
fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let kind = UserKind::from_str(&row.try_get::<String, _>("kind")?)?;
    let user = UserBase {
        uid: row.try_get("uid")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        phone: row.try_get("phone")?,
        address: Address {
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            zip_code: row.try_get("zip_code")?,
        },
        is_active: row.try_get("is_active")?,
        last_login: row.try_get::<DateTime<Utc>, _>("last_login")?,
    };
    let profile: String = row.try_get("profile")?;

    Ok(match kind {
        UserKind::Patient => User::Patient(decode_record(user, &profile)?),
        UserKind::Doctor => User::Doctor(decode_record(user, &profile)?),
        UserKind::Admin => User::Admin(decode_record(user, &profile)?),
    })
}

fn decode_record<P: DeserializeOwned>(user: UserBase, profile: &str) -> AppResult<UserRecord<P>> {
    let profile = serde_json::from_str(profile).map_err(|e| {
        AppError::from(e).with_resource_id(user.uid.clone())
    })?;
    Ok(UserRecord { user, profile })
}
