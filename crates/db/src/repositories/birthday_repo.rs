//! Repository for the `birthday` table.
//!
//! Every mutating method is a single SQL statement, so each one runs as its
//! own atomic transaction in SQLite. Absence and id collisions are reported
//! through the return value, never as an `Err`.

use birthday_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::birthday::{Birthday, BirthdayFields, NewBirthday};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "friend_id, full_name, date, gift_note";

/// Provides CRUD operations for birthday records.
pub struct BirthdayRepo;

impl BirthdayRepo {
    /// Insert a new record, returning the created row.
    ///
    /// Returns `None` if a record with the same `friend_id` already exists;
    /// the existing row is left untouched.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewBirthday,
    ) -> Result<Option<Birthday>, sqlx::Error> {
        let query = format!(
            "INSERT INTO birthday (friend_id, full_name, date, gift_note)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (friend_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Birthday>(&query)
            .bind(input.friend_id)
            .bind(&input.full_name)
            .bind(input.date)
            .bind(&input.gift_note)
            .fetch_optional(pool)
            .await
    }

    /// Find a record by its friend id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Birthday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM birthday WHERE friend_id = $1");
        sqlx::query_as::<_, Birthday>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all records ordered by friend id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Birthday>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM birthday ORDER BY friend_id");
        sqlx::query_as::<_, Birthday>(&query).fetch_all(pool).await
    }

    /// Number of stored records.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM birthday")
            .fetch_one(pool)
            .await
    }

    /// Replace all mutable fields of a record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &BirthdayFields,
    ) -> Result<Option<Birthday>, sqlx::Error> {
        let query = format!(
            "UPDATE birthday SET
                full_name = $2,
                date = $3,
                gift_note = $4
             WHERE friend_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Birthday>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(input.date)
            .bind(&input.gift_note)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a record. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM birthday WHERE friend_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
