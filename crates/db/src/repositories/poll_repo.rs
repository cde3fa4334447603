//! Repository for the `polls` table.

use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::PgPool;
use society_core::poll::PollOption;
use society_core::types::DbId;

use super::{qualified, user_summary_json};
use crate::models::poll::{Poll, PollDetail};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, created_by_id, question, options, ends_at, is_anonymous, voted_by, created_at, updated_at";

/// Values for a new poll row.
#[derive(Debug, Clone)]
pub struct NewPoll {
    pub created_by_id: DbId,
    pub question: String,
    pub options: Vec<PollOption>,
    pub ends_at: NaiveDate,
    pub is_anonymous: bool,
    pub voted_by: Vec<DbId>,
}

/// Changes to a poll. `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct PollChanges {
    pub question: Option<String>,
    pub options: Option<Vec<PollOption>>,
    pub ends_at: Option<NaiveDate>,
    pub is_anonymous: Option<bool>,
}

/// Provides CRUD and voting operations for polls.
pub struct PollRepo;

impl PollRepo {
    /// Insert a new poll, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPoll) -> Result<Poll, sqlx::Error> {
        let query = format!(
            "INSERT INTO polls (created_by_id, question, options, ends_at, is_anonymous, voted_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Poll>(&query)
            .bind(input.created_by_id)
            .bind(&input.question)
            .bind(Json(&input.options))
            .bind(input.ends_at)
            .bind(input.is_anonymous)
            .bind(&input.voted_by)
            .fetch_one(pool)
            .await
    }

    /// Find a poll by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Poll>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM polls WHERE id = $1");
        sqlx::query_as::<_, Poll>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List polls with creator summaries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PollDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {}, {} AS created_by
             FROM polls p
             LEFT JOIN users c ON c.id = p.created_by_id
             ORDER BY p.created_at DESC, p.id DESC",
            qualified("p", COLUMNS),
            user_summary_json("c"),
        );
        sqlx::query_as::<_, PollDetail>(&query).fetch_all(pool).await
    }

    /// Apply `changes` to a poll.
    ///
    /// Replacement options are only written while nobody has voted; the
    /// check is part of the statement so a concurrent vote cannot be lost.
    /// Returns `None` if the poll does not exist or already has votes and
    /// `changes` replaces the options.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &PollChanges,
    ) -> Result<Option<Poll>, sqlx::Error> {
        let query = format!(
            "UPDATE polls SET
                question = COALESCE($2, question),
                options = COALESCE($3, options),
                ends_at = COALESCE($4, ends_at),
                is_anonymous = COALESCE($5, is_anonymous)
             WHERE id = $1 AND ($3::jsonb IS NULL OR cardinality(voted_by) = 0)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Poll>(&query)
            .bind(id)
            .bind(&changes.question)
            .bind(changes.options.as_ref().map(Json))
            .bind(changes.ends_at)
            .bind(changes.is_anonymous)
            .fetch_optional(pool)
            .await
    }

    /// Lock a poll, let `vote` change its tallies and voter list, and
    /// store the result.
    ///
    /// Returns `Ok(None)` if the poll does not exist. An error from `vote`
    /// rolls the transaction back.
    pub async fn record_vote<E, F>(pool: &PgPool, id: DbId, vote: F) -> Result<Option<Poll>, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(&mut Poll) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM polls WHERE id = $1 FOR UPDATE");
        let Some(mut poll) = sqlx::query_as::<_, Poll>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        vote(&mut poll)?;

        let query = format!(
            "UPDATE polls SET options = $2, voted_by = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Poll>(&query)
            .bind(id)
            .bind(&poll.options)
            .bind(&poll.voted_by)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a poll. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM polls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
