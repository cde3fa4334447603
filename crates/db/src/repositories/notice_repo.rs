//! Repository for the `notices` table.

use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::notice::{CreateNotice, Notice, UpdateNotice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_by_id, title, content, notice_type, event_date, \
                       attachment, important, created_at, updated_at";

/// Provides CRUD operations for notice board entries.
pub struct NoticeRepo;

impl NoticeRepo {
    /// Post a new notice on behalf of `created_by_id`.
    pub async fn create(
        pool: &PgPool,
        created_by_id: DbId,
        input: &CreateNotice,
    ) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices (created_by_id, title, content, notice_type, event_date,
                                  attachment, important)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(created_by_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.notice_type)
            .bind(input.event_date)
            .bind(&input.attachment)
            .bind(input.important)
            .fetch_one(pool)
            .await
    }

    /// Find a notice by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notices, important ones first, then newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Notice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notices ORDER BY important DESC, created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notice>(&query).fetch_all(pool).await
    }

    /// Update a notice. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotice,
    ) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                notice_type = COALESCE($4, notice_type),
                event_date = COALESCE($5, event_date),
                attachment = COALESCE($6, attachment),
                important = COALESCE($7, important)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.notice_type)
            .bind(input.event_date)
            .bind(&input.attachment)
            .bind(input.important)
            .fetch_optional(pool)
            .await
    }

    /// Delete a notice. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
