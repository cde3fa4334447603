//! Repository for the `documents` table.

use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::document::{CreateDocument, Document};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, uploaded_by, title, category, file_type, file_url, created_at, updated_at";

/// Provides operations for the society document library.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Register a document uploaded by `uploaded_by`.
    pub async fn create(
        pool: &PgPool,
        uploaded_by: DbId,
        input: &CreateDocument,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (uploaded_by, title, category, file_type, file_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(uploaded_by)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.file_type)
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// List documents, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Document>(&query).fetch_all(pool).await
    }

    /// Delete a document. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
