//! Society document model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DbId,
    pub uploaded_by: Option<DbId>,
    pub title: String,
    pub category: String,
    pub file_type: String,
    pub file_url: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for registering a document. The uploader comes from the auth token.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    pub title: String,
    pub category: String,
    pub file_type: String,
    pub file_url: Option<String>,
}
