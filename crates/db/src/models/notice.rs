//! Notice board model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `notices` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: DbId,
    pub created_by_id: Option<DbId>,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub notice_type: String,
    #[schema(value_type = Option<String>, format = Date)]
    pub event_date: Option<NaiveDate>,
    pub attachment: Option<String>,
    pub important: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotice {
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub notice_type: String,
    #[schema(value_type = Option<String>, format = Date)]
    pub event_date: Option<NaiveDate>,
    pub attachment: Option<String>,
    #[serde(default)]
    pub important: bool,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotice {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub notice_type: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub event_date: Option<NaiveDate>,
    pub attachment: Option<String>,
    pub important: Option<bool>,
}
