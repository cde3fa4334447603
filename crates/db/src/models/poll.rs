//! Poll model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use society_core::poll::PollOption;
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::user::UserSummary;

/// A row from the `polls` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: DbId,
    pub created_by_id: Option<DbId>,
    pub question: String,
    #[schema(value_type = Vec<PollOption>)]
    pub options: Json<Vec<PollOption>>,
    #[schema(value_type = String, format = Date)]
    pub ends_at: NaiveDate,
    pub is_anonymous: bool,
    /// Ids of users who have voted.
    pub voted_by: Vec<DbId>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A poll with its creator resolved.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub poll: Poll,
    #[schema(value_type = Option<UserSummary>)]
    pub created_by: Option<Json<UserSummary>>,
}

/// DTO for opening a poll. Options are given as plain texts.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoll {
    pub question: String,
    pub options: Vec<String>,
    #[schema(value_type = String, format = Date)]
    pub ends_at: NaiveDate,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// DTO for editing a poll. Options may only be replaced before any vote.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePoll {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    #[schema(value_type = Option<String>, format = Date)]
    pub ends_at: Option<NaiveDate>,
    pub is_anonymous: Option<bool>,
}

/// Body of `POST /polls/{id}/vote`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastVote {
    pub option_index: i64,
}
