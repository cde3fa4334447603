//! Maintenance ticket model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::unit::UnitSummary;
use crate::models::user::UserSummary;

/// A row from the `tickets` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: DbId,
    pub unit_id: Option<DbId>,
    pub created_by_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub feedback: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A ticket with its unit, creator and assignee resolved.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub ticket: Ticket,
    #[schema(value_type = Option<UnitSummary>)]
    pub unit: Option<Json<UnitSummary>>,
    #[schema(value_type = Option<UserSummary>)]
    pub created_by: Option<Json<UserSummary>>,
    #[schema(value_type = Option<UserSummary>)]
    pub assigned_to: Option<Json<UserSummary>>,
}

/// DTO for raising a ticket. The creator comes from the auth token.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicket {
    pub unit_id: Option<DbId>,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
}

/// DTO for updating a ticket. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicket {
    pub unit_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub feedback: Option<String>,
}

/// Filters accepted by the ticket list endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TicketFilter {
    pub status: Option<String>,
    pub unit_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
}
