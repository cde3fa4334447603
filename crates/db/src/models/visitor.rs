//! Visitor log model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::unit::UnitSummary;

/// A row from the `visitors` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: DbId,
    pub unit_id: Option<DbId>,
    pub name: String,
    pub phone: String,
    pub purpose: String,
    pub vehicle_number: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub check_in_time: Timestamp,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub check_out_time: Option<Timestamp>,
    pub pre_approved: bool,
    #[serde(rename = "type")]
    pub visitor_type: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A visitor with the visited unit resolved.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitorDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub visitor: Visitor,
    #[schema(value_type = Option<UnitSummary>)]
    pub unit: Option<Json<UnitSummary>>,
}

/// DTO for checking a visitor in. The check-in time is set by the server.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInVisitor {
    pub unit_id: Option<DbId>,
    pub name: String,
    pub phone: String,
    pub purpose: String,
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub pre_approved: bool,
    #[serde(rename = "type")]
    pub visitor_type: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVisitor {
    pub unit_id: Option<DbId>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub purpose: Option<String>,
    pub vehicle_number: Option<String>,
    pub pre_approved: Option<bool>,
    #[serde(rename = "type")]
    pub visitor_type: Option<String>,
}

/// Filters accepted by the visitor list endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VisitorFilter {
    /// When `true`, only visitors who have not checked out.
    #[serde(default)]
    pub active: bool,
}
