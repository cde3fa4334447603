//! Society staff model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::staff::AttendanceEntry;
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    /// Job title, e.g. `Security Guard`. Not an account role.
    pub role: String,
    pub phone: String,
    pub shift: String,
    #[schema(value_type = Vec<AttendanceEntry>)]
    pub attendance: Json<Vec<AttendanceEntry>>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub shift: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaff {
    pub name: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub shift: Option<String>,
}
