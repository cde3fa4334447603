//! Emergency contact model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `emergency_contacts` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub phone: String,
    #[serde(rename = "available24x7")]
    pub available_24x7: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmergencyContact {
    pub name: String,
    #[serde(rename = "type")]
    pub contact_type: String,
    pub phone: String,
    #[serde(rename = "available24x7", default = "default_available")]
    pub available_24x7: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmergencyContact {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "available24x7")]
    pub available_24x7: Option<bool>,
}
