//! Parking slot model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `parking_slots` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSlot {
    pub id: DbId,
    pub slot_number: String,
    #[serde(rename = "type")]
    pub slot_type: String,
    /// Unit the slot is allotted to.
    pub assigned_to: Option<DbId>,
    pub vehicle_number: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateParkingSlot {
    pub slot_number: String,
    #[serde(rename = "type")]
    pub slot_type: String,
    pub assigned_to: Option<DbId>,
    pub vehicle_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParkingSlot {
    pub slot_number: Option<String>,
    #[serde(rename = "type")]
    pub slot_type: Option<String>,
    pub assigned_to: Option<DbId>,
    pub vehicle_number: Option<String>,
}

/// Filters accepted by the parking list endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParkingFilter {
    /// `resident` or `visitor`.
    #[serde(rename = "type")]
    pub slot_type: Option<String>,
}
