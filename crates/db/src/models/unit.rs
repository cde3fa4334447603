//! Unit (apartment) model and DTOs.

use serde::{Deserialize, Serialize};
use society_core::household::{FamilyMember, Pet, Vehicle};
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::user::UserSummary;

/// A row from the `units` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: DbId,
    pub number: String,
    pub block: String,
    pub floor: i32,
    /// Layout, e.g. `2BHK`.
    #[serde(rename = "type")]
    pub unit_type: String,
    pub owner_id: Option<DbId>,
    pub tenant_id: Option<DbId>,
    #[schema(value_type = Vec<FamilyMember>)]
    pub family_members: Json<Vec<FamilyMember>>,
    #[schema(value_type = Vec<Pet>)]
    pub pets: Json<Vec<Pet>>,
    #[schema(value_type = Vec<Vehicle>)]
    pub vehicles: Json<Vec<Vehicle>>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A unit with its owner and tenant resolved.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub unit: Unit,
    #[schema(value_type = Option<UserSummary>)]
    pub owner: Option<Json<UserSummary>>,
    #[schema(value_type = Option<UserSummary>)]
    pub tenant: Option<Json<UserSummary>>,
}

/// A unit embedded in another record's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitSummary {
    pub id: DbId,
    pub number: String,
    pub block: String,
}

/// DTO for creating a unit.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnit {
    pub number: String,
    pub block: String,
    pub floor: i32,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub owner_id: Option<DbId>,
    pub tenant_id: Option<DbId>,
    #[serde(default)]
    pub family_members: Vec<FamilyMember>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// DTO for updating a unit. Household lists are edited through their own
/// endpoints, so they are not part of this patch.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnit {
    pub number: Option<String>,
    pub block: Option<String>,
    pub floor: Option<i32>,
    #[serde(rename = "type")]
    pub unit_type: Option<String>,
    pub owner_id: Option<DbId>,
    pub tenant_id: Option<DbId>,
}
