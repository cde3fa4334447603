//! Vendor directory model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `vendors` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub rating: f64,
    #[schema(value_type = Option<String>, format = Date)]
    pub contract_end: Option<NaiveDate>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendor {
    pub name: String,
    pub category: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Defaults to 0.
    pub rating: Option<f64>,
    #[schema(value_type = Option<String>, format = Date)]
    pub contract_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendor {
    pub name: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    #[schema(value_type = Option<String>, format = Date)]
    pub contract_end: Option<NaiveDate>,
}
