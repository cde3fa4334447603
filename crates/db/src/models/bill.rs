//! Bill model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::unit::UnitSummary;

/// A row from the `bills` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: DbId,
    pub unit_id: Option<DbId>,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub amount: f64,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    pub status: String,
    #[schema(value_type = Option<String>, format = Date)]
    pub paid_date: Option<NaiveDate>,
    pub description: String,
    /// Billing period label, e.g. `January 2025`.
    pub month: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A bill with its unit resolved.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub bill: Bill,
    #[schema(value_type = Option<UnitSummary>)]
    pub unit: Option<Json<UnitSummary>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBill {
    pub unit_id: Option<DbId>,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub amount: f64,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    /// Defaults to `pending`.
    pub status: Option<String>,
    pub description: String,
    pub month: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBill {
    pub unit_id: Option<DbId>,
    #[serde(rename = "type")]
    pub bill_type: Option<String>,
    pub amount: Option<f64>,
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub paid_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub month: Option<String>,
}

/// Filters accepted by the bill list endpoint.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BillFilter {
    pub status: Option<String>,
    pub unit_id: Option<DbId>,
}

/// Count and sum of bills sharing a status.
#[derive(Debug, Clone, FromRow)]
pub struct BillStatusTotal {
    pub status: String,
    pub count: i64,
    pub amount: f64,
}
