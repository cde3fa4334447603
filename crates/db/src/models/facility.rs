//! Facility and facility booking models and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use society_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::unit::UnitSummary;
use crate::models::user::UserSummary;

/// A row from the `facilities` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    /// Free-text opening hours, e.g. `5:00 AM - 10:00 PM`.
    pub timings: String,
    #[schema(value_type = Vec<String>)]
    pub amenities: Json<Vec<String>>,
    #[schema(value_type = Vec<String>)]
    pub rules: Json<Vec<String>>,
    pub is_paid: bool,
    pub price_per_hour: Option<f64>,
    pub image: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A facility embedded in a booking response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    pub id: DbId,
    pub name: String,
    pub is_paid: bool,
    pub price_per_hour: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacility {
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub timings: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub is_paid: bool,
    pub price_per_hour: Option<f64>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacility {
    pub name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub timings: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub rules: Option<Vec<String>>,
    pub is_paid: Option<bool>,
    pub price_per_hour: Option<f64>,
    pub image: Option<String>,
}

/// A row from the `facility_bookings` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacilityBooking {
    pub id: DbId,
    pub facility_id: DbId,
    pub unit_id: Option<DbId>,
    pub booked_by_id: Option<DbId>,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "18:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "22:00:00")]
    pub end_time: NaiveTime,
    pub status: String,
    pub purpose: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// A booking with facility, unit and booker resolved.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub booking: FacilityBooking,
    #[schema(value_type = FacilitySummary)]
    pub facility: Json<FacilitySummary>,
    #[schema(value_type = Option<UnitSummary>)]
    pub unit: Option<Json<UnitSummary>>,
    #[schema(value_type = Option<UserSummary>)]
    pub booked_by: Option<Json<UserSummary>>,
}

/// DTO for requesting a booking. The booker comes from the auth token.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub facility_id: DbId,
    pub unit_id: Option<DbId>,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "18:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "22:00:00")]
    pub end_time: NaiveTime,
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBooking {
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub end_time: Option<NaiveTime>,
    pub status: Option<String>,
    pub purpose: Option<String>,
}
