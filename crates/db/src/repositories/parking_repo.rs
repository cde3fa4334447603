//! Repository for the `parking_slots` table.

use sqlx::PgPool;
use society_core::types::DbId;

use crate::models::parking::{CreateParkingSlot, ParkingFilter, ParkingSlot, UpdateParkingSlot};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slot_number, slot_type, assigned_to, vehicle_number, created_at, updated_at";

/// Provides operations for parking slot allocation.
pub struct ParkingRepo;

impl ParkingRepo {
    /// Insert a parking slot. Fails with `uq_parking_slots_slot_number` on
    /// a duplicate slot number.
    pub async fn create(
        pool: &PgPool,
        input: &CreateParkingSlot,
    ) -> Result<ParkingSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO parking_slots (slot_number, slot_type, assigned_to, vehicle_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingSlot>(&query)
            .bind(&input.slot_number)
            .bind(&input.slot_type)
            .bind(input.assigned_to)
            .bind(&input.vehicle_number)
            .fetch_one(pool)
            .await
    }

    /// List slots, optionally of one type, by slot number.
    pub async fn list(
        pool: &PgPool,
        filter: &ParkingFilter,
    ) -> Result<Vec<ParkingSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_slots
             WHERE ($1::text IS NULL OR slot_type = $1)
             ORDER BY slot_number"
        );
        sqlx::query_as::<_, ParkingSlot>(&query)
            .bind(&filter.slot_type)
            .fetch_all(pool)
            .await
    }

    /// Update a slot. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateParkingSlot,
    ) -> Result<Option<ParkingSlot>, sqlx::Error> {
        let query = format!(
            "UPDATE parking_slots SET
                slot_number = COALESCE($2, slot_number),
                slot_type = COALESCE($3, slot_type),
                assigned_to = COALESCE($4, assigned_to),
                vehicle_number = COALESCE($5, vehicle_number)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingSlot>(&query)
            .bind(id)
            .bind(&input.slot_number)
            .bind(&input.slot_type)
            .bind(input.assigned_to)
            .bind(&input.vehicle_number)
            .fetch_optional(pool)
            .await
    }
}
