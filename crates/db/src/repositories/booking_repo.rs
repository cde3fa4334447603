//! Repository for the `facility_bookings` table.
//!
//! Creating or rescheduling a booking locks the facility row first, so two
//! requests for the same facility are checked against each other's slots
//! one at a time.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{PgConnection, PgPool};
use society_core::facility::ACTIVE_BOOKING_STATUSES;
use society_core::types::DbId;

use super::{qualified, unit_summary_json, user_summary_json};
use crate::models::facility::{BookingDetail, CreateBooking, FacilityBooking, UpdateBooking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, facility_id, unit_id, booked_by_id, date, start_time, end_time, \
                       status, purpose, created_at, updated_at";

/// A booked `[start, end)` window.
pub type Slot = (NaiveTime, NaiveTime);

/// Provides booking operations for facilities.
pub struct BookingRepo;

impl BookingRepo {
    /// List all bookings with facility, unit and booker summaries.
    pub async fn list(pool: &PgPool) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {}, jsonb_build_object(
                        'id', f.id, 'name', f.name, 'isPaid', f.is_paid,
                        'pricePerHour', f.price_per_hour) AS facility,
                    {} AS unit, {} AS booked_by
             FROM facility_bookings b
             JOIN facilities f ON f.id = b.facility_id
             LEFT JOIN units u ON u.id = b.unit_id
             LEFT JOIN users p ON p.id = b.booked_by_id
             ORDER BY b.date DESC, b.start_time DESC, b.id DESC",
            qualified("b", COLUMNS),
            unit_summary_json("u"),
            user_summary_json("p"),
        );
        sqlx::query_as::<_, BookingDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a booking by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FacilityBooking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facility_bookings WHERE id = $1");
        sqlx::query_as::<_, FacilityBooking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Pending or approved slots for a facility on one day, optionally
    /// ignoring one booking.
    async fn active_slots(
        conn: &mut PgConnection,
        facility_id: DbId,
        date: NaiveDate,
        exclude: Option<DbId>,
    ) -> Result<Vec<Slot>, sqlx::Error> {
        let statuses: Vec<String> = ACTIVE_BOOKING_STATUSES.iter().map(|s| s.to_string()).collect();
        sqlx::query_as::<_, Slot>(
            "SELECT start_time, end_time FROM facility_bookings
             WHERE facility_id = $1 AND date = $2 AND status = ANY($3)
               AND ($4::bigint IS NULL OR id <> $4)",
        )
        .bind(facility_id)
        .bind(date)
        .bind(statuses)
        .bind(exclude)
        .fetch_all(conn)
        .await
    }

    /// Lock a facility row. Returns `false` if the facility does not exist.
    async fn lock_facility(conn: &mut PgConnection, facility_id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM facilities WHERE id = $1 FOR UPDATE")
                .bind(facility_id)
                .fetch_optional(conn)
                .await?;
        Ok(row.is_some())
    }

    /// Insert a pending booking after `check` accepts the day's active slots.
    ///
    /// Returns `Ok(None)` if the facility does not exist.
    pub async fn create<E, F>(
        pool: &PgPool,
        booked_by_id: DbId,
        input: &CreateBooking,
        check: F,
    ) -> Result<Option<FacilityBooking>, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(&[Slot]) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        if !Self::lock_facility(&mut *tx, input.facility_id).await? {
            return Ok(None);
        }
        let slots = Self::active_slots(&mut *tx, input.facility_id, input.date, None).await?;
        check(&slots)?;

        let query = format!(
            "INSERT INTO facility_bookings (facility_id, unit_id, booked_by_id, date,
                                            start_time, end_time, purpose)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, FacilityBooking>(&query)
            .bind(input.facility_id)
            .bind(input.unit_id)
            .bind(booked_by_id)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.purpose)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(booking))
    }

    /// Update a booking after `check` accepts the change.
    ///
    /// `check` receives the locked current row and the other active slots
    /// on the booking's (possibly new) date. Returns `Ok(None)` if the
    /// booking does not exist.
    pub async fn update<E, F>(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
        check: F,
    ) -> Result<Option<FacilityBooking>, E>
    where
        E: From<sqlx::Error>,
        F: FnOnce(&FacilityBooking, &[Slot]) -> Result<(), E>,
    {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM facility_bookings WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, FacilityBooking>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        Self::lock_facility(&mut *tx, current.facility_id).await?;
        let date = input.date.unwrap_or(current.date);
        let slots = Self::active_slots(&mut *tx, current.facility_id, date, Some(id)).await?;
        check(&current, &slots)?;

        let query = format!(
            "UPDATE facility_bookings SET
                date = COALESCE($2, date),
                start_time = COALESCE($3, start_time),
                end_time = COALESCE($4, end_time),
                status = COALESCE($5, status),
                purpose = COALESCE($6, purpose)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, FacilityBooking>(&query)
            .bind(id)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.status)
            .bind(&input.purpose)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(booking))
    }

    /// Delete a booking. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM facility_bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
