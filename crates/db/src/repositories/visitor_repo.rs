//! Repository for the `visitors` table.

use sqlx::PgPool;
use society_core::types::{DbId, Timestamp};

use super::{qualified, unit_summary_json};
use crate::models::visitor::{CheckInVisitor, UpdateVisitor, Visitor, VisitorDetail, VisitorFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, unit_id, name, phone, purpose, vehicle_number, check_in_time, \
                       check_out_time, pre_approved, visitor_type, created_at, updated_at";

/// Provides gate log operations for visitors.
pub struct VisitorRepo;

impl VisitorRepo {
    /// Record a visitor arriving at `at`.
    pub async fn check_in(
        pool: &PgPool,
        input: &CheckInVisitor,
        at: Timestamp,
    ) -> Result<Visitor, sqlx::Error> {
        let query = format!(
            "INSERT INTO visitors (unit_id, name, phone, purpose, vehicle_number,
                                   check_in_time, pre_approved, visitor_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visitor>(&query)
            .bind(input.unit_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.purpose)
            .bind(&input.vehicle_number)
            .bind(at)
            .bind(input.pre_approved)
            .bind(&input.visitor_type)
            .fetch_one(pool)
            .await
    }

    /// Find a visitor entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Visitor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM visitors WHERE id = $1");
        sqlx::query_as::<_, Visitor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List visitor entries, latest arrival first. With `active` set only
    /// visitors still inside are returned.
    pub async fn list(
        pool: &PgPool,
        filter: &VisitorFilter,
    ) -> Result<Vec<VisitorDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {}, {} AS unit
             FROM visitors v
             LEFT JOIN units u ON u.id = v.unit_id
             WHERE (NOT $1 OR v.check_out_time IS NULL)
             ORDER BY v.check_in_time DESC, v.id DESC",
            qualified("v", COLUMNS),
            unit_summary_json("u"),
        );
        sqlx::query_as::<_, VisitorDetail>(&query)
            .bind(filter.active)
            .fetch_all(pool)
            .await
    }

    /// Stamp the checkout time on a visitor still inside.
    ///
    /// Returns `None` if the entry does not exist or has already checked out.
    pub async fn check_out(
        pool: &PgPool,
        id: DbId,
        at: Timestamp,
    ) -> Result<Option<Visitor>, sqlx::Error> {
        let query = format!(
            "UPDATE visitors SET check_out_time = $2
             WHERE id = $1 AND check_out_time IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visitor>(&query)
            .bind(id)
            .bind(at)
            .fetch_optional(pool)
            .await
    }

    /// Update a visitor entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVisitor,
    ) -> Result<Option<Visitor>, sqlx::Error> {
        let query = format!(
            "UPDATE visitors SET
                unit_id = COALESCE($2, unit_id),
                name = COALESCE($3, name),
                phone = COALESCE($4, phone),
                purpose = COALESCE($5, purpose),
                vehicle_number = COALESCE($6, vehicle_number),
                pre_approved = COALESCE($7, pre_approved),
                visitor_type = COALESCE($8, visitor_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Visitor>(&query)
            .bind(id)
            .bind(input.unit_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.purpose)
            .bind(&input.vehicle_number)
            .bind(input.pre_approved)
            .bind(&input.visitor_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a visitor entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM visitors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
