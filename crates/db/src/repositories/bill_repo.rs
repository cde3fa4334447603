//! Repository for the `bills` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use society_core::billing::BILL_STATUS_PENDING;
use society_core::types::DbId;

use super::{qualified, unit_summary_json};
use crate::models::bill::{Bill, BillDetail, BillFilter, BillStatusTotal, CreateBill, UpdateBill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, unit_id, bill_type, amount, due_date, status, paid_date, \
                       description, month, created_at, updated_at";

/// SELECT prefix joining the billed unit's summary.
fn detail_select() -> String {
    format!(
        "SELECT {}, {} AS unit
         FROM bills b
         LEFT JOIN units u ON u.id = b.unit_id",
        qualified("b", COLUMNS),
        unit_summary_json("u"),
    )
}

/// Provides CRUD and payment operations for bills.
pub struct BillRepo;

impl BillRepo {
    /// Insert a new bill. Status defaults to pending; a bill created as
    /// paid is stamped with `today`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBill,
        today: NaiveDate,
    ) -> Result<Bill, sqlx::Error> {
        let query = format!(
            "INSERT INTO bills (unit_id, bill_type, amount, due_date, status, paid_date,
                                description, month)
             VALUES ($1, $2, $3, $4, $5, CASE WHEN $5 = 'paid' THEN $8::date END, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(input.unit_id)
            .bind(&input.bill_type)
            .bind(input.amount)
            .bind(input.due_date)
            .bind(input.status.as_deref().unwrap_or(BILL_STATUS_PENDING))
            .bind(&input.description)
            .bind(&input.month)
            .bind(today)
            .fetch_one(pool)
            .await
    }

    /// Find a bill by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bills WHERE id = $1");
        sqlx::query_as::<_, Bill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bills matching `filter`, latest due date first.
    pub async fn list(pool: &PgPool, filter: &BillFilter) -> Result<Vec<BillDetail>, sqlx::Error> {
        let query = format!(
            "{} WHERE ($1::text IS NULL OR b.status = $1)
                AND ($2::bigint IS NULL OR b.unit_id = $2)
             ORDER BY b.due_date DESC, b.id DESC",
            detail_select()
        );
        sqlx::query_as::<_, BillDetail>(&query)
            .bind(&filter.status)
            .bind(filter.unit_id)
            .fetch_all(pool)
            .await
    }

    /// List bills for every unit the user owns or rents.
    pub async fn list_for_occupant(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BillDetail>, sqlx::Error> {
        let query = format!(
            "{} WHERE u.owner_id = $1 OR u.tenant_id = $1
             ORDER BY b.due_date DESC, b.id DESC",
            detail_select()
        );
        sqlx::query_as::<_, BillDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Bill count and amount grouped by status.
    pub async fn totals_by_status(pool: &PgPool) -> Result<Vec<BillStatusTotal>, sqlx::Error> {
        sqlx::query_as::<_, BillStatusTotal>(
            "SELECT status, COUNT(*) AS count, COALESCE(SUM(amount), 0)::float8 AS amount
             FROM bills
             GROUP BY status
             ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a bill. Only non-`None` fields in `input` are applied.
    ///
    /// The payment date follows the resulting status: a paid bill keeps the
    /// supplied or existing date, falling back to `today`, and any other
    /// status clears it. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBill,
        today: NaiveDate,
    ) -> Result<Option<Bill>, sqlx::Error> {
        let query = format!(
            "UPDATE bills SET
                unit_id = COALESCE($2, unit_id),
                bill_type = COALESCE($3, bill_type),
                amount = COALESCE($4, amount),
                due_date = COALESCE($5, due_date),
                status = COALESCE($6, status),
                paid_date = CASE WHEN COALESCE($6, status) = 'paid'
                                 THEN COALESCE($7, paid_date, $10::date) END,
                description = COALESCE($8, description),
                month = COALESCE($9, month)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(id)
            .bind(input.unit_id)
            .bind(&input.bill_type)
            .bind(input.amount)
            .bind(input.due_date)
            .bind(&input.status)
            .bind(input.paid_date)
            .bind(&input.description)
            .bind(&input.month)
            .bind(today)
            .fetch_optional(pool)
            .await
    }

    /// Mark a bill paid on `paid_on`.
    ///
    /// The status check and the write happen in one statement, so a bill
    /// can only be paid once. Returns `None` if the bill does not exist or
    /// is already paid.
    pub async fn mark_paid(
        pool: &PgPool,
        id: DbId,
        paid_on: NaiveDate,
    ) -> Result<Option<Bill>, sqlx::Error> {
        let query = format!(
            "UPDATE bills SET status = 'paid', paid_date = $2
             WHERE id = $1 AND status <> 'paid'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bill>(&query)
            .bind(id)
            .bind(paid_on)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bill. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
