//! Repository for the `tickets` table.

use sqlx::PgPool;
use society_core::types::DbId;

use super::{qualified, unit_summary_json, user_summary_json};
use crate::models::ticket::{CreateTicket, Ticket, TicketDetail, TicketFilter, UpdateTicket};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, unit_id, created_by_id, assigned_to_id, category, subject, \
                       description, priority, status, feedback, created_at, updated_at";

/// SELECT prefix joining unit, creator and assignee summaries.
fn detail_select() -> String {
    format!(
        "SELECT {}, {} AS unit, {} AS created_by, {} AS assigned_to
         FROM tickets t
         LEFT JOIN units u ON u.id = t.unit_id
         LEFT JOIN users c ON c.id = t.created_by_id
         LEFT JOIN users a ON a.id = t.assigned_to_id",
        qualified("t", COLUMNS),
        unit_summary_json("u"),
        user_summary_json("c"),
        user_summary_json("a"),
    )
}

/// Provides CRUD operations for maintenance tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Open a new ticket on behalf of `created_by_id`.
    pub async fn create(
        pool: &PgPool,
        created_by_id: DbId,
        input: &CreateTicket,
    ) -> Result<Ticket, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (unit_id, created_by_id, category, subject, description, priority)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(input.unit_id)
            .bind(created_by_id)
            .bind(&input.category)
            .bind(&input.subject)
            .bind(&input.description)
            .bind(&input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a ticket by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a ticket with its related summaries.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TicketDetail>, sqlx::Error> {
        let query = format!("{} WHERE t.id = $1", detail_select());
        sqlx::query_as::<_, TicketDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tickets matching `filter`, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &TicketFilter,
    ) -> Result<Vec<TicketDetail>, sqlx::Error> {
        let query = format!(
            "{} WHERE ($1::text IS NULL OR t.status = $1)
                AND ($2::bigint IS NULL OR t.unit_id = $2)
                AND ($3::bigint IS NULL OR t.assigned_to_id = $3)
             ORDER BY t.created_at DESC, t.id DESC",
            detail_select()
        );
        sqlx::query_as::<_, TicketDetail>(&query)
            .bind(&filter.status)
            .bind(filter.unit_id)
            .bind(filter.assigned_to_id)
            .fetch_all(pool)
            .await
    }

    /// List tickets raised by one user, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TicketDetail>, sqlx::Error> {
        let query = format!(
            "{} WHERE t.created_by_id = $1 ORDER BY t.created_at DESC, t.id DESC",
            detail_select()
        );
        sqlx::query_as::<_, TicketDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a ticket still in `expected_status`. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists or its status has
    /// moved on since it was read.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        expected_status: &str,
        input: &UpdateTicket,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!(
            "UPDATE tickets SET
                unit_id = COALESCE($2, unit_id),
                assigned_to_id = COALESCE($3, assigned_to_id),
                category = COALESCE($4, category),
                subject = COALESCE($5, subject),
                description = COALESCE($6, description),
                priority = COALESCE($7, priority),
                status = COALESCE($8, status),
                feedback = COALESCE($9, feedback)
             WHERE id = $1 AND status = $10
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(input.unit_id)
            .bind(input.assigned_to_id)
            .bind(&input.category)
            .bind(&input.subject)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(&input.feedback)
            .bind(expected_status)
            .fetch_optional(pool)
            .await
    }
}
