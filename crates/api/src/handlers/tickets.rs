//! Handlers for the `/tickets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::ticket::{
    validate_status_transition, validate_ticket_category, validate_ticket_priority,
};
use society_core::types::DbId;
use society_core::validation::{validate_optional, validate_required};
use society_db::models::ticket::{CreateTicket, Ticket, TicketDetail, TicketFilter, UpdateTicket};
use society_db::repositories::TicketRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

fn ticket_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Ticket", id })
}

/// GET /api/tickets
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(TicketFilter),
    responses((status = 200, description = "Tickets, newest first", body = Vec<TicketDetail>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(filter): Query<TicketFilter>,
) -> AppResult<Json<Vec<TicketDetail>>> {
    let tickets = TicketRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = tickets.len(), "Listed tickets");
    Ok(Json(tickets))
}

/// GET /api/tickets/my
#[utoipa::path(
    get,
    path = "/api/tickets/my",
    tag = "tickets",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Tickets raised by the caller", body = Vec<TicketDetail>))
)]
pub async fn my(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TicketDetail>>> {
    let tickets = TicketRepo::list_by_creator(&state.pool, user.user_id).await?;
    Ok(Json(tickets))
}

/// GET /api/tickets/{id}
#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket found", body = TicketDetail),
        (status = 404, description = "Ticket not found"),
    )
)]
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TicketDetail>> {
    let ticket = TicketRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| ticket_not_found(id))?;
    Ok(Json(ticket))
}

/// POST /api/tickets
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = "tickets",
    security(("bearer_auth" = [])),
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket raised", body = Ticket),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    validate_ticket_category(&input.category)?;
    validate_ticket_priority(&input.priority)?;
    validate_required("subject", &input.subject)?;
    validate_required("description", &input.description)?;

    let ticket = TicketRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(
        ticket_id = ticket.id,
        user_id = user.user_id,
        category = %ticket.category,
        "Ticket raised"
    );
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// PUT /api/tickets/{id}
///
/// Status changes only move forward through `open -> in-progress -> resolved`.
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    tag = "tickets",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Ticket id")),
    request_body = UpdateTicket,
    responses(
        (status = 200, description = "Ticket updated", body = Ticket),
        (status = 400, description = "Validation failed or backward status move"),
        (status = 404, description = "Ticket not found"),
        (status = 409, description = "Ticket changed concurrently"),
    )
)]
pub async fn update(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTicket>,
) -> AppResult<Json<Ticket>> {
    let current = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ticket_not_found(id))?;

    if let Some(status) = &input.status {
        validate_status_transition(&current.status, status)?;
    }
    if let Some(category) = &input.category {
        validate_ticket_category(category)?;
    }
    if let Some(priority) = &input.priority {
        validate_ticket_priority(priority)?;
    }
    validate_optional("subject", input.subject.as_deref())?;
    validate_optional("description", input.description.as_deref())?;

    let Some(ticket) = TicketRepo::update(&state.pool, id, &current.status, &input).await? else {
        // Deleted or moved by another request since it was read.
        return Err(match TicketRepo::find_by_id(&state.pool, id).await? {
            Some(_) => AppError::Core(CoreError::Conflict(
                "Ticket was changed by another request, reload and retry".into(),
            )),
            None => ticket_not_found(id),
        });
    };
    if ticket.status != current.status {
        tracing::info!(
            ticket_id = id,
            user_id = user.user_id,
            from = %current.status,
            to = %ticket.status,
            "Ticket status changed"
        );
    }
    Ok(Json(ticket))
}
