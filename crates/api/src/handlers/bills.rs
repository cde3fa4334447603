//! Handlers for the `/bills` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use society_core::billing::{
    ensure_payable, summarize, validate_amount, validate_bill_status, validate_bill_type,
    validate_new_bill, BillSummary,
};
use society_core::error::CoreError;
use society_core::types::DbId;
use society_core::validation::validate_optional;
use society_db::models::bill::{Bill, BillDetail, BillFilter, CreateBill, UpdateBill};
use society_db::repositories::BillRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn bill_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Bill", id })
}

/// GET /api/bills
#[utoipa::path(
    get,
    path = "/api/bills",
    tag = "bills",
    security(("bearer_auth" = [])),
    params(BillFilter),
    responses((status = 200, description = "Bills with their unit", body = Vec<BillDetail>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(filter): Query<BillFilter>,
) -> AppResult<Json<Vec<BillDetail>>> {
    if let Some(status) = &filter.status {
        validate_bill_status(status)?;
    }
    let bills = BillRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = bills.len(), "Listed bills");
    Ok(Json(bills))
}

/// GET /api/bills/my
#[utoipa::path(
    get,
    path = "/api/bills/my",
    tag = "bills",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Bills of units the caller owns or rents", body = Vec<BillDetail>))
)]
pub async fn my(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BillDetail>>> {
    let bills = BillRepo::list_for_occupant(&state.pool, user.user_id).await?;
    Ok(Json(bills))
}

/// GET /api/bills/summary
#[utoipa::path(
    get,
    path = "/api/bills/summary",
    tag = "bills",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Counts and totals per status", body = BillSummary))
)]
pub async fn summary(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<BillSummary>> {
    let totals = BillRepo::totals_by_status(&state.pool).await?;
    let summary = summarize(
        totals
            .iter()
            .map(|t| (t.status.as_str(), t.count, t.amount)),
    );
    Ok(Json(summary))
}

/// POST /api/bills
#[utoipa::path(
    post,
    path = "/api/bills",
    tag = "bills",
    security(("bearer_auth" = [])),
    request_body = CreateBill,
    responses(
        (status = 201, description = "Bill created", body = Bill),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateBill>,
) -> AppResult<(StatusCode, Json<Bill>)> {
    validate_new_bill(
        &input.bill_type,
        input.amount,
        &input.description,
        &input.month,
        input.status.as_deref(),
    )?;
    let bill = BillRepo::create(&state.pool, &input, Utc::now().date_naive()).await?;
    tracing::info!(bill_id = bill.id, unit_id = ?bill.unit_id, amount = bill.amount, "Bill created");
    Ok((StatusCode::CREATED, Json(bill)))
}

/// PUT /api/bills/{id}
#[utoipa::path(
    put,
    path = "/api/bills/{id}",
    tag = "bills",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Bill id")),
    request_body = UpdateBill,
    responses(
        (status = 200, description = "Bill updated", body = Bill),
        (status = 404, description = "Bill not found"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBill>,
) -> AppResult<Json<Bill>> {
    if let Some(bill_type) = &input.bill_type {
        validate_bill_type(bill_type)?;
    }
    if let Some(status) = &input.status {
        validate_bill_status(status)?;
    }
    if let Some(amount) = input.amount {
        validate_amount(amount)?;
    }
    validate_optional("description", input.description.as_deref())?;
    validate_optional("month", input.month.as_deref())?;

    let bill = BillRepo::update(&state.pool, id, &input, Utc::now().date_naive())
        .await?
        .ok_or_else(|| bill_not_found(id))?;
    Ok(Json(bill))
}

/// PUT /api/bills/{id}/pay
///
/// A single conditional update; a bill that is already paid keeps its
/// original payment date and the request fails with 409.
#[utoipa::path(
    put,
    path = "/api/bills/{id}/pay",
    tag = "bills",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Bill id")),
    responses(
        (status = 200, description = "Bill marked as paid", body = Bill),
        (status = 404, description = "Bill not found"),
        (status = 409, description = "Bill is already paid"),
    )
)]
pub async fn pay(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Bill>> {
    let today = Utc::now().date_naive();
    if let Some(bill) = BillRepo::mark_paid(&state.pool, id, today).await? {
        tracing::info!(bill_id = id, user_id = user.user_id, "Bill paid");
        return Ok(Json(bill));
    }

    // Nothing updated: either the bill is gone or it was already paid.
    let bill = BillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| bill_not_found(id))?;
    ensure_payable(&bill.status)?;
    Err(AppError::InternalError(format!(
        "Bill {id} in status '{}' could not be marked paid",
        bill.status
    )))
}

/// DELETE /api/bills/{id}
#[utoipa::path(
    delete,
    path = "/api/bills/{id}",
    tag = "bills",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Bill id")),
    responses(
        (status = 204, description = "Bill deleted"),
        (status = 404, description = "Bill not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BillRepo::delete(&state.pool, id).await? {
        tracing::info!(bill_id = id, "Bill deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(bill_not_found(id))
    }
}
