//! Handlers for community `/polls` and voting.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use society_core::error::CoreError;
use society_core::poll::{build_options, cast_vote, total_votes};
use society_core::types::DbId;
use society_core::validation::{validate_optional, validate_required};
use society_db::models::poll::{CastVote, CreatePoll, Poll, PollDetail, UpdatePoll};
use society_db::repositories::poll_repo::{NewPoll, PollChanges};
use society_db::repositories::PollRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn poll_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Poll", id })
}

/// GET /api/polls
#[utoipa::path(
    get,
    path = "/api/polls",
    tag = "polls",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Polls, newest first", body = Vec<PollDetail>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PollDetail>>> {
    let polls = PollRepo::list(&state.pool).await?;
    Ok(Json(polls))
}

/// POST /api/polls
#[utoipa::path(
    post,
    path = "/api/polls",
    tag = "polls",
    security(("bearer_auth" = [])),
    request_body = CreatePoll,
    responses(
        (status = 201, description = "Poll created", body = Poll),
        (status = 400, description = "Fewer than two options or blank question"),
    )
)]
pub async fn create(
    RequireManagement(user): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreatePoll>,
) -> AppResult<(StatusCode, Json<Poll>)> {
    validate_required("question", &input.question)?;
    let options = build_options(&input.options)?;

    let new_poll = NewPoll {
        created_by_id: user.user_id,
        question: input.question,
        options,
        ends_at: input.ends_at,
        is_anonymous: input.is_anonymous,
        voted_by: Vec::new(),
    };
    let poll = PollRepo::create(&state.pool, &new_poll).await?;
    tracing::info!(poll_id = poll.id, options = poll.options.0.len(), "Poll created");
    Ok((StatusCode::CREATED, Json(poll)))
}

/// PUT /api/polls/{id}
///
/// Options can only be replaced while nobody has voted.
#[utoipa::path(
    put,
    path = "/api/polls/{id}",
    tag = "polls",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Poll id")),
    request_body = UpdatePoll,
    responses(
        (status = 200, description = "Poll updated", body = Poll),
        (status = 404, description = "Poll not found"),
        (status = 409, description = "Options changed after voting started"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePoll>,
) -> AppResult<Json<Poll>> {
    validate_optional("question", input.question.as_deref())?;

    let options = input.options.as_deref().map(build_options).transpose()?;
    let replaces_options = options.is_some();

    let changes = PollChanges {
        question: input.question,
        options,
        ends_at: input.ends_at,
        is_anonymous: input.is_anonymous,
    };
    if let Some(poll) = PollRepo::update(&state.pool, id, &changes).await? {
        return Ok(Json(poll));
    }

    // Nothing updated: either the poll is gone or voting already started.
    let poll = PollRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| poll_not_found(id))?;
    if replaces_options && !poll.voted_by.is_empty() {
        return Err(AppError::Core(CoreError::Conflict(
            "Poll options cannot change once voting has started".into(),
        )));
    }
    Err(AppError::InternalError(format!("Poll {id} could not be updated")))
}

/// POST /api/polls/{id}/vote
#[utoipa::path(
    post,
    path = "/api/polls/{id}/vote",
    tag = "polls",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Poll id")),
    request_body = CastVote,
    responses(
        (status = 200, description = "Vote recorded", body = Poll),
        (status = 400, description = "Already voted, invalid option or poll closed"),
        (status = 404, description = "Poll not found"),
    )
)]
pub async fn vote(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CastVote>,
) -> AppResult<Json<Poll>> {
    let today = Utc::now().date_naive();
    let poll = PollRepo::record_vote(&state.pool, id, |poll| -> AppResult<()> {
        cast_vote(
            &mut poll.options.0,
            &mut poll.voted_by,
            user.user_id,
            input.option_index,
            poll.ends_at,
            today,
        )?;
        Ok(())
    })
    .await?
    .ok_or_else(|| poll_not_found(id))?;

    tracing::info!(
        poll_id = id,
        user_id = user.user_id,
        total_votes = total_votes(&poll.options.0),
        "Vote recorded"
    );
    Ok(Json(poll))
}

/// DELETE /api/polls/{id}
#[utoipa::path(
    delete,
    path = "/api/polls/{id}",
    tag = "polls",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Poll id")),
    responses(
        (status = 204, description = "Poll deleted"),
        (status = 404, description = "Poll not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PollRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(poll_not_found(id))
    }
}
