//! HTTP-level tests for community polls.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get_auth, post_json_auth, put_json_auth, user_with_token};
use serde_json::json;
use sqlx::PgPool;

async fn create_poll(pool: &PgPool, token: &str) -> i64 {
    let body = json!({
        "question": "Should we install solar panels on the roof?",
        "options": ["Yes", "No", "Need more information"],
        "endsAt": "2099-12-31"
    });
    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, "/api/polls", body, token).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["options"][0]["votes"], 0);
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn each_resident_votes_once(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (voter, token) = user_with_token(&pool, "resident@apt.com", "resident").await;
    let id = create_poll(&pool, &admin).await;
    let uri = format!("/api/polls/{id}/vote");

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, &uri, json!({ "optionIndex": 0 }), &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["options"][0]["votes"], 1);
    assert_eq!(json["votedBy"], json!([voter.id]));

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, &uri, json!({ "optionIndex": 1 }), &token).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["error"], "Already voted");

    let app = common::build_test_app(pool);
    let polls = expect_json(get_auth(app, "/api/polls", &token).await, StatusCode::OK).await;
    assert_eq!(polls[0]["options"][0]["votes"], 1);
    assert_eq!(polls[0]["options"][1]["votes"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_option_rejected(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (_, token) = user_with_token(&pool, "resident@apt.com", "resident").await;
    let id = create_poll(&pool, &admin).await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, &format!("/api/polls/{id}/vote"), json!({ "optionIndex": 3 }), &token)
            .await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["error"], "Invalid option");

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/polls/9999/vote", json!({ "optionIndex": 0 }), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn options_locked_once_voting_starts(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (_, token) = user_with_token(&pool, "resident@apt.com", "resident").await;
    let id = create_poll(&pool, &admin).await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(app, &format!("/api/polls/{id}/vote"), json!({ "optionIndex": 2 }), &token)
        .await;

    let app = common::build_test_app(pool.clone());
    let body = json!({ "options": ["Yes", "No"] });
    let json = expect_json(
        put_json_auth(app, &format!("/api/polls/{id}"), body.clone(), &admin).await,
        StatusCode::CONFLICT,
    )
    .await;
    assert_eq!(json["error"], "Poll options cannot change once voting has started");

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, "/api/polls/9999", body, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let body = json!({ "question": "Install solar panels?" });
    let json = expect_json(
        put_json_auth(app, &format!("/api/polls/{id}"), body, &admin).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["question"], "Install solar panels?");
    assert_eq!(json["options"][2]["votes"], 1);
}
