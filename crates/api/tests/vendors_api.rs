//! HTTP-level tests for the vendor directory.

mod common;

use axum::http::StatusCode;
use common::{delete_auth, expect_json, get_auth, post_json_auth, put_json_auth, user_with_token};
use serde_json::{json, Value};
use sqlx::PgPool;

fn plumber() -> Value {
    json!({
        "name": "QuickFix Plumbing",
        "category": "Plumbing",
        "phone": "+1234567850",
        "email": "info@quickfix.com",
        "rating": 4.5
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rating_must_stay_within_five(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;

    let mut body = plumber();
    body["rating"] = json!(7);
    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, "/api/vendors", body, &admin).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool.clone());
    let vendor = expect_json(
        post_json_auth(app, "/api/vendors", plumber(), &admin).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(vendor["rating"], 4.5);
    let uri = format!("/api/vendors/{}", vendor["id"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "rating": -1 }), &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = expect_json(
        put_json_auth(app, &uri, json!({ "rating": 5 }), &admin).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["rating"], 5.0);
    assert_eq!(json["name"], "QuickFix Plumbing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn vendor_lookup_and_removal(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (_, token) = user_with_token(&pool, "resident@apt.com", "resident").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get_auth(app, "/api/vendors/9999", &token).await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(json["error"], "Vendor with id 9999 not found");

    let app = common::build_test_app(pool.clone());
    let vendor = expect_json(
        post_json_auth(app, "/api/vendors", plumber(), &admin).await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/vendors/{}", vendor["id"]);

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get_auth(app, &uri, &token).await, StatusCode::OK).await;
    assert_eq!(json["category"], "Plumbing");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
