//! HTTP-level tests for the notice board.

mod common;

use axum::http::StatusCode;
use common::{delete_auth, expect_json, get_auth, post_json_auth, put_json_auth, user_with_token};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn events_need_a_date(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;

    let app = common::build_test_app(pool.clone());
    let body = json!({ "title": "Annual Day", "content": "Cultural evening", "type": "event" });
    let json = expect_json(
        post_json_auth(app, "/api/notices", body, &admin).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Event notices require an eventDate");

    let app = common::build_test_app(pool);
    let body = json!({
        "title": "Annual Day",
        "content": "Cultural evening",
        "type": "event",
        "eventDate": "2025-02-14"
    });
    let json = expect_json(
        post_json_auth(app, "/api/notices", body, &admin).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["eventDate"], "2025-02-14");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn switching_to_event_without_date_rejected(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;

    let app = common::build_test_app(pool.clone());
    let body = json!({ "title": "Water Supply", "content": "No water 10-2", "type": "notice" });
    let notice = expect_json(
        post_json_auth(app, "/api/notices", body, &admin).await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/notices/{}", notice["id"]);

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        put_json_auth(app, &uri, json!({ "type": "event" }), &admin).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(json["error"], "Event notices require an eventDate");

    let app = common::build_test_app(pool.clone());
    let body = json!({ "type": "event", "eventDate": "2025-03-01" });
    let json = expect_json(put_json_auth(app, &uri, body, &admin).await, StatusCode::OK).await;
    assert_eq!(json["type"], "event");
    assert_eq!(json["title"], "Water Supply");

    let app = common::build_test_app(pool);
    let response = put_json_auth(app, "/api/notices/9999", json!({ "important": true }), &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn residents_read_but_cannot_post(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (_, token) = user_with_token(&pool, "resident@apt.com", "resident").await;

    for (title, important) in [("Lift servicing", false), ("Fire drill", true)] {
        let app = common::build_test_app(pool.clone());
        let body = json!({ "title": title, "content": "Details", "type": "circular", "important": important });
        expect_json(post_json_auth(app, "/api/notices", body, &admin).await, StatusCode::CREATED).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get_auth(app, "/api/notices", &token).await, StatusCode::OK).await;
    let notices = json.as_array().unwrap();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0]["title"], "Fire drill");

    let app = common::build_test_app(pool.clone());
    let body = json!({ "title": "Party", "content": "Tonight", "type": "notice" });
    let response = post_json_auth(app, "/api/notices", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/notices/{}", notices[1]["id"]);
    let response = delete_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &uri, &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
