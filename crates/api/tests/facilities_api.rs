//! HTTP-level tests for facilities and their bookings.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get_auth, post_json_auth, put_json_auth, user_with_token};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create_hall(pool: &PgPool, token: &str) -> i64 {
    let body = json!({
        "name": "Party Hall",
        "description": "Spacious hall for celebrations",
        "capacity": 100,
        "timings": "9:00 AM - 11:00 PM",
        "amenities": ["AC", "Sound System"],
        "isPaid": true,
        "pricePerHour": 1000.0
    });
    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, "/api/facilities", body, token).await,
        StatusCode::CREATED,
    )
    .await;
    json["id"].as_i64().unwrap()
}

fn booking(facility_id: i64, start: &str, end: &str) -> Value {
    json!({
        "facilityId": facility_id,
        "date": "2099-01-20",
        "startTime": start,
        "endTime": end,
        "purpose": "Birthday Party"
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn paid_facility_without_price_rejected(pool: PgPool) {
    let (_, token) = user_with_token(&pool, "admin@apt.com", "management").await;
    let app = common::build_test_app(pool);
    let body = json!({
        "name": "Pool",
        "description": "Olympic size",
        "capacity": 30,
        "timings": "6:00 AM - 8:00 PM",
        "isPaid": true
    });
    let response = post_json_auth(app, "/api/facilities", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlapping_booking_conflicts(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (user, token) = user_with_token(&pool, "resident@apt.com", "resident").await;
    let hall = create_hall(&pool, &admin).await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json_auth(app, "/api/facilities/bookings", booking(hall, "18:00:00", "22:00:00"), &token)
            .await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["bookedById"], user.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/facilities/bookings",
        booking(hall, "20:00:00", "23:00:00"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Back-to-back slots are fine.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/facilities/bookings",
        booking(hall, "14:00:00", "18:00:00"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let list = expect_json(
        get_auth(app, "/api/facilities/bookings", &token).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["facility"]["name"], "Party Hall");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancelled_booking_frees_slot(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (_, token) = user_with_token(&pool, "resident@apt.com", "resident").await;
    let hall = create_hall(&pool, &admin).await;

    let app = common::build_test_app(pool.clone());
    let first = expect_json(
        post_json_auth(app, "/api/facilities/bookings", booking(hall, "18:00:00", "22:00:00"), &token)
            .await,
        StatusCode::CREATED,
    )
    .await;
    let uri = format!("/api/facilities/bookings/{}", first["id"]);

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "status": "cancelled" }), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        put_json_auth(app, &uri, json!({ "status": "cancelled" }), &admin).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["status"], "cancelled");

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(app, &uri, json!({ "status": "approved" }), &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/facilities/bookings",
        booking(hall, "19:00:00", "21:00:00"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_window_and_missing_facility(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let hall = create_hall(&pool, &admin).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/facilities/bookings",
        booking(hall, "22:00:00", "18:00:00"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/facilities/bookings",
        booking(9999, "18:00:00", "22:00:00"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
