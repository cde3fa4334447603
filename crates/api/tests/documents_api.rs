//! HTTP-level tests for society documents.

mod common;

use axum::http::StatusCode;
use common::{delete_auth, expect_json, get_auth, post_json_auth, user_with_token};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn document_create_then_delete(pool: PgPool) {
    let (admin, token) = user_with_token(&pool, "admin@apt.com", "management").await;
    let body = json!({
        "title": "Society Bylaws 2024",
        "category": "rules",
        "fileType": "pdf",
        "fileUrl": "https://files.example.com/bylaws.pdf"
    });

    let app = common::build_test_app(pool.clone());
    let document = expect_json(
        post_json_auth(app, "/api/documents", body, &token).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(document["uploadedBy"], admin.id);
    assert_eq!(document["fileType"], "pdf");
    let uri = format!("/api/documents/{}", document["id"]);

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get_auth(app, "/api/documents", &token).await, StatusCode::OK).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get_auth(app, "/api/documents", &token).await, StatusCode::OK).await;
    assert!(json.as_array().unwrap().is_empty());

    let app = common::build_test_app(pool);
    let json = expect_json(delete_auth(app, &uri, &token).await, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_file_type_rejected(pool: PgPool) {
    let (_, admin) = user_with_token(&pool, "admin@apt.com", "management").await;
    let (_, token) = user_with_token(&pool, "resident@apt.com", "resident").await;
    let body = json!({ "title": "Budget", "category": "budget", "fileType": "xls" });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/documents", body.clone(), &admin).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/documents", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
