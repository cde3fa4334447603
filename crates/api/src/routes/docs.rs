//! Root banner and interactive API documentation.

use axum::response::Html;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub const BANNER: &str = "API is running... Visit /api-docs for documentation";

/// Swagger UI page; assets come from the public CDN and load the document
/// served at `/api-docs/openapi.json`.
const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Society Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

async fn banner() -> &'static str {
    BANNER
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount the banner and documentation routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/api-docs", get(swagger_ui))
        .route("/api-docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swagger_page_is_complete() {
        assert!(SWAGGER_UI.contains(r##"dom_id: "#swagger-ui""##));
        assert!(SWAGGER_UI.trim_end().ends_with("</html>"));
    }
}
