//! Documentation endpoints
//!
//! Serves Swagger UI and raw OpenAPI spec with API key protection.
//! Protected by X-Docs-Key header; returns 404 when unauthorized to hide endpoint existence.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use super::ApiDoc;

/// Key expected in the `X-Docs-Key` header; `None` leaves the docs open
#[derive(Debug, Clone, Default)]
pub struct DocsKey(pub Option<String>);

/// Middleware to protect docs endpoints with API key
///
/// Returns 404 (not 401/403) when unauthorized to hide endpoint existence.
pub async fn docs_auth_middleware(
    State(DocsKey(expected)): State<DocsKey>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let Some(expected) = expected else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get("X-Docs-Key")
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(provided) if provided == expected => Ok(next.run(request).await),
        _ => Err(StatusCode::NOT_FOUND.into_response()),
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Create the docs router
///
/// Routes:
/// - GET /docs - Swagger UI
/// - GET /docs/ - Swagger UI (with trailing slash)
/// - GET /docs/openapi.json - Raw OpenAPI spec
///
/// Generic over the parent router's state so it can be merged anywhere.
pub fn create_docs_router<S>(docs_key: Option<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/docs", get(swagger_ui))
        .route("/docs/", get(swagger_ui))
        .route("/docs/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn_with_state(
            DocsKey(docs_key),
            docs_auth_middleware,
        ))
}

/// Swagger UI page loading assets from the unpkg CDN
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Model Router API - Documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                persistAuthorization: true
            });
        };
    </script>
</body>
</html>"#;
