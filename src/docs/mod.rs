//! API Documentation module
//!
//! Provides OpenAPI specification generation using utoipa and the routes
//! that serve it.

mod openapi;
mod routes;

pub use openapi::ApiDoc;
pub use routes::{create_docs_router, docs_auth_middleware, DocsKey};
