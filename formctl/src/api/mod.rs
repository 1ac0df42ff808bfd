//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! Everything is nested under `/api`:
//!
//! - **Forms** (`/api/forms/*`): Form CRUD, lookup by shareable link, responses and analytics.
//!   Open to any origin.
//! - **Users** (`/api/users`): User creation and listing. Restricted to the configured origins.
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with `utoipa`. The document is served at `/openapi.json` and an
//! interactive reference at `/docs`.

pub mod handlers;
pub mod models;
