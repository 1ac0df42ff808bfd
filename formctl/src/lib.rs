//! # formctl: form builder backend
//!
//! `formctl` is the HTTP backend for a form builder. Users assemble forms out of ordered
//! questions, publish them through a generated shareable link, collect responses, and read simple
//! aggregate counts per form.
//!
//! ## Architecture
//!
//! The service is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer and SQLite
//! (through SQLx) for persistence. A request flows through four layers:
//!
//! 1. **API layer** ([`api`]): handlers extract the path and JSON body and return JSON, mapping
//!    [`errors::Error`] to status codes. Payloads use camelCase field names.
//! 2. **Services** ([`services`]): form lifecycle (link generation, save-as-create-or-replace,
//!    cascading deletes, responses, analytics) and user management.
//! 3. **Repositories** ([`db::handlers`]): typed queries over a borrowed connection or
//!    transaction.
//! 4. **SQLite**: schema managed by the migrations in `migrations/`.
//!
//! A form owns its questions: they are written with the form in one transaction and removed with
//! it by `ON DELETE CASCADE`. Responses reference their form by plain id and outlive it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use formctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = formctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     formctl::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod services;
pub mod telemetry;
mod types;

#[cfg(test)]
mod test;
#[cfg(test)]
pub mod test_utils;

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use bon::Builder;
pub use config::Config;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    config::{CorsConfig, CorsOrigin},
    openapi::ApiDoc,
    services::{FormService, UserService},
};

pub use types::{FormId, QuestionId, ResponseId, UserId};

/// Application state shared across all request handlers.
///
/// # Fields
///
/// - `db`: SQLite connection pool
/// - `config`: Application configuration loaded from environment/files
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .db(pool)
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

impl AppState {
    pub fn forms(&self) -> FormService {
        FormService::new(self.db.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.db.clone())
    }
}

/// Get the formctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// CORS for the users API: only the configured origins, or any origin if `*` is listed.
fn create_cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let allow_origin = if config.users_allowed_origins.contains(&CorsOrigin::Wildcard) {
        AllowOrigin::any()
    } else {
        let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.users_allowed_origins.len());
        for origin in &config.users_allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                // Browsers send scheme://host[:port] with no trailing slash
                origins.push(url.origin().ascii_serialization().parse()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if let Some(max_age) = config.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router.
///
/// - `/api/forms/*`: form, response and analytics routes, open to any origin
/// - `/api/users`: user routes, restricted to `cors.users_allowed_origins`
/// - `/healthz`: liveness check
/// - `/docs` and `/openapi.json`: API documentation
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let forms_routes = Router::new()
        .route(
            "/forms",
            get(api::handlers::forms::list_forms).post(api::handlers::forms::save_form),
        )
        .route("/forms/share/{link}", get(api::handlers::forms::get_form_by_link))
        .route(
            "/forms/{id}",
            get(api::handlers::forms::get_form)
                .put(api::handlers::forms::replace_form)
                .delete(api::handlers::forms::delete_form),
        )
        .route(
            "/forms/{id}/responses",
            get(api::handlers::responses::list_responses).post(api::handlers::responses::add_responses),
        )
        .route("/forms/{id}/analytics", get(api::handlers::forms::get_form_analytics))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    let users_routes = Router::new()
        .route(
            "/users",
            get(api::handlers::users::list_users).post(api::handlers::users::create_user),
        )
        .layer(create_cors_layer(&state.config.cors)?);

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api", forms_routes.merge(users_routes))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance: connect, migrate, build the router
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Like [`Application::new`], optionally reusing an existing pool (tests inject one).
    pub async fn new_with_pool(config: Config, pool: Option<SqlitePool>) -> anyhow::Result<Self> {
        debug!("Starting formctl with configuration: {:#?}", config);

        let pool = match pool {
            Some(pool) => pool,
            None => db::connect(&config.database).await?,
        };
        migrator().run(&pool).await?;

        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("formctl listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use url::Url;

    #[sqlx::test]
    #[test_log::test]
    async fn test_healthz(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/healthz").await;
        response.assert_status_ok();
        response.assert_text("OK");
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_openapi_document_lists_routes(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/openapi.json").await;
        response.assert_status_ok();

        let doc: serde_json::Value = response.json();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/forms",
            "/forms/{id}",
            "/forms/share/{link}",
            "/forms/{id}/responses",
            "/forms/{id}/analytics",
            "/users",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(doc["components"]["schemas"]["FormResponse"].is_object());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_docs_are_served(pool: SqlitePool) {
        let server = create_test_app(pool).await;

        let response = server.get("/docs").await;
        response.assert_status_ok();
        assert!(response.text().contains("<html"));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_unknown_route_is_404(pool: SqlitePool) {
        let server = create_test_app(pool).await;
        server.get("/api/nothing-here").await.assert_status_not_found();
    }

    #[test_log::test(tokio::test)]
    async fn test_application_connects_and_migrates_in_memory() {
        let app = Application::new(create_test_config()).await.unwrap();
        let server = app.into_test_server();

        let response = server.get("/api/forms").await;
        response.assert_status_ok();
        assert!(response.json::<Vec<serde_json::Value>>().is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_wildcard_users_origin_allows_any(pool: SqlitePool) {
        let mut config = create_test_config();
        config.cors.users_allowed_origins = vec![CorsOrigin::Wildcard];
        let server = Application::new_with_pool(config, Some(pool)).await.unwrap().into_test_server();

        let response = server.get("/api/users").add_header("origin", "https://anywhere.example").await;
        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[test]
    fn test_create_cors_layer_accepts_configured_origins() {
        let config = CorsConfig {
            users_allowed_origins: vec![
                CorsOrigin::Url(Url::parse("http://localhost:5173").unwrap()),
                CorsOrigin::Url(Url::parse("https://forms.example.com").unwrap()),
            ],
            max_age: Some(300),
        };
        assert!(create_cors_layer(&config).is_ok());
    }
}
