//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with SQLite.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Services   │  (services - form lifecycle, users, analytics)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   SQLite    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! Schema changes live in `migrations/` and are applied at startup by [`crate::migrator`].

pub mod errors;
pub mod handlers;
pub mod models;

use std::{str::FromStr, time::Duration};

use anyhow::Context;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open a connection pool for the configured database.
///
/// The database file is created when missing and foreign keys are enforced on every connection,
/// which the question cascade relies on.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("invalid database url '{}'", config.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_settings = &config.pool;
    let pool = SqlitePoolOptions::new()
        .max_connections(pool_settings.max_connections)
        .min_connections(pool_settings.min_connections)
        .acquire_timeout(Duration::from_secs(pool_settings.acquire_timeout_secs))
        .idle_timeout((pool_settings.idle_timeout_secs > 0).then(|| Duration::from_secs(pool_settings.idle_timeout_secs)))
        .max_lifetime((pool_settings.max_lifetime_secs > 0).then(|| Duration::from_secs(pool_settings.max_lifetime_secs)))
        .connect_with(options)
        .await
        .context("failed to connect to database")?;

    info!(max_connections = pool_settings.max_connections, "Database pool ready");
    Ok(pool)
}
