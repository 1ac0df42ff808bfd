//! Repository implementations for database access.
//!
//! Each repository wraps a borrowed SQLx connection or transaction and exposes strongly-typed
//! operations returning models from [`crate::db::models`]. Calling `begin()` on a connection that
//! is already inside a transaction opens a savepoint, so repositories can be composed inside a
//! caller's transaction.
//!
//! # Available Repositories
//!
//! - [`Forms`]: Forms and the ordered questions they own
//! - [`Responses`]: Responses submitted against a form
//! - [`Users`]: User records
//!
//! # Common Pattern
//!
//! ```ignore
//! use formctl::db::handlers::{Forms, Repository};
//!
//! async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let forms = Forms::new(&mut tx).list().await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod forms;
pub mod repository;
pub mod responses;
pub mod users;

pub use forms::Forms;
pub use repository::Repository;
pub use responses::Responses;
pub use users::Users;
