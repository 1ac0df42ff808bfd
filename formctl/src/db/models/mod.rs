//! Database models.
//!
//! Request types (`*DBRequest`) carry what a repository needs to write a row, converted from the
//! API payloads in [`crate::api::models`]. Response types (`*DBResponse`) are what repositories
//! hand back, and are converted into API responses by the handlers.

pub mod forms;
pub mod responses;
pub mod users;
