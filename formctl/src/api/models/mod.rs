//! API request and response data models.
//!
//! These structures define the public JSON contract. They are kept separate from the database
//! models in [`crate::db::models`] so storage and wire formats can change independently. Field
//! names on the form surface are camelCase (`formName`, `shareableLink`, `questionText`).
//!
//! - [`forms`]: Form and question payloads
//! - [`responses`]: Submitted responses
//! - [`users`]: User creation and listing
//! - [`analytics`]: Per-form aggregate counts

pub mod analytics;
pub mod forms;
pub mod responses;
pub mod users;
