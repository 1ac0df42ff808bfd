//! HTTP request handlers for all API endpoints.
//!
//! Handlers are thin: they extract path and body, call the matching service on
//! [`crate::AppState`], and serialize the result. Failures are returned as
//! [`crate::errors::Error`], which converts itself into the right status code and body.
//!
//! # Handler Modules
//!
//! - [`forms`]: Form CRUD, shareable link lookup and analytics
//! - [`responses`]: Response submission and listing
//! - [`users`]: User creation and listing

pub mod forms;
pub mod responses;
pub mod users;
