//! Common type definitions.
//!
//! All entity identifiers are store-assigned integers (SQLite `INTEGER PRIMARY KEY`), wrapped in
//! type aliases so signatures say which entity they refer to:
//!
//! - [`FormId`]: Form identifier
//! - [`QuestionId`]: Question identifier
//! - [`ResponseId`]: Submitted response identifier
//! - [`UserId`]: User identifier
//!
//! # Utility Functions
//!
//! - [`abbrev_link`]: Abbreviate shareable links for logging

pub type FormId = i64;
pub type QuestionId = i64;
pub type ResponseId = i64;
pub type UserId = i64;

/// Abbreviate a shareable link to its first 8 characters for more readable logs and traces.
/// Links act as public access tokens, so they are never logged in full.
/// Example: "550e8400-e29b-41d4-a716-446655440000" -> "550e8400"
pub fn abbrev_link(link: &str) -> String {
    link.chars().take(8).collect()
}
