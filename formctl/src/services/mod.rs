//! Services sitting between the HTTP handlers and the repositories.
//!
//! Each service owns a clone of the connection pool, opens the connection or transaction an
//! operation needs, and converts repository results into API models and [`crate::errors::Error`]s.

pub mod analytics;
pub mod forms;
pub mod users;

pub use forms::FormService;
pub use users::UserService;
