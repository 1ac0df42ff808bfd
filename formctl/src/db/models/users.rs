//! Database models for users.

use sqlx::FromRow;

use crate::api::models::users::UserCreate;
use crate::types::UserId;

/// Database request for creating a new user
#[derive(Debug, Clone)]
pub struct UserCreateDBRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl From<UserCreate> for UserCreateDBRequest {
    fn from(api: UserCreate) -> Self {
        Self {
            email: api.email,
            name: api.name,
        }
    }
}

/// Database response for a user
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserDBResponse {
    pub id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
}
