//! User service.

use sqlx::SqlitePool;
use tracing::instrument;

use crate::api::models::users::{UserCreate, UserResponse};
use crate::db::{handlers::Users, models::users::UserCreateDBRequest};
use crate::errors::{Error, Result};

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self), err)]
    pub async fn list_users(&self) -> Result<Vec<UserResponse>> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let users = Users::new(&mut conn).list().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Persist a user unconditionally; duplicate emails are allowed.
    #[instrument(skip_all, err)]
    pub async fn create_user(&self, user: UserCreate) -> Result<UserResponse> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let user = Users::new(&mut conn).create(&UserCreateDBRequest::from(user)).await?;

        Ok(UserResponse::from(user))
    }
}
