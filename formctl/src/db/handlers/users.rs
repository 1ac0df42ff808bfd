//! Database repository for users.

use sqlx::SqliteConnection;
use tracing::instrument;

use crate::db::{
    errors::Result,
    models::users::{UserCreateDBRequest, UserDBResponse},
};

pub struct Users<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Users<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Create a user. Emails are not required to be unique.
    #[instrument(skip(self, request), err)]
    pub async fn create(&mut self, request: &UserCreateDBRequest) -> Result<UserDBResponse> {
        let user = sqlx::query_as::<_, UserDBResponse>(
            r#"
            INSERT INTO users (email, name)
            VALUES (?1, ?2)
            RETURNING id, email, name
            "#,
        )
        .bind(&request.email)
        .bind(&request.name)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<UserDBResponse>> {
        let users = sqlx::query_as::<_, UserDBResponse>("SELECT id, email, name FROM users ORDER BY id")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_user(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        let user = repo
            .create(&UserCreateDBRequest {
                email: Some("a@x.com".to_string()),
                name: Some("Alice".to_string()),
            })
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
        assert_eq!(user.name.as_deref(), Some("Alice"));

        let users = repo.list().await.unwrap();
        assert_eq!(users, vec![user]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_duplicate_emails_are_allowed(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Users::new(&mut conn);

        let request = UserCreateDBRequest {
            email: Some("same@x.com".to_string()),
            name: None,
        };
        let first = repo.create(&request).await.unwrap();
        let second = repo.create(&request).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
