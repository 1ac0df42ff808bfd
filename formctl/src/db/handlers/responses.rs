//! Database repository for submitted responses.

use sqlx::{Connection, SqliteConnection};
use tracing::instrument;

use crate::db::{
    errors::Result,
    models::responses::{ResponseCreateDBRequest, ResponseDBResponse},
};
use crate::types::FormId;

/// Repository for responses. The `form_id` column is a plain value with no foreign key, so
/// responses can be recorded against any id and survive deletion of their form.
pub struct Responses<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Responses<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Record a batch of responses for a form, all or nothing.
    #[instrument(skip(self, requests), fields(count = requests.len()), err)]
    pub async fn create_many(&mut self, form_id: FormId, requests: &[ResponseCreateDBRequest]) -> Result<Vec<ResponseDBResponse>> {
        let mut tx = self.db.begin().await?;

        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            let response = sqlx::query_as::<_, ResponseDBResponse>(
                r#"
                INSERT INTO responses (form_id, answer)
                VALUES (?1, ?2)
                RETURNING id, form_id, answer
                "#,
            )
            .bind(form_id)
            .bind(&request.answer)
            .fetch_one(&mut *tx)
            .await?;
            created.push(response);
        }

        tx.commit().await?;

        Ok(created)
    }

    /// List responses recorded against a form, oldest first.
    #[instrument(skip(self), err)]
    pub async fn list_by_form(&mut self, form_id: FormId) -> Result<Vec<ResponseDBResponse>> {
        let responses = sqlx::query_as::<_, ResponseDBResponse>("SELECT id, form_id, answer FROM responses WHERE form_id = ?1 ORDER BY id")
            .bind(form_id)
            .fetch_all(&mut *self.db)
            .await?;

        Ok(responses)
    }

    #[instrument(skip(self), err)]
    pub async fn count_by_form(&mut self, form_id: FormId) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM responses WHERE form_id = ?1")
            .bind(form_id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count)
    }
}
