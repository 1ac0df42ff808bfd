//! Database repository for forms and the questions they own.

use std::collections::HashMap;

use sqlx::{Connection, SqliteConnection};
use tracing::instrument;

use crate::db::{
    errors::{DbError, Result},
    handlers::repository::Repository,
    models::forms::{FormDBRequest, FormDBResponse, FormRow, QuestionDBRequest, QuestionDBResponse},
};
use crate::types::{FormId, QuestionId, abbrev_link};

/// Repository for forms. Questions are only ever written through their form.
pub struct Forms<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Forms<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Insert `questions` for a form, recording their order in `position`.
    async fn insert_questions(
        conn: &mut SqliteConnection,
        form_id: FormId,
        questions: &[QuestionDBRequest],
    ) -> Result<Vec<QuestionDBResponse>> {
        let mut inserted = Vec::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            let row = sqlx::query_as::<_, QuestionDBResponse>(
                r#"
                INSERT INTO questions (form_id, position, question_text, question_type)
                VALUES (?1, ?2, ?3, ?4)
                RETURNING id, form_id, position, question_text, question_type
                "#,
            )
            .bind(form_id)
            .bind(position as i64)
            .bind(&question.question_text)
            .bind(&question.question_type)
            .fetch_one(&mut *conn)
            .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn questions_for(conn: &mut SqliteConnection, form_id: FormId) -> Result<Vec<QuestionDBResponse>> {
        let questions = sqlx::query_as::<_, QuestionDBResponse>(
            r#"
            SELECT id, form_id, position, question_text, question_type
            FROM questions
            WHERE form_id = ?1
            ORDER BY position, id
            "#,
        )
        .bind(form_id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(questions)
    }

    /// Check whether a form with this id exists.
    #[instrument(skip(self), err)]
    pub async fn exists(&mut self, id: FormId) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM forms WHERE id = ?1")
            .bind(id)
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count > 0)
    }

    /// Look a form up by its shareable link.
    #[instrument(skip(self, link), fields(link = %abbrev_link(link)), err)]
    pub async fn get_by_shareable_link(&mut self, link: &str) -> Result<Option<FormDBResponse>> {
        let mut tx = self.db.begin().await?;

        let form = sqlx::query_as::<_, FormRow>(
            "SELECT id, form_name, form_description, shareable_link FROM forms WHERE shareable_link = ?1",
        )
        .bind(link)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(form) = form else {
            return Ok(None);
        };
        let questions = Self::questions_for(&mut tx, form.id).await?;
        tx.commit().await?;

        Ok(Some(FormDBResponse::from((form, questions))))
    }

    /// Resolve the form owning a question through the `form_id` column.
    #[instrument(skip(self), err)]
    pub async fn owner_of_question(&mut self, question_id: QuestionId) -> Result<Option<FormId>> {
        let form_id = sqlx::query_scalar::<_, FormId>("SELECT form_id FROM questions WHERE id = ?1")
            .bind(question_id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(form_id)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Forms<'c> {
    type CreateRequest = FormDBRequest;
    type UpdateRequest = FormDBRequest;
    type Response = FormDBResponse;
    type Id = FormId;

    #[instrument(skip(self, request), fields(link = %abbrev_link(&request.shareable_link), questions = request.questions.len()), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let mut tx = self.db.begin().await?;

        let form = sqlx::query_as::<_, FormRow>(
            r#"
            INSERT INTO forms (form_name, form_description, shareable_link)
            VALUES (?1, ?2, ?3)
            RETURNING id, form_name, form_description, shareable_link
            "#,
        )
        .bind(&request.form_name)
        .bind(&request.form_description)
        .bind(&request.shareable_link)
        .fetch_one(&mut *tx)
        .await?;

        let questions = Self::insert_questions(&mut tx, form.id, &request.questions).await?;

        tx.commit().await?;

        Ok(FormDBResponse::from((form, questions)))
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let mut tx = self.db.begin().await?;

        let form = sqlx::query_as::<_, FormRow>("SELECT id, form_name, form_description, shareable_link FROM forms WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(form) = form else {
            return Ok(None);
        };
        let questions = Self::questions_for(&mut tx, form.id).await?;
        tx.commit().await?;

        Ok(Some(FormDBResponse::from((form, questions))))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let mut tx = self.db.begin().await?;

        let forms = sqlx::query_as::<_, FormRow>("SELECT id, form_name, form_description, shareable_link FROM forms ORDER BY id")
            .fetch_all(&mut *tx)
            .await?;

        let questions = sqlx::query_as::<_, QuestionDBResponse>(
            r#"
            SELECT id, form_id, position, question_text, question_type
            FROM questions
            ORDER BY form_id, position, id
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut by_form: HashMap<FormId, Vec<QuestionDBResponse>> = HashMap::new();
        for question in questions {
            by_form.entry(question.form_id).or_default().push(question);
        }

        Ok(forms
            .into_iter()
            .map(|form| {
                let questions = by_form.remove(&form.id).unwrap_or_default();
                FormDBResponse::from((form, questions))
            })
            .collect())
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        // Questions go with the form (ON DELETE CASCADE); responses are left in place
        let result = sqlx::query("DELETE FROM forms WHERE id = ?1").bind(id).execute(&mut *self.db).await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), fields(link = %abbrev_link(&request.shareable_link), questions = request.questions.len()), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let mut tx = self.db.begin().await?;

        let form = sqlx::query_as::<_, FormRow>(
            r#"
            UPDATE forms
            SET form_name = ?2, form_description = ?3, shareable_link = ?4
            WHERE id = ?1
            RETURNING id, form_name, form_description, shareable_link
            "#,
        )
        .bind(id)
        .bind(&request.form_name)
        .bind(&request.form_description)
        .bind(&request.shareable_link)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound)?;

        // The question collection is replaced wholesale
        sqlx::query("DELETE FROM questions WHERE form_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let questions = Self::insert_questions(&mut tx, form.id, &request.questions).await?;

        tx.commit().await?;

        Ok(FormDBResponse::from((form, questions)))
    }
}
