//! Form lifecycle: saving forms and their questions, shareable links, responses and analytics.

use sqlx::SqlitePool;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::api::models::{
    analytics::Analytics,
    forms::{FormResponse, FormSave},
    responses::{ResponseCreate, SubmittedResponse},
};
use crate::db::{
    errors::DbError,
    handlers::{Forms, Repository, Responses},
    models::{forms::FormDBRequest, responses::ResponseCreateDBRequest},
};
use crate::errors::{Error, Result};
use crate::services::analytics;
use crate::types::{FormId, abbrev_link};

fn form_not_found(id: impl ToString) -> Error {
    Error::NotFound {
        resource: "Form".to_string(),
        id: id.to_string(),
    }
}

/// Keep a client-supplied link, or generate a v4 UUID when it is absent or empty.
pub fn resolve_shareable_link(link: Option<&str>) -> String {
    match link {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => Uuid::new_v4().to_string(),
    }
}

#[derive(Clone)]
pub struct FormService {
    pool: SqlitePool,
}

impl FormService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All forms with their questions, in id order.
    #[instrument(skip(self), err)]
    pub async fn list_forms(&self) -> Result<Vec<FormResponse>> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let forms = Forms::new(&mut conn).list().await?;

        Ok(forms.into_iter().map(FormResponse::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn get_form(&self, id: FormId) -> Result<FormResponse> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let form = Forms::new(&mut conn).get_by_id(id).await?.ok_or_else(|| form_not_found(id))?;

        Ok(FormResponse::from(form))
    }

    #[instrument(skip(self, link), fields(link = %abbrev_link(link)), err)]
    pub async fn get_form_by_shareable_link(&self, link: &str) -> Result<FormResponse> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let form = Forms::new(&mut conn)
            .get_by_shareable_link(link)
            .await?
            .ok_or_else(|| form_not_found(abbrev_link(link)))?;

        Ok(FormResponse::from(form))
    }

    /// Save a form and its questions in one transaction.
    ///
    /// If `form.id` names an existing form it is replaced (scalar fields and the whole question
    /// collection). Otherwise, including when the id is unknown, a new form is created with a
    /// store-assigned id.
    #[instrument(skip_all, fields(form_id = ?form.id), err)]
    pub async fn create_or_update_form(&self, form: FormSave) -> Result<FormResponse> {
        let shareable_link = resolve_shareable_link(form.shareable_link.as_deref());
        let id = form.id;
        let request = FormDBRequest::new(form, shareable_link);

        let mut tx = self.pool.begin().await.map_err(|e| Error::Database(e.into()))?;
        let saved = {
            let mut repo = Forms::new(&mut tx);
            let existing = match id {
                Some(id) => repo.exists(id).await?.then_some(id),
                None => None,
            };
            match existing {
                Some(id) => {
                    debug!(form_id = id, "Replacing existing form");
                    repo.update(id, &request).await?
                }
                None => repo.create(&request).await?,
            }
        };
        tx.commit().await.map_err(|e| Error::Database(e.into()))?;

        Ok(FormResponse::from(saved))
    }

    /// Replace an existing form. Unlike [`Self::create_or_update_form`] this never creates.
    #[instrument(skip(self, form), err)]
    pub async fn replace_form(&self, id: FormId, form: FormSave) -> Result<FormResponse> {
        let shareable_link = resolve_shareable_link(form.shareable_link.as_deref());
        let request = FormDBRequest::new(form, shareable_link);

        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let saved = Forms::new(&mut conn).update(id, &request).await.map_err(|e| match e {
            DbError::NotFound => form_not_found(id),
            e => Error::Database(e),
        })?;

        Ok(FormResponse::from(saved))
    }

    /// Delete a form. Its questions go with it; its responses stay.
    #[instrument(skip(self), err)]
    pub async fn delete_form(&self, id: FormId) -> Result<()> {
        let deleted = match self.pool.acquire().await {
            Ok(mut conn) => Forms::new(&mut conn).delete(id).await,
            Err(e) => Err(DbError::from(e)),
        };

        match deleted {
            Ok(true) => Ok(()),
            Ok(false) | Err(DbError::NotFound) => Err(form_not_found(id)),
            Err(e) => Err(Error::Internal {
                message: format!("Error deleting form: {e}"),
            }),
        }
    }

    /// Record a batch of responses against `form_id`, overriding whatever form id each carries.
    /// The form is not required to exist.
    #[instrument(skip(self, responses), fields(count = responses.len()), err)]
    pub async fn add_responses(&self, form_id: FormId, responses: Vec<ResponseCreate>) -> Result<Vec<SubmittedResponse>> {
        let requests: Vec<ResponseCreateDBRequest> = responses.into_iter().map(ResponseCreateDBRequest::from).collect();

        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let created = Responses::new(&mut conn).create_many(form_id, &requests).await?;

        Ok(created.into_iter().map(SubmittedResponse::from).collect())
    }

    /// Responses recorded against `form_id` in insertion order. Unknown ids yield an empty list.
    #[instrument(skip(self), err)]
    pub async fn list_responses(&self, form_id: FormId) -> Result<Vec<SubmittedResponse>> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let responses = Responses::new(&mut conn).list_by_form(form_id).await?;

        Ok(responses.into_iter().map(SubmittedResponse::from).collect())
    }

    #[instrument(skip(self), err)]
    pub async fn get_analytics(&self, form_id: FormId) -> Result<Analytics> {
        let mut conn = self.pool.acquire().await.map_err(|e| Error::Database(e.into()))?;
        let form = Forms::new(&mut conn)
            .get_by_id(form_id)
            .await?
            .ok_or_else(|| form_not_found(form_id))?;
        let total_responses = Responses::new(&mut conn).count_by_form(form_id).await?;

        Ok(analytics::summarize(&form, total_responses))
    }
}
