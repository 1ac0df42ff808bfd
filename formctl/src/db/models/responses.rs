//! Database models for submitted responses.

use sqlx::FromRow;

use crate::api::models::responses::ResponseCreate;
use crate::types::{FormId, ResponseId};

/// Database request for recording a response. The form id is supplied separately by the caller.
#[derive(Debug, Clone, Default)]
pub struct ResponseCreateDBRequest {
    pub answer: Option<String>,
}

impl From<ResponseCreate> for ResponseCreateDBRequest {
    fn from(api: ResponseCreate) -> Self {
        // id and formId in the payload are not trusted
        Self { answer: api.answer }
    }
}

/// Database response for a recorded response
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ResponseDBResponse {
    pub id: ResponseId,
    pub form_id: FormId,
    pub answer: Option<String>,
}
