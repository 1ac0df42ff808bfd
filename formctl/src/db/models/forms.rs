//! Database models for forms and their questions.

use sqlx::FromRow;

use crate::api::models::forms::{FormSave, QuestionSave};
use crate::types::{FormId, QuestionId};

/// Database request for one question of a form, in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDBRequest {
    pub question_text: Option<String>,
    pub question_type: Option<String>,
}

impl From<QuestionSave> for QuestionDBRequest {
    fn from(api: QuestionSave) -> Self {
        // Question ids from the client are ignored; the whole collection is rewritten on save
        Self {
            question_text: api.question_text,
            question_type: api.question_type,
        }
    }
}

/// Database request for creating or replacing a form together with its questions
#[derive(Debug, Clone)]
pub struct FormDBRequest {
    pub form_name: Option<String>,
    pub form_description: Option<String>,
    pub shareable_link: String,
    pub questions: Vec<QuestionDBRequest>,
}

impl FormDBRequest {
    /// Build a request from an API payload once the shareable link has been resolved.
    pub fn new(save: FormSave, shareable_link: String) -> Self {
        Self {
            form_name: save.form_name,
            form_description: save.form_description,
            shareable_link,
            questions: save.questions.unwrap_or_default().into_iter().map(QuestionDBRequest::from).collect(),
        }
    }
}

/// Database row for a form, without its questions
#[derive(Debug, Clone, FromRow)]
pub struct FormRow {
    pub id: FormId,
    pub form_name: Option<String>,
    pub form_description: Option<String>,
    pub shareable_link: String,
}

/// Database row for a question
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct QuestionDBResponse {
    pub id: QuestionId,
    pub form_id: FormId,
    pub position: i64,
    pub question_text: Option<String>,
    pub question_type: Option<String>,
}

/// Database response for a form with its questions in display order
#[derive(Debug, Clone)]
pub struct FormDBResponse {
    pub id: FormId,
    pub form_name: Option<String>,
    pub form_description: Option<String>,
    pub shareable_link: String,
    pub questions: Vec<QuestionDBResponse>,
}

impl From<(FormRow, Vec<QuestionDBResponse>)> for FormDBResponse {
    fn from((form, questions): (FormRow, Vec<QuestionDBResponse>)) -> Self {
        Self {
            id: form.id,
            form_name: form.form_name,
            form_description: form.form_description,
            shareable_link: form.shareable_link,
            questions,
        }
    }
}
