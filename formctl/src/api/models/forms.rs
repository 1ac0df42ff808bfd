//! API request and response models for form endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::forms::{FormDBResponse, QuestionDBResponse};
use crate::types::{FormId, QuestionId};

/// A question as submitted inside a form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSave {
    /// Ignored on save; questions are rewritten with every form save
    #[serde(default)]
    pub id: Option<QuestionId>,
    #[serde(default)]
    pub question_text: Option<String>,
    /// Free-form type tag, e.g. "text" or "choice"
    #[serde(default)]
    pub question_type: Option<String>,
}

/// Request to create or replace a form.
///
/// When `id` names an existing form, that form is replaced. When `shareableLink` is absent or
/// empty a new one is generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSave {
    #[serde(default)]
    pub id: Option<FormId>,
    #[serde(default)]
    pub form_name: Option<String>,
    #[serde(default)]
    pub form_description: Option<String>,
    #[serde(default)]
    pub shareable_link: Option<String>,
    /// Questions in display order. Also accepted as `userQuestions`.
    #[serde(default, alias = "userQuestions")]
    pub questions: Option<Vec<QuestionSave>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub question_text: Option<String>,
    pub question_type: Option<String>,
}

impl From<QuestionDBResponse> for QuestionResponse {
    fn from(question: QuestionDBResponse) -> Self {
        Self {
            id: question.id,
            question_text: question.question_text,
            question_type: question.question_type,
        }
    }
}

/// A persisted form with its questions in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: FormId,
    pub form_name: Option<String>,
    pub form_description: Option<String>,
    /// Public link token (a v4 UUID unless the client supplied its own)
    pub shareable_link: String,
    pub questions: Vec<QuestionResponse>,
}

impl From<FormDBResponse> for FormResponse {
    fn from(form: FormDBResponse) -> Self {
        Self {
            id: form.id,
            form_name: form.form_name,
            form_description: form.form_description,
            shareable_link: form.shareable_link,
            questions: form.questions.into_iter().map(QuestionResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_save_accepts_user_questions_alias() {
        let save: FormSave = serde_json::from_value(serde_json::json!({
            "formName": "Survey",
            "userQuestions": [{ "questionText": "How?", "questionType": "text" }]
        }))
        .unwrap();

        let questions = save.questions.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question_text.as_deref(), Some("How?"));
        assert!(save.shareable_link.is_none());
    }

    #[test]
    fn test_form_save_allows_missing_fields() {
        let save: FormSave = serde_json::from_str("{}").unwrap();
        assert!(save.id.is_none());
        assert!(save.form_name.is_none());
        assert!(save.questions.is_none());
    }

    #[test]
    fn test_form_response_is_camel_case() {
        let response = FormResponse {
            id: 1,
            form_name: Some("Survey".to_string()),
            form_description: None,
            shareable_link: "abc".to_string(),
            questions: vec![QuestionResponse {
                id: 2,
                question_text: Some("Q".to_string()),
                question_type: Some("text".to_string()),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["formName"], "Survey");
        assert_eq!(json["shareableLink"], "abc");
        assert!(json["formDescription"].is_null());
        assert_eq!(json["questions"][0]["questionText"], "Q");
        assert_eq!(json["questions"][0]["questionType"], "text");
        assert!(json["questions"][0].get("formId").is_none());
    }
}
