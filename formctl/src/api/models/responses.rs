//! API request and response models for submitted responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::models::responses::ResponseDBResponse;
use crate::types::{FormId, ResponseId};

/// A response as submitted by a client. `id` and `formId` are accepted but not trusted: the
/// form id always comes from the request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCreate {
    #[serde(default)]
    pub id: Option<ResponseId>,
    #[serde(default)]
    pub form_id: Option<FormId>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A recorded response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedResponse {
    pub id: ResponseId,
    pub form_id: FormId,
    pub answer: Option<String>,
}

impl From<ResponseDBResponse> for SubmittedResponse {
    fn from(response: ResponseDBResponse) -> Self {
        Self {
            id: response.id,
            form_id: response.form_id,
            answer: response.answer,
        }
    }
}
