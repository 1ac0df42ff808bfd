//! API response model for per-form analytics.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::FormId;

/// Aggregate counts for a form, computed on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub form_id: FormId,
    pub form_name: Option<String>,
    /// Number of responses recorded against the form
    pub total_responses: i64,
    /// Number of questions currently on the form
    pub question_count: i64,
}
