//! Per-form aggregate counts.

use crate::api::models::analytics::Analytics;
use crate::db::models::forms::FormDBResponse;

/// Summarize a loaded form and the number of responses counted against it.
pub fn summarize(form: &FormDBResponse, total_responses: i64) -> Analytics {
    Analytics {
        form_id: form.id,
        form_name: form.form_name.clone(),
        total_responses,
        question_count: form.questions.len() as i64,
    }
}
