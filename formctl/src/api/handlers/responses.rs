//! HTTP handlers for submitting and listing responses.

use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::instrument;

use crate::{
    AppState,
    api::models::responses::{ResponseCreate, SubmittedResponse},
    errors::Result,
    types::FormId,
};

/// Submit responses to a form.
#[utoipa::path(
    post,
    path = "/forms/{id}/responses",
    tag = "responses",
    summary = "Submit responses",
    description = "Record a batch of responses against the form in the path. Any formId in the body is overwritten. \
                   The form is not checked for existence.",
    params(
        ("id" = i64, Path, description = "Form ID"),
    ),
    request_body = [ResponseCreate],
    responses(
        (status = 200, description = "Recorded responses", body = [SubmittedResponse]),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn add_responses(
    State(state): State<AppState>,
    Path(id): Path<FormId>,
    Json(responses): Json<Vec<ResponseCreate>>,
) -> Result<Json<Vec<SubmittedResponse>>> {
    let created = state.forms().add_responses(id, responses).await?;
    Ok(Json(created))
}

/// List responses for a form.
#[utoipa::path(
    get,
    path = "/forms/{id}/responses",
    tag = "responses",
    summary = "List responses",
    description = "List responses recorded against a form in submission order. Unknown forms yield an empty list.",
    params(
        ("id" = i64, Path, description = "Form ID"),
    ),
    responses(
        (status = 200, description = "Responses", body = [SubmittedResponse]),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn list_responses(State(state): State<AppState>, Path(id): Path<FormId>) -> Result<Json<Vec<SubmittedResponse>>> {
    let responses = state.forms().list_responses(id).await?;
    Ok(Json(responses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use serde_json::json;
    use sqlx::SqlitePool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_submit_and_list_responses(pool: SqlitePool) {
        let app = create_test_app(pool.clone()).await;
        let form = create_test_form(&pool, "Poll", 1).await;

        let response = app
            .post(&format!("/api/forms/{}/responses", form.id))
            .json(&json!([
                { "answer": "r1", "formId": 9999 },
                { "answer": "r2" }
            ]))
            .await;

        response.assert_status_ok();
        let created: Vec<SubmittedResponse> = response.json();
        assert_eq!(created.len(), 2);
        assert!(created.iter().all(|r| r.form_id == form.id));

        let response = app.get(&format!("/api/forms/{}/responses", form.id)).await;
        response.assert_status_ok();
        let listed: Vec<SubmittedResponse> = response.json();
        let answers: Vec<_> = listed.iter().map(|r| r.answer.as_deref().unwrap()).collect();
        assert_eq!(answers, vec!["r1", "r2"]);

        let other: Vec<SubmittedResponse> = app.get("/api/forms/9999/responses").await.json();
        assert!(other.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_responses_for_unknown_form_is_empty(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.get("/api/forms/424242/responses").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<SubmittedResponse>>(), vec![]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_submit_uses_camel_case_form_id(pool: SqlitePool) {
        let app = create_test_app(pool).await;

        let response = app.post("/api/forms/3/responses").json(&json!([{ "answer": "yes" }])).await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body[0]["formId"], 3);
        assert_eq!(body[0]["answer"], "yes");
        assert!(body[0]["id"].as_i64().is_some());
    }
}
