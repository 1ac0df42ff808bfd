//! End-to-end tests that drive the router through complete user journeys.

use serde_json::{Value, json};
use sqlx::SqlitePool;
use tracing::info;

use crate::api::models::{analytics::Analytics, forms::FormResponse, responses::SubmittedResponse};
use crate::test_utils::{create_test_app, is_uuid_v4};

/// Build a form, publish it, collect answers through its link, edit it, read analytics, delete it.
#[sqlx::test]
#[test_log::test]
async fn test_e2e_form_lifecycle(pool: SqlitePool) {
    let app = create_test_app(pool).await;

    // Author creates a form without choosing a link
    let response = app
        .post("/api/forms")
        .json(&json!({
            "formName": "Customer survey",
            "formDescription": "Tell us how we did",
            "questions": [
                { "questionText": "How satisfied are you?", "questionType": "rating" },
                { "questionText": "Anything else?", "questionType": "text" }
            ]
        }))
        .await;
    response.assert_status_ok();
    let form: FormResponse = response.json();
    assert!(is_uuid_v4(&form.shareable_link));
    info!("Created form {} with link {}", form.id, form.shareable_link);

    // Respondent opens the shared link
    let response = app.get(&format!("/api/forms/share/{}", form.shareable_link)).await;
    response.assert_status_ok();
    let shared: FormResponse = response.json();
    assert_eq!(shared, form);

    // Respondent submits answers
    let response = app
        .post(&format!("/api/forms/{}/responses", shared.id))
        .json(&json!([{ "answer": "5" }, { "answer": "Great service" }]))
        .await;
    response.assert_status_ok();
    let submitted: Vec<SubmittedResponse> = response.json();
    assert_eq!(submitted.len(), 2);
    assert!(submitted.iter().all(|r| r.form_id == form.id));

    // Author edits the form through the collection endpoint; the link is kept when sent back
    let response = app
        .post("/api/forms")
        .json(&json!({
            "id": form.id,
            "formName": "Customer survey (v2)",
            "shareableLink": form.shareable_link,
            "questions": [{ "questionText": "How satisfied are you?", "questionType": "rating" }]
        }))
        .await;
    response.assert_status_ok();
    let edited: FormResponse = response.json();
    assert_eq!(edited.id, form.id);
    assert_eq!(edited.shareable_link, form.shareable_link);
    assert_eq!(edited.form_description, None);
    assert_eq!(edited.questions.len(), 1);

    // Analytics reflect the edit and the responses collected before it
    let response = app.get(&format!("/api/forms/{}/analytics", form.id)).await;
    response.assert_status_ok();
    let analytics: Analytics = response.json();
    assert_eq!(
        analytics,
        Analytics {
            form_id: form.id,
            form_name: Some("Customer survey (v2)".to_string()),
            total_responses: 2,
            question_count: 1,
        }
    );

    // Deleting the form retires the link but keeps the collected answers
    app.delete(&format!("/api/forms/{}", form.id)).await.assert_status_ok();
    app.get(&format!("/api/forms/share/{}", form.shareable_link))
        .await
        .assert_status_not_found();
    app.get(&format!("/api/forms/{}/analytics", form.id))
        .await
        .assert_status_not_found();

    let response = app.get(&format!("/api/forms/{}/responses", form.id)).await;
    response.assert_status_ok();
    let kept: Vec<SubmittedResponse> = response.json();
    assert_eq!(kept, submitted);
}

/// Two authors racing for the same custom link: the second gets a structured conflict.
#[sqlx::test]
#[test_log::test]
async fn test_e2e_custom_link_conflict(pool: SqlitePool) {
    let app = create_test_app(pool).await;

    let first = json!({ "formName": "Signup", "shareableLink": "spring-signup" });
    app.post("/api/forms").json(&first).await.assert_status_ok();

    let second = json!({ "formName": "Other signup", "shareableLink": "spring-signup" });
    let response = app.post("/api/forms").json(&second).await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["resource"], "form");

    // The losing request left nothing behind
    let forms: Vec<FormResponse> = app.get("/api/forms").await.json();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].form_name.as_deref(), Some("Signup"));
}

/// Users and forms live side by side without interfering.
#[sqlx::test]
#[test_log::test]
async fn test_e2e_users_and_forms_are_independent(pool: SqlitePool) {
    let app = create_test_app(pool).await;

    app.post("/api/users")
        .json(&json!({ "email": "author@example.com", "name": "Author" }))
        .await
        .assert_status_ok();
    app.post("/api/forms")
        .json(&json!({ "formName": "Feedback" }))
        .await
        .assert_status_ok();

    let users: Vec<Value> = app.get("/api/users").await.json();
    let forms: Vec<FormResponse> = app.get("/api/forms").await.json();
    assert_eq!(users.len(), 1);
    assert_eq!(forms.len(), 1);
    assert!(forms[0].questions.is_empty());
}
