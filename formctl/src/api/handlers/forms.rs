//! HTTP handlers for form endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::instrument;

use crate::{
    AppState,
    api::models::{
        analytics::Analytics,
        forms::{FormResponse, FormSave},
    },
    errors::Result,
    types::FormId,
};

/// List all forms.
#[utoipa::path(
    get,
    path = "/forms",
    tag = "forms",
    summary = "List forms",
    description = "List every form with its questions, in creation order.",
    responses(
        (status = 200, description = "List of forms", body = [FormResponse]),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn list_forms(State(state): State<AppState>) -> Result<Json<Vec<FormResponse>>> {
    let forms = state.forms().list_forms().await?;
    Ok(Json(forms))
}

/// Get a form by ID.
#[utoipa::path(
    get,
    path = "/forms/{id}",
    tag = "forms",
    summary = "Get form",
    params(
        ("id" = i64, Path, description = "Form ID"),
    ),
    responses(
        (status = 200, description = "Form found", body = FormResponse),
        (status = 404, description = "Form not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn get_form(State(state): State<AppState>, Path(id): Path<FormId>) -> Result<Json<FormResponse>> {
    let form = state.forms().get_form(id).await?;
    Ok(Json(form))
}

/// Get a form by its shareable link.
#[utoipa::path(
    get,
    path = "/forms/share/{link}",
    tag = "forms",
    summary = "Get form by shareable link",
    description = "Resolve a public shareable link to the form it points at.",
    params(
        ("link" = String, Path, description = "Shareable link token"),
    ),
    responses(
        (status = 200, description = "Form found", body = FormResponse),
        (status = 404, description = "No form has this link"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn get_form_by_link(State(state): State<AppState>, Path(link): Path<String>) -> Result<Json<FormResponse>> {
    let form = state.forms().get_form_by_shareable_link(&link).await?;
    Ok(Json(form))
}

/// Create a form, or replace the form named by `id` if it exists.
#[utoipa::path(
    post,
    path = "/forms",
    tag = "forms",
    summary = "Save form",
    description = "Create a form with its questions. If the body carries the id of an existing form, that form is \
                   replaced instead. A shareable link is generated when none is supplied.",
    request_body = FormSave,
    responses(
        (status = 200, description = "Saved form", body = FormResponse),
        (status = 409, description = "Shareable link already in use"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn save_form(State(state): State<AppState>, Json(form): Json<FormSave>) -> Result<Json<FormResponse>> {
    let form = state.forms().create_or_update_form(form).await?;
    Ok(Json(form))
}

/// Replace an existing form.
#[utoipa::path(
    put,
    path = "/forms/{id}",
    tag = "forms",
    summary = "Replace form",
    description = "Replace the scalar fields and the full question list of an existing form. Any id in the body is ignored.",
    params(
        ("id" = i64, Path, description = "Form ID"),
    ),
    request_body = FormSave,
    responses(
        (status = 200, description = "Saved form", body = FormResponse),
        (status = 404, description = "Form not found"),
        (status = 409, description = "Shareable link already in use"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn replace_form(State(state): State<AppState>, Path(id): Path<FormId>, Json(form): Json<FormSave>) -> Result<Json<FormResponse>> {
    let form = state.forms().replace_form(id, form).await?;
    Ok(Json(form))
}

/// Delete a form.
#[utoipa::path(
    delete,
    path = "/forms/{id}",
    tag = "forms",
    summary = "Delete form",
    description = "Delete a form and its questions. Responses submitted to the form are kept.",
    params(
        ("id" = i64, Path, description = "Form ID"),
    ),
    responses(
        (status = 200, description = "Form deleted"),
        (status = 404, description = "Form not found"),
        (status = 500, description = "Deletion failed; the body carries the reason"),
    )
)]
#[instrument(skip_all)]
pub async fn delete_form(State(state): State<AppState>, Path(id): Path<FormId>) -> Result<StatusCode> {
    state.forms().delete_form(id).await?;
    Ok(StatusCode::OK)
}

/// Get response and question counts for a form.
#[utoipa::path(
    get,
    path = "/forms/{id}/analytics",
    tag = "forms",
    summary = "Form analytics",
    params(
        ("id" = i64, Path, description = "Form ID"),
    ),
    responses(
        (status = 200, description = "Current counts", body = Analytics),
        (status = 404, description = "Form not found"),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn get_form_analytics(State(state): State<AppState>, Path(id): Path<FormId>) -> Result<Json<Analytics>> {
    let analytics = state.forms().get_analytics(id).await?;
    Ok(Json(analytics))
}
