//! HTTP handlers for user endpoints.

use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::{
    AppState,
    api::models::users::{UserCreate, UserResponse},
    errors::Result,
};

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    summary = "List users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.users().list_users().await?;
    Ok(Json(users))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    summary = "Create user",
    description = "Create a user. Email addresses are not required to be unique.",
    request_body = UserCreate,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 500, description = "Internal server error"),
    )
)]
#[instrument(skip_all)]
pub async fn create_user(State(state): State<AppState>, Json(user): Json<UserCreate>) -> Result<Json<UserResponse>> {
    let user = state.users().create_user(user).await?;
    Ok(Json(user))
}
