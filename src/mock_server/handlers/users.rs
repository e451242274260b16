//! User endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::mock_server::error::LogicError;
use crate::mock_server::logic::Logic;
use crate::User;

/// Response for listing users.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// GET /users
pub async fn list_users(State(logic): State<Arc<Logic>>) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("users:list")?;
    let users = logic.users().await?;
    Ok((StatusCode::OK, Json(UsersResponse { users })))
}

/// GET /users/{username}
pub async fn get_user(
    State(logic): State<Arc<Logic>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("users:read")?;
    let user = logic.user(&username).await?;
    Ok((StatusCode::OK, Json(user)))
}

/// POST /users
pub async fn create_user(
    State(logic): State<Arc<Logic>>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("users:create")?;
    logic.create_user(user).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /users/{username}
pub async fn update_user(
    State(logic): State<Arc<Logic>>,
    Path(username): Path<String>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("users:edit")?;
    logic.update_user(&username, user).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/{username}
pub async fn delete_user(
    State(logic): State<Arc<Logic>>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("users:edit")?;
    logic.delete_user(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}
