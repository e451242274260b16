//! Role endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::mock_server::error::LogicError;
use crate::mock_server::logic::Logic;
use crate::Role;

/// Response for listing roles.
#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<Role>,
    pub total: u64,
}

/// GET /roles
pub async fn list_roles(State(logic): State<Arc<Logic>>) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("roles:read")?;
    let (roles, total) = logic.roles().await?;
    Ok((StatusCode::OK, Json(RolesResponse { roles, total })))
}

/// GET /roles/{name}
pub async fn get_role(
    State(logic): State<Arc<Logic>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("roles:read")?;
    let role = logic.role(&name).await?;
    Ok((StatusCode::OK, Json(role)))
}

/// POST /roles
pub async fn create_role(
    State(logic): State<Arc<Logic>>,
    Json(role): Json<Role>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("roles:create")?;
    let created = logic.create_role(role).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /roles/{name}
pub async fn update_role(
    State(logic): State<Arc<Logic>>,
    Path(name): Path<String>,
    Json(role): Json<Role>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("roles:edit")?;
    let updated = logic.update_role(&name, role).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /roles/{name}
pub async fn delete_role(
    State(logic): State<Arc<Logic>>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("roles:delete")?;
    logic.delete_role(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
