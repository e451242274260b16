//! Input endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::mock_server::error::LogicError;
use crate::mock_server::logic::Logic;
use crate::Input;

/// Response for listing inputs.
#[derive(Debug, Serialize)]
pub struct InputsResponse {
    pub inputs: Vec<Input>,
    pub total: u64,
}

/// GET /system/inputs
pub async fn list_inputs(
    State(logic): State<Arc<Logic>>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("inputs:read")?;
    let (inputs, total) = logic.inputs().await?;
    Ok((StatusCode::OK, Json(InputsResponse { inputs, total })))
}

/// GET /system/inputs/{id}
pub async fn get_input(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("inputs:read")?;
    let input = logic.input(&id).await?;
    Ok((StatusCode::OK, Json(input)))
}

/// POST /system/inputs
pub async fn create_input(
    State(logic): State<Arc<Logic>>,
    Json(input): Json<Input>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("inputs:create")?;
    let created = logic.create_input(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /system/inputs/{id}
pub async fn update_input(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
    Json(input): Json<Input>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("inputs:edit")?;
    let updated = logic.update_input(&id, input).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /system/inputs/{id}
pub async fn delete_input(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("inputs:terminate")?;
    logic.delete_input(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
