//! Stream endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::mock_server::error::LogicError;
use crate::mock_server::logic::Logic;
use crate::Stream;

/// Response for listing streams.
#[derive(Debug, Serialize)]
pub struct StreamsResponse {
    pub streams: Vec<Stream>,
    pub total: u64,
}

/// GET /streams
pub async fn list_streams(
    State(logic): State<Arc<Logic>>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:read")?;
    let (streams, total) = logic.streams().await?;
    Ok((StatusCode::OK, Json(StreamsResponse { streams, total })))
}

/// GET /streams/enabled
pub async fn list_enabled_streams(
    State(logic): State<Arc<Logic>>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:read")?;
    let (streams, total) = logic.enabled_streams().await?;
    Ok((StatusCode::OK, Json(StreamsResponse { streams, total })))
}

/// GET /streams/{id}
pub async fn get_stream(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:read")?;
    let stream = logic.stream(&id).await?;
    Ok((StatusCode::OK, Json(stream)))
}

/// POST /streams
pub async fn create_stream(
    State(logic): State<Arc<Logic>>,
    Json(stream): Json<Stream>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:create")?;
    let created = logic.create_stream(stream).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /streams/{id}
pub async fn update_stream(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
    Json(stream): Json<Stream>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:edit")?;
    let updated = logic.update_stream(&id, stream).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /streams/{id}
pub async fn delete_stream(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:edit")?;
    logic.delete_stream(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /streams/{id}/pause
pub async fn pause_stream(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:changestate")?;
    logic.pause_stream(&id).await?;
    Ok(StatusCode::OK)
}

/// POST /streams/{id}/resume
pub async fn resume_stream(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("streams:changestate")?;
    logic.resume_stream(&id).await?;
    Ok(StatusCode::OK)
}
