//! Index set endpoint handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::mock_server::error::LogicError;
use crate::mock_server::logic::Logic;
use crate::{IndexSet, IndexSetStats};

/// Query parameters for listing index sets.
#[derive(Debug, Default, Deserialize)]
pub struct ListIndexSetsQuery {
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

/// Response for listing index sets.
#[derive(Debug, Serialize)]
pub struct IndexSetsResponse {
    pub index_sets: Vec<IndexSet>,
    pub total: u64,
    pub stats: IndexSetStats,
}

/// GET /system/indices/index_sets
pub async fn list_index_sets(
    State(logic): State<Arc<Logic>>,
    Query(query): Query<ListIndexSetsQuery>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:read")?;
    let (mut index_sets, total) = logic.index_sets().await?;
    let stats = logic.total_index_set_stats().await?;

    // Window the listing; limit 0 means unlimited.
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(0);
    index_sets = index_sets.into_iter().skip(skip).collect();
    if limit > 0 {
        index_sets.truncate(limit);
    }

    Ok((
        StatusCode::OK,
        Json(IndexSetsResponse {
            index_sets,
            total,
            stats,
        }),
    ))
}

/// GET /system/indices/index_sets/{id}
pub async fn get_index_set(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:read")?;
    let index_set = logic.index_set(&id).await?;
    Ok((StatusCode::OK, Json(index_set)))
}

/// POST /system/indices/index_sets
pub async fn create_index_set(
    State(logic): State<Arc<Logic>>,
    Json(index_set): Json<IndexSet>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:create")?;
    let created = logic.create_index_set(index_set).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /system/indices/index_sets/{id}
pub async fn update_index_set(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
    Json(index_set): Json<IndexSet>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:edit")?;
    let updated = logic.update_index_set(&id, index_set).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /system/indices/index_sets/{id}
pub async fn delete_index_set(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:edit")?;
    logic.delete_index_set(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /system/indices/index_sets/{id}/default
pub async fn set_default_index_set(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:edit")?;
    let updated = logic.set_default_index_set(&id).await?;
    Ok((StatusCode::OK, Json(updated)))
}

/// GET /system/indices/index_sets/{id}/stats
pub async fn get_index_set_stats(
    State(logic): State<Arc<Logic>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:read")?;
    let stats = logic.index_set_stats(&id).await?;
    Ok((StatusCode::OK, Json(stats)))
}

/// GET /system/indices/index_sets/stats
pub async fn get_total_index_set_stats(
    State(logic): State<Arc<Logic>>,
) -> Result<impl IntoResponse, LogicError> {
    logic.authorize("indexsets:read")?;
    let stats = logic.total_index_set_stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}
