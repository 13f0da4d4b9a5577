//! Activity handlers: list and delete. Activities are seeded, not created over HTTP.

use super::parse_id;
use crate::error::AppError;
use crate::response::{activity_summary, ActivitySummary};
use crate::service::ActivityService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::list(&state.pool).await?;
    let body: Vec<ActivitySummary> = activities.into_iter().map(activity_summary).collect();
    Ok((StatusCode::OK, Json(body)))
}

/// DELETE /activities/:id — removes the activity and, through the store, its signups.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !ActivityService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Activity not found"));
    }
    tracing::info!(activity_id = id, "activity deleted");
    Ok(StatusCode::NO_CONTENT)
}
