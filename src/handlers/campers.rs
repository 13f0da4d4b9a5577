//! Camper handlers: list, create, read with signups, partial update.

use super::{parse_body, parse_id};
use crate::error::AppError;
use crate::model::{CamperDraft, CamperPatch};
use crate::response::{camper_detail, camper_summary, CamperSummary};
use crate::service::{validate_camper, CamperService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

const NOT_FOUND: &str = "Camper not found";

/// GET /campers — every camper, without signups.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::list(&state.pool).await?;
    let body: Vec<CamperSummary> = campers.into_iter().map(camper_summary).collect();
    Ok((StatusCode::OK, Json(body)))
}

/// POST /campers — `{name, age}`; responds with `{id, name, age}`.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let draft: CamperDraft = parse_body(body)?;
    let valid = validate_camper(&draft)?;
    let camper = CamperService::create(&state.pool, &valid).await?;
    tracing::info!(camper_id = camper.id, "camper created");
    Ok((StatusCode::CREATED, Json(camper_summary(camper))))
}

/// GET /campers/:id — camper with signups, each carrying its activity.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let camper = CamperService::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;
    let signups = CamperService::signups(&state.pool, id).await?;
    Ok((StatusCode::OK, Json(camper_detail(camper, signups))))
}

/// PATCH /campers/:id — apply supplied fields, validate the whole camper, then persist.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    // Looked up before the body is parsed so an unknown id is 404 even with a bad body.
    // The transactional re-check in `CamperService::update` only covers a concurrent delete.
    if CamperService::find(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND));
    }
    let patch: CamperPatch = parse_body(body)?;
    let camper = CamperService::update(&state.pool, id, patch)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;
    tracing::info!(camper_id = camper.id, "camper updated");
    Ok((StatusCode::ACCEPTED, Json(camper_summary(camper))))
}
