//! Signup creation.

use super::parse_body;
use crate::error::AppError;
use crate::model::SignupDraft;
use crate::response::signup_detail;
use crate::service::{validate_signup, SignupService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// POST /signups — `{camper_id, activity_id, time}`. Existence of the referenced camper and
/// activity is left to the store's foreign keys; a dangling id comes back as a 400.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let draft: SignupDraft = parse_body(body)?;
    let valid = validate_signup(&draft)?;
    let links = SignupService::create(&state.pool, &valid).await?;
    tracing::info!(
        signup_id = links.signup.id,
        camper_id = links.signup.camper_id,
        activity_id = links.signup.activity_id,
        "signup created"
    );
    Ok((StatusCode::CREATED, Json(signup_detail(links))))
}
