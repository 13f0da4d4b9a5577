//! Whole-object validation for camper and signup drafts.

use crate::error::AppError;
use crate::model::{CamperDraft, SignupDraft, ValidCamper, ValidSignup};
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<i64> = 8..=18;
pub const TIME_RANGE: RangeInclusive<i64> = 0..=23;

/// Validate a camper working copy. Used on create and after every patch.
pub fn validate_camper(draft: &CamperDraft) -> Result<ValidCamper, AppError> {
    let name = match draft.name.as_deref() {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return Err(AppError::Validation("name is required".into())),
    };
    let age = draft
        .age
        .ok_or_else(|| AppError::Validation("age is required".into()))?;
    if !AGE_RANGE.contains(&age) {
        return Err(AppError::Validation(format!(
            "age must be between {} and {}",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        )));
    }
    Ok(ValidCamper { name, age })
}

pub fn validate_signup(draft: &SignupDraft) -> Result<ValidSignup, AppError> {
    let camper_id = required("camper_id", draft.camper_id)?;
    let activity_id = required("activity_id", draft.activity_id)?;
    let time = required("time", draft.time)?;
    if !TIME_RANGE.contains(&time) {
        return Err(AppError::Validation(format!(
            "time must be between {} and {}",
            TIME_RANGE.start(),
            TIME_RANGE.end()
        )));
    }
    Ok(ValidSignup {
        camper_id,
        activity_id,
        time,
    })
}

fn required(field: &str, v: Option<i64>) -> Result<i64, AppError> {
    v.ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}
