//! Per-entity data access and draft validation.

mod activities;
mod campers;
mod signups;
mod validation;
pub use activities::ActivityService;
pub use campers::CamperService;
pub use signups::SignupService;
pub use validation::{validate_camper, validate_signup, AGE_RANGE, TIME_RANGE};
