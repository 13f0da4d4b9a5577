//! Entity records as stored, plus the typed payloads that create and mutate them.

mod activity;
mod camper;
mod signup;

pub use activity::Activity;
pub use camper::{Camper, CamperDraft, CamperPatch, ValidCamper};
pub use signup::{Signup, SignupDraft, SignupLinks, SignupWithActivity, ValidSignup};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be absent, explicitly `null`, or set.
/// Absent stays `None` (via `#[serde(default)]`); `null` becomes `Some(None)`.
pub(crate) fn present<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Some)
}
