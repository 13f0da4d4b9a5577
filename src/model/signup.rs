use super::Activity;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Signup {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

/// Create payload. Referenced ids are not checked here; the store rejects dangling ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupDraft {
    #[serde(default)]
    pub camper_id: Option<i64>,
    #[serde(default)]
    pub activity_id: Option<i64>,
    #[serde(default)]
    pub time: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSignup {
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
}

/// A signup joined with the activity it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupWithActivity {
    pub signup: Signup,
    pub activity: Activity,
}

/// A signup together with both records it links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupLinks {
    pub signup: Signup,
    pub camper: super::Camper,
    pub activity: Activity,
}
