//! Response shapes, one per endpoint contract. Relationship collections appear only where
//! an endpoint asks for them, and nesting never goes back up the graph.

use crate::model::{Activity, Camper, SignupLinks, SignupWithActivity};
use serde::Serialize;

/// `{id, name, age}`: camper list, create and update responses, and nested under a signup.
#[derive(Clone, Debug, Serialize)]
pub struct CamperSummary {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// `{id, name, difficulty}`: activity list, and nested under a signup.
#[derive(Clone, Debug, Serialize)]
pub struct ActivitySummary {
    pub id: i64,
    pub name: String,
    pub difficulty: i64,
}

/// A signup as seen from its camper: carries the activity, not the camper again.
#[derive(Clone, Debug, Serialize)]
pub struct CamperSignup {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
    pub activity: ActivitySummary,
}

/// Single-camper view with signups and their activities.
#[derive(Clone, Debug, Serialize)]
pub struct CamperDetail {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignup>,
}

/// Newly created signup with both linked records.
#[derive(Clone, Debug, Serialize)]
pub struct SignupDetail {
    pub id: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub time: i64,
    pub camper: CamperSummary,
    pub activity: ActivitySummary,
}

pub fn camper_summary(c: Camper) -> CamperSummary {
    CamperSummary {
        id: c.id,
        name: c.name,
        age: c.age,
    }
}

pub fn activity_summary(a: Activity) -> ActivitySummary {
    ActivitySummary {
        id: a.id,
        name: a.name,
        difficulty: a.difficulty,
    }
}

pub fn camper_detail(c: Camper, signups: Vec<SignupWithActivity>) -> CamperDetail {
    CamperDetail {
        id: c.id,
        name: c.name,
        age: c.age,
        signups: signups
            .into_iter()
            .map(|s| CamperSignup {
                id: s.signup.id,
                camper_id: s.signup.camper_id,
                activity_id: s.signup.activity_id,
                time: s.signup.time,
                activity: activity_summary(s.activity),
            })
            .collect(),
    }
}

pub fn signup_detail(links: SignupLinks) -> SignupDetail {
    SignupDetail {
        id: links.signup.id,
        camper_id: links.signup.camper_id,
        activity_id: links.signup.activity_id,
        time: links.signup.time,
        camper: camper_summary(links.camper),
        activity: activity_summary(links.activity),
    }
}
