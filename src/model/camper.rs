use super::present;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Camper {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Working copy of a camper's mutable attributes. Create payloads deserialize straight
/// into it; updates start from the stored record and apply a [`CamperPatch`] on top.
/// Either way it only reaches the store through [`crate::service::validate_camper`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CamperDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

/// A camper draft that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidCamper {
    pub name: String,
    pub age: i64,
}

/// Partial update. Unknown keys are ignored; `id` cannot be patched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CamperPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<i64>>,
}

impl From<&Camper> for CamperDraft {
    fn from(c: &Camper) -> Self {
        CamperDraft {
            name: Some(c.name.clone()),
            age: Some(c.age),
        }
    }
}

impl CamperDraft {
    /// Assign every field present in the patch. An explicit `null` clears the slot.
    pub fn apply(&mut self, patch: CamperPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
    }
}
