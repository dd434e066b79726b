//! Minimal copy of the authenticated user kept alongside wizard state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMirror {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default = "UserMirror::default_role")]
    pub role: String,
}

impl UserMirror {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: Self::default_role(),
        }
    }

    pub fn default_role() -> String {
        "business_owner".into()
    }
}
