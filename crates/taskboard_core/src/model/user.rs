//! User record. Users are read-only inside the engine; they arrive through seeding.

use serde::{Deserialize, Serialize};

/// Identifier shared by every entity kind.
pub type EntityId = String;

/// Person that can own boards, create tasks and be assigned to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    /// Optional avatar URL; display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }
}
