//! Board record and its partial-update shape.
//!
//! # Invariants
//! - `owner_name` is copied from the owner at creation and never re-synced.
//! - `updated_at` is refreshed on every applied patch.

use super::user::{EntityId, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Titles of the columns provisioned for every new board, in order.
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Top-level project container owning columns and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: EntityId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub owner_id: EntityId,
    /// Owner name at creation time.
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Creates a board owned by `owner`, stamped with `now`.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        owner: &User,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            title: title.into(),
            description,
            owner_id: owner.id.clone(),
            owner_name: owner.name.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges `patch` into this board and stamps `updated_at`.
    pub fn apply(&mut self, patch: BoardPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}

/// Input for board creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBoard {
    pub title: String,
    pub description: Option<String>,
}

/// Partial board update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPatch {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}
