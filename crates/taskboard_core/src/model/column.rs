//! Column record and its partial-update shape.

use super::user::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered lane within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: EntityId,
    pub title: String,
    pub board_id: EntityId,
    /// Position among the board's columns.
    pub order: u32,
    /// Display hint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new(
        title: impl Into<String>,
        board_id: impl Into<EntityId>,
        order: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            title: title.into(),
            board_id: board_id.into(),
            order,
            color: None,
            created_at: now,
        }
    }

    pub fn apply(&mut self, patch: ColumnPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Input for column creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateColumn {
    pub title: String,
    pub board_id: EntityId,
}

/// Partial column update. Position changes go through `BoardStore::move_column`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPatch {
    pub title: Option<String>,
    pub color: Option<Option<String>>,
}
