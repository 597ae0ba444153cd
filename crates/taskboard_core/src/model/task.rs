//! Task record, priority, and due-date helpers.
//!
//! # Responsibility
//! - Define the canonical task shape stored in the tasks collection.
//! - Apply partial edits without touching position fields.
//!
//! # Invariants
//! - `board_id` is copied from the target column once, at creation.
//! - `assigned_user_name` only changes when a patch carries `assigned_user_id`.
//! - `column_id`/`order` change only through the ordering engine.

use super::user::{EntityId, User};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Where a task's due date sits relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueToday,
    Upcoming,
}

/// Unit of work inside a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub due_date: NaiveDate,
    pub creator_id: EntityId,
    pub creator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user_name: Option<String>,
    pub column_id: EntityId,
    /// Empty when the column was unknown at creation.
    pub board_id: EntityId,
    /// Position among the column's tasks.
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Classifies the due date against `today`.
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        match self.due_date.cmp(&today) {
            std::cmp::Ordering::Less => DueStatus::Overdue,
            std::cmp::Ordering::Equal => DueStatus::DueToday,
            std::cmp::Ordering::Greater => DueStatus::Upcoming,
        }
    }

    /// Applies the plain-field part of `patch` and stamps `updated_at`.
    ///
    /// Assignee changes are resolved by the store because they need the users
    /// collection; see `BoardStore::update_task`.
    pub(crate) fn apply_fields(&mut self, patch: &TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.updated_at = now;
    }

    /// Rewrites the assignee id from a patch value. The name is replaced only
    /// when the id resolves to a known user; otherwise the old name is kept.
    pub(crate) fn reassign(&mut self, assigned_user_id: Option<EntityId>, users: &[User]) {
        match assigned_user_id {
            Some(user_id) => {
                if let Some(user) = users.iter().find(|user| user.id == user_id) {
                    self.assigned_user_name = Some(user.name.clone());
                }
                self.assigned_user_id = Some(user_id);
            }
            None => self.assigned_user_id = None,
        }
    }
}

/// Input for task creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub assigned_user_id: Option<EntityId>,
    pub column_id: EntityId,
}

/// Partial task update.
///
/// `assigned_user_id: None` means "not part of this update";
/// `Some(None)` unassigns; `Some(Some(id))` reassigns and re-resolves the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub assigned_user_id: Option<Option<EntityId>>,
}

#[cfg(test)]
mod tests {
    use super::{DueStatus, Priority, Task};
    use chrono::{NaiveDate, Utc};

    fn task_due(due_date: NaiveDate) -> Task {
        let now = Utc::now();
        Task {
            id: "t1".to_string(),
            title: "Title".to_string(),
            description: String::new(),
            priority: Priority::Low,
            due_date,
            creator_id: "1".to_string(),
            creator_name: "Kusuma".to_string(),
            assigned_user_id: None,
            assigned_user_name: None,
            column_id: "c1".to_string(),
            board_id: "b1".to_string(),
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn due_status_buckets_around_today() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            task_due(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()).due_status(today),
            DueStatus::Overdue
        );
        assert_eq!(task_due(today).due_status(today), DueStatus::DueToday);
        assert_eq!(
            task_due(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()).due_status(today),
            DueStatus::Upcoming
        );
    }

    #[test]
    fn serializes_with_camel_case_fields_and_plain_date() {
        let task = task_due(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2024-03-09");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["columnId"], "c1");
        assert!(json.get("assignedUserId").is_none());
    }
}
