//! Filter criteria for per-column task views.
//!
//! Closed configuration: every criterion has an explicit "match all" value
//! instead of an open key/value map.

use super::task::Priority;
use super::user::EntityId;
use serde::{Deserialize, Serialize};

const ALL: &str = "all";

/// Priority criterion. Serialized as `"all"` or the priority name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl From<PriorityFilter> for String {
    fn from(value: PriorityFilter) -> Self {
        match value {
            PriorityFilter::All => ALL.to_string(),
            PriorityFilter::Only(Priority::Low) => "low".to_string(),
            PriorityFilter::Only(Priority::Medium) => "medium".to_string(),
            PriorityFilter::Only(Priority::High) => "high".to_string(),
        }
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            ALL => Ok(Self::All),
            "low" => Ok(Self::Only(Priority::Low)),
            "medium" => Ok(Self::Only(Priority::Medium)),
            "high" => Ok(Self::Only(Priority::High)),
            other => Err(format!(
                "unsupported priority filter `{other}`; expected all|low|medium|high"
            )),
        }
    }
}

/// Assignee criterion. `All` also matches unassigned tasks; there is no
/// separate unassigned bucket. Serialized as `"all"` or the user id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssigneeFilter {
    #[default]
    All,
    User(EntityId),
}

impl From<AssigneeFilter> for String {
    fn from(value: AssigneeFilter) -> Self {
        match value {
            AssigneeFilter::All => ALL.to_string(),
            AssigneeFilter::User(user_id) => user_id,
        }
    }
}

impl From<String> for AssigneeFilter {
    fn from(value: String) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::User(value)
        }
    }
}

/// Due-date bucket criterion, evaluated against the caller's calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DueDateRange {
    #[default]
    All,
    Overdue,
    Today,
    ThisWeek,
    ThisMonth,
}

/// Ephemeral query state applied to column task views. All criteria are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Case-insensitive substring over title or description; empty matches all.
    pub search: String,
    pub priority: PriorityFilter,
    pub assigned_user: AssigneeFilter,
    pub due_date_range: DueDateRange,
}

impl FilterOptions {
    /// Returns true when no criterion narrows the result.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.priority == PriorityFilter::All
            && self.assigned_user == AssigneeFilter::All
            && self.due_date_range == DueDateRange::All
    }
}
