//! Filter engine deriving per-column task views.
//!
//! # Invariants
//! - Pure: no state, no side effects, no dependence on the wall clock
//!   beyond the `today` argument.
//! - All criteria are ANDed; output is sorted ascending by `order` (stable).

use crate::model::filter::{AssigneeFilter, DueDateRange, FilterOptions, PriorityFilter};
use crate::model::task::Task;
use chrono::{Datelike, Duration, NaiveDate};

/// Filters `tasks` by `options` relative to the calendar day `today`.
pub fn filter_tasks<'a, I>(tasks: I, options: &FilterOptions, today: NaiveDate) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let needle = options.search.to_lowercase();
    let mut matched: Vec<&Task> = tasks
        .into_iter()
        .filter(|task| matches_search(task, &needle))
        .filter(|task| matches_priority(task, options.priority))
        .filter(|task| matches_assignee(task, &options.assigned_user))
        .filter(|task| matches_due_date(task.due_date, options.due_date_range, today))
        .collect();
    matched.sort_by_key(|task| task.order);
    matched
}

fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

fn matches_priority(task: &Task, filter: PriorityFilter) -> bool {
    match filter {
        PriorityFilter::All => true,
        PriorityFilter::Only(priority) => task.priority == priority,
    }
}

fn matches_assignee(task: &Task, filter: &AssigneeFilter) -> bool {
    match filter {
        AssigneeFilter::All => true,
        AssigneeFilter::User(user_id) => task.assigned_user_id.as_deref() == Some(user_id.as_str()),
    }
}

/// Checks one due date against a bucket. `ThisWeek` spans today through
/// today + 7 days inclusive, not a calendar week.
pub fn matches_due_date(due_date: NaiveDate, range: DueDateRange, today: NaiveDate) -> bool {
    match range {
        DueDateRange::All => true,
        DueDateRange::Overdue => due_date < today,
        DueDateRange::Today => due_date == today,
        DueDateRange::ThisWeek => due_date >= today && due_date <= today + Duration::days(7),
        DueDateRange::ThisMonth => {
            due_date.year() == today.year() && due_date.month() == today.month() && due_date >= today
        }
    }
}
