//! Ordering engine for tasks within columns and columns within boards.
//!
//! # Responsibility
//! - Compute append positions for new siblings.
//! - Reposition one entity while shifting its new siblings around the slot.
//!
//! # Invariants
//! - Engine-created positions are dense: N siblings hold `{0, ..., N-1}`.
//! - A task move only renumbers the target column; the source column keeps
//!   whatever gap the task leaves behind.
//! - Task moves do not validate `new_order`; out-of-range values can produce
//!   duplicate positions in the target column.

use crate::model::column::Column;
use crate::model::task::Task;

/// Entity carrying a sibling position.
pub trait Positioned {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

impl Positioned for Task {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Positioned for Column {
    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Position assigned to an entity appended after `sibling_count` siblings.
pub fn append_order(sibling_count: usize) -> u32 {
    u32::try_from(sibling_count).unwrap_or(u32::MAX)
}

/// Renumbers `siblings` by their iteration index, leaving `slot` free.
///
/// The sibling at index `i` gets `i` when `i < slot`, otherwise `i + 1`.
pub fn shift_around<'a, T, I>(siblings: I, slot: u32)
where
    T: Positioned + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    for (index, sibling) in siblings.into_iter().enumerate() {
        let index = append_order(index);
        let order = if index < slot {
            index
        } else {
            index.saturating_add(1)
        };
        sibling.set_order(order);
    }
}

/// Moves one task into `target_column_id` at `new_order`.
///
/// Other tasks already in the target column are visited in collection order
/// (not sorted by their current position) and shifted around the slot.
///
/// Returns `false`, leaving every task untouched, when `task_id` is unknown.
pub fn move_task(tasks: &mut [Task], task_id: &str, target_column_id: &str, new_order: u32) -> bool {
    let Some(moved) = tasks.iter_mut().find(|task| task.id == task_id) else {
        return false;
    };
    moved.column_id = target_column_id.to_string();
    moved.order = new_order;

    shift_around(
        tasks
            .iter_mut()
            .filter(|task| task.column_id == target_column_id && task.id != task_id),
        new_order,
    );
    true
}

/// Moves one column to `new_order` within its own board.
///
/// `new_order` is clamped to the board's last position, so the board's column
/// positions stay dense when they were dense before the move.
///
/// Returns the applied position, or `None` when `column_id` is unknown.
pub fn move_column(columns: &mut [Column], column_id: &str, new_order: u32) -> Option<u32> {
    let board_id = columns
        .iter()
        .find(|column| column.id == column_id)?
        .board_id
        .clone();

    let mut siblings: Vec<&mut Column> = columns
        .iter_mut()
        .filter(|column| column.board_id == board_id && column.id != column_id)
        .collect();
    siblings.sort_by_key(|column| column.order);

    let slot = new_order.min(append_order(siblings.len()));
    shift_around(siblings, slot);

    if let Some(moved) = columns.iter_mut().find(|column| column.id == column_id) {
        moved.order = slot;
    }
    Some(slot)
}
