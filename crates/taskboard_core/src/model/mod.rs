//! Task-board domain model.
//!
//! # Responsibility
//! - Define the four stored entity records (users, boards, columns, tasks).
//! - Define the closed filter configuration used by board views.
//!
//! # Invariants
//! - Field names serialize in camelCase to match the persisted layout.
//! - Denormalized names (`owner_name`, `creator_name`, `assigned_user_name`) and
//!   `Task::board_id` are cached projections, not live foreign keys.

pub mod board;
pub mod column;
pub mod filter;
pub mod task;
pub mod user;

/// Generates a fresh entity id.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
