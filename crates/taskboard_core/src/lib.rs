//! Task-board state engine.
//! This crate is the single source of truth for board, column and task invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardPatch, CreateBoard, DEFAULT_COLUMN_TITLES};
pub use model::column::{Column, ColumnPatch, CreateColumn};
pub use model::filter::{AssigneeFilter, DueDateRange, FilterOptions, PriorityFilter};
pub use model::task::{CreateTask, DueStatus, Priority, Task, TaskPatch};
pub use model::user::{EntityId, User};
pub use repo::collection_repo::{
    CollectionKey, CollectionRepository, RepoError, RepoResult, SqliteCollectionRepository,
};
pub use repo::seed::{seed_sample_data, seed_sample_data_at};
pub use service::board_store::{BoardStore, StoreError, StoreResult};
pub use service::filter::filter_tasks;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
